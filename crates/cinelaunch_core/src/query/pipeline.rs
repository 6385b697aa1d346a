//! Search, genre filter and sort over the project catalog.

use crate::catalog::project_catalog::ProjectCatalog;
use crate::model::project::Project;
use crate::query::genre::GenreFilter;
use log::debug;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Listing order. `CatalogOrder` is the fallback for unrecognized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most recent `created_at` first.
    #[default]
    Newest,
    /// Oldest `created_at` first.
    Oldest,
    /// Highest `funding_received` first.
    MostFunded,
    /// Highest `likes` first.
    MostLiked,
    /// Leaves catalog order unchanged.
    CatalogOrder,
}

impl SortKey {
    /// Parses a UI value (`newest|oldest|mostFunded|mostLiked`).
    ///
    /// Any other string maps to `CatalogOrder` instead of failing.
    pub fn parse(value: &str) -> Self {
        match value {
            "newest" => Self::Newest,
            "oldest" => Self::Oldest,
            "mostFunded" => Self::MostFunded,
            "mostLiked" => Self::MostLiked,
            _ => Self::CatalogOrder,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::MostFunded => "mostFunded",
            Self::MostLiked => "mostLiked",
            Self::CatalogOrder => "catalogOrder",
        }
    }

    fn compare(&self, left: &Project, right: &Project) -> Ordering {
        match self {
            Self::Newest => right.created_at.cmp(&left.created_at),
            Self::Oldest => left.created_at.cmp(&right.created_at),
            Self::MostFunded => right.funding_received.total_cmp(&left.funding_received),
            Self::MostLiked => right.likes.cmp(&left.likes),
            Self::CatalogOrder => Ordering::Equal,
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-chosen listing parameters.
///
/// `Default` is the "clear filters" state: empty search, any genre, newest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectQuery {
    /// Case-insensitive substring matched against title, director and genre.
    pub search_term: String,
    pub genre: GenreFilter,
    pub sort: SortKey,
}

impl ProjectQuery {
    /// Builds a query from raw UI strings. Never fails.
    pub fn from_params(search_term: &str, genre: &str, sort: &str) -> Self {
        Self {
            search_term: search_term.to_string(),
            genre: GenreFilter::parse(genre),
            sort: SortKey::parse(sort),
        }
    }
}

/// Query result plus the catalog size, for "showing N of M" labels.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome<'a> {
    pub items: Vec<&'a Project>,
    pub catalog_total: usize,
}

/// Runs `query` over `projects`, returning borrowed projects in display order.
pub fn run_query<'a>(projects: &'a [Project], query: &ProjectQuery) -> Vec<&'a Project> {
    let needle = query.search_term.to_lowercase();
    let mut items: Vec<&Project> = projects
        .iter()
        .filter(|project| matches_lowered(project, needle.as_str()))
        .filter(|project| query.genre.matches(project.genre.as_str()))
        .collect();

    // `sort_by` is stable; ties keep catalog order.
    items.sort_by(|left, right| query.sort.compare(left, right));
    items
}

/// Runs `query` over a validated catalog.
pub fn query_catalog<'a>(catalog: &'a ProjectCatalog, query: &ProjectQuery) -> QueryOutcome<'a> {
    let items = run_query(catalog.projects(), query);
    debug!(
        "event=projects_query module=query status=ok term_len={} genre_filtered={} sort={} matched={} total={}",
        query.search_term.chars().count(),
        query.genre != GenreFilter::Any,
        query.sort,
        items.len(),
        catalog.len()
    );
    QueryOutcome {
        items,
        catalog_total: catalog.len(),
    }
}

/// Returns whether `term` occurs, case-insensitively, in title, director or
/// genre. An empty term matches every project.
pub fn matches_search(project: &Project, term: &str) -> bool {
    matches_lowered(project, term.to_lowercase().as_str())
}

fn matches_lowered(project: &Project, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        project.title.as_str(),
        project.director.as_str(),
        project.genre.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
