//! Display-ready projections of catalog records.
//!
//! # Invariants
//! - Money strings are converted with the currency chosen for the page and
//!   carry that currency's symbol.
//! - Percentages come from `FundingProgress` only.

use crate::format::currency::format_money;
use crate::format::progress::FundingProgress;
use crate::format::time_ago::time_ago;
use crate::model::currency::Currency;
use crate::model::project::{Project, ProjectId};
use crate::query::pipeline::ProjectQuery;
use chrono::{DateTime, Utc};

/// Card shown in listings and on the landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub title: String,
    pub director: String,
    pub genre: String,
    pub synopsis: String,
    pub image_url: String,
    pub country: String,
    pub likes: u64,
    pub supporters: u64,
    pub progress: FundingProgress,
    /// e.g. `$112,000`
    pub funding_display: String,
    /// e.g. `$120,000`
    pub budget_display: String,
    pub currency_code: String,
    /// e.g. `6 months ago`
    pub created_ago: String,
}

impl ProjectCard {
    pub fn from_project(project: &Project, currency: &Currency, now: DateTime<Utc>) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            director: project.director.clone(),
            genre: project.genre.clone(),
            synopsis: project.synopsis.clone(),
            image_url: project.image_url.clone(),
            country: project.country.clone(),
            likes: project.likes,
            supporters: project.supporters,
            progress: project.funding_progress(),
            funding_display: format_money(project.funding_received, currency),
            budget_display: format_money(project.budget, currency),
            currency_code: currency.code.clone(),
            created_ago: time_ago(project.created_at, now),
        }
    }
}

/// Full projection for the project detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail {
    pub card: ProjectCard,
    pub description: Option<String>,
    pub cast: Option<String>,
    pub duration_minutes: Option<u32>,
    pub release_date: String,
    /// Resolved recipient for support pledges.
    pub contact_address: String,
}

impl ProjectDetail {
    pub fn from_project(
        project: &Project,
        currency: &Currency,
        fallback_address: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            card: ProjectCard::from_project(project, currency, now),
            description: project.description.clone(),
            cast: project.cast.clone(),
            duration_minutes: project.duration,
            release_date: project.release_date.clone(),
            contact_address: project.contact_address(fallback_address).to_string(),
        }
    }
}

/// Listing page result.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseResult {
    pub items: Vec<ProjectCard>,
    pub catalog_total: usize,
    /// Query that produced `items`, after parsing.
    pub query: ProjectQuery,
}

impl BrowseResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `Showing N of M projects`
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} projects",
            self.items.len(),
            self.catalog_total
        )
    }
}
