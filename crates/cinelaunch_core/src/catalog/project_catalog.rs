//! Versioned, validated project catalog.
//!
//! # Responsibility
//! - Own the ordered project sequence shown by the site.
//! - Enforce record invariants and id uniqueness before any query runs.
//!
//! # Invariants
//! - Every `id` is unique.
//! - Every project passed `Project::validate()`.
//! - Catalog order is the order of the source records and never changes.

use crate::model::project::{Project, ProjectId, ProjectValidationError};
use log::{info, warn};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog construction error. All variants are fatal configuration errors.
#[derive(Debug)]
pub enum CatalogError {
    InvalidProject(ProjectValidationError),
    DuplicateId(ProjectId),
    /// The catalog document is not valid JSON or does not match the schema.
    Parse(serde_json::Error),
    Io(std::io::Error),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidProject(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate project id in catalog: `{id}`"),
            Self::Parse(err) => write!(f, "invalid catalog document: {err}"),
            Self::Io(err) => write!(f, "failed to read catalog document: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidProject(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::Parse(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ProjectValidationError> for CatalogError {
    fn from(value: ProjectValidationError) -> Self {
        Self::InvalidProject(value)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    version: u32,
    projects: Vec<Project>,
}

/// Immutable ordered project collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCatalog {
    version: u32,
    projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Builds a catalog from already-deserialized records.
    ///
    /// # Errors
    /// - `InvalidProject` for the first record failing `Project::validate()`.
    /// - `DuplicateId` for the first repeated `id`.
    pub fn new(version: u32, projects: Vec<Project>) -> CatalogResult<Self> {
        let mut seen = BTreeSet::<&str>::new();
        for project in &projects {
            if let Err(err) = project.validate() {
                warn!(
                    "event=catalog_load module=catalog status=error reason=invalid_project version={}",
                    version
                );
                return Err(err.into());
            }
            if !seen.insert(project.id.as_str()) {
                warn!(
                    "event=catalog_load module=catalog status=error reason=duplicate_id version={}",
                    version
                );
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
        }

        info!(
            "event=catalog_load module=catalog status=ok version={} projects={}",
            version,
            projects.len()
        );
        Ok(Self { version, projects })
    }

    /// Parses and validates a `{ "version": .., "projects": [..] }` document.
    pub fn from_json_str(raw: &str) -> CatalogResult<Self> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        Self::new(document.version, document.projects)
    }

    /// Reads a catalog document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(raw.as_str())
    }

    /// Data version declared by the source document.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// All projects in catalog order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Looks up one project by id. `None` is a normal "not found" outcome.
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// First `count` projects in catalog order.
    pub fn featured(&self, count: usize) -> &[Project] {
        let end = count.min(self.projects.len());
        &self.projects[..end]
    }

    /// Distinct genres in first-seen catalog order.
    pub fn genres(&self) -> Vec<&str> {
        let mut seen = BTreeSet::<&str>::new();
        self.projects
            .iter()
            .map(|project| project.genre.as_str())
            .filter(|genre| seen.insert(*genre))
            .collect()
    }
}
