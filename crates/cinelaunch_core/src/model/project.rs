//! Project domain model.
//!
//! # Responsibility
//! - Define the film project record listed, searched and displayed by the site.
//! - Parse creation timestamps once, at deserialization time.
//! - Resolve the optional contact override against a fallback address.
//!
//! # Invariants
//! - `id` is non-empty and stable for the lifetime of the catalog.
//! - `budget` is finite and strictly positive.
//! - `funding_received` is finite and non-negative; it may exceed `budget`.
//! - `duration`, when set, is at least one minute.

use crate::format::progress::FundingProgress;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for one project in the catalog.
pub type ProjectId = String;

/// Film project record.
///
/// Wire names are camelCase to match the catalog data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub director: String,
    /// Exact genre label, e.g. `Drama` or `Sci-Fi`.
    pub genre: String,
    pub synopsis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast: Option<String>,
    /// Opaque image reference; never validated.
    pub image_url: String,
    /// Target amount in the base currency unit.
    pub budget: f64,
    /// Amount pledged so far in the base currency unit.
    pub funding_received: f64,
    pub supporters: u64,
    pub likes: u64,
    /// Accepts RFC 3339 or a plain `YYYY-MM-DD` date (UTC midnight).
    #[serde(with = "created_at_format")]
    pub created_at: DateTime<Utc>,
    pub country: String,
    pub release_date: String,
    /// Running time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Contact override. `None` means the site fallback address is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Project {
    /// Creates a project with the required identity and money fields.
    ///
    /// Descriptive fields start empty, counters at zero and optional fields
    /// as `None`. Call `validate()` (or build a catalog) before relying on
    /// the money invariants.
    pub fn new(
        id: impl Into<ProjectId>,
        title: impl Into<String>,
        director: impl Into<String>,
        genre: impl Into<String>,
        budget: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            director: director.into(),
            genre: genre.into(),
            synopsis: String::new(),
            description: None,
            cast: None,
            image_url: String::new(),
            budget,
            funding_received: 0.0,
            supporters: 0,
            likes: 0,
            created_at,
            country: String::new(),
            release_date: String::new(),
            duration: None,
            email: None,
        }
    }

    /// Validates record-level invariants.
    ///
    /// # Errors
    /// - `EmptyId` / `EmptyTitle` for blank identity fields.
    /// - `InvalidBudget` when `budget` is not finite or not `> 0`.
    /// - `InvalidFunding` when `funding_received` is not finite or negative.
    /// - `ZeroDuration` when `duration == Some(0)`.
    /// - `BlankEmail` when an override address is present but blank.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id.trim().is_empty() {
            return Err(ProjectValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTitle {
                id: self.id.clone(),
            });
        }
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(ProjectValidationError::InvalidBudget {
                id: self.id.clone(),
                budget: self.budget,
            });
        }
        if !self.funding_received.is_finite() || self.funding_received < 0.0 {
            return Err(ProjectValidationError::InvalidFunding {
                id: self.id.clone(),
                funding: self.funding_received,
            });
        }
        if self.duration == Some(0) {
            return Err(ProjectValidationError::ZeroDuration {
                id: self.id.clone(),
            });
        }
        if matches!(self.email.as_deref(), Some(value) if value.trim().is_empty()) {
            return Err(ProjectValidationError::BlankEmail {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    /// Funding percentage derived from `funding_received / budget`.
    pub fn funding_progress(&self) -> FundingProgress {
        FundingProgress::compute(self.funding_received, self.budget)
    }

    /// Returns the project contact override, or `fallback` when unset.
    pub fn contact_address<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.email.as_deref() {
            Some(value) if !value.trim().is_empty() => value.trim(),
            _ => fallback,
        }
    }
}

/// Parses a catalog timestamp.
///
/// Accepted forms, tried in order:
/// - RFC 3339 with offset (`2024-03-15T10:30:00Z`, `2024-03-15T12:30:00+02:00`)
/// - naive date-time, read as UTC (`2024-03-15T10:30:00`)
/// - plain date, read as UTC midnight (`2024-03-15`)
pub fn parse_created_at(raw: &str) -> Result<DateTime<Utc>, ProjectValidationError> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(parsed.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    Err(ProjectValidationError::InvalidCreatedAt(raw.to_string()))
}

mod created_at_format {
    use super::parse_created_at;
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_created_at(raw.as_str()).map_err(serde::de::Error::custom)
    }
}

/// Record-level project validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectValidationError {
    EmptyId,
    EmptyTitle { id: ProjectId },
    InvalidBudget { id: ProjectId, budget: f64 },
    InvalidFunding { id: ProjectId, funding: f64 },
    ZeroDuration { id: ProjectId },
    BlankEmail { id: ProjectId },
    InvalidCreatedAt(String),
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "project id must not be empty"),
            Self::EmptyTitle { id } => write!(f, "project `{id}` has an empty title"),
            Self::InvalidBudget { id, budget } => {
                write!(f, "project `{id}` budget must be > 0, got {budget}")
            }
            Self::InvalidFunding { id, funding } => {
                write!(f, "project `{id}` funding must be >= 0, got {funding}")
            }
            Self::ZeroDuration { id } => write!(f, "project `{id}` duration must be > 0"),
            Self::BlankEmail { id } => {
                write!(f, "project `{id}` contact email is present but blank")
            }
            Self::InvalidCreatedAt(raw) => write!(
                f,
                "invalid createdAt `{raw}` (expected RFC 3339 or YYYY-MM-DD)"
            ),
        }
    }
}

impl Error for ProjectValidationError {}

#[cfg(test)]
mod tests {
    use super::{parse_created_at, Project, ProjectValidationError};
    use chrono::{TimeZone, Utc};

    fn sample() -> Project {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Project::new("p1", "Title", "Director", "Drama", 1000.0, created_at)
    }

    #[test]
    fn plain_date_parses_as_utc_midnight() {
        let parsed = parse_created_at("2024-06-01").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn rfc3339_offset_is_normalized_to_utc() {
        let parsed = parse_created_at("2024-06-01T12:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn garbage_timestamp_is_rejected() {
        let err = parse_created_at("last tuesday").unwrap_err();
        assert_eq!(
            err,
            ProjectValidationError::InvalidCreatedAt("last tuesday".to_string())
        );
    }

    #[test]
    fn validate_rejects_zero_budget() {
        let mut project = sample();
        project.budget = 0.0;
        assert!(matches!(
            project.validate(),
            Err(ProjectValidationError::InvalidBudget { .. })
        ));
    }

    #[test]
    fn validate_rejects_nan_funding() {
        let mut project = sample();
        project.funding_received = f64::NAN;
        assert!(matches!(
            project.validate(),
            Err(ProjectValidationError::InvalidFunding { .. })
        ));
    }

    #[test]
    fn over_funding_is_valid() {
        let mut project = sample();
        project.funding_received = 5000.0;
        assert!(project.validate().is_ok());
    }

    #[test]
    fn contact_address_prefers_override() {
        let mut project = sample();
        assert_eq!(project.contact_address("team@example.com"), "team@example.com");
        project.email = Some("director@example.com".to_string());
        assert_eq!(
            project.contact_address("team@example.com"),
            "director@example.com"
        );
    }
}
