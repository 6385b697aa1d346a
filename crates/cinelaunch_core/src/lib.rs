//! Core domain logic for the CineLaunch film-crowdfunding site.
//! Catalog integrity, listing queries, money/progress formatting and
//! contact message composition all live here; presentation stays outside.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod format;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;

pub use catalog::builtin::{builtin_catalog, builtin_currencies};
pub use catalog::currency_table::{CurrencyTable, CurrencyTableError, CurrencyTableResult};
pub use catalog::project_catalog::{CatalogError, CatalogResult, ProjectCatalog};
pub use config::{ConfigError, SiteConfig};
pub use contact::message::MailMessage;
pub use contact::submission::{SubmissionError, SubmissionForm};
pub use contact::support::{PaymentMethod, PledgeError, SupportPledge, QUICK_PLEDGE_AMOUNTS};
pub use format::currency::{format_amount, format_money};
pub use format::progress::{FundingProgress, ALMOST_FUNDED_THRESHOLD};
pub use format::time_ago::time_ago;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::currency::{Currency, CurrencyValidationError};
pub use model::project::{Project, ProjectId, ProjectValidationError};
pub use query::genre::{GenreFilter, ALL_GENRES_SENTINEL, BROWSE_GENRES, SUBMISSION_GENRES};
pub use query::pipeline::{query_catalog, run_query, ProjectQuery, QueryOutcome, SortKey};
pub use service::browse_service::{BrowseError, BrowseService};
pub use service::projection::{BrowseResult, ProjectCard, ProjectDetail};

/// Minimal health-check API for integration smoke tests.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
