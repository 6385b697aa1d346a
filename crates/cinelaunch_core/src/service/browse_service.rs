//! Browse use-case service.
//!
//! # Responsibility
//! - Provide landing, listing, detail and contact APIs over injected data.
//! - Resolve currency choices and contact fallbacks in one place.
//!
//! # Invariants
//! - The service never mutates its catalog, currency table or config.
//! - Lookup misses never panic: unknown currencies fall back to the
//!   configured default and unknown projects yield `ProjectNotFound`.
//! - The currency table's default is the configured default; every display
//!   lookup goes through `CurrencyTable::resolve`.

use crate::catalog::currency_table::CurrencyTable;
use crate::catalog::project_catalog::ProjectCatalog;
use crate::config::{ConfigError, SiteConfig};
use crate::contact::message::MailMessage;
use crate::contact::submission::{compose_submission_message, SubmissionError, SubmissionForm};
use crate::contact::support::{compose_support_message, SupportPledge};
use crate::model::currency::Currency;
use crate::model::project::{Project, ProjectId};
use crate::query::pipeline::{query_catalog, ProjectQuery};
use crate::service::projection::{BrowseResult, ProjectCard, ProjectDetail};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for browse use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseError {
    /// Requested project id is not in the catalog.
    ProjectNotFound(ProjectId),
}

impl Display for BrowseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
        }
    }
}

impl Error for BrowseError {}

/// Browse facade over one catalog, currency table and site config.
#[derive(Debug, Clone)]
pub struct BrowseService {
    catalog: ProjectCatalog,
    currencies: CurrencyTable,
    config: SiteConfig,
}

impl BrowseService {
    /// Creates a service after cross-checking config against the currency table.
    ///
    /// The table's lookup-miss default is replaced by
    /// `config.default_currency`.
    ///
    /// # Errors
    /// - Any `SiteConfig::validate()` failure.
    /// - `UnknownCurrency` when a configured code is missing from `currencies`.
    pub fn new(
        catalog: ProjectCatalog,
        currencies: CurrencyTable,
        config: SiteConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        config.check_currencies(&currencies)?;
        let currencies = currencies
            .with_default(config.default_currency.as_str())
            .map_err(|_| ConfigError::UnknownCurrency {
                field: "defaultCurrency",
                code: config.default_currency.clone(),
            })?;
        info!(
            "event=service_init module=service status=ok catalog_version={} projects={} currencies={}",
            catalog.version(),
            catalog.len(),
            currencies.len()
        );
        Ok(Self {
            catalog,
            currencies,
            config,
        })
    }

    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    pub fn currencies(&self) -> &CurrencyTable {
        &self.currencies
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Resolves a display currency; `None` or unknown codes use the
    /// configured default.
    pub fn currency(&self, code: Option<&str>) -> &Currency {
        self.currencies.resolve(code)
    }

    /// Landing page cards: first `featured_count` projects in catalog order.
    pub fn featured(&self, currency_code: Option<&str>, now: DateTime<Utc>) -> Vec<ProjectCard> {
        let currency = self.currency(currency_code);
        self.catalog
            .featured(self.config.featured_count)
            .iter()
            .map(|project| ProjectCard::from_project(project, currency, now))
            .collect()
    }

    /// Listing page: filtered and sorted cards.
    pub fn browse(
        &self,
        query: &ProjectQuery,
        currency_code: Option<&str>,
        now: DateTime<Utc>,
    ) -> BrowseResult {
        let currency = self.currency(currency_code);
        let outcome = query_catalog(&self.catalog, query);
        BrowseResult {
            items: outcome
                .items
                .into_iter()
                .map(|project| ProjectCard::from_project(project, currency, now))
                .collect(),
            catalog_total: outcome.catalog_total,
            query: query.clone(),
        }
    }

    /// Detail page projection for one project.
    pub fn detail(
        &self,
        id: &str,
        currency_code: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<ProjectDetail, BrowseError> {
        let project = self.find(id)?;
        let currency = self.currency(currency_code);
        Ok(ProjectDetail::from_project(
            project,
            currency,
            self.config.contact_address.as_str(),
            now,
        ))
    }

    /// Composes the support email for project `id`.
    pub fn support_message(
        &self,
        id: &str,
        pledge: &SupportPledge,
    ) -> Result<MailMessage, BrowseError> {
        let project = self.find(id)?;
        let currency = self.form_currency(pledge.currency_code.as_deref());
        let message = compose_support_message(
            project,
            pledge,
            currency,
            self.config.contact_address.as_str(),
        );
        info!(
            "event=support_compose module=service status=ok project_id={} currency={} override_address={}",
            project.id,
            currency.code,
            project.email.is_some()
        );
        Ok(message)
    }

    /// Validates a submission and composes the email to the site contact.
    ///
    /// # Errors
    /// - Any `SubmissionForm::validate()` failure.
    /// - `UnknownCurrency` when `form.currency` is not in the currency table.
    pub fn submission_message(
        &self,
        form: &SubmissionForm,
    ) -> Result<MailMessage, SubmissionError> {
        match self.compose_submission(form) {
            Ok((message, currency)) => {
                info!(
                    "event=submission_compose module=service status=ok currency={} body_len={}",
                    currency.code,
                    message.body.len()
                );
                Ok(message)
            }
            Err(err) => {
                warn!(
                    "event=submission_compose module=service status=rejected reason={}",
                    submission_error_reason(&err)
                );
                Err(err)
            }
        }
    }

    fn compose_submission(
        &self,
        form: &SubmissionForm,
    ) -> Result<(MailMessage, &Currency), SubmissionError> {
        form.validate()?;
        let currency = self
            .currencies
            .get(form.currency.as_str())
            .ok_or_else(|| SubmissionError::UnknownCurrency(form.currency.trim().to_string()))?;
        let message =
            compose_submission_message(form, currency, self.config.contact_address.as_str())?;
        Ok((message, currency))
    }

    /// Pledge currency: the pledge's own code, else the configured form currency.
    fn form_currency(&self, code: Option<&str>) -> &Currency {
        code.and_then(|value| self.currencies.get(value))
            .or_else(|| self.currencies.get(self.config.form_currency.as_str()))
            .unwrap_or_else(|| self.currencies.default_currency())
    }

    fn find(&self, id: &str) -> Result<&Project, BrowseError> {
        match self.catalog.get(id) {
            Some(project) => Ok(project),
            None => {
                debug!(
                    "event=project_lookup module=service status=not_found id_len={}",
                    id.len()
                );
                Err(BrowseError::ProjectNotFound(id.to_string()))
            }
        }
    }
}

fn submission_error_reason(err: &SubmissionError) -> &'static str {
    match err {
        SubmissionError::MissingField(field) => *field,
        SubmissionError::InvalidEmail(_) => "invalid_email",
        SubmissionError::UnsupportedGenre(_) => "unsupported_genre",
        SubmissionError::UnknownCurrency(_) => "unknown_currency",
        SubmissionError::InvalidNumber { field, .. } => *field,
    }
}

#[cfg(test)]
mod tests {
    use super::{BrowseError, BrowseService};
    use crate::catalog::builtin::{builtin_catalog, builtin_currencies};
    use crate::catalog::currency_table::CurrencyTable;
    use crate::config::{ConfigError, SiteConfig};
    use chrono::{TimeZone, Utc};

    fn service() -> BrowseService {
        BrowseService::new(
            builtin_catalog().unwrap(),
            builtin_currencies().unwrap(),
            SiteConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn unknown_currency_falls_back_to_config_default() {
        assert_eq!(service().currency(Some("XXX")).code, "USD");
        assert_eq!(service().currency(None).code, "USD");
    }

    #[test]
    fn config_currency_must_exist_in_table() {
        let config = SiteConfig {
            default_currency: "CHF".to_string(),
            ..SiteConfig::default()
        };
        let err = BrowseService::new(
            builtin_catalog().unwrap(),
            builtin_currencies().unwrap(),
            config,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCurrency { .. }));
    }

    #[test]
    fn service_and_table_share_one_default() {
        let currencies = CurrencyTable::new(
            builtin_currencies().unwrap().currencies().to_vec(),
            Some("INR"),
        )
        .unwrap();
        let service =
            BrowseService::new(builtin_catalog().unwrap(), currencies, SiteConfig::default())
                .unwrap();

        assert_eq!(service.currency(Some("XYZ")).code, "USD");
        assert_eq!(service.currencies().resolve(Some("XYZ")).code, "USD");
        assert_eq!(service.currencies().default_currency().code, "USD");
    }

    #[test]
    fn missing_project_is_reported_not_panicked() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let err = service().detail("nope", None, now).unwrap_err();
        assert_eq!(err, BrowseError::ProjectNotFound("nope".to_string()));
    }
}
