//! Site configuration.
//!
//! # Responsibility
//! - Hold the small set of tunables the site needs: contact address,
//!   currency defaults and featured-list size.
//! - Load them from JSON with per-field defaults.
//!
//! # Invariants
//! - A constructed config has a well-formed contact address.
//! - Currency codes are checked against the currency table before use.

use crate::catalog::currency_table::CurrencyTable;
use crate::contact::is_email_address;
use crate::model::currency::is_currency_code;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub const DEFAULT_CONTACT_ADDRESS: &str = "hello@cinelaunch.example";
pub const DEFAULT_CURRENCY_CODE: &str = "USD";
pub const DEFAULT_FORM_CURRENCY_CODE: &str = "INR";
pub const DEFAULT_FEATURED_COUNT: usize = 6;

/// Site-wide settings. Every field is optional in the JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Fallback recipient for support pledges and every submission.
    pub contact_address: String,
    /// Display currency when the visitor has not picked one.
    pub default_currency: String,
    /// Currency preselected in the pledge and submission forms.
    pub form_currency: String,
    /// Number of catalog entries shown on the landing page.
    pub featured_count: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_address: DEFAULT_CONTACT_ADDRESS.to_string(),
            default_currency: DEFAULT_CURRENCY_CODE.to_string(),
            form_currency: DEFAULT_FORM_CURRENCY_CODE.to_string(),
            featured_count: DEFAULT_FEATURED_COUNT,
        }
    }
}

impl SiteConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(raw.as_str())
    }

    /// Validates field shapes independent of any currency table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_email_address(self.contact_address.as_str()) {
            return Err(ConfigError::InvalidContactAddress(
                self.contact_address.clone(),
            ));
        }
        for (field, code) in self.currency_fields() {
            if !is_currency_code(code) {
                return Err(ConfigError::InvalidCurrencyCode {
                    field,
                    code: code.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Checks that configured currency codes exist in `currencies`.
    pub fn check_currencies(&self, currencies: &CurrencyTable) -> Result<(), ConfigError> {
        for (field, code) in self.currency_fields() {
            if currencies.get(code).is_none() {
                return Err(ConfigError::UnknownCurrency {
                    field,
                    code: code.to_string(),
                });
            }
        }
        Ok(())
    }

    fn currency_fields(&self) -> [(&'static str, &str); 2] {
        [
            ("defaultCurrency", self.default_currency.as_str()),
            ("formCurrency", self.form_currency.as_str()),
        ]
    }
}

/// Configuration load/validation error.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Io(std::io::Error),
    InvalidContactAddress(String),
    InvalidCurrencyCode { field: &'static str, code: String },
    UnknownCurrency { field: &'static str, code: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid site config: {err}"),
            Self::Io(err) => write!(f, "failed to read site config: {err}"),
            Self::InvalidContactAddress(value) => {
                write!(f, "contactAddress `{value}` is not a valid email address")
            }
            Self::InvalidCurrencyCode { field, code } => {
                write!(f, "{field} `{code}` must be three upper-case letters")
            }
            Self::UnknownCurrency { field, code } => {
                write!(f, "{field} `{code}` is not in the currency table")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
