//! Validated currency table with fallback resolution.
//!
//! # Responsibility
//! - Own the ordered list of display currencies.
//! - Resolve user-selected codes, falling back to a designated default.
//!
//! # Invariants
//! - Exactly one currency has `rate == 1` (the base unit).
//! - Every `code` is unique.
//! - The default code, when declared, exists in the table.
//! - Resolution never fails: unknown codes map to the default currency.

use crate::model::currency::{Currency, CurrencyValidationError};
use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CurrencyTableResult<T> = Result<T, CurrencyTableError>;

/// Currency table construction error.
#[derive(Debug)]
pub enum CurrencyTableError {
    Empty,
    InvalidCurrency(CurrencyValidationError),
    DuplicateCode(String),
    MissingBase,
    MultipleBases { first: String, second: String },
    UnknownDefault(String),
    Parse(serde_json::Error),
}

impl Display for CurrencyTableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "currency table must not be empty"),
            Self::InvalidCurrency(err) => write!(f, "{err}"),
            Self::DuplicateCode(code) => write!(f, "duplicate currency code: `{code}`"),
            Self::MissingBase => write!(f, "currency table has no base currency (rate == 1)"),
            Self::MultipleBases { first, second } => write!(
                f,
                "currency table has more than one base currency: `{first}` and `{second}`"
            ),
            Self::UnknownDefault(code) => {
                write!(f, "default currency `{code}` is not in the table")
            }
            Self::Parse(err) => write!(f, "invalid currency document: {err}"),
        }
    }
}

impl Error for CurrencyTableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidCurrency(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CurrencyValidationError> for CurrencyTableError {
    fn from(value: CurrencyValidationError) -> Self {
        Self::InvalidCurrency(value)
    }
}

impl From<serde_json::Error> for CurrencyTableError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrencyDocument {
    #[serde(default)]
    default_code: Option<String>,
    currencies: Vec<Currency>,
}

/// Immutable ordered currency collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyTable {
    currencies: Vec<Currency>,
    base_index: usize,
    default_index: usize,
}

impl CurrencyTable {
    /// Builds a table from records.
    ///
    /// `default_code` selects the lookup-miss fallback. When `None`, the base
    /// currency is the default.
    pub fn new(currencies: Vec<Currency>, default_code: Option<&str>) -> CurrencyTableResult<Self> {
        let result = Self::build(currencies, default_code);
        match &result {
            Ok(table) => info!(
                "event=currency_load module=catalog status=ok currencies={} base={} default={}",
                table.currencies.len(),
                table.base().code,
                table.default_currency().code
            ),
            Err(_) => warn!("event=currency_load module=catalog status=error"),
        }
        result
    }

    fn build(currencies: Vec<Currency>, default_code: Option<&str>) -> CurrencyTableResult<Self> {
        if currencies.is_empty() {
            return Err(CurrencyTableError::Empty);
        }

        let mut seen = BTreeSet::<&str>::new();
        let mut base_index: Option<usize> = None;
        for (index, currency) in currencies.iter().enumerate() {
            currency.validate()?;
            if !seen.insert(currency.code.as_str()) {
                return Err(CurrencyTableError::DuplicateCode(currency.code.clone()));
            }
            if currency.is_base() {
                if let Some(first) = base_index {
                    return Err(CurrencyTableError::MultipleBases {
                        first: currencies[first].code.clone(),
                        second: currency.code.clone(),
                    });
                }
                base_index = Some(index);
            }
        }
        let base_index = base_index.ok_or(CurrencyTableError::MissingBase)?;

        let default_index = match default_code {
            Some(code) => currencies
                .iter()
                .position(|currency| currency.code == code)
                .ok_or_else(|| CurrencyTableError::UnknownDefault(code.to_string()))?,
            None => base_index,
        };

        Ok(Self {
            currencies,
            base_index,
            default_index,
        })
    }

    /// Parses and validates a `{ "defaultCode": .., "currencies": [..] }` document.
    pub fn from_json_str(raw: &str) -> CurrencyTableResult<Self> {
        let document: CurrencyDocument = serde_json::from_str(raw)?;
        Self::new(document.currencies, document.default_code.as_deref())
    }

    /// All currencies in table order.
    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Exact lookup by code (ASCII case-insensitive).
    pub fn get(&self, code: &str) -> Option<&Currency> {
        let code = code.trim();
        self.currencies
            .iter()
            .find(|currency| currency.code.eq_ignore_ascii_case(code))
    }

    /// The base currency (`rate == 1`).
    pub fn base(&self) -> &Currency {
        &self.currencies[self.base_index]
    }

    /// Fallback used for absent or unknown codes.
    pub fn default_currency(&self) -> &Currency {
        &self.currencies[self.default_index]
    }

    /// Returns the table with `code` as the lookup-miss fallback.
    ///
    /// # Errors
    /// - `UnknownDefault` when `code` is not in the table.
    pub fn with_default(mut self, code: &str) -> CurrencyTableResult<Self> {
        let wanted = code.trim();
        self.default_index = self
            .currencies
            .iter()
            .position(|currency| currency.code.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CurrencyTableError::UnknownDefault(code.to_string()))?;
        Ok(self)
    }

    /// Resolves a user-selected code, falling back to the default currency.
    pub fn resolve(&self, code: Option<&str>) -> &Currency {
        match code {
            Some(value) => match self.get(value) {
                Some(currency) => currency,
                None => {
                    debug!(
                        "event=currency_resolve module=catalog status=fallback requested_len={} fallback={}",
                        value.len(),
                        self.default_currency().code
                    );
                    self.default_currency()
                }
            },
            None => self.default_currency(),
        }
    }
}
