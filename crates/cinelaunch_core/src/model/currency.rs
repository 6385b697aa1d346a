//! Currency domain model.
//!
//! # Responsibility
//! - Define display currencies and their fixed conversion rates.
//!
//! # Invariants
//! - `code` is three upper-case ASCII letters.
//! - `rate` is finite and strictly positive.
//! - A currency with `rate == 1` is the base unit all amounts are stored in.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static CURRENCY_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}$").expect("valid currency code regex"));

/// Display currency with a fixed rate relative to the base unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO-style three-letter code, e.g. `USD`.
    pub code: String,
    /// Display glyph prepended to formatted amounts.
    pub symbol: String,
    pub name: String,
    /// Units of this currency per one base unit.
    pub rate: f64,
}

impl Currency {
    pub fn new(
        code: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        rate: f64,
    ) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
            name: name.into(),
            rate,
        }
    }

    /// Returns whether this currency is the base unit (`rate == 1`).
    pub fn is_base(&self) -> bool {
        self.rate == 1.0
    }

    /// Validates record-level currency invariants.
    pub fn validate(&self) -> Result<(), CurrencyValidationError> {
        if !is_currency_code(self.code.as_str()) {
            return Err(CurrencyValidationError::InvalidCode(self.code.clone()));
        }
        if self.symbol.trim().is_empty() {
            return Err(CurrencyValidationError::EmptySymbol {
                code: self.code.clone(),
            });
        }
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(CurrencyValidationError::InvalidRate {
                code: self.code.clone(),
                rate: self.rate,
            });
        }
        Ok(())
    }
}

/// Returns whether `value` is shaped like a currency code (`[A-Z]{3}`).
pub fn is_currency_code(value: &str) -> bool {
    CURRENCY_CODE_RE.is_match(value)
}

/// Record-level currency validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyValidationError {
    InvalidCode(String),
    EmptySymbol { code: String },
    InvalidRate { code: String, rate: f64 },
}

impl Display for CurrencyValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCode(code) => {
                write!(f, "currency code `{code}` must be three upper-case letters")
            }
            Self::EmptySymbol { code } => write!(f, "currency `{code}` has an empty symbol"),
            Self::InvalidRate { code, rate } => {
                write!(f, "currency `{code}` rate must be > 0, got {rate}")
            }
        }
    }
}

impl Error for CurrencyValidationError {}
