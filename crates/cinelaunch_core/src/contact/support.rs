//! Support pledge email composition.
//!
//! # Invariants
//! - Pledge amounts are whole units of the pledge currency and always `> 0`.
//! - The recipient is the project override address or the site fallback.

use crate::contact::message::MailMessage;
use crate::format::currency::group_unsigned;
use crate::model::currency::Currency;
use crate::model::project::Project;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Preset amounts offered next to the custom amount field.
pub const QUICK_PLEDGE_AMOUNTS: [u64; 4] = [50, 100, 250, 500];

/// Payment channel named in the pledge email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Upi,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Upi => "UPI",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One supporter's intended contribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportPledge {
    /// Whole units of the pledge currency.
    pub amount: u64,
    /// Pledge currency code. `None` uses the configured form currency.
    pub currency_code: Option<String>,
    pub payment_method: PaymentMethod,
}

impl SupportPledge {
    /// Creates a pledge from an already-numeric amount.
    pub fn new(amount: u64, payment_method: PaymentMethod) -> Result<Self, PledgeError> {
        if amount == 0 {
            return Err(PledgeError::ZeroAmount);
        }
        Ok(Self {
            amount,
            currency_code: None,
            payment_method,
        })
    }

    /// Parses the custom amount text field.
    ///
    /// Accepts a positive whole number, optionally with `,` grouping.
    pub fn from_custom_amount(raw: &str, payment_method: PaymentMethod) -> Result<Self, PledgeError> {
        let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
        let amount = cleaned
            .parse::<u64>()
            .map_err(|_| PledgeError::InvalidAmount(raw.trim().to_string()))?;
        Self::new(amount, payment_method)
    }

    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = Some(code.into());
        self
    }
}

/// Pledge input errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PledgeError {
    ZeroAmount,
    InvalidAmount(String),
}

impl Display for PledgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroAmount => write!(f, "pledge amount must be greater than zero"),
            Self::InvalidAmount(raw) => {
                write!(f, "pledge amount `{raw}` is not a positive whole number")
            }
        }
    }
}

impl Error for PledgeError {}

/// Composes the support email for `project`.
///
/// `currency` must already be resolved from `pledge.currency_code`.
pub fn compose_support_message(
    project: &Project,
    pledge: &SupportPledge,
    currency: &Currency,
    fallback_address: &str,
) -> MailMessage {
    let amount = format!("{}{}", currency.symbol, group_unsigned(pledge.amount));
    let subject = format!("Support for {}", project.title);
    let body = format!(
        "Dear {director},

I would like to support your project \"{title}\" with {amount}.

Payment Method: {method}
Project ID: {id}

Please provide payment instructions for completing this contribution.

Best regards,
A Film Enthusiast",
        director = project.director,
        title = project.title,
        amount = amount,
        method = pledge.payment_method,
        id = project.id,
    );

    MailMessage::new(project.contact_address(fallback_address), subject, body)
}
