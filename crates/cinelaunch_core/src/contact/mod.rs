//! Outbound contact message composition.
//!
//! # Responsibility
//! - Build plain-text support and submission emails from validated input.
//! - Render `mailto:` URIs for the external mail-client handoff.
//!
//! # Invariants
//! - Composition never sends anything; it only returns `MailMessage` values.
//! - User-provided text is validated here but never logged.

pub mod message;
pub mod submission;
pub mod support;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Returns whether `value` is shaped like `local@domain.tld`.
///
/// Shape check only; deliverability is the mail client's concern.
pub fn is_email_address(value: &str) -> bool {
    EMAIL_ADDRESS_RE.is_match(value.trim())
}
