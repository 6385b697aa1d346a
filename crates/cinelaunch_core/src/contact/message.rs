//! Plain-text email message value.

use std::fmt::{Display, Formatter};

/// Composed email handed to an external mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailMessage {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Renders `mailto:<to>?subject=..&body=..` with percent-encoded fields.
    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to.trim(),
            urlencoding::encode(self.subject.as_str()),
            urlencoding::encode(self.body.as_str())
        )
    }
}

impl Display for MailMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "To: {}", self.to)?;
        writeln!(f, "Subject: {}", self.subject)?;
        writeln!(f)?;
        f.write_str(self.body.as_str())
    }
}
