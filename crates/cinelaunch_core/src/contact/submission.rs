//! Project submission email composition.
//!
//! # Responsibility
//! - Validate the submission form fields.
//! - Render the sectioned plain-text submission email.
//!
//! # Invariants
//! - A message is only composed from a form that passed `validate()`.
//! - Submissions are always addressed to the site contact address.

use crate::contact::is_email_address;
use crate::contact::message::MailMessage;
use crate::model::currency::Currency;
use crate::query::genre::is_submission_genre;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raw submission form input, one field per form control.
///
/// Amount fields hold the text typed by the filmmaker; they are validated but
/// echoed back verbatim (trimmed) in the email.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionForm {
    pub title: String,
    pub director: String,
    pub email: String,
    pub phone: String,
    pub genre: String,
    pub synopsis: String,
    pub description: String,
    pub budget: String,
    /// Currency code the budget and funding goal are expressed in.
    pub currency: String,
    pub target_audience: String,
    /// Minutes.
    pub duration: String,
    pub release_date: String,
    pub country: String,
    pub language: String,
    pub cast: String,
    pub crew: String,
    pub production_stage: String,
    pub funding_goal: String,
    pub pitch: String,
}

impl SubmissionForm {
    /// Validates required fields and numeric formats.
    ///
    /// # Errors
    /// - `MissingField` for the first blank required field, in form order.
    /// - `InvalidEmail` when the filmmaker address is malformed.
    /// - `UnsupportedGenre` when the genre is not a submission genre.
    /// - `InvalidNumber` for a malformed budget, funding goal or duration.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        let required: [(&'static str, &str); 9] = [
            ("title", self.title.as_str()),
            ("director", self.director.as_str()),
            ("email", self.email.as_str()),
            ("genre", self.genre.as_str()),
            ("synopsis", self.synopsis.as_str()),
            ("description", self.description.as_str()),
            ("currency", self.currency.as_str()),
            ("budget", self.budget.as_str()),
            ("pitch", self.pitch.as_str()),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(SubmissionError::MissingField(field));
            }
        }

        if !is_email_address(self.email.as_str()) {
            return Err(SubmissionError::InvalidEmail(self.email.trim().to_string()));
        }
        if !is_submission_genre(self.genre.trim()) {
            return Err(SubmissionError::UnsupportedGenre(
                self.genre.trim().to_string(),
            ));
        }

        require_positive_amount("budget", self.budget.as_str())?;
        if !self.funding_goal.trim().is_empty() {
            require_positive_amount("fundingGoal", self.funding_goal.as_str())?;
        }
        if !self.duration.trim().is_empty() {
            match self.duration.trim().parse::<u32>() {
                Ok(minutes) if minutes > 0 => {}
                _ => {
                    return Err(SubmissionError::InvalidNumber {
                        field: "duration",
                        value: self.duration.trim().to_string(),
                    })
                }
            }
        }
        Ok(())
    }
}

fn require_positive_amount(field: &'static str, raw: &str) -> Result<(), SubmissionError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(()),
        _ => Err(SubmissionError::InvalidNumber {
            field,
            value: raw.trim().to_string(),
        }),
    }
}

/// Submission form validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    MissingField(&'static str),
    InvalidEmail(String),
    UnsupportedGenre(String),
    InvalidNumber { field: &'static str, value: String },
    /// The form currency is not in the currency table.
    UnknownCurrency(String),
}

impl Display for SubmissionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is empty"),
            Self::InvalidEmail(value) => write!(f, "`{value}` is not a valid email address"),
            Self::UnsupportedGenre(value) => write!(f, "genre `{value}` is not accepted"),
            Self::InvalidNumber { field, value } => {
                write!(f, "field `{field}` must be a positive number, got `{value}`")
            }
            Self::UnknownCurrency(code) => write!(f, "currency `{code}` is not offered"),
        }
    }
}

impl Error for SubmissionError {}

/// Validates `form` and composes the submission email.
///
/// `currency` is the already-resolved form currency; its symbol and code are
/// used for the budget and funding goal lines.
pub fn compose_submission_message(
    form: &SubmissionForm,
    currency: &Currency,
    contact_address: &str,
) -> Result<MailMessage, SubmissionError> {
    form.validate()?;

    let field = |value: &str| value.trim().to_string();
    let symbol = currency.symbol.as_str();
    let code = currency.code.as_str();
    let subject = format!("Film Project Submission: {}", field(&form.title));
    let body = format!(
        "Dear CineLaunch Team,

I would like to submit my film project for consideration on your platform.

PROJECT DETAILS:
===============
Title: {title}
Director: {director}
Genre: {genre}
Synopsis: {synopsis}

CONTACT INFORMATION:
===================
Email: {email}
Phone: {phone}
Country: {country}

PROJECT SPECIFICATIONS:
======================
Budget: {symbol}{budget} ({code})
Duration: {duration} minutes
Language: {language}
Target Audience: {audience}
Expected Release Date: {release_date}

CAST & CREW:
============
Cast: {cast}
Crew: {crew}

PRODUCTION DETAILS:
==================
Current Stage: {stage}
Funding Goal: {symbol}{funding_goal} ({code})

PROJECT DESCRIPTION:
===================
{description}

PITCH:
======
{pitch}

MEDIA FILES:
============
Please find attached:
- Poster image
- Teaser/trailer (if available)
- Pitch deck presentation

Best regards,
{director}",
        title = field(&form.title),
        director = field(&form.director),
        genre = field(&form.genre),
        synopsis = field(&form.synopsis),
        email = field(&form.email),
        phone = field(&form.phone),
        country = field(&form.country),
        symbol = symbol,
        budget = field(&form.budget),
        code = code,
        duration = field(&form.duration),
        language = field(&form.language),
        audience = field(&form.target_audience),
        release_date = field(&form.release_date),
        cast = field(&form.cast),
        crew = field(&form.crew),
        stage = field(&form.production_stage),
        funding_goal = field(&form.funding_goal),
        description = field(&form.description),
        pitch = field(&form.pitch),
    );

    Ok(MailMessage::new(contact_address, subject, body))
}
