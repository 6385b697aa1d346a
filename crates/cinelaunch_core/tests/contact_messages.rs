use cinelaunch_core::contact::submission::compose_submission_message;
use cinelaunch_core::contact::support::compose_support_message;
use cinelaunch_core::{
    builtin_catalog, builtin_currencies, Currency, PaymentMethod, PledgeError, SubmissionError,
    SubmissionForm, SupportPledge, QUICK_PLEDGE_AMOUNTS,
};

const FALLBACK: &str = "hello@cinelaunch.example";

fn rupee() -> Currency {
    Currency::new("INR", "₹", "Indian Rupee", 83.5)
}

fn filled_form() -> SubmissionForm {
    SubmissionForm {
        title: "Night Ferry".to_string(),
        director: "Tomas Berg".to_string(),
        email: "tomas@nightferry.example".to_string(),
        genre: "Drama".to_string(),
        synopsis: "Two strangers share the last crossing of the year.".to_string(),
        description: "A single-location chamber piece.".to_string(),
        budget: "2,500,000".to_string(),
        currency: "INR".to_string(),
        duration: "96".to_string(),
        funding_goal: "1500000".to_string(),
        pitch: "Before Sunrise on a car ferry.".to_string(),
        ..SubmissionForm::default()
    }
}

#[test]
fn support_message_uses_fallback_without_override() {
    let catalog = builtin_catalog().unwrap();
    let project = catalog.get("1").unwrap();
    let pledge = SupportPledge::new(250, PaymentMethod::Upi).unwrap();

    let message = compose_support_message(project, &pledge, &rupee(), FALLBACK);
    assert_eq!(message.to, FALLBACK);
    assert_eq!(message.subject, "Support for The Last Monsoon");
    assert!(message.body.starts_with("Dear Priya Raman,\n\n"));
    assert!(message
        .body
        .contains("support your project \"The Last Monsoon\" with ₹250."));
    assert!(message.body.contains("Payment Method: UPI\nProject ID: 1\n"));
    assert!(message.body.ends_with("Best regards,\nA Film Enthusiast"));
}

#[test]
fn support_message_prefers_project_override() {
    let catalog = builtin_catalog().unwrap();
    let project = catalog.get("2").unwrap();
    let pledge = SupportPledge::from_custom_amount("1,500", PaymentMethod::Upi).unwrap();

    let message = compose_support_message(project, &pledge, &rupee(), FALLBACK);
    assert_eq!(message.to, "jonas@staticbloom.example");
    assert!(message.body.contains("with ₹1,500."));
}

#[test]
fn largest_pledge_is_stated_exactly() {
    let catalog = builtin_catalog().unwrap();
    let pledge =
        SupportPledge::from_custom_amount("18446744073709551615", PaymentMethod::Upi).unwrap();
    assert_eq!(pledge.amount, u64::MAX);

    let message = compose_support_message(catalog.get("1").unwrap(), &pledge, &rupee(), FALLBACK);
    assert!(message
        .body
        .contains("with ₹18,446,744,073,709,551,615."));
}

#[test]
fn pledge_amounts_are_validated() {
    assert_eq!(QUICK_PLEDGE_AMOUNTS, [50, 100, 250, 500]);
    assert_eq!(
        SupportPledge::new(0, PaymentMethod::Upi).unwrap_err(),
        PledgeError::ZeroAmount
    );
    assert!(matches!(
        SupportPledge::from_custom_amount("lots", PaymentMethod::Upi).unwrap_err(),
        PledgeError::InvalidAmount(_)
    ));
}

#[test]
fn submission_message_lists_every_section() {
    let message = compose_submission_message(&filled_form(), &rupee(), FALLBACK).unwrap();

    assert_eq!(message.to, FALLBACK);
    assert_eq!(message.subject, "Film Project Submission: Night Ferry");
    for needle in [
        "Title: Night Ferry\n",
        "Director: Tomas Berg\n",
        "Email: tomas@nightferry.example\n",
        "Budget: ₹2,500,000 (INR)\n",
        "Duration: 96 minutes\n",
        "Funding Goal: ₹1500000 (INR)\n",
        "PITCH:\n======\nBefore Sunrise on a car ferry.\n",
    ] {
        assert!(message.body.contains(needle), "missing `{needle}`");
    }
    assert!(message.body.ends_with("Best regards,\nTomas Berg"));
}

#[test]
fn submission_requires_fields_in_form_order() {
    let mut form = filled_form();
    form.director = "  ".to_string();
    form.pitch.clear();
    assert_eq!(
        compose_submission_message(&form, &rupee(), FALLBACK).unwrap_err(),
        SubmissionError::MissingField("director")
    );
}

#[test]
fn submission_rejects_bad_values() {
    let mut form = filled_form();
    form.email = "tomas.example".to_string();
    assert!(matches!(form.validate(), Err(SubmissionError::InvalidEmail(_))));

    let mut form = filled_form();
    form.genre = "Western".to_string();
    assert_eq!(
        form.validate(),
        Err(SubmissionError::UnsupportedGenre("Western".to_string()))
    );

    let mut form = filled_form();
    form.budget = "-5".to_string();
    assert!(matches!(
        form.validate(),
        Err(SubmissionError::InvalidNumber { field: "budget", .. })
    ));

    let mut form = filled_form();
    form.duration = "0".to_string();
    assert!(matches!(
        form.validate(),
        Err(SubmissionError::InvalidNumber { field: "duration", .. })
    ));
}

#[test]
fn mailto_uri_percent_encodes_subject_and_body() {
    let currencies = builtin_currencies().unwrap();
    let catalog = builtin_catalog().unwrap();
    let pledge = SupportPledge::new(100, PaymentMethod::Upi).unwrap();
    let message = compose_support_message(
        catalog.get("3").unwrap(),
        &pledge,
        currencies.get("USD").unwrap(),
        FALLBACK,
    );

    let uri = message.mailto_uri();
    assert!(uri.starts_with("mailto:hello@cinelaunch.example?subject=Support%20for%20Laugh%20Track&body="));
    assert!(uri.contains("Dear%20Dana%20Whitfield%2C%0A%0A"));
    assert!(!uri.contains(' '));
    assert!(!uri.contains('\n'));
}
