use chrono::{DateTime, TimeZone, Utc};
use cinelaunch_core::{
    builtin_catalog, builtin_currencies, BrowseError, BrowseService, ConfigError, CurrencyTable,
    PaymentMethod, ProjectQuery, SiteConfig, SubmissionError, SubmissionForm, SupportPledge,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 15, 9, 30, 0).unwrap()
}

fn service_with(config: SiteConfig) -> BrowseService {
    BrowseService::new(
        builtin_catalog().unwrap(),
        builtin_currencies().unwrap(),
        config,
    )
    .unwrap()
}

fn service() -> BrowseService {
    service_with(SiteConfig::default())
}

#[test]
fn landing_page_features_first_projects_in_catalog_order() {
    let cards = service().featured(None, now());
    let ids: Vec<&str> = cards.iter().map(|card| card.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);

    let first = &cards[0];
    assert_eq!(first.currency_code, "USD");
    assert_eq!(first.funding_display, "$112,000");
    assert_eq!(first.budget_display, "$120,000");
    assert_eq!(first.progress.display_percent, 93);
    assert!(first.progress.almost_funded);
    assert_eq!(first.created_ago, "3 days ago");
}

#[test]
fn over_funded_card_is_clamped_but_keeps_real_amount() {
    let cards = service().featured(None, now());
    let laugh_track = cards.iter().find(|card| card.id == "3").unwrap();
    assert_eq!(laugh_track.progress.display_percent, 100);
    assert!(laugh_track.progress.is_fully_funded());
    assert_eq!(laugh_track.funding_display, "$86,500");
}

#[test]
fn browse_filters_and_reports_totals() {
    let query = ProjectQuery::from_params("dra", "All", "newest");
    let result = service().browse(&query, Some("EUR"), now());

    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].id, "1");
    assert_eq!(result.items[0].funding_display, "€104,160");
    assert_eq!(result.summary(), "Showing 1 of 8 projects");
    assert_eq!(result.query, query);

    let empty = service().browse(&ProjectQuery::from_params("zzz", "All", "newest"), None, now());
    assert!(empty.is_empty());
    assert_eq!(empty.summary(), "Showing 0 of 8 projects");
}

#[test]
fn unknown_currency_uses_configured_default() {
    let config = SiteConfig {
        default_currency: "GBP".to_string(),
        ..SiteConfig::default()
    };
    let service = service_with(config);
    assert_eq!(service.currency(Some("XYZ")).code, "GBP");
    assert_eq!(service.currency(Some("jpy")).code, "JPY");

    let cards = service.featured(Some("XYZ"), now());
    assert_eq!(cards[0].funding_display, "£89,600");
}

#[test]
fn detail_resolves_contact_address() {
    let service = service();
    let monsoon = service.detail("1", None, now()).unwrap();
    assert_eq!(monsoon.contact_address, "hello@cinelaunch.example");
    assert_eq!(monsoon.duration_minutes, Some(118));

    let bloom = service.detail("2", None, now()).unwrap();
    assert_eq!(bloom.contact_address, "jonas@staticbloom.example");

    assert_eq!(
        service.detail("404", None, now()).unwrap_err(),
        BrowseError::ProjectNotFound("404".to_string())
    );
}

#[test]
fn support_message_defaults_to_form_currency() {
    let service = service();
    let pledge = SupportPledge::new(500, PaymentMethod::Upi).unwrap();
    let message = service.support_message("1", &pledge).unwrap();
    assert!(message.body.contains("with ₹500."));

    let dollars = pledge.clone().with_currency("USD");
    let message = service.support_message("1", &dollars).unwrap();
    assert!(message.body.contains("with $500."));

    assert!(matches!(
        service.support_message("missing", &pledge),
        Err(BrowseError::ProjectNotFound(_))
    ));
}

#[test]
fn submission_goes_to_site_contact() {
    let config = SiteConfig {
        contact_address: "films@studio.example".to_string(),
        ..SiteConfig::default()
    };
    let form = SubmissionForm {
        title: "Night Ferry".to_string(),
        director: "Tomas Berg".to_string(),
        email: "tomas@nightferry.example".to_string(),
        genre: "Crime".to_string(),
        synopsis: "A crossing.".to_string(),
        description: "A chamber piece.".to_string(),
        currency: "EUR".to_string(),
        budget: "90000".to_string(),
        pitch: "Tense.".to_string(),
        ..SubmissionForm::default()
    };

    let message = service_with(config.clone()).submission_message(&form).unwrap();
    assert_eq!(message.to, "films@studio.example");
    assert!(message.body.contains("Budget: €90000 (EUR)"));

    let mut unknown_currency = form.clone();
    unknown_currency.currency = "XYZ".to_string();
    assert_eq!(
        service_with(config.clone())
            .submission_message(&unknown_currency)
            .unwrap_err(),
        SubmissionError::UnknownCurrency("XYZ".to_string())
    );

    let mut incomplete = form;
    incomplete.synopsis.clear();
    incomplete.currency = "XYZ".to_string();
    assert_eq!(
        service_with(config).submission_message(&incomplete).unwrap_err(),
        SubmissionError::MissingField("synopsis")
    );
}

#[test]
fn table_default_follows_site_config() {
    let currencies = CurrencyTable::new(
        builtin_currencies().unwrap().currencies().to_vec(),
        Some("INR"),
    )
    .unwrap();
    let config = SiteConfig {
        default_currency: "EUR".to_string(),
        ..SiteConfig::default()
    };
    let service = BrowseService::new(builtin_catalog().unwrap(), currencies, config).unwrap();

    for code in [None, Some("XYZ"), Some("")] {
        assert_eq!(service.currency(code).code, "EUR");
        assert_eq!(service.currencies().resolve(code).code, "EUR");
    }
    assert_eq!(service.currency(Some("gbp")).code, "GBP");
}

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.json");
    std::fs::write(
        &path,
        r#"{ "contactAddress": "team@films.example", "defaultCurrency": "INR", "featuredCount": 2 }"#,
    )
    .unwrap();

    let config = SiteConfig::from_path(&path).unwrap();
    assert_eq!(config.contact_address, "team@films.example");
    assert_eq!(config.form_currency, "INR");

    let cards = service_with(config).featured(None, now());
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].funding_display, "₹9,352,000");
}

#[test]
fn invalid_config_is_rejected() {
    assert!(matches!(
        SiteConfig::from_json_str(r#"{ "contactAddress": "nobody" }"#).unwrap_err(),
        ConfigError::InvalidContactAddress(_)
    ));
    assert!(matches!(
        SiteConfig::from_json_str(r#"{ "defaultCurrency": "usd" }"#).unwrap_err(),
        ConfigError::InvalidCurrencyCode { field: "defaultCurrency", .. }
    ));
    assert!(matches!(
        SiteConfig::from_json_str(r#"{ "theme": "dark" }"#).unwrap_err(),
        ConfigError::Parse(_)
    ));

    let config = SiteConfig {
        form_currency: "CHF".to_string(),
        ..SiteConfig::default()
    };
    let err = BrowseService::new(
        builtin_catalog().unwrap(),
        builtin_currencies().unwrap(),
        config,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::UnknownCurrency { field: "formCurrency", .. }));
}
