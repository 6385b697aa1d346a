use cinelaunch_core::{builtin_currencies, format_amount, format_money, Currency, FundingProgress};

#[test]
fn inr_conversion_rounds_and_groups() {
    let inr = Currency::new("INR", "₹", "Indian Rupee", 83.5);
    assert_eq!(format_amount(100.0, &inr), "8,350");
    assert_eq!(format_money(100.0, &inr), "₹8,350");
}

#[test]
fn base_currency_shows_the_stored_amount() {
    let table = builtin_currencies().unwrap();
    let usd = table.base();
    assert_eq!(usd.code, "USD");
    assert_eq!(format_amount(112_000.0, usd), "112,000");
    assert_eq!(format_amount(0.0, usd), "0");
}

#[test]
fn halves_round_up() {
    let table = builtin_currencies().unwrap();
    let jpy = table.get("JPY").unwrap();
    // 1 * 150.5
    assert_eq!(format_amount(1.0, jpy), "151");
    assert_eq!(format_money(1.0, jpy), "¥151");
}

#[test]
fn builtin_table_converts_catalog_amounts() {
    let table = builtin_currencies().unwrap();
    assert_eq!(format_money(120_000.0, table.get("inr").unwrap()), "₹10,020,000");
    assert_eq!(format_money(112_000.0, table.get("EUR").unwrap()), "€104,160");
    assert_eq!(format_money(45_000.0, table.get("GBP").unwrap()), "£36,000");
}

#[test]
fn progress_is_clamped_for_display_only() {
    let progress = FundingProgress::compute(1500.0, 1000.0);
    assert_eq!(progress.display_percent, 100);
    assert!(progress.raw_percent > 149.0);
    assert!(progress.is_fully_funded());

    let near = FundingProgress::compute(950.0, 1000.0);
    assert_eq!(near.display_percent, 95);
    assert!(near.almost_funded);
}
