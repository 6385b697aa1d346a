//! Base-unit amount to display string conversion.
//!
//! # Invariants
//! - Rounding is round-half-up: `floor(x + 0.5)`.
//! - Output uses `,` thousands grouping and no fractional digits.
//! - Zero renders as `"0"`; non-finite input renders as `"0"`.

use crate::model::currency::Currency;

const GROUP_SEPARATOR: char = ',';

/// Converts `amount_base` into `currency` and renders the grouped integer.
///
/// The caller prepends `currency.symbol`; see [`format_money`] for the
/// combined form.
pub fn format_amount(amount_base: f64, currency: &Currency) -> String {
    group_thousands(round_half_up(amount_base * currency.rate))
}

/// Same as [`format_amount`] with the currency symbol prepended.
pub fn format_money(amount_base: f64, currency: &Currency) -> String {
    format!("{}{}", currency.symbol, format_amount(amount_base, currency))
}

/// Rounds half-up to a whole number.
///
/// Non-finite values map to `0`. Values beyond the `i64` range saturate.
pub fn round_half_up(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    (value + 0.5).floor() as i64
}

/// Renders an integer with `,` every three digits (`8350` -> `8,350`).
pub fn group_thousands(value: i64) -> String {
    let grouped = group_unsigned(value.unsigned_abs());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Unsigned form of [`group_thousands`]; covers the full `u64` range.
pub fn group_unsigned(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::{format_amount, format_money, group_thousands, group_unsigned, round_half_up};
    use crate::model::currency::Currency;

    #[test]
    fn grouping_inserts_separators_every_three_digits() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-45000), "-45,000");
    }

    #[test]
    fn unsigned_grouping_covers_full_range() {
        assert_eq!(group_unsigned(0), "0");
        assert_eq!(group_unsigned(u64::MAX), "18,446,744,073,709,551,615");
        assert_eq!(group_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn half_rounds_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(f64::NAN), 0);
    }

    #[test]
    fn rupee_conversion_matches_reference_value() {
        let inr = Currency::new("INR", "₹", "Indian Rupee", 83.5);
        assert_eq!(format_amount(100.0, &inr), "8,350");
        assert_eq!(format_money(100.0, &inr), "₹8,350");
    }

    #[test]
    fn zero_renders_as_zero() {
        let eur = Currency::new("EUR", "€", "Euro", 0.93);
        assert_eq!(format_amount(0.0, &eur), "0");
    }
}
