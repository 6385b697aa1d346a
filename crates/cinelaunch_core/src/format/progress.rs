//! Funding progress percentage.
//!
//! # Invariants
//! - `display_percent` is always within `0..=100`; over-funding is clamped.
//! - `almost_funded` is derived from `display_percent`, never from the raw value.

/// Display threshold for the "almost funded" badge.
pub const ALMOST_FUNDED_THRESHOLD: u8 = 90;

/// Funding percentage projections for one project.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundingProgress {
    /// Unclamped `(funding / budget) * 100`. May exceed 100.
    pub raw_percent: f64,
    /// Rounded and clamped percentage for labels.
    pub display_percent: u8,
    /// Unrounded, clamped width for progress bars.
    pub bar_percent: f64,
    pub almost_funded: bool,
}

impl FundingProgress {
    /// Computes progress from base-unit amounts.
    ///
    /// Expects `budget > 0`, which catalog construction guarantees. Any other
    /// input (zero, negative, non-finite) yields a zero progress instead of NaN.
    pub fn compute(funding_received: f64, budget: f64) -> Self {
        let raw_percent = if budget > 0.0 && budget.is_finite() && funding_received.is_finite() {
            (funding_received / budget) * 100.0
        } else {
            0.0
        };
        let clamped = raw_percent.clamp(0.0, 100.0);
        let display_percent = (clamped + 0.5).floor().min(100.0) as u8;

        Self {
            raw_percent,
            display_percent,
            bar_percent: clamped,
            almost_funded: display_percent >= ALMOST_FUNDED_THRESHOLD,
        }
    }

    /// Returns whether pledges have reached the budget.
    pub fn is_fully_funded(&self) -> bool {
        self.raw_percent >= 100.0
    }
}
