//! Display formatting for money, funding progress and relative time.
//!
//! # Responsibility
//! - Turn base-unit amounts and timestamps into display strings.
//! - Keep rounding and clamping rules in one place.
//!
//! # Invariants
//! - All functions are pure; none of them read a clock or global state.

pub mod currency;
pub mod progress;
pub mod time_ago;
