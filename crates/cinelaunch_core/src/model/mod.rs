//! Domain records shared by catalog, query and formatting code.
//!
//! # Responsibility
//! - Define the canonical `Project` and `Currency` shapes.
//! - Provide record-level validation used at catalog construction time.
//!
//! # Invariants
//! - Records are immutable once placed in a catalog or currency table.
//! - Monetary amounts are always stored in the base currency unit.

pub mod currency;
pub mod project;
