//! Immutable, validated site data: project catalog and currency table.
//!
//! # Responsibility
//! - Build catalog/currency values from records or JSON documents.
//! - Reject data-integrity violations at construction time.
//! - Provide the built-in data set embedded in the crate.
//!
//! # Invariants
//! - Constructed values are never mutated; consumers only borrow.
//! - No ambient globals: callers construct and inject these values.

pub mod builtin;
pub mod currency_table;
pub mod project_catalog;
