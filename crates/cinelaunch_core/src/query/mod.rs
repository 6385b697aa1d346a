//! Project listing query pipeline.
//!
//! # Responsibility
//! - Filter the catalog by search text and genre.
//! - Order results by a closed set of sort keys.
//!
//! # Invariants
//! - The pipeline never mutates the catalog; it returns borrowed projects.
//! - Filtering is total: no input string produces an error.
//! - Sorting is stable, so ties keep catalog order.

pub mod genre;
pub mod pipeline;
