//! Core use-case services.
//!
//! # Responsibility
//! - Combine catalog, query and formatting into page-level APIs.
//! - Keep presentation layers decoupled from record shapes and rounding rules.

pub mod browse_service;
pub mod projection;
