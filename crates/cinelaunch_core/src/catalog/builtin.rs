//! Built-in sample data embedded at compile time.

use crate::catalog::currency_table::{CurrencyTable, CurrencyTableResult};
use crate::catalog::project_catalog::{CatalogResult, ProjectCatalog};

const BUILTIN_PROJECTS_JSON: &str = include_str!("../../data/projects.json");
const BUILTIN_CURRENCIES_JSON: &str = include_str!("../../data/currencies.json");

/// Parses the embedded sample catalog.
///
/// Each call builds a fresh value; nothing is cached globally.
pub fn builtin_catalog() -> CatalogResult<ProjectCatalog> {
    ProjectCatalog::from_json_str(BUILTIN_PROJECTS_JSON)
}

/// Parses the embedded currency table.
pub fn builtin_currencies() -> CurrencyTableResult<CurrencyTable> {
    CurrencyTable::from_json_str(BUILTIN_CURRENCIES_JSON)
}
