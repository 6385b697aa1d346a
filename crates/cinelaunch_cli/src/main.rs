//! CLI smoke entry point.
//!
//! # Responsibility
//! - Start core file logging before any data is loaded.
//! - Verify `cinelaunch_core` linkage and built-in data integrity.
//! - Exit non-zero when logging cannot start or the embedded data is invalid.

use cinelaunch_core::{
    builtin_catalog, builtin_currencies, default_log_level, init_logging, BrowseService,
    SiteConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;

const LOG_DIR_NAME: &str = "cinelaunch-logs";

fn main() -> ExitCode {
    println!("cinelaunch_core ping={}", cinelaunch_core::ping());
    println!("cinelaunch_core version={}", cinelaunch_core::core_version());

    let log_dir = match start_logging() {
        Ok(dir) => dir,
        Err(message) => {
            eprintln!("cinelaunch_core logging=failed error={message}");
            return ExitCode::FAILURE;
        }
    };
    println!("cinelaunch_core log_dir={}", log_dir.display());

    let service = match load_service() {
        Ok(service) => service,
        Err(message) => {
            eprintln!("cinelaunch_core data=invalid error={message}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "cinelaunch_core catalog_version={} projects={} currencies={}",
        service.catalog().version(),
        service.catalog().len(),
        service.currencies().len()
    );
    for card in service.featured(None, chrono::Utc::now()) {
        println!(
            "{}\t{}%\t{}/{}\t{}",
            card.id,
            card.progress.display_percent,
            card.funding_display,
            card.budget_display,
            card.title
        );
    }
    ExitCode::SUCCESS
}

/// Starts logging under `<temp>/cinelaunch-logs` at the build's default level.
fn start_logging() -> Result<PathBuf, String> {
    let log_dir = std::env::temp_dir().join(LOG_DIR_NAME);
    let log_dir_str = log_dir
        .to_str()
        .ok_or_else(|| format!("log dir `{}` is not valid UTF-8", log_dir.display()))?;
    init_logging(default_log_level(), log_dir_str).map_err(|err| err.to_string())?;
    Ok(log_dir)
}

fn load_service() -> Result<BrowseService, String> {
    let catalog = builtin_catalog().map_err(|err| err.to_string())?;
    let currencies = builtin_currencies().map_err(|err| err.to_string())?;
    BrowseService::new(catalog, currencies, SiteConfig::default()).map_err(|err| err.to_string())
}
