//! CLI command implementations

pub mod fetch;
pub mod providers;

use std::path::PathBuf;

use anyhow::{Context, Result};
use algoscrape_core::AlgoscrapeContext;

/// Get the algoscrape config directory from environment or default
pub fn get_config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("ALGOSCRAPE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".algoscrape"))
        .context("Could not find home directory; set ALGOSCRAPE_DIR")
}

/// Build the algoscrape context from the config directory
///
/// The directory is not created; a missing settings file means defaults.
pub fn get_context() -> Result<AlgoscrapeContext> {
    let config_dir = get_config_dir()?;
    tracing::debug!(config_dir = %config_dir.display(), "Loading settings");
    AlgoscrapeContext::new(&config_dir)
        .with_context(|| format!("Failed to initialize from {}", config_dir.display()))
}
