pub mod check;
pub mod generate;
pub mod prompt;
pub mod roles;

use std::path::Path;

use anyhow::{Context, Result};
use material_wiz::WizConfig;

/// Loads the explicit config file, or `./material-wiz.toml` when present.
pub fn load_config(path: Option<&Path>) -> Result<WizConfig> {
    WizConfig::discover(path).context("Failed to load configuration")
}
