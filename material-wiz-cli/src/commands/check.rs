use std::path::Path;

use anyhow::{Result, bail};
use material_wiz::{Mode, SystemColorMap, system::SYSTEM_ROLES};

use super::load_config;
use crate::output;

pub fn execute(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let stops = config.tone_stops();
    let failures = SystemColorMap::check(SYSTEM_ROLES, &stops);

    if failures.is_empty() {
        output::phase(
            "Checked",
            format!(
                "{} aliases resolve against the tone stops",
                SYSTEM_ROLES.len() * Mode::ALL.len()
            ),
        );
        return Ok(());
    }

    for failure in &failures {
        output::unresolved(failure.to_string());
    }
    bail!("{} system color aliases do not resolve", failures.len());
}
