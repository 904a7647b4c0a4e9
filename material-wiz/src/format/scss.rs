use std::fmt::Write as _;

use tracing::debug;

use super::{
    TokenFormat,
    naming::{reference_variable, system_variable},
};
use crate::{error::Result, reference::ReferenceTree, system::SystemTree};

/// Sass variables with line comments.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scss;

impl TokenFormat for Scss {
    fn kind(&self) -> &'static str {
        "variables"
    }

    fn extension(&self) -> &'static str {
        "scss"
    }

    fn render_reference(&self, tree: &ReferenceTree) -> Result<String> {
        let mut scss = String::new();
        for token in tree.tokens() {
            let _ = writeln!(
                scss,
                "${}: {}; // {} {}",
                reference_variable(token.family, token.tone),
                token.value,
                token.family,
                token.tone
            );
        }
        Ok(scss)
    }

    fn render_system(&self, tree: &SystemTree) -> Result<String> {
        let mut scss = String::new();
        for mode in tree.modes() {
            let _ = writeln!(scss, "// {} mode", mode.mode);
            for token in mode.tokens() {
                let Some(target) = token.target else {
                    debug!(mode = %token.mode, role = token.role, "skipping unresolved alias");
                    continue;
                };
                let _ = writeln!(
                    scss,
                    "${}: ${};",
                    system_variable(token.mode, token.role),
                    reference_variable(target.family, target.tone)
                );
            }
            scss.push('\n');
        }
        Ok(scss)
    }
}
