//! Serializers for the reference and system tiers.
//!
//! Every format names variables through [`naming`], so a token present in
//! one format is present under the same name in the others.

mod css;
mod json;
pub mod naming;
mod scss;

use std::fmt;

pub use css::Css;
pub use json::Json;
pub use scss::Scss;

use crate::{error::Result, reference::ReferenceTree, system::SystemTree};

/// The two token tiers, each written to its own directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Reference,
    System,
}

impl Tier {
    pub const ALL: [Tier; 2] = [Tier::Reference, Tier::System];

    pub const fn key(self) -> &'static str {
        match self {
            Tier::Reference => "ref",
            Tier::System => "sys",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub trait TokenFormat {
    /// Middle part of the file name, `tokens` or `variables`.
    fn kind(&self) -> &'static str;

    fn extension(&self) -> &'static str;

    fn render_reference(&self, tree: &ReferenceTree) -> Result<String>;

    fn render_system(&self, tree: &SystemTree) -> Result<String>;

    /// File name for `tier`, e.g. `md-sys-color-variables.scss`.
    fn file_name(&self, tier: Tier) -> String {
        format!("md-{tier}-color-{}.{}", self.kind(), self.extension())
    }
}

/// All formats, in the order their files are written.
pub fn all() -> [&'static dyn TokenFormat; 3] {
    [&Json, &Css, &Scss]
}
