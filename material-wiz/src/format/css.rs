use std::fmt::Write as _;

use tracing::debug;

use super::{
    TokenFormat,
    naming::{reference_variable, system_variable},
};
use crate::{error::Result, reference::ReferenceTree, system::SystemTree};

/// Custom properties declared on `:root`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Css;

impl TokenFormat for Css {
    fn kind(&self) -> &'static str {
        "variables"
    }

    fn extension(&self) -> &'static str {
        "css"
    }

    fn render_reference(&self, tree: &ReferenceTree) -> Result<String> {
        let mut css = String::from(":root {\n");
        for token in tree.tokens() {
            let _ = writeln!(
                css,
                "  --{}: {}; /* {} {} */",
                reference_variable(token.family, token.tone),
                token.value,
                token.family,
                token.tone
            );
        }
        css.push_str("}\n");
        Ok(css)
    }

    fn render_system(&self, tree: &SystemTree) -> Result<String> {
        let mut css = String::from(":root {\n");
        for mode in tree.modes() {
            let _ = write!(css, "\n  /* {} mode */\n", mode.mode);
            for token in mode.tokens() {
                let Some(target) = token.target else {
                    debug!(mode = %token.mode, role = token.role, "skipping unresolved alias");
                    continue;
                };
                let _ = writeln!(
                    css,
                    "  --{}: var(--{});",
                    system_variable(token.mode, token.role),
                    reference_variable(target.family, target.tone)
                );
            }
        }
        css.push_str("}\n");
        Ok(css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::HexColor,
        family::{ColorFamily, ToneStops},
        palette::{TonalPalette, testing::FakeToneSource},
        system::{AliasPolicy, SystemColorMap},
    };

    #[test]
    fn reference_block() {
        let stops = ToneStops::new(vec![0, 100], vec![0, 50, 100]).unwrap();
        let palette = TonalPalette::generate(
            ColorFamily::NeutralVariant,
            HexColor::from_rgb(0x79747E),
            &stops,
            &FakeToneSource,
        );
        let tree = ReferenceTree::build([&palette], &stops).unwrap();
        assert_eq!(
            Css.render_reference(&tree).unwrap(),
            ":root {\n\
             \x20 --md-ref-palette-neutral-variant-0: #79747e; /* neutral-variant 0 */\n\
             \x20 --md-ref-palette-neutral-variant-50: #79744c; /* neutral-variant 50 */\n\
             \x20 --md-ref-palette-neutral-variant-100: #79741a; /* neutral-variant 100 */\n\
             }\n"
        );
    }

    #[test]
    fn system_block_groups_by_mode_and_skips_unresolved() {
        let stops = ToneStops::new(vec![0, 20, 80, 100], vec![0, 50, 100]).unwrap();
        let palette = TonalPalette::generate(
            ColorFamily::Primary,
            HexColor::from_rgb(0x6750A4),
            &stops,
            &FakeToneSource,
        );
        let reference = ReferenceTree::build([&palette], &stops).unwrap();
        let map = SystemColorMap::material(&stops, AliasPolicy::Lenient).unwrap();
        let css = Css.render_system(&SystemTree::build(&map, &reference)).unwrap();

        assert!(css.starts_with(":root {\n\n  /* light mode */\n"));
        assert!(css.contains("\n  /* dark mode */\n"));
        assert!(css.ends_with("}\n"));
        // light primary aliases tone 40, which is not sampled here
        assert!(!css.contains("--md-sys-light-primary:"));
        assert!(css.contains("  --md-sys-light-onPrimary: var(--md-ref-palette-primary-100);\n"));
        assert!(css.contains("  --md-sys-dark-primary: var(--md-ref-palette-primary-80);\n"));
        assert!(css.contains("  --md-sys-dark-surfaceTint: var(--md-ref-palette-primary-80);\n"));
    }
}
