//! Variable names shared by the CSS and SCSS formats.

use crate::{family::ColorFamily, system::Mode};

/// `md-ref-palette-{family}-{tone}`
pub fn reference_variable(family: ColorFamily, tone: u8) -> String {
    format!("md-ref-palette-{family}-{tone}")
}

/// `md-sys-{mode}-{role}`
pub fn system_variable(mode: Mode, role: &str) -> String {
    format!("md-sys-{mode}-{role}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(
            reference_variable(ColorFamily::NeutralVariant, 30),
            "md-ref-palette-neutral-variant-30"
        );
        assert_eq!(
            system_variable(Mode::Dark, "onSurfaceVariant"),
            "md-sys-dark-onSurfaceVariant"
        );
    }
}
