use std::path::Path;

use console::style;
use material_wiz::{ColorFamily, HexColor};
use owo_colors::OwoColorize;

const LABEL_WIDTH: usize = 12;

/// Right-aligned phase label, as in `  Generating palettes for primary`.
pub fn phase(label: &str, message: impl AsRef<str>) {
    eprintln!(
        "{:>width$} {}",
        style(label).green().bold(),
        message.as_ref(),
        width = LABEL_WIDTH
    );
}

pub fn written(path: &Path) {
    eprintln!("{:>width$} {}", "", style(path.display()).dim(), width = LABEL_WIDTH);
}

pub fn unresolved(message: impl AsRef<str>) {
    eprintln!("{}: {}", style("unresolved").red().bold(), message.as_ref());
}

/// One line of the interactive guide: family name and what it colors.
pub fn family_hint(families: &[ColorFamily], hint: &str) {
    let names: Vec<String> = families
        .iter()
        .map(|family| family.key().replace('-', " ").to_uppercase())
        .collect();
    eprintln!("  {} {}", style(names.join(", ")).cyan().bold(), hint);
}

/// The color as a two-cell block followed by its hex.
pub fn swatch(color: HexColor) -> String {
    let [_, r, g, b] = color.to_argb().to_be_bytes();
    format!("{} {color}", "  ".on_truecolor(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_ends_with_hex() {
        let swatch = swatch(HexColor::from_rgb(0x6750A4));
        assert!(swatch.ends_with(" #6750a4"));
        assert!(swatch.contains("48;2;103;80;164"));
    }
}
