use anyhow::Result;
use inquire::{
    Text,
    error::CustomUserError,
    ui::{Attributes, Color, ErrorMessageRenderConfig, RenderConfig, StyleSheet, Styled},
    validator::Validation,
};
use material_wiz::{ColorFamily, ColorInputs, HexColor};

use crate::output;

/// Asks for every family's base color, pre-filling values already known.
pub fn collect_colors(known: &ColorInputs) -> Result<ColorInputs> {
    output::phase("Prompting", "define the base hex for your palette colors");
    output::family_hint(&[ColorFamily::Primary], "main color of your palette (required)");
    output::family_hint(
        &[ColorFamily::Secondary, ColorFamily::Tertiary, ColorFamily::Error],
        "optional, leave blank to skip",
    );
    output::family_hint(
        &[ColorFamily::Neutral, ColorFamily::NeutralVariant],
        "backgrounds, surfaces and borders, leave blank to skip",
    );

    let mut colors = ColorInputs::default();
    for family in ColorFamily::ALL {
        let color = prompt_color(family, known.get(family))?;
        colors.set(family, color);
    }
    Ok(colors)
}

fn prompt_color(family: ColorFamily, known: Option<HexColor>) -> Result<Option<HexColor>> {
    let required = family == ColorFamily::Primary;
    let validator = move |input: &str| -> Result<Validation, CustomUserError> {
        if input.trim().is_empty() {
            return Ok(if required {
                Validation::Invalid(
                    "Primary color is required. Please enter a valid hex color like #123ABC".into(),
                )
            } else {
                Validation::Valid
            });
        }
        Ok(match HexColor::parse(input) {
            Ok(_) => Validation::Valid,
            Err(_) if required => {
                Validation::Invalid("Please enter a valid hex color like #123ABC".into())
            }
            Err(_) => Validation::Invalid(
                "Please enter a valid hex color like #123ABC or leave blank".into(),
            ),
        })
    };

    let label = family.key().replace('-', " ").to_uppercase();
    let message = if required {
        format!("Enter base hex for {label} (e.g. #FABADA)")
    } else {
        format!("Enter base hex for {label} (or leave blank to skip)")
    };
    let default = known.map(|color| color.to_string()).unwrap_or_default();

    let answer = Text::new(&message)
        .with_render_config(color_prompt_theme(known))
        .with_initial_value(&default)
        .with_validator(validator)
        .prompt()?;

    Ok(HexColor::parse_optional(&answer)?)
}

/// Prompt styling; the answer is echoed in the color already known for the
/// family, if any.
fn color_prompt_theme(known: Option<HexColor>) -> RenderConfig<'static> {
    let accent = match known {
        Some(color) => {
            let [_, r, g, b] = color.to_argb().to_be_bytes();
            Color::Rgb { r, g, b }
        }
        None => Color::LightCyan,
    };

    let mut config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("#").with_fg(accent))
        .with_answered_prompt_prefix(Styled::new("#").with_fg(Color::LightGreen))
        .with_canceled_prompt_indicator(Styled::new("skipped").with_fg(Color::DarkGrey))
        .with_error_message(
            ErrorMessageRenderConfig::default_colored()
                .with_prefix(Styled::new("invalid hex").with_fg(Color::LightRed)),
        );
    config.prompt = StyleSheet::new().with_attr(Attributes::BOLD);
    config.answer = StyleSheet::new().with_fg(accent);
    config.text_input = StyleSheet::new().with_fg(accent);
    config
}
