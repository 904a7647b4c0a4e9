use std::{io::IsTerminal, path::PathBuf, time::Instant};

use anyhow::{Context, Result, bail};
use comfy_table::{
    Attribute, Cell, ContentArrangement, Table, modifiers::UTF8_ROUND_CORNERS as RoundCorners,
    presets::UTF8_FULL,
};
use material_wiz::{
    AliasPolicy, ColorInputs, GeneratorOptions, Mode, OutputLayout, TokenGenerator,
    TokenSet, output::DEFAULT_OUTPUT_DIR,
};
use owo_colors::OwoColorize;
use tracing::debug;

use super::{load_config, prompt};
use crate::{GenerateArgs, OptionalColor, output};

impl GenerateArgs {
    pub(crate) fn color_inputs(&self) -> ColorInputs {
        let optional = |flag: Option<OptionalColor>| flag.and_then(|color| color.0);
        ColorInputs {
            primary: self.primary,
            secondary: optional(self.secondary),
            tertiary: optional(self.tertiary),
            error: optional(self.error),
            neutral: optional(self.neutral),
            neutral_variant: optional(self.neutral_variant),
        }
    }
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let started = Instant::now();
    let config = load_config(args.config.as_deref())?;
    debug!(?config, "loaded configuration");

    let mut inputs = config.colors.clone();
    inputs.merge(&args.color_inputs());
    if inputs.primary.is_none() {
        if args.no_prompt || !std::io::stdin().is_terminal() {
            bail!("A primary color is required: pass --primary or set `primary` under [colors]");
        }
        inputs = prompt::collect_colors(&inputs)?;
    }
    let colors = inputs.into_base_colors()?;

    let policy = if args.lenient_aliases {
        AliasPolicy::Lenient
    } else {
        config.alias_policy()
    };
    let generator = TokenGenerator::new(GeneratorOptions {
        stops: config.tone_stops(),
        policy,
    })
    .context("System color roles do not match the configured tone stops")?;

    let supplied: Vec<&str> = colors.iter().map(|(family, _)| family.key()).collect();
    output::phase("Generating", format!("palettes for {}", supplied.join(", ")));
    let tokens = generator.generate(&colors)?;

    let root = args
        .out
        .or(config.output)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    let layout = OutputLayout::new(root);
    let written = tokens
        .write(&layout)
        .with_context(|| format!("Failed to write tokens under {}", layout.root().display()))?;

    output::phase("Writing", format!("{}", layout.root().display()));
    for path in &written {
        output::written(path);
    }
    print_summary(&tokens);
    output::phase(
        "Finished",
        format!("{} files in {:.2?}", written.len(), started.elapsed()),
    );

    Ok(())
}

fn print_summary(tokens: &TokenSet) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(RoundCorners)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Family").add_attribute(Attribute::Bold),
            Cell::new("Base").add_attribute(Attribute::Bold),
            Cell::new("Tones").add_attribute(Attribute::Bold),
            Cell::new("Light roles").add_attribute(Attribute::Bold),
            Cell::new("Dark roles").add_attribute(Attribute::Bold),
        ]);

    for palette in &tokens.palettes {
        let roles = |mode: Mode| {
            tokens
                .system
                .tokens()
                .filter(|token| {
                    token.mode == mode && token.alias.family_key() == palette.family().key()
                })
                .count()
        };
        table.add_row(vec![
            Cell::new(format!("{}", palette.family().key().bright_green())),
            Cell::new(output::swatch(palette.base())),
            Cell::new(palette.len()),
            Cell::new(roles(Mode::Light)),
            Cell::new(roles(Mode::Dark)),
        ]);
    }

    println!("\n{table}");
}
