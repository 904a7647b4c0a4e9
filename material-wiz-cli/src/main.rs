use std::{path::PathBuf, str::FromStr};

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use material_wiz::{HexColor, Mode, TokenError};

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "material-wiz")]
#[command(version, about = "Material Design 3 color token generator", long_about = None)]
struct Cli {
    /// Log debug output from the generator
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate reference and system color tokens (JSON, CSS, SCSS)
    Generate(GenerateArgs),
    /// List the system color roles and their palette aliases
    Roles {
        /// Only show one mode
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// Check that every system color alias resolves against the tone stops
    Check {
        /// Config file (defaults to ./material-wiz.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Base color for PRIMARY, e.g. #6750A4
    #[arg(long)]
    primary: Option<HexColor>,
    /// Base color for SECONDARY (an empty value skips the family)
    #[arg(long)]
    secondary: Option<OptionalColor>,
    /// Base color for TERTIARY
    #[arg(long)]
    tertiary: Option<OptionalColor>,
    /// Base color for ERROR
    #[arg(long)]
    error: Option<OptionalColor>,
    /// Base color for NEUTRAL
    #[arg(long)]
    neutral: Option<OptionalColor>,
    /// Base color for NEUTRAL VARIANT
    #[arg(long = "neutral-variant")]
    neutral_variant: Option<OptionalColor>,
    /// Config file (defaults to ./material-wiz.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output root; files are written under <OUT>/tokens/md
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Warn about unresolvable aliases instead of failing
    #[arg(long)]
    lenient_aliases: bool,
    /// Never prompt; fail if no primary color is given
    #[arg(long)]
    no_prompt: bool,
}

/// A family color flag; an empty value means the family is not supplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionalColor(pub Option<HexColor>);

impl FromStr for OptionalColor {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexColor::parse_optional(s).map(Self)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Light,
    Dark,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Light => Mode::Light,
            ModeArg::Dark => Mode::Dark,
        }
    }
}

fn main() -> Result<()> {
    let Cli { verbose, command } = Cli::parse();
    init_tracing(verbose);

    match command {
        Commands::Generate(args) => commands::generate::execute(args)?,
        Commands::Roles { mode } => commands::roles::execute(mode.map(Mode::from)),
        Commands::Check { config } => commands::check::execute(config.as_deref())?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,material_wiz=debug"
    } else {
        "warn,material_wiz=info"
    };
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(default) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("warn"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
