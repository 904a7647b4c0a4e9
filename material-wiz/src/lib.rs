//! material-wiz turns a handful of base colors into a Material Design 3
//! color token system.
//!
//! # Tiers
//!
//! - **Reference** tokens sample each supplied family's tonal palette at a
//!   fixed set of tone stops: `md.ref.palette.<family>.<tone>`.
//! - **System** tokens alias reference tokens to UI roles per mode:
//!   `md.sys.<mode>.<group>.<role>` → `{md.ref.palette.<family>.<tone>}`.
//!
//! Both tiers are written as JSON token documents, CSS custom properties
//! and SCSS variables.
//!
//! # Example
//!
//! ```no_run
//! use material_wiz::{
//!     BaseColors, GeneratorOptions, HexColor, OutputLayout, TokenGenerator,
//! };
//!
//! # fn main() -> material_wiz::Result<()> {
//! let generator = TokenGenerator::new(GeneratorOptions::default())?;
//! let mut colors = BaseColors::new(HexColor::parse("#6750A4")?);
//! colors.neutral = Some(HexColor::parse("#605D62")?);
//!
//! let tokens = generator.generate(&colors)?;
//! for path in tokens.write(&OutputLayout::new("output_files"))? {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod alias;
pub mod color;
pub mod config;
pub mod error;
pub mod family;
pub mod format;
pub mod generator;
pub mod output;
pub mod palette;
pub mod reference;
pub mod system;

pub use alias::{Alias, AliasError, PaletteRef};
pub use color::HexColor;
pub use config::{BaseColors, ColorInputs, WizConfig};
pub use error::{Result, TokenError};
pub use family::{ColorFamily, ToneStops};
pub use format::{Tier, TokenFormat};
pub use generator::{GeneratorOptions, TokenGenerator, TokenSet};
pub use output::{OutputLayout, RenderedFile};
pub use palette::{HctToneSource, TonalPalette, ToneSource};
pub use reference::{ReferenceToken, ReferenceTree};
pub use system::{AliasPolicy, ColorGroup, Mode, SystemColorMap, SystemToken, SystemTree};
