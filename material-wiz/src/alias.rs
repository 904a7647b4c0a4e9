//! Alias parsing and resolution.
//!
//! A system token points into the reference palette with an alias written
//! either bare (`neutral-variant.30`) or in reference form
//! (`{md.ref.palette.neutral-variant.30}`). Aliases are parsed once into
//! [`Alias`] and resolved against the configured stop sets into a
//! [`PaletteRef`].

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::family::{ColorFamily, ToneStops};

const REFERENCE_PREFIX: &str = "md.ref.palette.";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AliasError {
    #[error("`{0}` does not match `family.tone`")]
    Malformed(String),
    #[error("unknown color family `{0}`")]
    UnknownFamily(String),
    #[error("tone {0} is outside 0..=100")]
    ToneOutOfRange(u32),
    #[error("tone {tone} is not a stop of the `{family}` palette")]
    MissingTone { family: ColorFamily, tone: u8 },
}

/// A parsed but not yet resolved alias.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Alias {
    family: String,
    tone: u8,
}

impl Alias {
    pub fn parse(input: &str) -> Result<Self, AliasError> {
        let malformed = || AliasError::Malformed(input.to_string());

        let path = match input.strip_prefix('{') {
            Some(inner) => inner
                .strip_suffix('}')
                .and_then(|inner| inner.strip_prefix(REFERENCE_PREFIX))
                .ok_or_else(malformed)?,
            None => input,
        };

        let (family, tone) = path.rsplit_once('.').ok_or_else(malformed)?;
        let family_ok = !family.is_empty()
            && family
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !family_ok || tone.is_empty() || !tone.chars().all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }

        // Digit-only strings only fail to parse on overflow.
        let tone = tone.parse::<u32>().unwrap_or(u32::MAX);
        let tone = u8::try_from(tone)
            .ok()
            .filter(|tone| *tone <= 100)
            .ok_or(AliasError::ToneOutOfRange(tone))?;

        Ok(Self {
            family: family.to_string(),
            tone,
        })
    }

    /// Family key as written, which may not name a known family.
    pub fn family_key(&self) -> &str {
        &self.family
    }

    pub fn tone(&self) -> u8 {
        self.tone
    }

    /// Resolves against the stop set of the named family.
    pub fn resolve(&self, stops: &ToneStops) -> Result<PaletteRef, AliasError> {
        let family = ColorFamily::from_key(&self.family)
            .ok_or_else(|| AliasError::UnknownFamily(self.family.clone()))?;
        if !stops.contains(family, self.tone) {
            return Err(AliasError::MissingTone {
                family,
                tone: self.tone,
            });
        }
        Ok(PaletteRef {
            family,
            tone: self.tone,
        })
    }
}

/// Renders the reference form, `{md.ref.palette.<family>.<tone>}`.
impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{REFERENCE_PREFIX}{}.{}}}", self.family, self.tone)
    }
}

impl FromStr for Alias {
    type Err = AliasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A resolved pointer at one reference token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PaletteRef {
    pub family: ColorFamily,
    pub tone: u8,
}

impl From<PaletteRef> for Alias {
    fn from(target: PaletteRef) -> Self {
        Self {
            family: target.family.key().to_string(),
            tone: target.tone,
        }
    }
}
