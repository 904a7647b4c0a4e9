//! Color families and the tone stops each family is sampled at.

use std::fmt;

use serde::Deserialize;

use crate::error::{Result, TokenError};

/// Tone stops sampled for primary, secondary, tertiary and error palettes.
pub const STANDARD_TONES: [u8; 13] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 95, 99, 100];

/// Finer-grained tone stops sampled for the neutral palettes.
pub const NEUTRAL_TONES: [u8; 24] = [
    0, 4, 6, 10, 12, 17, 20, 22, 24, 30, 40, 50, 60, 70, 80, 87, 90, 92, 94, 95, 96, 98, 99, 100,
];

/// A named color family with its own base color and tonal palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorFamily {
    Primary,
    Secondary,
    Tertiary,
    Error,
    Neutral,
    NeutralVariant,
}

impl ColorFamily {
    /// Every family in declaration order.
    pub const ALL: [ColorFamily; 6] = [
        ColorFamily::Primary,
        ColorFamily::Secondary,
        ColorFamily::Tertiary,
        ColorFamily::Error,
        ColorFamily::Neutral,
        ColorFamily::NeutralVariant,
    ];

    /// Key used in token paths and variable names, e.g. `neutral-variant`.
    pub const fn key(self) -> &'static str {
        match self {
            ColorFamily::Primary => "primary",
            ColorFamily::Secondary => "secondary",
            ColorFamily::Tertiary => "tertiary",
            ColorFamily::Error => "error",
            ColorFamily::Neutral => "neutral",
            ColorFamily::NeutralVariant => "neutral-variant",
        }
    }

    /// Name of the input field supplying this family's base color.
    pub const fn input_name(self) -> &'static str {
        match self {
            ColorFamily::NeutralVariant => "neutralVariant",
            other => other.key(),
        }
    }

    /// Looks a family up by its token key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| family.key() == key)
    }

    /// Whether this family is sampled at the neutral tone stops.
    pub const fn is_neutral(self) -> bool {
        matches!(self, ColorFamily::Neutral | ColorFamily::NeutralVariant)
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The two tone-stop sets a design language samples its palettes at.
///
/// Whatever set generated a family's palette is the set used to build,
/// resolve and serialize that family, so every component receives the same
/// `ToneStops` value rather than reading shared constants.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ToneStopsConfig")]
pub struct ToneStops {
    standard: Vec<u8>,
    neutral: Vec<u8>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ToneStopsConfig {
    standard: Vec<u8>,
    neutral: Vec<u8>,
}

impl TryFrom<ToneStopsConfig> for ToneStops {
    type Error = TokenError;

    fn try_from(config: ToneStopsConfig) -> Result<Self> {
        Self::new(config.standard, config.neutral)
    }
}

impl Default for ToneStops {
    fn default() -> Self {
        Self::material()
    }
}

impl ToneStops {
    /// The Material Design 3 stop sets.
    pub fn material() -> Self {
        Self {
            standard: STANDARD_TONES.to_vec(),
            neutral: NEUTRAL_TONES.to_vec(),
        }
    }

    /// Builds custom stop sets. Each set must be non-empty, strictly
    /// ascending and within `0..=100`.
    pub fn new(standard: Vec<u8>, neutral: Vec<u8>) -> Result<Self> {
        validate_stops("standard", &standard)?;
        validate_stops("neutral", &neutral)?;
        Ok(Self { standard, neutral })
    }

    /// Stop set selected by the neutral flag.
    pub fn select(&self, is_neutral: bool) -> &[u8] {
        if is_neutral {
            &self.neutral
        } else {
            &self.standard
        }
    }

    /// Stop set for a family.
    pub fn for_family(&self, family: ColorFamily) -> &[u8] {
        self.select(family.is_neutral())
    }

    /// Whether `tone` is sampled for `family`.
    pub fn contains(&self, family: ColorFamily, tone: u8) -> bool {
        self.for_family(family).binary_search(&tone).is_ok()
    }

    pub fn standard(&self) -> &[u8] {
        &self.standard
    }

    pub fn neutral(&self) -> &[u8] {
        &self.neutral
    }
}

fn validate_stops(set: &'static str, stops: &[u8]) -> Result<()> {
    let invalid = |reason: String| TokenError::InvalidToneStops { set, reason };
    if stops.is_empty() {
        return Err(invalid("the set is empty".to_string()));
    }
    if let Some(tone) = stops.iter().find(|tone| **tone > 100) {
        return Err(invalid(format!("tone {tone} is outside 0..=100")));
    }
    if let Some(pair) = stops.windows(2).find(|pair| pair[0] >= pair[1]) {
        return Err(invalid(format!(
            "tones must be strictly ascending, found {} before {}",
            pair[0], pair[1]
        )));
    }
    Ok(())
}
