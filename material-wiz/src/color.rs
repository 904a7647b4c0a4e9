//! Opaque RGB color values as they appear in token files.
//!
//! Input accepts `RRGGBB` or `#RRGGBB` in either case; output is always the
//! lowercase `#rrggbb` form.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// A fully opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(u32);

impl HexColor {
    /// Creates a color from a `0xRRGGBB` value. Any alpha bits are dropped.
    pub const fn from_rgb(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    /// Creates a color from a packed ARGB integer, ignoring alpha.
    pub const fn from_argb(argb: u32) -> Self {
        Self::from_rgb(argb)
    }

    /// Returns the color as a packed, fully opaque ARGB integer.
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | self.0
    }

    /// Returns the `0xRRGGBB` value.
    pub const fn rgb(self) -> u32 {
        self.0
    }

    /// Parses user input, tolerating surrounding whitespace and a missing `#`.
    pub fn parse(input: &str) -> Result<Self, TokenError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TokenError::InvalidHex {
                input: input.to_string(),
            });
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_rgb)
            .map_err(|_| TokenError::InvalidHex {
                input: input.to_string(),
            })
    }

    /// Parses an optional family input where an empty string means "not supplied".
    pub fn parse_optional(input: &str) -> Result<Option<Self>, TokenError> {
        if input.trim().is_empty() {
            Ok(None)
        } else {
            Self::parse(input).map(Some)
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for HexColor {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}
