//! Tonal palette generation.
//!
//! A palette samples one base color at every stop of its family's tone set.
//! The perceptual math lives behind [`ToneSource`]; [`HctToneSource`] is the
//! HCT implementation from `material-color-utilities`.

use material_color_utilities::{hct::Hct, palettes::TonalPalette as HctPalette};
use tracing::debug;

use crate::{
    color::HexColor,
    family::{ColorFamily, ToneStops},
};

/// Produces the color of `base` at a perceptual tone in `0..=100`.
///
/// Implementations must be deterministic and total over valid RGB input.
pub trait ToneSource {
    fn tone(&self, base: HexColor, tone: u8) -> HexColor;
}

/// Material HCT tones via `material-color-utilities`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HctToneSource;

impl ToneSource for HctToneSource {
    fn tone(&self, base: HexColor, tone: u8) -> HexColor {
        // `HctPalette::from_int` keys the palette on hue alone; pass the
        // base color's own chroma through.
        let hct = Hct::from_int(base.to_argb());
        let palette = HctPalette::from_hue_and_chroma(hct.hue(), hct.chroma());
        HexColor::from_argb(palette.tone(tone))
    }
}

impl<T: ToneSource + ?Sized> ToneSource for &T {
    fn tone(&self, base: HexColor, tone: u8) -> HexColor {
        (**self).tone(base, tone)
    }
}

/// Tone → color mapping for one family, ordered by tone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TonalPalette {
    family: ColorFamily,
    base: HexColor,
    tones: Vec<(u8, HexColor)>,
}

impl TonalPalette {
    /// Samples `base` at the stop set belonging to `family`.
    pub fn generate(
        family: ColorFamily,
        base: HexColor,
        stops: &ToneStops,
        source: &impl ToneSource,
    ) -> Self {
        let tones = sample(base, family.is_neutral(), stops, source);
        debug!(%family, %base, stops = tones.len(), "generated tonal palette");
        Self {
            family,
            base,
            tones,
        }
    }

    pub fn family(&self) -> ColorFamily {
        self.family
    }

    pub fn base(&self) -> HexColor {
        self.base
    }

    /// Color at `tone`, if that tone was sampled.
    pub fn get(&self, tone: u8) -> Option<HexColor> {
        self.tones
            .binary_search_by_key(&tone, |(t, _)| *t)
            .ok()
            .map(|index| self.tones[index].1)
    }

    pub fn tones(&self) -> impl ExactSizeIterator<Item = (u8, HexColor)> + '_ {
        self.tones.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.tones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }
}

/// Samples `base` at the neutral stop set iff `is_neutral`, otherwise at the
/// standard set.
pub fn sample(
    base: HexColor,
    is_neutral: bool,
    stops: &ToneStops,
    source: &impl ToneSource,
) -> Vec<(u8, HexColor)> {
    stops
        .select(is_neutral)
        .iter()
        .map(|&tone| (tone, source.tone(base, tone)))
        .collect()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Deterministic stand-in that mixes the base color with the tone.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct FakeToneSource;

    impl ToneSource for FakeToneSource {
        fn tone(&self, base: HexColor, tone: u8) -> HexColor {
            HexColor::from_rgb(base.rgb() ^ u32::from(tone))
        }
    }
}
