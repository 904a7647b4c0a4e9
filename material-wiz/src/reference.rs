//! The reference tier: one color token per (family, tone).

use crate::{
    color::HexColor,
    error::{Result, TokenError},
    family::{ColorFamily, ToneStops},
    palette::TonalPalette,
};

/// JSON `type` of every token this crate emits.
pub const COLOR_TYPE: &str = "color";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferenceToken {
    pub family: ColorFamily,
    pub tone: u8,
    pub value: HexColor,
}

impl ReferenceToken {
    pub const fn token_type(&self) -> &'static str {
        COLOR_TYPE
    }
}

/// All reference tokens of one family, ordered by tone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferencePalette {
    pub family: ColorFamily,
    pub tokens: Vec<ReferenceToken>,
}

impl ReferencePalette {
    /// Wraps every stop of `family`'s tone set as a token.
    ///
    /// Fails if the palette was sampled at a different stop set.
    pub fn build(palette: &TonalPalette, stops: &ToneStops) -> Result<Self> {
        let family = palette.family();
        let tokens = stops
            .for_family(family)
            .iter()
            .map(|&tone| {
                palette
                    .get(tone)
                    .map(|value| ReferenceToken {
                        family,
                        tone,
                        value,
                    })
                    .ok_or(TokenError::MissingTone { family, tone })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { family, tokens })
    }
}

/// Reference tokens of every supplied family, in family declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceTree {
    palettes: Vec<ReferencePalette>,
}

impl ReferenceTree {
    pub fn build<'a>(
        palettes: impl IntoIterator<Item = &'a TonalPalette>,
        stops: &ToneStops,
    ) -> Result<Self> {
        let mut palettes = palettes
            .into_iter()
            .map(|palette| ReferencePalette::build(palette, stops))
            .collect::<Result<Vec<_>>>()?;
        palettes.sort_by_key(|palette| palette.family);
        palettes.dedup_by_key(|palette| palette.family);
        Ok(Self { palettes })
    }

    pub fn palettes(&self) -> &[ReferencePalette] {
        &self.palettes
    }

    pub fn tokens(&self) -> impl Iterator<Item = &ReferenceToken> {
        self.palettes.iter().flat_map(|palette| palette.tokens.iter())
    }

    pub fn families(&self) -> impl Iterator<Item = ColorFamily> + '_ {
        self.palettes.iter().map(|palette| palette.family)
    }

    pub fn contains_family(&self, family: ColorFamily) -> bool {
        self.palettes.iter().any(|palette| palette.family == family)
    }

    pub fn get(&self, family: ColorFamily, tone: u8) -> Option<HexColor> {
        self.palettes
            .iter()
            .find(|palette| palette.family == family)?
            .tokens
            .iter()
            .find(|token| token.tone == tone)
            .map(|token| token.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::testing::FakeToneSource;

    #[test]
    fn builds_in_declaration_order() {
        let stops = ToneStops::material();
        let neutral = TonalPalette::generate(
            ColorFamily::NeutralVariant,
            HexColor::from_rgb(0x79747E),
            &stops,
            &FakeToneSource,
        );
        let primary = TonalPalette::generate(
            ColorFamily::Primary,
            HexColor::from_rgb(0x6750A4),
            &stops,
            &FakeToneSource,
        );
        let tree = ReferenceTree::build([&neutral, &primary], &stops).unwrap();

        let families: Vec<_> = tree.families().collect();
        assert_eq!(
            families,
            [ColorFamily::Primary, ColorFamily::NeutralVariant]
        );
        assert_eq!(tree.tokens().count(), 13 + 24);
        assert_eq!(tree.get(ColorFamily::NeutralVariant, 87), neutral.get(87));
        assert_eq!(tree.get(ColorFamily::Primary, 87), None);
        assert!(tree.tokens().all(|token| token.token_type() == "color"));
    }

    #[test]
    fn palette_from_other_stop_set_is_rejected() {
        let coarse = ToneStops::new(vec![0, 50, 100], vec![0, 50, 100]).unwrap();
        let palette = TonalPalette::generate(
            ColorFamily::Neutral,
            HexColor::from_rgb(0x605D62),
            &coarse,
            &FakeToneSource,
        );
        let err = ReferencePalette::build(&palette, &ToneStops::material()).unwrap_err();
        assert!(matches!(
            err,
            TokenError::MissingTone {
                family: ColorFamily::Neutral,
                tone: 4
            }
        ));
    }
}
