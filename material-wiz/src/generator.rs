//! Wires palettes, reference tokens, system tokens and serializers together.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    config::BaseColors,
    error::Result,
    family::ToneStops,
    format::{self, Tier},
    output::{OutputLayout, RenderedFile},
    palette::{HctToneSource, TonalPalette, ToneSource},
    reference::ReferenceTree,
    system::{AliasPolicy, SystemColorMap, SystemTree},
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub stops: ToneStops,
    pub policy: AliasPolicy,
}

/// Turns base colors into a [`TokenSet`].
///
/// The system color map is parsed and checked against the stop sets when
/// the generator is built, so a drifted role table fails before any palette
/// is computed.
#[derive(Clone, Debug)]
pub struct TokenGenerator<S = HctToneSource> {
    source: S,
    stops: ToneStops,
    map: SystemColorMap,
}

impl TokenGenerator {
    /// A generator using Material HCT tones.
    pub fn new(options: GeneratorOptions) -> Result<Self> {
        Self::with_source(HctToneSource, options)
    }
}

impl<S: ToneSource> TokenGenerator<S> {
    pub fn with_source(source: S, options: GeneratorOptions) -> Result<Self> {
        let map = SystemColorMap::material(&options.stops, options.policy)?;
        Ok(Self {
            source,
            stops: options.stops,
            map,
        })
    }

    /// Uses a caller-supplied, already loaded map.
    pub fn with_map(source: S, stops: ToneStops, map: SystemColorMap) -> Self {
        Self { source, stops, map }
    }

    pub fn stops(&self) -> &ToneStops {
        &self.stops
    }

    pub fn system_map(&self) -> &SystemColorMap {
        &self.map
    }

    #[instrument(level = "debug", skip(self, colors))]
    pub fn generate(&self, colors: &BaseColors) -> Result<TokenSet> {
        let palettes: Vec<TonalPalette> = colors
            .iter()
            .map(|(family, base)| TonalPalette::generate(family, base, &self.stops, &self.source))
            .collect();
        let reference = ReferenceTree::build(&palettes, &self.stops)?;
        let system = SystemTree::build(&self.map, &reference);
        info!(
            families = palettes.len(),
            reference_tokens = reference.tokens().count(),
            system_tokens = system.tokens().count(),
            "built token trees"
        );
        Ok(TokenSet {
            palettes,
            reference,
            system,
        })
    }
}

/// Both token tiers for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenSet {
    pub palettes: Vec<TonalPalette>,
    pub reference: ReferenceTree,
    pub system: SystemTree,
}

impl TokenSet {
    /// Renders all six artifacts, reference tier first.
    pub fn render(&self) -> Result<Vec<RenderedFile>> {
        let mut files = Vec::with_capacity(Tier::ALL.len() * format::all().len());
        for tier in Tier::ALL {
            for format in format::all() {
                let contents = match tier {
                    Tier::Reference => format.render_reference(&self.reference)?,
                    Tier::System => format.render_system(&self.system)?,
                };
                files.push(RenderedFile {
                    tier,
                    file_name: format.file_name(tier),
                    contents,
                });
            }
        }
        Ok(files)
    }

    /// Renders everything, then writes it under `layout`.
    pub fn write(&self, layout: &OutputLayout) -> Result<Vec<PathBuf>> {
        let files = self.render()?;
        layout.write(&files)
    }
}
