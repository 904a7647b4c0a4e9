//! Base colors and the optional `material-wiz.toml` configuration file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Deserializer, de};

use crate::{
    color::HexColor,
    error::{Result, TokenError},
    family::{ColorFamily, ToneStops},
    system::AliasPolicy,
};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "material-wiz.toml";

/// The user-supplied base colors. Only primary is required; an absent
/// family is left out of both token tiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseColors {
    pub primary: HexColor,
    pub secondary: Option<HexColor>,
    pub tertiary: Option<HexColor>,
    pub error: Option<HexColor>,
    pub neutral: Option<HexColor>,
    pub neutral_variant: Option<HexColor>,
}

impl BaseColors {
    pub fn new(primary: HexColor) -> Self {
        Self {
            primary,
            secondary: None,
            tertiary: None,
            error: None,
            neutral: None,
            neutral_variant: None,
        }
    }

    pub fn get(&self, family: ColorFamily) -> Option<HexColor> {
        match family {
            ColorFamily::Primary => Some(self.primary),
            ColorFamily::Secondary => self.secondary,
            ColorFamily::Tertiary => self.tertiary,
            ColorFamily::Error => self.error,
            ColorFamily::Neutral => self.neutral,
            ColorFamily::NeutralVariant => self.neutral_variant,
        }
    }

    /// Supplied families in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorFamily, HexColor)> + '_ {
        ColorFamily::ALL
            .into_iter()
            .filter_map(|family| self.get(family).map(|color| (family, color)))
    }
}

/// Color inputs as they arrive from a config file or the command line,
/// keyed by input name (`neutralVariant`). A blank value is not supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ColorInputs {
    #[serde(deserialize_with = "optional_color")]
    pub primary: Option<HexColor>,
    #[serde(deserialize_with = "optional_color")]
    pub secondary: Option<HexColor>,
    #[serde(deserialize_with = "optional_color")]
    pub tertiary: Option<HexColor>,
    #[serde(deserialize_with = "optional_color")]
    pub error: Option<HexColor>,
    #[serde(deserialize_with = "optional_color")]
    pub neutral: Option<HexColor>,
    #[serde(alias = "neutral-variant", deserialize_with = "optional_color")]
    pub neutral_variant: Option<HexColor>,
}

fn optional_color<'de, D>(deserializer: D) -> std::result::Result<Option<HexColor>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => HexColor::parse_optional(&raw).map_err(de::Error::custom),
        None => Ok(None),
    }
}

impl ColorInputs {
    pub fn get(&self, family: ColorFamily) -> Option<HexColor> {
        match family {
            ColorFamily::Primary => self.primary,
            ColorFamily::Secondary => self.secondary,
            ColorFamily::Tertiary => self.tertiary,
            ColorFamily::Error => self.error,
            ColorFamily::Neutral => self.neutral,
            ColorFamily::NeutralVariant => self.neutral_variant,
        }
    }

    pub fn set(&mut self, family: ColorFamily, color: Option<HexColor>) {
        let slot = match family {
            ColorFamily::Primary => &mut self.primary,
            ColorFamily::Secondary => &mut self.secondary,
            ColorFamily::Tertiary => &mut self.tertiary,
            ColorFamily::Error => &mut self.error,
            ColorFamily::Neutral => &mut self.neutral,
            ColorFamily::NeutralVariant => &mut self.neutral_variant,
        };
        *slot = color;
    }

    /// Values from `other` take precedence where present.
    pub fn merge(&mut self, other: &ColorInputs) {
        for family in ColorFamily::ALL {
            if let Some(color) = other.get(family) {
                self.set(family, Some(color));
            }
        }
    }

    pub fn into_base_colors(self) -> Result<BaseColors> {
        Ok(BaseColors {
            primary: self.primary.ok_or(TokenError::MissingPrimary)?,
            secondary: self.secondary,
            tertiary: self.tertiary,
            error: self.error,
            neutral: self.neutral,
            neutral_variant: self.neutral_variant,
        })
    }
}

/// Contents of `material-wiz.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WizConfig {
    /// Output root; the `tokens/md/...` tree is created inside it.
    pub output: Option<PathBuf>,
    pub lenient_aliases: bool,
    pub colors: ColorInputs,
    /// Replaces the Material stop sets.
    pub tones: Option<ToneStops>,
}

impl WizConfig {
    pub fn from_toml(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| TokenError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| TokenError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Loads `path` if given, else the default file if it exists, else an
    /// empty config.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn alias_policy(&self) -> AliasPolicy {
        if self.lenient_aliases {
            AliasPolicy::Lenient
        } else {
            AliasPolicy::Strict
        }
    }

    pub fn tone_stops(&self) -> ToneStops {
        self.tones.clone().unwrap_or_default()
    }
}
