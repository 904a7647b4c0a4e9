//! The system tier: semantic UI roles aliased into the reference palette.
//!
//! [`SYSTEM_ROLES`] is the Material Design 3 role table. It is data, written
//! as a literal in output order: groups in [`ColorGroup::ALL`] order, roles in
//! the order they are emitted within their group.

use std::fmt;

use tracing::warn;

use crate::{
    alias::{Alias, AliasError, PaletteRef},
    error::{Result, TokenError},
    family::ToneStops,
    reference::{COLOR_TYPE, ReferenceTree},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    pub const fn key(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.key() == key)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Output category partitioning the semantic roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorGroup {
    Primary,
    Surface,
    Outline,
    Error,
    Secondary,
    Tertiary,
}

impl ColorGroup {
    /// Groups in emission order.
    pub const ALL: [ColorGroup; 6] = [
        ColorGroup::Primary,
        ColorGroup::Surface,
        ColorGroup::Outline,
        ColorGroup::Error,
        ColorGroup::Secondary,
        ColorGroup::Tertiary,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            ColorGroup::Primary => "primary-colors",
            ColorGroup::Surface => "surface-colors",
            ColorGroup::Outline => "outline-colors",
            ColorGroup::Error => "error-colors",
            ColorGroup::Secondary => "secondary-colors",
            ColorGroup::Tertiary => "tertiary-colors",
        }
    }
}

impl fmt::Display for ColorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One row of a role table: a role, its group, and its alias per mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleSpec {
    pub role: &'static str,
    pub group: ColorGroup,
    pub light: &'static str,
    pub dark: &'static str,
}

impl RoleSpec {
    pub const fn alias(&self, mode: Mode) -> &'static str {
        match mode {
            Mode::Light => self.light,
            Mode::Dark => self.dark,
        }
    }
}

const fn role(
    role: &'static str,
    group: ColorGroup,
    light: &'static str,
    dark: &'static str,
) -> RoleSpec {
    RoleSpec {
        role,
        group,
        light,
        dark,
    }
}

use ColorGroup::{
    Error as ErrorGroup, Outline, Primary as PrimaryGroup, Secondary as SecondaryGroup, Surface,
    Tertiary as TertiaryGroup,
};

#[rustfmt::skip]
pub const SYSTEM_ROLES: &[RoleSpec] = &[
    role("primary",                 PrimaryGroup,   "primary.40",          "primary.80"),
    role("onPrimary",               PrimaryGroup,   "primary.100",         "primary.20"),
    role("primaryContainer",        PrimaryGroup,   "primary.90",          "primary.30"),
    role("onPrimaryContainer",      PrimaryGroup,   "primary.30",          "primary.90"),
    role("primaryFixed",            PrimaryGroup,   "primary.90",          "primary.90"),
    role("onPrimaryFixed",          PrimaryGroup,   "primary.10",          "primary.10"),
    role("primaryFixedDim",         PrimaryGroup,   "primary.80",          "primary.80"),
    role("onPrimaryFixedVariant",   PrimaryGroup,   "primary.30",          "primary.30"),
    role("inversePrimary",          PrimaryGroup,   "primary.80",          "primary.80"),

    role("background",              Surface,        "neutral.98",          "neutral.6"),
    role("onBackground",            Surface,        "neutral.10",          "neutral.90"),
    role("surface",                 Surface,        "neutral.98",          "neutral.6"),
    role("surfaceBright",           Surface,        "neutral.98",          "neutral.24"),
    role("surfaceDim",              Surface,        "neutral.87",          "neutral.6"),
    role("onSurface",               Surface,        "neutral.10",          "neutral.90"),
    role("onSurfaceVariant",        Surface,        "neutral-variant.30",  "neutral-variant.80"),
    role("surfaceContainerLowest",  Surface,        "neutral.100",         "neutral.4"),
    role("surfaceContainerLow",     Surface,        "neutral.96",          "neutral.10"),
    role("surfaceContainer",        Surface,        "neutral.94",          "neutral.12"),
    role("surfaceContainerHigh",    Surface,        "neutral.92",          "neutral.17"),
    role("surfaceContainerHighest", Surface,        "neutral.90",          "neutral.22"),
    role("surfaceVariant",          Surface,        "neutral-variant.90",  "neutral-variant.30"),
    role("inverseSurface",          Surface,        "neutral.20",          "neutral.90"),
    role("inverseOnSurface",        Surface,        "neutral.95",          "neutral.20"),
    role("shadow",                  Surface,        "neutral.0",           "neutral.0"),
    role("scrim",                   Surface,        "neutral.0",           "neutral.0"),
    role("surfaceTint",             Surface,        "primary.40",          "primary.80"),
    role("surfaceTintColor",        Surface,        "primary.40",          "primary.80"),

    role("outline",                 Outline,        "neutral-variant.50",  "neutral-variant.60"),
    role("outlineVariant",          Outline,        "neutral-variant.80",  "neutral-variant.30"),

    role("error",                   ErrorGroup,     "error.40",            "error.80"),
    role("onError",                 ErrorGroup,     "error.100",           "error.20"),
    role("errorContainer",          ErrorGroup,     "error.90",            "error.30"),
    role("onErrorContainer",        ErrorGroup,     "error.30",            "error.90"),

    role("secondary",               SecondaryGroup, "secondary.40",        "secondary.80"),
    role("onSecondary",             SecondaryGroup, "secondary.100",       "secondary.20"),
    role("secondaryContainer",      SecondaryGroup, "secondary.90",        "secondary.30"),
    role("onSecondaryContainer",    SecondaryGroup, "secondary.30",        "secondary.90"),
    role("secondaryFixed",          SecondaryGroup, "secondary.90",        "secondary.90"),
    role("onSecondaryFixed",        SecondaryGroup, "secondary.10",        "secondary.10"),
    role("secondaryFixedDim",       SecondaryGroup, "secondary.80",        "secondary.80"),
    role("onSecondaryFixedVariant", SecondaryGroup, "secondary.30",        "secondary.30"),

    role("tertiary",                TertiaryGroup,  "tertiary.40",         "tertiary.80"),
    role("onTertiary",              TertiaryGroup,  "tertiary.100",        "tertiary.20"),
    role("tertiaryContainer",       TertiaryGroup,  "tertiary.90",         "tertiary.30"),
    role("onTertiaryContainer",     TertiaryGroup,  "tertiary.30",         "tertiary.90"),
    role("tertiaryFixed",           TertiaryGroup,  "tertiary.90",         "tertiary.90"),
    role("onTertiaryFixed",         TertiaryGroup,  "tertiary.10",         "tertiary.10"),
    role("tertiaryFixedDim",        TertiaryGroup,  "tertiary.80",         "tertiary.80"),
    role("onTertiaryFixedVariant",  TertiaryGroup,  "tertiary.30",         "tertiary.30"),
];

/// How alias failures in a role table are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AliasPolicy {
    /// Any unresolvable alias fails map construction.
    #[default]
    Strict,
    /// Unresolvable aliases are logged and left out of the variable files.
    Lenient,
}

/// A role table entry for one mode with its alias parsed and resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapEntry {
    pub mode: Mode,
    pub group: ColorGroup,
    pub role: &'static str,
    pub alias: Alias,
    /// `None` only under [`AliasPolicy::Lenient`].
    pub target: Option<PaletteRef>,
}

/// A role table parsed once against a set of tone stops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemColorMap {
    entries: Vec<MapEntry>,
}

impl SystemColorMap {
    /// The Material Design 3 role table.
    pub fn material(stops: &ToneStops, policy: AliasPolicy) -> Result<Self> {
        Self::load(SYSTEM_ROLES, stops, policy)
    }

    pub fn load(roles: &[RoleSpec], stops: &ToneStops, policy: AliasPolicy) -> Result<Self> {
        let mut entries = Vec::with_capacity(roles.len() * Mode::ALL.len());
        for mode in Mode::ALL {
            for spec in roles {
                match resolve_entry(spec, mode, stops) {
                    Ok(entry) => entries.push(entry),
                    Err(failure) => {
                        if policy == AliasPolicy::Strict {
                            return Err(failure.into_error());
                        }
                        warn!(
                            %mode,
                            role = spec.role,
                            alias = failure.raw,
                            reason = %failure.source,
                            "alias does not resolve; leaving role out of CSS/SCSS output"
                        );
                        if let Some(alias) = failure.alias {
                            entries.push(MapEntry {
                                mode,
                                group: spec.group,
                                role: spec.role,
                                alias,
                                target: None,
                            });
                        }
                    }
                }
            }
        }
        Ok(Self { entries })
    }

    /// Every alias in `roles` that fails to resolve against `stops`.
    pub fn check(roles: &[RoleSpec], stops: &ToneStops) -> Vec<TokenError> {
        Mode::ALL
            .into_iter()
            .flat_map(|mode| roles.iter().map(move |spec| (mode, spec)))
            .filter_map(|(mode, spec)| resolve_entry(spec, mode, stops).err())
            .map(Failure::into_error)
            .collect()
    }

    pub fn entries(&self) -> &[MapEntry] {
        &self.entries
    }

    pub fn get(&self, mode: Mode, role: &str) -> Option<&MapEntry> {
        self.entries
            .iter()
            .find(|entry| entry.mode == mode && entry.role == role)
    }
}

struct Failure {
    mode: Mode,
    role: &'static str,
    raw: &'static str,
    alias: Option<Alias>,
    source: AliasError,
}

impl Failure {
    fn into_error(self) -> TokenError {
        TokenError::UnresolvedAlias {
            mode: self.mode,
            role: self.role.to_string(),
            alias: self.raw.to_string(),
            source: self.source,
        }
    }
}

fn resolve_entry(spec: &RoleSpec, mode: Mode, stops: &ToneStops) -> Result<MapEntry, Failure> {
    let raw = spec.alias(mode);
    let failure = |alias: Option<Alias>, source| Failure {
        mode,
        role: spec.role,
        raw,
        alias,
        source,
    };
    let alias = Alias::parse(raw).map_err(|source| failure(None, source))?;
    let target = alias
        .resolve(stops)
        .map_err(|source| failure(Some(alias.clone()), source))?;
    Ok(MapEntry {
        mode,
        group: spec.group,
        role: spec.role,
        alias,
        target: Some(target),
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemToken {
    pub mode: Mode,
    pub group: ColorGroup,
    pub role: &'static str,
    pub alias: Alias,
    pub target: Option<PaletteRef>,
}

impl SystemToken {
    pub const fn token_type(&self) -> &'static str {
        COLOR_TYPE
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupTokens {
    pub group: ColorGroup,
    pub tokens: Vec<SystemToken>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeTokens {
    pub mode: Mode,
    /// Only groups holding at least one token.
    pub groups: Vec<GroupTokens>,
}

impl ModeTokens {
    pub fn tokens(&self) -> impl Iterator<Item = &SystemToken> {
        self.groups.iter().flat_map(|group| group.tokens.iter())
    }
}

/// System tokens for every mode, restricted to roles whose aliased family
/// is present in the reference tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemTree {
    modes: Vec<ModeTokens>,
}

impl SystemTree {
    pub fn build(map: &SystemColorMap, reference: &ReferenceTree) -> Self {
        let supplied: Vec<&str> = reference.families().map(|family| family.key()).collect();
        let modes = Mode::ALL
            .into_iter()
            .map(|mode| {
                let groups = ColorGroup::ALL
                    .into_iter()
                    .map(|group| GroupTokens {
                        group,
                        tokens: map
                            .entries()
                            .iter()
                            .filter(|entry| entry.mode == mode && entry.group == group)
                            .filter(|entry| supplied.contains(&entry.alias.family_key()))
                            .map(|entry| SystemToken {
                                mode,
                                group,
                                role: entry.role,
                                alias: entry.alias.clone(),
                                target: entry.target,
                            })
                            .collect(),
                    })
                    .filter(|group| !group.tokens.is_empty())
                    .collect();
                ModeTokens { mode, groups }
            })
            .collect();
        Self { modes }
    }

    pub fn modes(&self) -> &[ModeTokens] {
        &self.modes
    }

    pub fn tokens(&self) -> impl Iterator<Item = &SystemToken> {
        self.modes.iter().flat_map(ModeTokens::tokens)
    }
}
