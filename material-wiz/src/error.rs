//! Error types shared by every stage of token generation.

use std::path::PathBuf;

use thiserror::Error;

use crate::{alias::AliasError, family::ColorFamily, system::Mode};

/// Convenience alias used throughout the crate.
pub type Result<T, E = TokenError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("`{input}` is not a valid hex color, expected something like #123ABC")]
    InvalidHex { input: String },
    #[error("a primary color is required")]
    MissingPrimary,
    #[error("invalid {set} tone stops: {reason}")]
    InvalidToneStops { set: &'static str, reason: String },
    #[error("{mode} role `{role}` has an unresolvable alias `{alias}`: {source}")]
    UnresolvedAlias {
        mode: Mode,
        role: String,
        alias: String,
        #[source]
        source: AliasError,
    },
    #[error("tonal palette for `{family}` has no tone {tone}")]
    MissingTone { family: ColorFamily, tone: u8 },
    #[error("Failed to read config file {path:?}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path:?}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write file {path:?}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode token document: {0}")]
    Json(#[from] serde_json::Error),
}
