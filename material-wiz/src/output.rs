//! On-disk layout of the generated token files.
//!
//! ```text
//! <root>/tokens/md/ref/md-ref-color-tokens.json
//! <root>/tokens/md/ref/md-ref-color-variables.css
//! <root>/tokens/md/ref/md-ref-color-variables.scss
//! <root>/tokens/md/sys/md-sys-color-tokens.json
//! <root>/tokens/md/sys/md-sys-color-variables.css
//! <root>/tokens/md/sys/md-sys-color-variables.scss
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use crate::{
    error::{Result, TokenError},
    format::Tier,
};

/// Default output root, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output_files";

/// One rendered artifact, not yet written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedFile {
    pub tier: Tier,
    pub file_name: String,
    pub contents: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/tokens/md/<tier>`
    pub fn tier_dir(&self, tier: Tier) -> PathBuf {
        self.root.join("tokens").join("md").join(tier.key())
    }

    pub fn path_for(&self, file: &RenderedFile) -> PathBuf {
        self.tier_dir(file.tier).join(&file.file_name)
    }

    /// Creates the tier directories and writes every file, returning the
    /// written paths in order. Stops at the first failure.
    #[instrument(level = "debug", skip(self, files), fields(root = %self.root.display()))]
    pub fn write(&self, files: &[RenderedFile]) -> Result<Vec<PathBuf>> {
        for tier in Tier::ALL {
            let dir = self.tier_dir(tier);
            fs::create_dir_all(&dir).map_err(|source| TokenError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }

        files
            .iter()
            .map(|file| {
                let path = self.path_for(file);
                fs::write(&path, &file.contents).map_err(|source| TokenError::WriteFile {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), bytes = file.contents.len(), "wrote token file");
                Ok(path)
            })
            .collect()
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(tier: Tier, name: &str, contents: &str) -> RenderedFile {
        RenderedFile {
            tier,
            file_name: name.to_string(),
            contents: contents.to_string(),
        }
    }

    #[test]
    fn writes_into_tier_directories() {
        let dir = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(dir.path());
        let written = layout
            .write(&[
                file(Tier::Reference, "md-ref-color-tokens.json", "{}\n"),
                file(Tier::System, "md-sys-color-variables.css", ":root {\n}\n"),
            ])
            .unwrap();

        assert_eq!(
            written,
            [
                dir.path().join("tokens/md/ref/md-ref-color-tokens.json"),
                dir.path().join("tokens/md/sys/md-sys-color-variables.css"),
            ]
        );
        assert_eq!(fs::read_to_string(&written[1]).unwrap(), ":root {\n}\n");
    }

    #[test]
    fn reports_the_failing_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, "not a directory").unwrap();

        let err = OutputLayout::new(&blocker)
            .write(&[file(Tier::Reference, "x.json", "{}")])
            .unwrap_err();
        match err {
            TokenError::CreateDir { path, .. } => assert!(path.starts_with(&blocker)),
            other => panic!("unexpected error: {other}"),
        }
    }
}
