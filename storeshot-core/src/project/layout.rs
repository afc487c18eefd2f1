use std::path::{Path, PathBuf};

use crate::catalog::model::Approach;

/// Fixed filesystem layout of a screenshot project.
///
/// Everything lives under one root: `scripts/` holds the generator scripts,
/// `raw/` the input captures, and each approach writes into
/// `output/<slug>/`.
#[derive(Clone, Debug)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ProjectLayout {
    /// Layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the generator scripts.
    pub fn scripts_dir(&self) -> PathBuf {
        self.root.join("scripts")
    }

    /// Directory holding the raw input captures.
    pub fn raw_dir(&self) -> PathBuf {
        self.root.join("raw")
    }

    /// Root of all per-approach output directories.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join("output")
    }

    /// Full path of `approach`'s generator script.
    pub fn script_path(&self, approach: &Approach) -> PathBuf {
        self.scripts_dir().join(&approach.script)
    }

    /// Output directory of `approach` (`output/<slug>`).
    pub fn approach_output_dir(&self, approach: &Approach) -> PathBuf {
        self.output_dir().join(&approach.slug)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/layout.rs"]
mod tests;
