use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::StoreshotResult;
use crate::project::layout::ProjectLayout;

/// File extensions treated as raw captures (compared case-insensitively).
const RAW_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Sorted inventory of the raw captures generators consume.
///
/// A missing `raw/` directory is an empty inventory, not an error: the
/// project may simply not be populated yet.
#[derive(Clone, Debug, Default)]
pub struct RawInventory {
    files: Vec<PathBuf>,
}

impl RawInventory {
    /// Scan `layout`'s `raw/` directory.
    pub fn scan(layout: &ProjectLayout) -> StoreshotResult<Self> {
        Self::scan_dir(&layout.raw_dir())
    }

    /// Scan an explicit directory for raw captures.
    pub fn scan_dir(dir: &Path) -> StoreshotResult<Self> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("read raw directory '{}'", dir.display()))
                    .into());
            }
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry =
                entry.with_context(|| format!("read raw directory '{}'", dir.display()))?;
            let path = entry.path();
            if path.is_file() && has_raw_extension(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(Self { files })
    }

    /// All capture files, sorted by path.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Number of captures found.
    pub fn count(&self) -> usize {
        self.files.len()
    }

    /// `true` when no captures were found.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// File names of the first `limit` captures, for status banners.
    pub fn preview(&self, limit: usize) -> Vec<String> {
        self.files
            .iter()
            .take(limit)
            .map(|p| match p.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => p.display().to_string(),
            })
            .collect()
    }
}

fn has_raw_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| RAW_EXTENSIONS.iter().any(|r| e.eq_ignore_ascii_case(r)))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/raw.rs"]
mod tests;
