use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::catalog::model::Approach;
use crate::foundation::core::TargetSize;
use crate::foundation::error::StoreshotResult;
use crate::project::layout::ProjectLayout;

/// Conformance verdict for one produced PNG.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ShotCheck {
    /// File path.
    pub path: PathBuf,
    /// Decoded dimensions, when the header was readable.
    pub size: Option<(u32, u32)>,
    /// The fixed raster the file matches, if any.
    pub matched: Option<TargetSize>,
    /// Read failure, when the file could not be inspected.
    pub error: Option<String>,
}

impl ShotCheck {
    /// `true` when the file matches one of the fixed target rasters.
    pub fn conforms(&self) -> bool {
        self.matched.is_some()
    }
}

/// PNG census for one folder under `output/`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FolderCensus {
    /// Folder name (the approach slug).
    pub folder: String,
    /// Number of PNG files present.
    pub png_count: usize,
}

/// Aggregate outcome of a conformance scan.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ConformanceReport {
    /// Per-file verdicts, sorted by path.
    pub checks: Vec<ShotCheck>,
    /// Per-folder census, sorted by folder name.
    pub folders: Vec<FolderCensus>,
}

impl ConformanceReport {
    /// Number of files matching a target raster.
    pub fn conforming(&self) -> usize {
        self.checks.iter().filter(|c| c.conforms()).count()
    }

    /// Number of files matching no target raster (or unreadable).
    pub fn nonconforming(&self) -> usize {
        self.checks.len() - self.conforming()
    }

    /// `true` when every scanned file matches a target raster.
    pub fn all_conform(&self) -> bool {
        self.nonconforming() == 0
    }
}

/// Scan every folder under `layout`'s `output/` directory.
///
/// A missing `output/` directory yields an empty report. Non-PNG files
/// (video previews, GIF exports) are ignored; an unreadable PNG becomes a
/// non-conforming check rather than aborting the scan.
pub fn verify_outputs(layout: &ProjectLayout) -> StoreshotResult<ConformanceReport> {
    let output_dir = layout.output_dir();
    let mut folders = match list_subdirs(&output_dir)? {
        Some(folders) => folders,
        None => return Ok(ConformanceReport::default()),
    };
    folders.sort();

    let mut report = ConformanceReport::default();
    for folder in folders {
        scan_folder(&output_dir.join(&folder), &folder, &mut report)?;
    }
    Ok(report)
}

/// Scan one approach's `output/<slug>/` folder.
pub fn verify_approach_outputs(
    layout: &ProjectLayout,
    approach: &Approach,
) -> StoreshotResult<ConformanceReport> {
    let dir = layout.approach_output_dir(approach);
    let mut report = ConformanceReport::default();
    if dir.is_dir() {
        scan_folder(&dir, &approach.slug, &mut report)?;
    }
    Ok(report)
}

fn list_subdirs(dir: &Path) -> StoreshotResult<Option<Vec<String>>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("read output directory '{}'", dir.display()))
                .into());
        }
    };

    let mut folders = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read output directory '{}'", dir.display()))?;
        if entry.path().is_dir() {
            folders.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(Some(folders))
}

fn scan_folder(dir: &Path, folder: &str, report: &mut ConformanceReport) -> StoreshotResult<()> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("read output folder '{}'", dir.display()))?;

    let mut pngs = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read output folder '{}'", dir.display()))?;
        let path = entry.path();
        if path.is_file() && is_png(&path) {
            pngs.push(path);
        }
    }
    pngs.sort();

    report.folders.push(FolderCensus {
        folder: folder.to_string(),
        png_count: pngs.len(),
    });

    for path in pngs {
        report.checks.push(check_png(path));
    }
    Ok(())
}

fn check_png(path: PathBuf) -> ShotCheck {
    match image::image_dimensions(&path) {
        Ok((width, height)) => ShotCheck {
            matched: TargetSize::matching(width, height),
            size: Some((width, height)),
            error: None,
            path,
        },
        Err(e) => ShotCheck {
            size: None,
            matched: None,
            error: Some(e.to_string()),
            path,
        },
    }
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

#[cfg(test)]
#[path = "../../tests/unit/verify/conformance.rs"]
mod tests;
