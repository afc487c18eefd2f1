use crate::catalog::model::Approach;
use crate::foundation::core::{ApproachId, Automation};
use crate::foundation::error::{StoreshotError, StoreshotResult};

/// Ordered, validated collection of approaches.
///
/// Invariants the runner relies on: ids strictly ascending (hence unique),
/// slugs unique and non-empty, script and name non-empty. [`Catalog::new`]
/// enforces them for externally supplied tables; the builtin table satisfies
/// them by construction.
#[derive(Clone, Debug)]
pub struct Catalog {
    approaches: Vec<Approach>,
}

impl Catalog {
    /// Build a catalog from `approaches`, validating the runner invariants.
    pub fn new(approaches: Vec<Approach>) -> StoreshotResult<Self> {
        for pair in approaches.windows(2) {
            if pair[1].id.0 <= pair[0].id.0 {
                return Err(StoreshotError::validation(format!(
                    "approach ids must be strictly ascending (saw {} after {})",
                    pair[1].id, pair[0].id
                )));
            }
        }
        for a in &approaches {
            if a.name.is_empty() {
                return Err(StoreshotError::validation(format!(
                    "approach {} has an empty name",
                    a.id
                )));
            }
            if a.slug.is_empty() {
                return Err(StoreshotError::validation(format!(
                    "approach {} has an empty slug",
                    a.id
                )));
            }
            if a.script.is_empty() {
                return Err(StoreshotError::validation(format!(
                    "approach {} has an empty script",
                    a.id
                )));
            }
        }
        for (i, a) in approaches.iter().enumerate() {
            if approaches[..i].iter().any(|other| other.slug == a.slug) {
                return Err(StoreshotError::validation(format!(
                    "duplicate approach slug '{}'",
                    a.slug
                )));
            }
        }
        Ok(Self { approaches })
    }

    /// The builtin ten-approach catalog.
    pub fn builtin() -> Self {
        Self {
            approaches: builtin_approaches(),
        }
    }

    /// All approaches in id order.
    pub fn approaches(&self) -> &[Approach] {
        &self.approaches
    }

    /// Number of cataloged approaches.
    pub fn len(&self) -> usize {
        self.approaches.len()
    }

    /// `true` when the catalog holds no approaches.
    pub fn is_empty(&self) -> bool {
        self.approaches.is_empty()
    }

    /// Look up one approach by id.
    pub fn get(&self, id: ApproachId) -> Option<&Approach> {
        self.approaches.iter().find(|a| a.id == id)
    }
}

fn approach(
    id: u32,
    name: &str,
    slug: &str,
    automation: Automation,
    script: &str,
    requires: &[&str],
    description: &str,
) -> Approach {
    Approach {
        id: ApproachId(id),
        name: name.to_string(),
        slug: slug.to_string(),
        automation,
        script: script.to_string(),
        requires: requires.iter().map(|r| r.to_string()).collect(),
        description: description.to_string(),
    }
}

fn builtin_approaches() -> Vec<Approach> {
    use Automation::{Full, Semi};

    vec![
        approach(
            1,
            "PIL + Mesh Gradients",
            "01_pil_mesh",
            Full,
            "approach_01_pil_mesh.py",
            &["PIL"],
            "Procedural mesh-gradient backgrounds behind framed captures.",
        ),
        approach(
            2,
            "HTML/CSS → Image (Playwright)",
            "02_html_css",
            Full,
            "approach_02_html_css.py",
            &["playwright"],
            "HTML/CSS templates rendered to PNG with headless Chrome.",
        ),
        approach(
            3,
            "Blender 3D Mockup",
            "03_blender_3d",
            Semi,
            "approach_03_blender.py",
            &["Blender", "iPhone 3D model"],
            "Photorealistic 3D device mockups rendered through Blender.",
        ),
        approach(
            4,
            "AI-Generated Backgrounds",
            "04_ai_backgrounds",
            Semi,
            "approach_04_ai_bg.py",
            &["Pre-generated Midjourney/DALL-E backgrounds"],
            "Pre-generated AI backgrounds behind framed captures.",
        ),
        approach(
            5,
            "Ugly Ads (iMessage/Notes/Twitter)",
            "05_ugly_ads",
            Full,
            "approach_05_ugly_ads.py",
            &["PIL"],
            "Intentionally unpolished shots styled as real user content.",
        ),
        approach(
            6,
            "Screenshots Pro API",
            "06_screenshots_pro",
            Semi,
            "approach_06_api.py",
            &["API key from screenshots.pro"],
            "Commercial screenshot API with built-in 3D device frames.",
        ),
        approach(
            7,
            "Video Preview",
            "07_video_preview",
            Full,
            "approach_07_video.py",
            &["PIL", "ffmpeg (optional)"],
            "App preview videos and animated screenshot sequences.",
        ),
        approach(
            8,
            "Storytelling Carousel",
            "08_storytelling",
            Full,
            "approach_08_storytelling.py",
            &["PIL"],
            "Five screenshots composed as one continuous narrative.",
        ),
        approach(
            9,
            "Figma Template Export",
            "09_figma_export",
            Semi,
            "approach_09_figma.py",
            &["Figma account", "Template design"],
            "Figma template designs exported through the Figma API.",
        ),
        approach(
            10,
            "Hybrid Engine",
            "10_hybrid_engine",
            Full,
            "approach_10_hybrid.py",
            &["PIL"],
            "Config-driven engine combining the other approaches.",
        ),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/registry.rs"]
mod tests;
