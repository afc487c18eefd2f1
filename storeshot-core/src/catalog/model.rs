use crate::foundation::core::{ApproachId, Automation};

/// One cataloged screenshot-generation method.
///
/// An approach names an external generator script plus the metadata the
/// runner and the CLI need: a stable numeric id, a display label, the
/// `output/<slug>/` directory it writes into, its automation level, and the
/// external requirements a user has to provide.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Approach {
    /// Numeric id, unique within a catalog.
    pub id: ApproachId,
    /// Display label (e.g. "PIL + Mesh Gradients").
    pub name: String,
    /// Output-directory component under `output/` (e.g. `01_pil_mesh`).
    pub slug: String,
    /// Whether the approach runs unattended.
    pub automation: Automation,
    /// Generator script file name under `scripts/`.
    pub script: String,
    /// External requirements. Informational; shown by the listing.
    pub requires: Vec<String>,
    /// One-line summary of the visual treatment.
    pub description: String,
}

impl Approach {
    /// `true` when the approach runs without manual steps.
    pub fn is_automated(&self) -> bool {
        self.automation.is_full()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
