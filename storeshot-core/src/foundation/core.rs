/// Identifier of one cataloged approach.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ApproachId(pub u32);

impl std::fmt::Display for ApproachId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Automation level of an approach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Automation {
    /// Runs unattended once raw screenshots are present.
    Full,
    /// Needs manual steps or external resources before it can produce output.
    Semi,
}

impl Automation {
    /// `true` when the approach runs unattended.
    pub fn is_full(self) -> bool {
        matches!(self, Automation::Full)
    }
}

impl std::fmt::Display for Automation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Automation::Full => f.write_str("full"),
            Automation::Semi => f.write_str("semi"),
        }
    }
}

/// Output raster an approach is expected to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TargetSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// 6.7" iPhone raster (portrait).
pub const IPHONE_6_7: TargetSize = TargetSize {
    width: 1290,
    height: 2796,
};

/// 13" iPad raster (portrait).
pub const IPAD_13: TargetSize = TargetSize {
    width: 2048,
    height: 2732,
};

/// The rasters App Store Connect accepts from this toolkit.
pub const TARGET_SIZES: [TargetSize; 2] = [IPHONE_6_7, IPAD_13];

impl TargetSize {
    /// The fixed target raster matching `width`x`height`, if any.
    pub fn matching(width: u32, height: u32) -> Option<TargetSize> {
        TARGET_SIZES
            .into_iter()
            .find(|t| t.width == width && t.height == height)
    }
}

impl std::fmt::Display for TargetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
