use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How atoms are drawn. Affects both atom radii and bond layout.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RenderStyle {
    /// Scaled balls joined by bond sticks.
    #[default]
    Sphere,
    /// Scaled cubes joined by bond sticks.
    Cube,
    /// Van der Waals volumes; no bonds are drawn.
    SpaceFilling,
}

/// Which spatial analysis drives the overlay.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum OverlayMode {
    /// No overlay.
    #[default]
    None,
    /// Dashed lines between hydrogen-bond candidate pairs.
    HBonds,
    /// Per-atom exposure heat map.
    Exposure,
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Rendering style and overlay selection.
pub struct DisplayOptions {
    /// Atom rendering style.
    #[schemars(title = "Style")]
    pub style: RenderStyle,
    /// Active overlay.
    #[schemars(title = "Overlay")]
    pub overlay: OverlayMode,
}

impl DisplayOptions {
    /// Whether bonds are drawn at all under the current style.
    #[must_use]
    pub fn draws_bonds(&self) -> bool {
        !matches!(self.style, RenderStyle::SpaceFilling)
    }
}
