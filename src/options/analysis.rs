use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Analysis", inline)]
#[serde(default)]
/// Thresholds for the spatial overlays.
pub struct AnalysisOptions {
    /// Maximum donor–acceptor distance for an H-bond candidate.
    #[schemars(title = "H-Bond Distance", range(min = 2.0, max = 4.5), extend("step" = 0.1))]
    pub hbond_max_distance: f32,
    /// Neighbor search radius for exposure scoring.
    #[schemars(title = "Exposure Radius", range(min = 1.0, max = 10.0), extend("step" = 0.5))]
    pub exposure_neighbor_radius: f32,
    /// Dash length for H-bond overlay lines.
    #[schemars(skip)]
    pub hbond_dash_length: f32,
    /// Gap between H-bond dashes.
    #[schemars(skip)]
    pub hbond_dash_gap: f32,
    /// Capsule radius of H-bond dashes.
    #[schemars(skip)]
    pub hbond_dash_radius: f32,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            hbond_max_distance: 3.2,
            exposure_neighbor_radius: 4.0,
            hbond_dash_length: 0.25,
            hbond_dash_gap: 0.15,
            hbond_dash_radius: 0.03,
        }
    }
}
