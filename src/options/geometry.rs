use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Atom and bond sizing parameters.
pub struct GeometryOptions {
    /// Atom radius before the per-element scale (sphere/cube styles).
    #[schemars(title = "Atom Radius", range(min = 0.05, max = 1.0), extend("step" = 0.01))]
    pub base_atom_radius: f32,
    /// Nominal bond cylinder radius.
    #[schemars(title = "Bond Radius", range(min = 0.02, max = 0.5), extend("step" = 0.01))]
    pub bond_base_radius: f32,
    /// Multiplier on van der Waals radii in space-filling style.
    #[schemars(title = "CPK Factor", range(min = 0.5, max = 1.5), extend("step" = 0.05))]
    pub cpk_factor: f32,
    /// Fraction of the atom radius the bond recedes into the atom body.
    #[schemars(skip)]
    pub surface_trim: f32,
    /// Thinning applied to the nominal bond radius.
    #[schemars(skip)]
    pub bond_thinning: f32,
    /// Upper bound on the length-derived lateral strand step.
    #[schemars(skip)]
    pub max_lateral_step: f32,
    /// Fraction of the trimmed bond length used as lateral strand step.
    #[schemars(skip)]
    pub lateral_step_fraction: f32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            base_atom_radius: 0.3,
            bond_base_radius: 0.12,
            cpk_factor: 1.0,
            surface_trim: 0.7,
            bond_thinning: 0.6,
            max_lateral_step: 0.22,
            lateral_step_fraction: 0.12,
        }
    }
}
