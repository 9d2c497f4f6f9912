use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::element::NEUTRAL_ACCENT_COLOR;

/// Color palette options for atoms and overlays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Per-element RGB overrides keyed by element symbol. Elements not
    /// listed keep their CPK color.
    pub element_colors: HashMap<String, [f32; 3]>,
    /// RGB color for H-bond overlay dashes.
    pub hbond: [f32; 3],
    /// RGB color used when neither an override nor a CPK color exists.
    pub accent: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            element_colors: HashMap::new(),
            hbond: [0.0, 0.75, 1.0],
            accent: NEUTRAL_ACCENT_COLOR,
        }
    }
}
