use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A single atom as delivered by the molecule data provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Element symbol (e.g. "C", "Cl"). Case is not significant.
    pub symbol: String,
    /// Cartesian position in angstroms.
    pub position: Vec3,
    /// Formal charge.
    #[serde(default)]
    pub charge: i32,
}

impl Atom {
    /// Neutral atom at `position`.
    #[must_use]
    pub fn new(symbol: impl Into<String>, position: Vec3) -> Self {
        Self {
            symbol: symbol.into(),
            position,
            charge: 0,
        }
    }

    /// Whether this atom's element matches `symbol`, ignoring case and
    /// surrounding whitespace.
    #[must_use]
    pub fn is_element(&self, symbol: &str) -> bool {
        self.symbol.trim().eq_ignore_ascii_case(symbol)
    }
}
