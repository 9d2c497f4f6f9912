//! Raw bond-order code → visual multiplicity.

use serde::{Deserialize, Serialize};

/// Bond order as understood by the renderer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum BondOrder {
    /// Code 1, and any unrecognized code.
    #[default]
    Single,
    /// Code 2.
    Double,
    /// Code 3.
    Triple,
    /// Code 4.
    Aromatic,
}

impl BondOrder {
    /// Map a raw order code. Unknown codes fall back to [`Self::Single`].
    #[must_use]
    pub fn from_code(raw_order: i32) -> Self {
        match raw_order {
            2 => Self::Double,
            3 => Self::Triple,
            4 => Self::Aromatic,
            _ => Self::Single,
        }
    }

    /// Strand count and style class for this order.
    #[must_use]
    pub fn visuals(self) -> BondVisuals {
        match self {
            Self::Single => BondVisuals::new(1, false),
            Self::Double => BondVisuals::new(2, false),
            Self::Triple => BondVisuals::new(3, false),
            // Two thinner, closer strands, distinct from a true double bond
            Self::Aromatic => BondVisuals::new(2, true),
        }
    }
}

/// How many parallel strands a bond renders as, and whether they use the
/// thinner aromatic styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BondVisuals {
    /// Number of parallel strands, in `1..=3`.
    pub strand_count: u8,
    /// Aromatic bonds use thinner, closer strands.
    pub is_aromatic: bool,
}

impl BondVisuals {
    const fn new(strand_count: u8, is_aromatic: bool) -> Self {
        Self {
            strand_count,
            is_aromatic,
        }
    }
}

/// Visual multiplicity for a raw bond-order code. Never fails: unknown
/// codes render as a single bond.
#[must_use]
pub fn visuals(raw_order: i32) -> BondVisuals {
    BondOrder::from_code(raw_order).visuals()
}
