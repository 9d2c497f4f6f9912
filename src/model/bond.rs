use serde::{Deserialize, Serialize};

/// A bond record as it appears in source data: 1-based atom indices and a
/// raw order code (1 single, 2 double, 3 triple, 4 aromatic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bond {
    /// 1-based index of the first atom.
    pub atom_index1: i64,
    /// 1-based index of the second atom.
    pub atom_index2: i64,
    /// Raw bond order code.
    pub order: i32,
}

/// A bond with validated 0-based endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedBond {
    /// 0-based index of the first atom.
    pub atom_a: usize,
    /// 0-based index of the second atom.
    pub atom_b: usize,
    /// Raw bond order code, passed through untouched.
    pub order: i32,
}

impl Bond {
    /// Bond between 1-based atoms `a` and `b`.
    #[must_use]
    pub fn new(atom_index1: i64, atom_index2: i64, order: i32) -> Self {
        Self {
            atom_index1,
            atom_index2,
            order,
        }
    }

    /// Convert to 0-based indices clamped into `[0, atom_count - 1]`.
    ///
    /// Returns `None` when there are no atoms, or when both endpoints
    /// land on the same atom after clamping.
    #[must_use]
    pub fn resolve(&self, atom_count: usize) -> Option<ResolvedBond> {
        let last = atom_count.checked_sub(1)?;
        let clamp = |raw: i64| -> usize {
            let zero_based = raw.saturating_sub(1).max(0);
            usize::try_from(zero_based).map_or(last, |i| i.min(last))
        };
        let atom_a = clamp(self.atom_index1);
        let atom_b = clamp(self.atom_index2);
        if atom_a == atom_b {
            return None;
        }
        Some(ResolvedBond {
            atom_a,
            atom_b,
            order: self.order,
        })
    }
}
