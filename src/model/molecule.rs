use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{Atom, Bond, ResolvedBond};
use crate::error::LigviewError;

/// An immutable molecule snapshot: index-significant atoms plus the bonds
/// that reference them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Molecule {
    atoms: Vec<Atom>,
    #[serde(default)]
    bonds: Vec<Bond>,
}

impl Molecule {
    /// Build a molecule from already-parsed atoms and bonds.
    #[must_use]
    pub fn new(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Self {
        Self { atoms, bonds }
    }

    /// Parse a molecule from JSON of the form
    /// `{"atoms": [{"symbol", "position": [x, y, z], "charge"}], "bonds":
    /// [{"atom_index1", "atom_index2", "order"}]}`.
    ///
    /// # Errors
    ///
    /// Returns [`LigviewError::MoleculeParse`] when the JSON does not match
    /// that shape.
    pub fn from_json(json: &str) -> Result<Self, LigviewError> {
        let molecule: Self = serde_json::from_str(json)?;
        log::debug!(
            "parsed molecule: {} atoms, {} bonds",
            molecule.atoms.len(),
            molecule.bonds.len()
        );
        Ok(molecule)
    }

    /// Atoms in source order.
    #[must_use]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Raw bond records in source order.
    #[must_use]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Number of atoms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether the molecule has no atoms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Atom positions in source order.
    #[must_use]
    pub fn positions(&self) -> Vec<Vec3> {
        self.atoms.iter().map(|a| a.position).collect()
    }

    /// Bonds with validated 0-based endpoints. Self-bonds (including those
    /// produced by clamping out-of-range indices) are dropped.
    #[must_use]
    pub fn resolved_bonds(&self) -> Vec<ResolvedBond> {
        let n = self.atoms.len();
        self.bonds
            .iter()
            .filter_map(|bond| {
                let resolved = bond.resolve(n);
                if resolved.is_none() {
                    log::debug!(
                        "skipping bond {}-{}: self-bond after clamping to {n} atoms",
                        bond.atom_index1,
                        bond.atom_index2
                    );
                }
                resolved
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATER: &str = r#"{
        "atoms": [
            {"symbol": "O", "position": [0.0, 0.0, 0.0]},
            {"symbol": "H", "position": [0.96, 0.0, 0.0]},
            {"symbol": "H", "position": [-0.24, 0.93, 0.0], "charge": 0}
        ],
        "bonds": [
            {"atom_index1": 1, "atom_index2": 2, "order": 1},
            {"atom_index1": 1, "atom_index2": 3, "order": 1},
            {"atom_index1": 3, "atom_index2": 3, "order": 1}
        ]
    }"#;

    #[test]
    fn parses_json_and_resolves_bonds() {
        let mol = Molecule::from_json(WATER).unwrap();
        assert_eq!(mol.len(), 3);
        assert_eq!(mol.bonds().len(), 3);

        let resolved = mol.resolved_bonds();
        assert_eq!(resolved.len(), 2);
        assert_eq!((resolved[1].atom_a, resolved[1].atom_b), (0, 2));
    }

    #[test]
    fn missing_bonds_default_to_empty() {
        let mol = Molecule::from_json(
            r#"{"atoms": [{"symbol": "Na", "position": [1.0, 2.0, 3.0], "charge": 1}]}"#,
        )
        .unwrap();
        assert!(mol.bonds().is_empty());
        assert_eq!(mol.atoms()[0].charge, 1);
        assert_eq!(mol.positions(), vec![Vec3::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Molecule::from_json("{\"atoms\": 3}").unwrap_err();
        assert!(matches!(err, LigviewError::MoleculeParse(_)));
    }
}
