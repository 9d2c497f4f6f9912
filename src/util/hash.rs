//! FxHasher digests of molecule content.

use std::hash::{Hash, Hasher};

use glam::Vec3;
use rustc_hash::FxHasher;

use crate::model::Molecule;

/// Hash a single [`Vec3`] by converting each component to bits.
pub fn hash_vec3(v: &Vec3, hasher: &mut impl Hasher) {
    v.x.to_bits().hash(hasher);
    v.y.to_bits().hash(hasher);
    v.z.to_bits().hash(hasher);
}

/// Content digest of a molecule: every atom symbol, position and charge,
/// and every raw bond record.
///
/// Used to recognize a resubmitted molecule without comparing it
/// field-by-field.
#[must_use]
pub fn molecule_fingerprint(molecule: &Molecule) -> u64 {
    let mut hasher = FxHasher::default();
    molecule.atoms().len().hash(&mut hasher);
    for atom in molecule.atoms() {
        atom.symbol.hash(&mut hasher);
        hash_vec3(&atom.position, &mut hasher);
        atom.charge.hash(&mut hasher);
    }
    molecule.bonds().len().hash(&mut hasher);
    for bond in molecule.bonds() {
        bond.hash(&mut hasher);
    }
    hasher.finish()
}
