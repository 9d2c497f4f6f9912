//! Molecule data model: atoms, raw bond records, and index validation.

mod atom;
mod bond;
mod molecule;

pub use atom::Atom;
pub use bond::{Bond, ResolvedBond};
pub use molecule::Molecule;
