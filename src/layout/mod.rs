//! Atom sizing and bond strand geometry.
//!
//! [`atom_geometry`] resolves how large each atom is drawn;
//! [`bond_layout`] consumes those radii to place the strands of each bond;
//! [`bond_policy`] decides how many strands a bond order gets.

pub mod atom_geometry;
pub mod bond_layout;
pub mod bond_policy;

pub use atom_geometry::{AtomGeometryResolver, AtomShape};
pub use bond_layout::{layout_bond, surface_trim, BondEndpoint, StrandSegment};
pub use bond_policy::{visuals, BondOrder, BondVisuals};
