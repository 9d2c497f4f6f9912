//! Pairwise spatial analyses that drive the overlays.
//!
//! Both analyses are O(n²) over the atom list, which is fine at ligand
//! scale (hundreds of atoms). With the `parallel` feature the outer loop
//! runs on rayon; output order is unchanged.

pub mod exposure;
pub mod hbond;

pub use exposure::{exposure_scores, neighbor_counts, DEFAULT_NEIGHBOR_RADIUS};
pub use hbond::{
    find_hbond_pairs, hbond_dash_segments, is_acceptor, is_donor, DashSegment,
    HBondCandidate, DEFAULT_HBOND_MAX_DISTANCE, MAX_DASHES_PER_LINE,
    MIN_DASH_LENGTH,
};
