//! Neighbor-density exposure scoring.
//!
//! Each atom's neighbor count within a radius is normalized across the
//! molecule: the atom with the fewest neighbors scores 1.0 (most exposed),
//! the one with the most scores 0.0 (most buried).

use crate::model::Atom;

/// Default neighbor search radius in angstroms.
pub const DEFAULT_NEIGHBOR_RADIUS: f32 = 4.0;

fn neighbors_of(atoms: &[Atom], i: usize, radius_sq: f32) -> usize {
    let p = atoms[i].position;
    atoms
        .iter()
        .enumerate()
        .filter(|&(j, a)| j != i && p.distance_squared(a.position) <= radius_sq)
        .count()
}

/// Number of other atoms within `neighbor_radius` of each atom.
#[must_use]
pub fn neighbor_counts(atoms: &[Atom], neighbor_radius: f32) -> Vec<usize> {
    let radius_sq = neighbor_radius * neighbor_radius;
    #[cfg(feature = "parallel")]
    {
        use rayon::iter::{IntoParallelIterator, ParallelIterator};
        (0..atoms.len())
            .into_par_iter()
            .map(|i| neighbors_of(atoms, i, radius_sq))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..atoms.len())
            .map(|i| neighbors_of(atoms, i, radius_sq))
            .collect()
    }
}

/// Per-atom exposure in [0, 1]: `1 - (count - min) / max(1, max - min)`.
///
/// When every atom has the same neighbor count, every score is 1.0.
#[must_use]
pub fn exposure_scores(atoms: &[Atom], neighbor_radius: f32) -> Vec<f32> {
    let counts = neighbor_counts(atoms, neighbor_radius);
    let (Some(&min), Some(&max)) = (counts.iter().min(), counts.iter().max())
    else {
        return Vec::new();
    };
    let span = (max - min).max(1) as f32;
    counts
        .iter()
        .map(|&c| 1.0 - (c - min) as f32 / span)
        .collect()
}
