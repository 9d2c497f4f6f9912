//! Hydrogen-bond candidate detection.
//!
//! A distance-only heuristic: any donor element (N, O) within
//! `max_distance` of any acceptor element (O, N, S) is a candidate. There
//! is no angle check and no explicit hydrogen is required. Both `(i, j)`
//! and `(j, i)` are reported when each atom qualifies in both roles.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::model::Atom;
use crate::util::vector::distance;

/// Default donor–acceptor distance cutoff in angstroms.
pub const DEFAULT_HBOND_MAX_DISTANCE: f32 = 3.2;

/// An ordered donor/acceptor atom index pair.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct HBondCandidate {
    /// Index of the donor atom.
    pub donor: usize,
    /// Index of the acceptor atom.
    pub acceptor: usize,
}

/// One dash of an H-bond overlay line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashSegment {
    /// Dash start point.
    pub start: Vec3,
    /// Dash end point.
    pub end: Vec3,
}

/// Whether `atom` can act as a donor (N or O).
#[must_use]
pub fn is_donor(atom: &Atom) -> bool {
    atom.is_element("N") || atom.is_element("O")
}

/// Whether `atom` can act as an acceptor (O, N or S).
#[must_use]
pub fn is_acceptor(atom: &Atom) -> bool {
    atom.is_element("O") || atom.is_element("N") || atom.is_element("S")
}

/// Candidates with `atoms[donor]` as the donor, in acceptor index order.
fn candidates_from(
    atoms: &[Atom],
    donor: usize,
    max_distance: f32,
) -> Vec<HBondCandidate> {
    let d = &atoms[donor];
    if !is_donor(d) {
        return Vec::new();
    }
    atoms
        .iter()
        .enumerate()
        .filter(|&(j, a)| {
            j != donor
                && is_acceptor(a)
                && distance(d.position, a.position) <= max_distance
        })
        .map(|(acceptor, _)| HBondCandidate { donor, acceptor })
        .collect()
}

/// All donor/acceptor pairs within `max_distance`, ordered by donor then
/// acceptor index.
#[must_use]
pub fn find_hbond_pairs(atoms: &[Atom], max_distance: f32) -> Vec<HBondCandidate> {
    #[cfg(feature = "parallel")]
    {
        use rayon::iter::{IntoParallelIterator, ParallelIterator};
        (0..atoms.len())
            .into_par_iter()
            .flat_map_iter(|i| candidates_from(atoms, i, max_distance))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..atoms.len())
            .flat_map(|i| candidates_from(atoms, i, max_distance))
            .collect()
    }
}

/// Shortest dash drawn; smaller requested lengths are raised to this.
pub const MIN_DASH_LENGTH: f32 = 1e-3;

/// Upper bound on dashes per candidate line. Longer lines stretch their
/// dash and gap proportionally to stay within it.
pub const MAX_DASHES_PER_LINE: usize = 256;

/// Break each candidate's donor→acceptor line into dashes of
/// `dash_length` separated by `gap`. `positions` is indexed like the atom
/// list the candidates came from.
///
/// A non-positive `dash_length` yields one solid segment per pair.
/// Candidates whose indices fall outside `positions` are skipped.
#[must_use]
pub fn hbond_dash_segments(
    positions: &[Vec3],
    pairs: &[HBondCandidate],
    dash_length: f32,
    gap: f32,
) -> Vec<DashSegment> {
    let mut dashes = Vec::new();
    for pair in pairs {
        let (Some(&start), Some(&end)) =
            (positions.get(pair.donor), positions.get(pair.acceptor))
        else {
            continue;
        };
        let length = distance(start, end);
        if dash_length <= 0.0 || length <= dash_length {
            dashes.push(DashSegment { start, end });
            continue;
        }
        dash_line(start, end, length, dash_length, gap, &mut dashes);
    }
    dashes
}

fn dash_line(
    start: Vec3,
    end: Vec3,
    length: f32,
    dash_length: f32,
    gap: f32,
    out: &mut Vec<DashSegment>,
) {
    let mut dash = dash_length.max(MIN_DASH_LENGTH);
    let mut period = dash + gap.max(0.0);
    let needed = length / period;
    if needed > MAX_DASHES_PER_LINE as f32 {
        let stretch = needed / MAX_DASHES_PER_LINE as f32;
        dash *= stretch;
        period *= stretch;
    }
    let count = ((length / period).ceil() as usize).clamp(1, MAX_DASHES_PER_LINE);
    let dir = (end - start) / length;
    for k in 0..count {
        let t = k as f32 * period;
        if t >= length {
            break;
        }
        let t_end = (t + dash).min(length);
        out.push(DashSegment {
            start: start + dir * t,
            end: start + dir * t_end,
        });
    }
}
