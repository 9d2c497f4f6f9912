//! Bond strand layout.
//!
//! Turns one bond (two atom centers, their radii, an order code) into the
//! cylinder segments that draw it:
//!
//! 1. Trim each end back to the atom's surface so the cylinder does not
//!    run through the atom body. Spheres recede to 70% of the radius;
//!    cubes trim to the face hit along the bond direction.
//! 2. Fan multi-order bonds out along a deterministic perpendicular axis.
//! 3. Split every strand at its midpoint so each half takes the color of
//!    the atom it touches.
//!
//! No bonds are produced in space-filling style.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::atom_geometry::AtomShape;
use super::bond_policy::{visuals, BondVisuals};
use crate::options::{GeometryOptions, RenderStyle};
use crate::util::vector::{distance, normalize_floored, perpendicular};

/// Floor on `|u_axis|` when intersecting a cube face along `u`.
const CUBE_AXIS_EPSILON: f32 = 1e-4;

/// Lateral step multiplier on the strand base radius.
const STEP_SCALE: f32 = 1.9;
const AROMATIC_STEP_SCALE: f32 = 1.3;

/// Main (center) strand radius multiplier.
const MAIN_STRAND_SCALE: f32 = 1.0;
const AROMATIC_MAIN_STRAND_SCALE: f32 = 0.8;

/// Side strand radius multiplier.
const SIDE_STRAND_SCALE: f32 = 0.85;
const AROMATIC_SIDE_STRAND_SCALE: f32 = 0.75;

/// One half of a split-colored bond strand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrandSegment {
    /// Segment start point.
    pub start: Vec3,
    /// Segment end point.
    pub end: Vec3,
    /// Cylinder radius.
    pub radius: f32,
    /// Material key (element symbol) at the start.
    pub material_key_start: String,
    /// Material key (element symbol) at the end.
    pub material_key_end: String,
}

/// One end of a bond: atom center, its resolved radius, and the material
/// key the adjacent half-strands use.
#[derive(Debug, Clone, Copy)]
pub struct BondEndpoint<'a> {
    /// Atom center.
    pub center: Vec3,
    /// Atom radius as resolved for the current style.
    pub radius: f32,
    /// Material key, normally the element symbol.
    pub material_key: &'a str,
}

/// Distance from the atom center along `direction` at which the bond
/// cylinder starts.
///
/// Spheres: `radius * trim_fraction`. Cubes: distance to the face hit by a
/// ray along `direction` from the center of a cube with half-extent
/// `radius * trim_fraction`.
#[must_use]
pub fn surface_trim(
    shape: AtomShape,
    radius: f32,
    direction: Vec3,
    trim_fraction: f32,
) -> f32 {
    let half_extent = radius * trim_fraction;
    match shape {
        AtomShape::Sphere => half_extent,
        AtomShape::Cube => {
            let axis = direction.abs().max(Vec3::splat(CUBE_AXIS_EPSILON));
            (Vec3::splat(half_extent) / axis).min_element()
        }
    }
}

/// Lateral offset and radius of each strand, in emission order.
fn strand_offsets(
    bond: BondVisuals,
    base_radius: f32,
    step: f32,
) -> Vec<(f32, f32)> {
    let (main_scale, side_scale) = if bond.is_aromatic {
        (AROMATIC_MAIN_STRAND_SCALE, AROMATIC_SIDE_STRAND_SCALE)
    } else {
        (MAIN_STRAND_SCALE, SIDE_STRAND_SCALE)
    };
    let main = base_radius * main_scale;
    let side = base_radius * side_scale;
    match bond.strand_count {
        2 => vec![(-step * 0.5, side), (step * 0.5, side)],
        3 => vec![(0.0, main), (-step, side), (step, side)],
        _ => vec![(0.0, main)],
    }
}

/// Lay out the strand segments for one bond.
///
/// Returns `2 * strand_count` segments (each strand split at its
/// midpoint, first half keyed by `a`, second by `b`), or nothing in
/// space-filling style. Pure: identical inputs give identical output.
#[must_use]
pub fn layout_bond(
    raw_order: i32,
    a: &BondEndpoint<'_>,
    b: &BondEndpoint<'_>,
    style: RenderStyle,
    geometry: &GeometryOptions,
) -> Vec<StrandSegment> {
    if style == RenderStyle::SpaceFilling {
        return Vec::new();
    }

    let shape = AtomShape::from(style);
    let u = normalize_floored(b.center - a.center);
    let trim_a = surface_trim(shape, a.radius, u, geometry.surface_trim);
    let trim_b = surface_trim(shape, b.radius, u, geometry.surface_trim);
    let a_surf = a.center + u * trim_a;
    let b_surf = b.center - u * trim_b;

    let perp = perpendicular(b_surf - a_surf);
    let bond = visuals(raw_order);
    let bond_length = distance(a_surf, b_surf);
    let base_radius = geometry.bond_base_radius * geometry.bond_thinning;
    let step_scale = if bond.is_aromatic {
        AROMATIC_STEP_SCALE
    } else {
        STEP_SCALE
    };
    let step = (base_radius * step_scale).max(
        geometry
            .max_lateral_step
            .min(bond_length * geometry.lateral_step_fraction),
    );

    let offsets = strand_offsets(bond, base_radius, step);
    let mut segments = Vec::with_capacity(offsets.len() * 2);
    for (offset, radius) in offsets {
        let shift = perp * offset;
        let start = a_surf + shift;
        let end = b_surf + shift;
        let mid = (start + end) * 0.5;
        segments.push(StrandSegment {
            start,
            end: mid,
            radius,
            material_key_start: a.material_key.to_owned(),
            material_key_end: a.material_key.to_owned(),
        });
        segments.push(StrandSegment {
            start: mid,
            end,
            radius,
            material_key_start: b.material_key.to_owned(),
            material_key_end: b.material_key.to_owned(),
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> (BondEndpoint<'static>, BondEndpoint<'static>) {
        (
            BondEndpoint {
                center: Vec3::ZERO,
                radius: 0.3,
                material_key: "C",
            },
            BondEndpoint {
                center: Vec3::new(1.5, 0.0, 0.0),
                radius: 0.285,
                material_key: "O",
            },
        )
    }

    #[test]
    fn single_bond_is_split_colored() {
        let (a, b) = endpoints();
        let geometry = GeometryOptions::default();
        let segs = layout_bond(1, &a, &b, RenderStyle::Sphere, &geometry);

        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].material_key_start, "C");
        assert_eq!(segs[0].material_key_end, "C");
        assert_eq!(segs[1].material_key_start, "O");
        assert_eq!(segs[1].material_key_end, "O");

        let trim_a = 0.3 * 0.7;
        let trim_b = 0.285 * 0.7;
        for seg in &segs {
            for p in [seg.start, seg.end] {
                assert!(p.x >= trim_a - 1e-5 && p.x <= 1.5 - trim_b + 1e-5);
            }
        }
        assert!((segs[0].start.x - trim_a).abs() < 1e-5);
        assert!((segs[1].end.x - (1.5 - trim_b)).abs() < 1e-5);
        assert_eq!(segs[0].end, segs[1].start);
    }

    #[test]
    fn segment_count_follows_strand_count() {
        let (a, b) = endpoints();
        let geometry = GeometryOptions::default();
        for style in [RenderStyle::Sphere, RenderStyle::Cube] {
            for (order, strands) in [(1, 1), (2, 2), (3, 3), (4, 2), (9, 1)] {
                let segs = layout_bond(order, &a, &b, style, &geometry);
                assert_eq!(segs.len(), 2 * strands, "order {order}");
            }
        }
    }

    #[test]
    fn space_filling_has_no_bonds() {
        let (a, b) = endpoints();
        let geometry = GeometryOptions::default();
        for order in [1, 2, 3, 4, 0] {
            assert!(
                layout_bond(order, &a, &b, RenderStyle::SpaceFilling, &geometry)
                    .is_empty()
            );
        }
    }

    #[test]
    fn double_bond_strands_straddle_the_axis() {
        let (a, b) = endpoints();
        let geometry = GeometryOptions::default();
        let segs = layout_bond(2, &a, &b, RenderStyle::Sphere, &geometry);

        // Bond along X: perpendicular is Z
        let base = 0.12 * 0.6;
        let step = (base * 1.9_f32).max(0.22_f32.min((1.5 - 0.3 * 0.7 - 0.285 * 0.7) * 0.12));
        assert!((segs[0].start.z + step * 0.5).abs() < 1e-5);
        assert!((segs[2].start.z - step * 0.5).abs() < 1e-5);
        assert!((segs[0].radius - base * 0.85).abs() < 1e-6);
        assert_eq!(segs[0].start.y, 0.0);
    }

    #[test]
    fn triple_bond_has_center_strand() {
        let (a, b) = endpoints();
        let geometry = GeometryOptions::default();
        let segs = layout_bond(3, &a, &b, RenderStyle::Sphere, &geometry);
        let base = 0.12 * 0.6;

        assert_eq!(segs[0].start.z, 0.0);
        assert!((segs[0].radius - base).abs() < 1e-6);
        assert!(segs[2].start.z < 0.0);
        assert!(segs[4].start.z > 0.0);
        assert!((segs[2].start.z + segs[4].start.z).abs() < 1e-6);
        assert!((segs[4].radius - base * 0.85).abs() < 1e-6);
    }

    #[test]
    fn aromatic_strands_are_thinner_and_closer() {
        let (a, b) = endpoints();
        let geometry = GeometryOptions::default();
        let double = layout_bond(2, &a, &b, RenderStyle::Sphere, &geometry);
        let aromatic = layout_bond(4, &a, &b, RenderStyle::Sphere, &geometry);

        assert!(aromatic[0].radius < double[0].radius);
        assert!(aromatic[2].start.z <= double[2].start.z);
    }

    #[test]
    fn cube_trim_hits_face_along_diagonal() {
        let u = Vec3::new(1.0, 1.0, 0.0).normalize();
        let trim = surface_trim(AtomShape::Cube, 1.0, u, 0.7);
        // Face at x = 0.7 reached after 0.7 / cos(45°)
        assert!((trim - 0.7 * std::f32::consts::SQRT_2).abs() < 1e-5);

        let axis_trim = surface_trim(AtomShape::Cube, 1.0, Vec3::Y, 0.7);
        assert!((axis_trim - 0.7).abs() < 1e-6);
    }

    #[test]
    fn points_stay_off_atom_centers() {
        let a = BondEndpoint {
            center: Vec3::new(-0.4, 1.1, 2.0),
            radius: 0.3,
            material_key: "N",
        };
        let b = BondEndpoint {
            center: Vec3::new(0.7, 0.2, 1.3),
            radius: 0.25,
            material_key: "C",
        };
        let geometry = GeometryOptions::default();
        for style in [RenderStyle::Sphere, RenderStyle::Cube] {
            for order in 1..=4 {
                for seg in layout_bond(order, &a, &b, style, &geometry) {
                    for p in [seg.start, seg.end] {
                        assert!(p.distance(a.center) > 1e-3);
                        assert!(p.distance(b.center) > 1e-3);
                        assert!(p.is_finite());
                    }
                }
            }
        }
    }

    #[test]
    fn every_strand_lies_between_the_trimmed_surfaces() {
        let a = BondEndpoint {
            center: Vec3::new(-0.4, 1.1, 2.0),
            radius: 0.3,
            material_key: "N",
        };
        let b = BondEndpoint {
            center: Vec3::new(0.7, 0.2, 1.3),
            radius: 0.25,
            material_key: "C",
        };
        let geometry = GeometryOptions::default();
        let u = (b.center - a.center).normalize();
        let length = a.center.distance(b.center);

        for style in [RenderStyle::Sphere, RenderStyle::Cube] {
            let shape = AtomShape::from(style);
            let lo = surface_trim(shape, a.radius, u, geometry.surface_trim);
            let hi = length - surface_trim(shape, b.radius, u, geometry.surface_trim);
            assert!(lo < hi);

            for order in 2..=4 {
                let segs = layout_bond(order, &a, &b, style, &geometry);
                assert_eq!(segs.len(), 2 * visuals(order).strand_count as usize);
                for seg in &segs {
                    for p in [seg.start, seg.end] {
                        let along = (p - a.center).dot(u);
                        assert!(
                            along >= lo - 1e-5 && along <= hi + 1e-5,
                            "{style:?} order {order}: {along} outside [{lo}, {hi}]"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn coincident_atoms_stay_finite() {
        let a = BondEndpoint {
            center: Vec3::ONE,
            radius: 0.3,
            material_key: "C",
        };
        let geometry = GeometryOptions::default();
        let segs = layout_bond(3, &a, &a, RenderStyle::Cube, &geometry);
        assert_eq!(segs.len(), 6);
        assert!(segs.iter().all(|s| s.start.is_finite() && s.end.is_finite()));
    }

    #[test]
    fn layout_is_deterministic() {
        let (a, b) = endpoints();
        let geometry = GeometryOptions::default();
        let first = layout_bond(3, &a, &b, RenderStyle::Cube, &geometry);
        let second = layout_bond(3, &a, &b, RenderStyle::Cube, &geometry);
        assert_eq!(first, second);
    }
}
