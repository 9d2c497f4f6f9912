//! GPU-ready instance packing for a [`RenderModel`].
//!
//! Layouts follow the usual impostor conventions: one `vec4` pair per
//! atom, four `vec4`s per bond half-segment. Hosts upload the byte slices
//! straight into storage buffers.

use super::render_model::{Overlay, RenderModel};
use crate::element::{ElementLookup, ElementLookupExt};
use crate::layout::AtomShape;
use crate::options::{AnalysisOptions, ColorOptions};

/// Per-instance data for an atom impostor.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct AtomInstance {
    /// xyz = position, w = radius (cube half-extent for cubes)
    pub center: [f32; 4],
    /// xyz = RGB color, w = shape (0 sphere, 1 cube)
    pub color: [f32; 4],
}

/// Per-instance data for a bond capsule impostor.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CapsuleInstance {
    /// Endpoint A position (xyz), radius (w)
    pub endpoint_a: [f32; 4],
    /// Endpoint B position (xyz), w unused
    pub endpoint_b: [f32; 4],
    /// Color at endpoint A (RGB), w unused
    pub color_a: [f32; 4],
    /// Color at endpoint B (RGB), w unused
    pub color_b: [f32; 4],
}

fn shape_code(shape: AtomShape) -> f32 {
    match shape {
        AtomShape::Sphere => 0.0,
        AtomShape::Cube => 1.0,
    }
}

/// Atom instances, colored by the exposure heat map when that overlay is
/// active.
#[must_use]
pub fn atom_instances(model: &RenderModel) -> Vec<AtomInstance> {
    model
        .atoms
        .iter()
        .zip(model.atom_colors())
        .map(|(atom, c)| AtomInstance {
            center: [
                atom.position.x,
                atom.position.y,
                atom.position.z,
                atom.radius,
            ],
            color: [c[0], c[1], c[2], shape_code(atom.shape)],
        })
        .collect()
}

/// Bond capsule instances. Each half-segment is colored from its material
/// key through `elements`, falling back to `colors.accent` exactly as the
/// atom it belongs to does.
#[must_use]
pub fn capsule_instances<L: ElementLookup + ?Sized>(
    model: &RenderModel,
    elements: &L,
    colors: &ColorOptions,
) -> Vec<CapsuleInstance> {
    model
        .strands
        .iter()
        .map(|seg| {
            let ca = elements.color_or(&seg.material_key_start, colors.accent);
            let cb = elements.color_or(&seg.material_key_end, colors.accent);
            CapsuleInstance {
                endpoint_a: [seg.start.x, seg.start.y, seg.start.z, seg.radius],
                endpoint_b: [seg.end.x, seg.end.y, seg.end.z, 0.0],
                color_a: [ca[0], ca[1], ca[2], 0.0],
                color_b: [cb[0], cb[1], cb[2], 0.0],
            }
        })
        .collect()
}

/// Thin capsules for the H-bond overlay dashes, sized by `analysis` and
/// colored `colors.hbond`; empty unless the H-bond overlay is active.
#[must_use]
pub fn hbond_dash_instances(
    model: &RenderModel,
    analysis: &AnalysisOptions,
    colors: &ColorOptions,
) -> Vec<CapsuleInstance> {
    if !matches!(model.overlay, Overlay::HBonds(_)) {
        return Vec::new();
    }
    let [r, g, b] = colors.hbond;
    let rgba = [r, g, b, 0.0];
    let radius = analysis.hbond_dash_radius;
    model
        .hbond_dashes(analysis)
        .iter()
        .map(|d| CapsuleInstance {
            endpoint_a: [d.start.x, d.start.y, d.start.z, radius],
            endpoint_b: [d.end.x, d.end.y, d.end.z, 0.0],
            color_a: rgba,
            color_b: rgba,
        })
        .collect()
}

/// Raw bytes of an instance slice for GPU upload.
#[must_use]
pub fn instance_bytes<T: bytemuck::Pod>(instances: &[T]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
