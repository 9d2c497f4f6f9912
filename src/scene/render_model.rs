//! `(Molecule, Options) → RenderModel`.
//!
//! The render model is rebuilt wholesale whenever the molecule, the render
//! style or the overlay mode changes; nothing is patched incrementally.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::analysis::{
    exposure_scores, find_hbond_pairs, hbond_dash_segments, DashSegment,
    HBondCandidate,
};
use crate::element::{ElementLookup, ElementLookupExt};
use crate::layout::{
    layout_bond, AtomGeometryResolver, AtomShape, BondEndpoint, StrandSegment,
};
use crate::model::Molecule;
use crate::options::{AnalysisOptions, Options, OverlayMode, RenderStyle};
use crate::util::heat_ramp::exposure_colors;

/// One atom as the renderer should draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomVisual {
    /// Atom center.
    pub position: Vec3,
    /// Sphere radius, or cube half-extent.
    pub radius: f32,
    /// Material key (element symbol).
    pub material_key: String,
    /// Solid used for this atom.
    pub shape: AtomShape,
    /// Element color (override, CPK, or accent fallback).
    pub color: [f32; 3],
}

/// Overlay annotations produced by the active analysis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Overlay {
    /// No overlay.
    #[default]
    None,
    /// Hydrogen-bond candidate pairs.
    HBonds(Vec<HBondCandidate>),
    /// Per-atom exposure scores, parallel to [`RenderModel::atoms`].
    Exposure(Vec<f32>),
}

/// Everything the host renderer needs for one molecule under one set of
/// options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderModel {
    /// Style the model was built for.
    pub style: RenderStyle,
    /// Atoms in molecule order.
    pub atoms: Vec<AtomVisual>,
    /// Bond strand half-segments, bond by bond.
    pub strands: Vec<StrandSegment>,
    /// Active overlay.
    pub overlay: Overlay,
}

impl RenderModel {
    /// Build the render model for `molecule` under `options`.
    #[must_use]
    pub fn build<L: ElementLookup + ?Sized>(
        molecule: &Molecule,
        options: &Options,
        elements: &L,
    ) -> Self {
        let style = options.display.style;
        let resolver = AtomGeometryResolver::new(&options.geometry, elements);

        let atoms: Vec<AtomVisual> = molecule
            .atoms()
            .iter()
            .map(|atom| AtomVisual {
                position: atom.position,
                radius: resolver.radius_for(&atom.symbol, style),
                material_key: atom.symbol.trim().to_owned(),
                shape: AtomShape::from(style),
                color: elements.color_or(&atom.symbol, options.colors.accent),
            })
            .collect();

        let mut strands = Vec::new();
        if options.display.draws_bonds() {
            for bond in molecule.resolved_bonds() {
                let (a, b) = (&atoms[bond.atom_a], &atoms[bond.atom_b]);
                strands.extend(layout_bond(
                    bond.order,
                    &endpoint(a),
                    &endpoint(b),
                    style,
                    &options.geometry,
                ));
            }
        }

        let overlay = match options.display.overlay {
            OverlayMode::None => Overlay::None,
            OverlayMode::HBonds => Overlay::HBonds(find_hbond_pairs(
                molecule.atoms(),
                options.analysis.hbond_max_distance,
            )),
            OverlayMode::Exposure => Overlay::Exposure(exposure_scores(
                molecule.atoms(),
                options.analysis.exposure_neighbor_radius,
            )),
        };

        log::debug!(
            "built render model: style={style:?}, {} atoms, {} strand segments",
            atoms.len(),
            strands.len()
        );

        Self {
            style,
            atoms,
            strands,
            overlay,
        }
    }

    /// Per-atom display colors: the exposure heat map when that overlay is
    /// active, element colors otherwise.
    #[must_use]
    pub fn atom_colors(&self) -> Vec<[f32; 3]> {
        match &self.overlay {
            Overlay::Exposure(scores) => exposure_colors(scores),
            Overlay::None | Overlay::HBonds(_) => {
                self.atoms.iter().map(|a| a.color).collect()
            }
        }
    }

    /// Dashed line segments for the H-bond overlay, using the dash length
    /// and gap from `analysis`; empty for any other overlay.
    #[must_use]
    pub fn hbond_dashes(&self, analysis: &AnalysisOptions) -> Vec<DashSegment> {
        let Overlay::HBonds(pairs) = &self.overlay else {
            return Vec::new();
        };
        let positions: Vec<Vec3> =
            self.atoms.iter().map(|a| a.position).collect();
        hbond_dash_segments(
            &positions,
            pairs,
            analysis.hbond_dash_length,
            analysis.hbond_dash_gap,
        )
    }
}

fn endpoint(atom: &AtomVisual) -> BondEndpoint<'_> {
    BondEndpoint {
        center: atom.position,
        radius: atom.radius,
        material_key: &atom.material_key,
    }
}

/// Build a render model; see [`RenderModel::build`].
#[must_use]
pub fn build_render_model<L: ElementLookup + ?Sized>(
    molecule: &Molecule,
    options: &Options,
    elements: &L,
) -> RenderModel {
    RenderModel::build(molecule, options, elements)
}
