//! Per-atom solid size for each render style.
//!
//! The same radius sizes the rendered atom and trims the bonds that meet
//! it, so both sides must agree on it.

use serde::{Deserialize, Serialize};

use crate::element::{ElementLookup, ElementLookupExt};
use crate::options::{GeometryOptions, RenderStyle};

/// Solid used to draw an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AtomShape {
    /// Sphere of the resolved radius.
    Sphere,
    /// Axis-aligned cube whose half-extent is the resolved radius.
    Cube,
}

impl From<RenderStyle> for AtomShape {
    fn from(style: RenderStyle) -> Self {
        match style {
            RenderStyle::Cube => Self::Cube,
            RenderStyle::Sphere | RenderStyle::SpaceFilling => Self::Sphere,
        }
    }
}

/// Resolves atom radii from an element table and geometry options.
pub struct AtomGeometryResolver<'a, L: ElementLookup + ?Sized> {
    geometry: &'a GeometryOptions,
    elements: &'a L,
}

impl<'a, L: ElementLookup + ?Sized> AtomGeometryResolver<'a, L> {
    /// Create a resolver over `elements` using `geometry` sizing.
    pub fn new(geometry: &'a GeometryOptions, elements: &'a L) -> Self {
        Self { geometry, elements }
    }

    /// Radius of `symbol` under `style` with an explicit per-symbol scale.
    ///
    /// - Sphere/Cube: `base_atom_radius * per_symbol_scale`.
    /// - SpaceFilling: van der Waals radius (1.70 when unknown) times the
    ///   CPK factor; `per_symbol_scale` is ignored.
    #[must_use]
    pub fn radius(
        &self,
        symbol: &str,
        style: RenderStyle,
        per_symbol_scale: f32,
    ) -> f32 {
        match style {
            RenderStyle::Sphere | RenderStyle::Cube => {
                self.geometry.base_atom_radius * per_symbol_scale
            }
            RenderStyle::SpaceFilling => {
                self.elements.vdw_radius_or_default(symbol)
                    * self.geometry.cpk_factor
            }
        }
    }

    /// Radius of `symbol` under `style`, taking the per-symbol scale from
    /// the element table (1.0 when unknown).
    #[must_use]
    pub fn radius_for(&self, symbol: &str, style: RenderStyle) -> f32 {
        self.radius(symbol, style, self.elements.scale_or_default(symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementTable, DEFAULT_VDW_RADIUS};

    #[test]
    fn sphere_and_cube_scale_base_radius() {
        let geometry = GeometryOptions::default();
        let table = ElementTable::default();
        let resolver = AtomGeometryResolver::new(&geometry, &table);

        assert_eq!(resolver.radius("C", RenderStyle::Sphere, 1.0), 0.3);
        assert!((resolver.radius("C", RenderStyle::Cube, 1.5) - 0.45).abs() < 1e-6);
        // Table scale for H is 0.75
        assert!((resolver.radius_for("H", RenderStyle::Sphere) - 0.225).abs() < 1e-6);
    }

    #[test]
    fn space_filling_uses_vdw_with_fallback() {
        let mut geometry = GeometryOptions::default();
        let table = ElementTable::default();
        let resolver = AtomGeometryResolver::new(&geometry, &table);

        assert_eq!(resolver.radius("O", RenderStyle::SpaceFilling, 9.0), 1.52);
        assert_eq!(
            resolver.radius_for("Qq", RenderStyle::SpaceFilling),
            DEFAULT_VDW_RADIUS
        );

        geometry.cpk_factor = 0.5;
        let resolver = AtomGeometryResolver::new(&geometry, &table);
        assert!((resolver.radius("N", RenderStyle::SpaceFilling, 1.0) - 0.775).abs() < 1e-6);
    }

    #[test]
    fn unknown_symbol_uses_unit_scale() {
        let geometry = GeometryOptions::default();
        let table = ElementTable::default();
        let resolver = AtomGeometryResolver::new(&geometry, &table);
        assert_eq!(resolver.radius_for("Zz", RenderStyle::Cube), 0.3);
    }
}
