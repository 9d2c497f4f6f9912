//! Element property lookup (van der Waals radius, ball scale, CPK color,
//! display name).
//!
//! Hosts that already carry a periodic table implement [`ElementLookup`]
//! and hand it to the layout code. [`ElementTable`] is the built-in table
//! covering the elements that show up in ligands. Every lookup is optional;
//! [`ElementLookupExt`] applies the documented fallbacks.

use rustc_hash::FxHashMap;

use crate::options::ColorOptions;

/// Generic organic van der Waals radius used for unknown symbols.
pub const DEFAULT_VDW_RADIUS: f32 = 1.70;

/// Ball scale used for unknown symbols.
pub const DEFAULT_SCALE: f32 = 1.0;

/// Neutral accent color for unknown symbols.
pub const NEUTRAL_ACCENT_COLOR: [f32; 3] = [0.55, 0.6, 0.7];

/// Periodic-table collaborator consumed by the layout and render-model code.
pub trait ElementLookup {
    /// Van der Waals radius in angstroms.
    fn vdw_radius(&self, symbol: &str) -> Option<f32>;
    /// Multiplier applied to the base atom radius in sphere/cube styles.
    fn scale(&self, symbol: &str) -> Option<f32>;
    /// RGB color in [0, 1].
    fn color(&self, symbol: &str) -> Option<[f32; 3]>;
    /// Human-readable element name.
    fn display_name(&self, symbol: &str) -> Option<&str>;
}

/// Fallback-applying accessors for any [`ElementLookup`].
pub trait ElementLookupExt: ElementLookup {
    /// Van der Waals radius, or [`DEFAULT_VDW_RADIUS`].
    fn vdw_radius_or_default(&self, symbol: &str) -> f32 {
        self.vdw_radius(symbol).unwrap_or(DEFAULT_VDW_RADIUS)
    }

    /// Ball scale, or [`DEFAULT_SCALE`].
    fn scale_or_default(&self, symbol: &str) -> f32 {
        self.scale(symbol).unwrap_or(DEFAULT_SCALE)
    }

    /// Element color, or [`NEUTRAL_ACCENT_COLOR`].
    fn color_or_default(&self, symbol: &str) -> [f32; 3] {
        self.color_or(symbol, NEUTRAL_ACCENT_COLOR)
    }

    /// Element color, or `fallback` when the element has none.
    fn color_or(&self, symbol: &str, fallback: [f32; 3]) -> [f32; 3] {
        self.color(symbol).unwrap_or(fallback)
    }

    /// Display name, or the trimmed symbol itself.
    fn display_name_or_symbol<'a>(&'a self, symbol: &'a str) -> &'a str {
        self.display_name(symbol).unwrap_or_else(|| symbol.trim())
    }
}

impl<T: ElementLookup + ?Sized> ElementLookupExt for T {}

struct ElementData {
    symbol: &'static str,
    name: &'static str,
    vdw: f32,
    scale: f32,
    color: [f32; 3],
}

const fn el(
    symbol: &'static str,
    name: &'static str,
    vdw: f32,
    scale: f32,
    color: [f32; 3],
) -> ElementData {
    ElementData {
        symbol,
        name,
        vdw,
        scale,
        color,
    }
}

// Bondi radii; Jmol CPK colors.
const ELEMENT_DATA: &[ElementData] = &[
    el("H", "Hydrogen", 1.20, 0.75, [1.0, 1.0, 1.0]),
    el("B", "Boron", 1.92, 1.0, [1.0, 0.71, 0.71]),
    el("C", "Carbon", 1.70, 1.0, [0.565, 0.565, 0.565]),
    el("N", "Nitrogen", 1.55, 0.95, [0.188, 0.314, 0.973]),
    el("O", "Oxygen", 1.52, 0.95, [1.0, 0.051, 0.051]),
    el("F", "Fluorine", 1.47, 0.9, [0.565, 0.878, 0.314]),
    el("Na", "Sodium", 2.27, 1.3, [0.671, 0.361, 0.949]),
    el("Mg", "Magnesium", 1.73, 1.2, [0.541, 1.0, 0.0]),
    el("Si", "Silicon", 2.10, 1.2, [0.941, 0.784, 0.627]),
    el("P", "Phosphorus", 1.80, 1.15, [1.0, 0.502, 0.0]),
    el("S", "Sulfur", 1.80, 1.15, [1.0, 1.0, 0.188]),
    el("Cl", "Chlorine", 1.75, 1.1, [0.122, 0.941, 0.122]),
    el("K", "Potassium", 2.75, 1.5, [0.561, 0.251, 0.831]),
    el("Ca", "Calcium", 2.31, 1.4, [0.239, 1.0, 0.0]),
    el("Fe", "Iron", 2.00, 1.2, [0.878, 0.4, 0.2]),
    el("Cu", "Copper", 1.40, 1.1, [0.784, 0.502, 0.2]),
    el("Zn", "Zinc", 1.39, 1.1, [0.49, 0.502, 0.69]),
    el("Se", "Selenium", 1.90, 1.2, [1.0, 0.631, 0.0]),
    el("Br", "Bromine", 1.85, 1.2, [0.651, 0.161, 0.161]),
    el("I", "Iodine", 1.98, 1.3, [0.58, 0.0, 0.58]),
];

/// Normalize a raw symbol to title case ("CL" → "Cl", " o" → "O").
fn title_case(symbol: &str) -> String {
    let mut out = String::with_capacity(symbol.len());
    for (i, c) in symbol.trim().chars().enumerate() {
        if i == 0 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}

/// Built-in element table with optional per-symbol color overrides.
#[derive(Debug, Clone)]
pub struct ElementTable {
    index: FxHashMap<&'static str, usize>,
    color_overrides: FxHashMap<String, [f32; 3]>,
}

impl Default for ElementTable {
    fn default() -> Self {
        let index = ELEMENT_DATA
            .iter()
            .enumerate()
            .map(|(i, e)| (e.symbol, i))
            .collect();
        Self {
            index,
            color_overrides: FxHashMap::default(),
        }
    }
}

impl ElementTable {
    /// Built-in table with colors from `colors.element_colors` taking
    /// precedence over CPK defaults.
    #[must_use]
    pub fn with_color_overrides(colors: &ColorOptions) -> Self {
        Self {
            color_overrides: colors
                .element_colors
                .iter()
                .map(|(sym, rgb)| (title_case(sym), *rgb))
                .collect(),
            ..Self::default()
        }
    }

    fn data(&self, symbol: &str) -> Option<&'static ElementData> {
        let key = title_case(symbol);
        self.index.get(key.as_str()).map(|&i| &ELEMENT_DATA[i])
    }
}

impl ElementLookup for ElementTable {
    fn vdw_radius(&self, symbol: &str) -> Option<f32> {
        self.data(symbol).map(|e| e.vdw)
    }

    fn scale(&self, symbol: &str) -> Option<f32> {
        self.data(symbol).map(|e| e.scale)
    }

    fn color(&self, symbol: &str) -> Option<[f32; 3]> {
        self.color_overrides
            .get(&title_case(symbol))
            .copied()
            .or_else(|| self.data(symbol).map(|e| e.color))
    }

    fn display_name(&self, symbol: &str) -> Option<&str> {
        self.data(symbol).map(|e| e.name)
    }
}
