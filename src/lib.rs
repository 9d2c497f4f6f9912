// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Bond/atom layout geometry and overlay analysis for 3D ligand viewers.
//!
//! Ligview computes what a molecule renderer needs to draw a small
//! molecule: per-style atom radii, bond cylinders trimmed to the atom
//! surfaces, multi-order bonds fanned out along a stable perpendicular,
//! split-colored strand halves, and two overlays (hydrogen-bond candidate
//! pairs and neighbor-density exposure scores). Drawing itself is left to
//! the host.
//!
//! # Key entry points
//!
//! - [`scene::RenderModel::build`] - `(Molecule, Options) → RenderModel`
//! - [`layout::layout_bond`] - strand segments for a single bond
//! - [`analysis`] - H-bond candidates and exposure scores
//! - [`options::Options`] - style, overlay, sizing and thresholds, with
//!   TOML presets
//! - [`scene::LayoutProcessor`] - background rebuilds where only the
//!   latest request is ever delivered
//!
//! Geometry and analysis never fail: unknown elements use documented
//! fallbacks, unknown bond orders render as single bonds, and malformed
//! bond indices are clamped (and dropped if they collapse to a self-bond).

pub mod analysis;
pub mod element;
pub mod error;
pub mod layout;
pub mod model;
pub mod options;
pub mod scene;
pub mod util;
