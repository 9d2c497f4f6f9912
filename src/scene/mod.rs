//! Render-model assembly and delivery.
//!
//! [`RenderModel::build`] is the single pure entry point from a molecule
//! and a set of options to renderable geometry plus overlay data.
//! [`instance`] packs a model into GPU-ready instances; [`processor`] runs
//! builds on a background thread with discard-on-supersede semantics.

pub mod instance;
pub mod processor;
mod render_model;

pub use processor::{LayoutProcessor, LayoutRequest, PreparedLayout};
pub use render_model::{build_render_model, AtomVisual, Overlay, RenderModel};
