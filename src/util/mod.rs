//! Shared utilities.
//!
//! Vector helpers, molecule hashing, and the exposure heat-map ramp.

pub mod hash;
pub mod heat_ramp;
pub mod vector;
