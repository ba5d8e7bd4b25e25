//! Geometry for coastline tiling: the fixed-coordinate geometry model, clipping, the
//! command-stream encoding and the stored feature format.

pub mod clip;
pub mod feature;
mod fixed;
pub mod vector_tile;

pub use fixed::*;
