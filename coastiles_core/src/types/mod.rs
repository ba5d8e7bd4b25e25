//! Tile addresses, the fixed coordinate domain and the values derived from them.

mod blob;
mod constants;
mod fixed_box;
mod fixed_point;
mod seaside_tree;
mod tile_coord;
mod tile_spec;

pub use blob::*;
pub use constants::*;
pub use fixed_box::*;
pub use fixed_point::*;
pub use seaside_tree::*;
pub use tile_coord::*;
pub use tile_spec::*;
