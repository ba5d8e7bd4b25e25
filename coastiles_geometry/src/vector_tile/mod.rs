//! The command-stream geometry encoding of vector tiles.
//!
//! A geometry becomes a sequence of `u32`: command integers `(id & 7) | (count << 3)`
//! followed by `count` zigzag-encoded coordinate deltas in tile-pixel space.

mod command;
mod decode;
mod encode;
mod geometry_type;

pub use command::*;
pub use decode::*;
pub use encode::*;
pub use geometry_type::*;
