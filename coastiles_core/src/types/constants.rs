//! Constants of the fixed coordinate domain.
//!
//! The world is a square of `2^28` fixed units per axis, origin in the north-west corner.
//! At zoom level [`FIXED_LEVEL`] one fixed unit equals one tile pixel.

/// Number of bits of tile-pixel resolution per tile.
pub const TILE_EXTENT_BITS: u32 = 12;

/// Tile-pixel extent of one tile.
pub const TILE_EXTENT: u32 = 1 << TILE_EXTENT_BITS;

/// The zoom level at which fixed units and tile pixels coincide.
pub const FIXED_LEVEL: u8 = 16;

/// Bits per axis of the fixed coordinate domain.
pub const FIXED_WORLD_BITS: u32 = FIXED_LEVEL as u32 + TILE_EXTENT_BITS;

/// Fixed units per axis of the whole world.
pub const FIXED_WORLD_SIZE: i64 = 1 << FIXED_WORLD_BITS;

/// Width of the draw buffer around each tile, in tile pixels.
pub const TILE_BUFFER: i64 = 128;

/// Half the circumference of the Web Mercator world, in meters.
pub const MERCATOR_HALF_EXTENT: f64 = 20_037_508.342_789_244;

/// Latitude where the Web Mercator square ends.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;
