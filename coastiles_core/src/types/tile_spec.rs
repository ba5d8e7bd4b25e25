//! Bounds of a single tile, derived purely from its address.
//!
//! Besides the projected bounds, a [`TileSpec`] carries three rectangles:
//! - `insert_bounds`: the exact tile footprint in fixed units,
//! - `draw_bounds`: the footprint grown by [`TILE_BUFFER`] tile pixels, so geometry running
//!   along a tile edge is clipped outside the visible area,
//! - `pixel_bounds`: the footprint in tile-pixel space of the tile's own zoom level.

use crate::{FIXED_LEVEL, FixedBox, FixedPoint, MERCATOR_HALF_EXTENT, TILE_BUFFER, TILE_EXTENT, TileCoord};
use anyhow::{Result, ensure};

/// Web Mercator bounds in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MercBounds {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileSpec {
	pub coord: TileCoord,
	pub merc_bounds: MercBounds,
	pub pixel_bounds: FixedBox,
	pub insert_bounds: FixedBox,
	pub draw_bounds: FixedBox,
}

impl TileSpec {
	/// # Errors
	/// Returns an error if the tile is finer than the fixed domain resolves.
	pub fn new(coord: TileCoord) -> Result<TileSpec> {
		ensure!(
			coord.level <= FIXED_LEVEL,
			"tile {coord:?} is deeper than the fixed coordinate level {FIXED_LEVEL}"
		);
		let shift = u32::from(FIXED_LEVEL - coord.level);
		let (x, y) = (i64::from(coord.x), i64::from(coord.y));

		let size = i64::from(TILE_EXTENT) << shift;
		let insert_bounds = FixedBox::from_corners(
			FixedPoint::new(x * size, y * size),
			FixedPoint::new((x + 1) * size, (y + 1) * size),
		);
		let draw_bounds = insert_bounds.expanded(TILE_BUFFER << shift);

		let extent = i64::from(TILE_EXTENT);
		let pixel_bounds = FixedBox::from_corners(
			FixedPoint::new(x * extent, y * extent),
			FixedPoint::new((x + 1) * extent, (y + 1) * extent),
		);

		let scale = 2.0 * MERCATOR_HALF_EXTENT / f64::from(1u32 << coord.level);
		let merc_bounds = MercBounds {
			x_min: x as f64 * scale - MERCATOR_HALF_EXTENT,
			x_max: (x + 1) as f64 * scale - MERCATOR_HALF_EXTENT,
			y_min: MERCATOR_HALF_EXTENT - (y + 1) as f64 * scale,
			y_max: MERCATOR_HALF_EXTENT - y as f64 * scale,
		};

		Ok(TileSpec {
			coord,
			merc_bounds,
			pixel_bounds,
			insert_bounds,
			draw_bounds,
		})
	}

	/// Right shift that maps fixed units onto tile pixels of this level.
	#[must_use]
	pub fn pixel_shift(&self) -> u32 {
		u32::from(FIXED_LEVEL - self.coord.level)
	}

	#[must_use]
	pub fn to_pixel(&self, point: &FixedPoint) -> FixedPoint {
		let shift = self.pixel_shift();
		FixedPoint::new(point.x >> shift, point.y >> shift)
	}

	#[must_use]
	pub fn to_pixel_box(&self, bbox: &FixedBox) -> FixedBox {
		FixedBox::from_corners(self.to_pixel(&bbox.min), self.to_pixel(&bbox.max))
	}
}
