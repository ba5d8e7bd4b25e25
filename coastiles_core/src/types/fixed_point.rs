//! Points in the fixed integer coordinate domain and the projection into it.

use crate::{FIXED_WORLD_SIZE, MAX_LATITUDE};
use anyhow::{Result, ensure};
use std::{f64::consts::PI, fmt};

/// One axis of the fixed domain. The world spans `0..=FIXED_WORLD_SIZE`, but clip
/// rectangles may extend past it by the tile buffer.
pub type FixedCoord = i64;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FixedPoint {
	pub x: FixedCoord,
	pub y: FixedCoord,
}

impl FixedPoint {
	#[must_use]
	pub const fn new(x: FixedCoord, y: FixedCoord) -> FixedPoint {
		FixedPoint { x, y }
	}

	/// Projects a WGS84 position onto the fixed domain using spherical Web Mercator.
	///
	/// Latitudes beyond ±85.0511° are clamped to the edge of the Mercator square.
	pub fn from_lon_lat(lon: f64, lat: f64) -> Result<FixedPoint> {
		ensure!(lon.is_finite() && lat.is_finite(), "coordinate ({lon}, {lat}) is not finite");
		ensure!((-180.0..=180.0).contains(&lon), "longitude ({lon}) must be within [-180, 180]");
		ensure!((-90.0..=90.0).contains(&lat), "latitude ({lat}) must be within [-90, 90]");

		let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
		let size = FIXED_WORLD_SIZE as f64;
		let x = (lon + 180.0) / 360.0;
		let sin = lat.to_radians().sin();
		let y = 0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI);

		Ok(FixedPoint {
			x: (x * size).round().clamp(0.0, size) as FixedCoord,
			y: (y * size).round().clamp(0.0, size) as FixedCoord,
		})
	}
}

impl From<[FixedCoord; 2]> for FixedPoint {
	fn from(value: [FixedCoord; 2]) -> Self {
		FixedPoint::new(value[0], value[1])
	}
}

impl From<&[FixedCoord; 2]> for FixedPoint {
	fn from(value: &[FixedCoord; 2]) -> Self {
		FixedPoint::new(value[0], value[1])
	}
}

impl fmt::Debug for FixedPoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {}]", self.x, self.y)
	}
}
