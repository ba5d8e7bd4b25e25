//! Tile addresses in the quadtree pyramid.
//!
//! ```
//! use coastiles_core::TileCoord;
//!
//! let coord = TileCoord::new(1, 1, 0).unwrap();
//! let children = coord.direct_children();
//! assert_eq!(children[3], TileCoord::new(2, 3, 1).unwrap());
//! assert_eq!(children[3].parent().unwrap(), coord);
//! ```

use anyhow::{Context, Result, ensure};
use std::{
	cmp::Ordering,
	fmt::{self, Debug, Display},
	str::FromStr,
};

/// Zoom `level` plus `x`/`y` indices, both in `0..2^level`.
#[derive(Eq, PartialEq, Clone, Hash, Copy)]
pub struct TileCoord {
	pub level: u8,
	pub x: u32,
	pub y: u32,
}

impl TileCoord {
	/// # Errors
	/// Returns an error if `level` > 31 or `x`/`y` lie outside the level.
	pub fn new(level: u8, x: u32, y: u32) -> Result<TileCoord> {
		ensure!(level <= 31, "level ({level}) must be <= 31");
		let max = 1u64 << level;
		ensure!(u64::from(x) < max, "x ({x}) out of bounds for level {level}");
		ensure!(u64::from(y) < max, "y ({y}) out of bounds for level {level}");
		Ok(TileCoord { level, x, y })
	}

	/// The four tiles at `level + 1` covering this tile, in the order
	/// top-left, top-right, bottom-left, bottom-right.
	#[must_use]
	pub fn direct_children(&self) -> [TileCoord; 4] {
		let level = self.level + 1;
		let (x, y) = (self.x * 2, self.y * 2);
		[
			TileCoord { level, x, y },
			TileCoord { level, x: x + 1, y },
			TileCoord { level, x, y: y + 1 },
			TileCoord { level, x: x + 1, y: y + 1 },
		]
	}

	pub fn parent(&self) -> Result<TileCoord> {
		ensure!(self.level > 0, "tile at level 0 has no parent");
		Ok(TileCoord {
			level: self.level - 1,
			x: self.x / 2,
			y: self.y / 2,
		})
	}

	/// Position (0..4) of this tile's ancestor at `level` among its siblings.
	///
	/// `level` must lie in `1..=self.level`.
	#[must_use]
	pub fn child_index_at(&self, level: u8) -> usize {
		debug_assert!(level >= 1 && level <= self.level);
		let shift = self.level - level;
		(((self.x >> shift) & 1) + 2 * ((self.y >> shift) & 1)) as usize
	}

	/// All `4^level` tiles of one level, row by row.
	pub fn iter_level(level: u8) -> impl Iterator<Item = TileCoord> {
		let size = 1u32 << level;
		(0..size).flat_map(move |y| (0..size).map(move |x| TileCoord { level, x, y }))
	}
}

impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_fmt(format_args!("TileCoord({}, [{}, {}])", &self.level, &self.x, &self.y))
	}
}

impl Display for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}/{}", self.level, self.x, self.y)
	}
}

/// Parses `z/x/y`.
impl FromStr for TileCoord {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		let parts: Vec<&str> = s.split('/').collect();
		ensure!(parts.len() == 3, "tile address '{s}' must have the form z/x/y");
		let level = parts[0].trim().parse::<u8>().with_context(|| format!("invalid level in '{s}'"))?;
		let x = parts[1].trim().parse::<u32>().with_context(|| format!("invalid x in '{s}'"))?;
		let y = parts[2].trim().parse::<u32>().with_context(|| format!("invalid y in '{s}'"))?;
		TileCoord::new(level, x, y)
	}
}

/// Ordered by `level`, then `y`, then `x`.
impl Ord for TileCoord {
	fn cmp(&self, other: &Self) -> Ordering {
		self
			.level
			.cmp(&other.level)
			.then(self.y.cmp(&other.y))
			.then(self.x.cmp(&other.x))
	}
}

impl PartialOrd for TileCoord {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
