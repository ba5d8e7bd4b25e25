use super::{FixedRing, GeometryTrait};
use anyhow::{Context, Result};
use coastiles_core::FixedBox;
use std::fmt::Debug;

/// One outer ring plus holes.
#[derive(Clone, PartialEq, Eq)]
pub struct FixedPolygon {
	pub outer: FixedRing,
	pub inners: Vec<FixedRing>,
}

impl FixedPolygon {
	#[must_use]
	pub fn new(outer: FixedRing, inners: Vec<FixedRing>) -> FixedPolygon {
		FixedPolygon { outer, inners }
	}

	#[must_use]
	pub fn rings(&self) -> impl Iterator<Item = &FixedRing> {
		std::iter::once(&self.outer).chain(self.inners.iter())
	}

	/// Orients the outer ring positive and every hole negative.
	pub fn correct(&mut self) {
		if self.outer.area2() < 0 {
			self.outer.reverse();
		}
		for inner in &mut self.inners {
			if inner.area2() > 0 {
				inner.reverse();
			}
		}
	}
}

impl GeometryTrait for FixedPolygon {
	/// Outer area minus hole areas, independent of ring orientation.
	fn area2(&self) -> i128 {
		self.outer.area2().abs() - self.inners.iter().map(|r| r.area2().abs()).sum::<i128>()
	}

	fn verify(&self) -> Result<()> {
		self.outer.verify().context("invalid outer ring")?;
		for (index, inner) in self.inners.iter().enumerate() {
			inner.verify().with_context(|| format!("invalid hole {index}"))?;
		}
		Ok(())
	}

	fn bounding_box(&self) -> Option<FixedBox> {
		self.outer.bounding_box()
	}
}

impl Debug for FixedPolygon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.rings()).finish()
	}
}

/// The first ring becomes the outer ring, all following rings are holes.
impl<T> From<Vec<T>> for FixedPolygon
where
	FixedRing: From<T>,
{
	fn from(value: Vec<T>) -> Self {
		let mut rings = value.into_iter().map(FixedRing::from);
		let outer = rings.next().unwrap_or(FixedRing(Vec::new()));
		FixedPolygon::new(outer, rings.collect())
	}
}
