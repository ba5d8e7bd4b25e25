use super::GeometryTrait;
use anyhow::{Result, ensure};
use coastiles_core::{FixedBox, FixedPoint};
use std::fmt::Debug;

/// A closed loop of points. The first and last point are identical.
#[derive(Clone, PartialEq, Eq)]
pub struct FixedRing(pub Vec<FixedPoint>);

impl FixedRing {
	#[must_use]
	pub fn is_closed(&self) -> bool {
		self.0.len() > 1 && self.0.first() == self.0.last()
	}

	/// Appends the first point if the ring is open.
	pub fn close(&mut self) {
		if !self.is_closed() {
			if let Some(first) = self.0.first().copied() {
				self.0.push(first);
			}
		}
	}

	pub fn reverse(&mut self) {
		self.0.reverse();
	}
}

impl GeometryTrait for FixedRing {
	/// Signed shoelace sum. Positive for rings running clockwise on a north-up map, which
	/// is counter-clockwise in a y-up frame.
	fn area2(&self) -> i128 {
		let mut sum = 0i128;
		if let Some(mut p2) = self.0.last() {
			for p1 in &self.0 {
				sum += i128::from(p2.x - p1.x) * i128::from(p1.y + p2.y);
				p2 = p1;
			}
		}
		sum
	}

	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 4, "ring must have at least 4 points, found {}", self.0.len());
		ensure!(self.0.first() == self.0.last(), "ring must be closed");
		Ok(())
	}

	fn bounding_box(&self) -> Option<FixedBox> {
		FixedBox::from_points(&self.0)
	}
}

impl Debug for FixedRing {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite!(FixedRing, FixedPoint);
