//! Axis-aligned bounding boxes in the fixed domain, with the overlap predicates used to
//! prefilter candidates before any boolean operation.

use crate::{FixedCoord, FixedPoint};
use std::fmt;

/// A closed box with `min <= max` on both axes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedBox {
	pub min: FixedPoint,
	pub max: FixedPoint,
}

impl FixedBox {
	/// Builds a box from two opposite corners in any order.
	#[must_use]
	pub fn from_corners(a: FixedPoint, b: FixedPoint) -> FixedBox {
		FixedBox {
			min: FixedPoint::new(a.x.min(b.x), a.y.min(b.y)),
			max: FixedPoint::new(a.x.max(b.x), a.y.max(b.y)),
		}
	}

	/// The smallest box containing all `points`, or `None` if there are none.
	pub fn from_points<'a>(points: impl IntoIterator<Item = &'a FixedPoint>) -> Option<FixedBox> {
		let mut iter = points.into_iter();
		let first = *iter.next()?;
		let mut bbox = FixedBox { min: first, max: first };
		for point in iter {
			bbox.include_point(point);
		}
		Some(bbox)
	}

	pub fn include_point(&mut self, point: &FixedPoint) {
		self.min.x = self.min.x.min(point.x);
		self.min.y = self.min.y.min(point.y);
		self.max.x = self.max.x.max(point.x);
		self.max.y = self.max.y.max(point.y);
	}

	pub fn include_box(&mut self, other: &FixedBox) {
		self.include_point(&other.min);
		self.include_point(&other.max);
	}

	#[must_use]
	pub fn width(&self) -> FixedCoord {
		self.max.x - self.min.x
	}

	#[must_use]
	pub fn height(&self) -> FixedCoord {
		self.max.y - self.min.y
	}

	#[must_use]
	pub fn area(&self) -> i128 {
		i128::from(self.width()) * i128::from(self.height())
	}

	/// Grows the box by `margin` on every side.
	#[must_use]
	pub fn expanded(&self, margin: FixedCoord) -> FixedBox {
		FixedBox {
			min: FixedPoint::new(self.min.x - margin, self.min.y - margin),
			max: FixedPoint::new(self.max.x + margin, self.max.y + margin),
		}
	}

	/// Corners in ring order, starting at `min`.
	#[must_use]
	pub fn corners(&self) -> [FixedPoint; 4] {
		[
			self.min,
			FixedPoint::new(self.max.x, self.min.y),
			self.max,
			FixedPoint::new(self.min.x, self.max.y),
		]
	}

	/// True if both closed boxes share at least one point.
	#[must_use]
	pub fn touches(&self, other: &FixedBox) -> bool {
		self.min.x <= other.max.x && other.min.x <= self.max.x && self.min.y <= other.max.y && other.min.y <= self.max.y
	}

	/// True if `inner` lies completely inside this box, boundary included.
	#[must_use]
	pub fn contains_box(&self, inner: &FixedBox) -> bool {
		self.min.x <= inner.min.x && self.min.y <= inner.min.y && inner.max.x <= self.max.x && inner.max.y <= self.max.y
	}

	#[must_use]
	pub fn contains_point(&self, point: &FixedPoint) -> bool {
		self.min.x <= point.x && point.x <= self.max.x && self.min.y <= point.y && point.y <= self.max.y
	}
}

impl fmt::Debug for FixedBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "FixedBox({:?}, {:?})", self.min, self.max)
	}
}
