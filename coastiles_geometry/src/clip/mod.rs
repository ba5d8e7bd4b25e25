//! Boolean operations and box predicates over fixed geometry.
//!
//! Each operand must be a valid multi polygon on its own; operands may overlap each other.
//! Inputs are exact integers. They are handed to `geo`'s overlay as `f64`, which represents
//! every fixed coordinate exactly, and the results are rounded back onto the integer grid.
//! An empty result is an ordinary outcome.

mod convert;

use crate::{FixedMultiPolygon, FixedPolygon, FixedRing, GeometryTrait};
use anyhow::{Context, Result};
use coastiles_core::FixedBox;
use convert::{box_to_geo, from_geo, to_geo};
use geo::{BooleanOps, MultiPolygon};

/// True if the two boxes share at least one point.
#[must_use]
pub fn touches(a: &FixedBox, b: &FixedBox) -> bool {
	a.touches(b)
}

/// True if `inner` lies completely inside `outer`.
#[must_use]
pub fn within(outer: &FixedBox, inner: &FixedBox) -> bool {
	outer.contains_box(inner)
}

/// A closed ring tracing the box, positively oriented.
#[must_use]
pub fn box_ring(bbox: &FixedBox) -> FixedRing {
	let corners = bbox.corners();
	FixedRing(vec![corners[0], corners[1], corners[2], corners[3], corners[0]])
}

#[must_use]
pub fn box_polygon(bbox: &FixedBox) -> FixedPolygon {
	FixedPolygon::new(box_ring(bbox), Vec::new())
}

/// The part of `subject` inside `rect`.
pub fn intersect(subject: &FixedMultiPolygon, rect: &FixedBox) -> Result<FixedMultiPolygon> {
	if subject.0.is_empty() {
		return Ok(FixedMultiPolygon::default());
	}
	let result = to_geo(subject).intersection(&box_to_geo(rect));
	from_geo(&result).with_context(|| format!("intersecting with {rect:?}"))
}

/// The part of `rect` not covered by any of `clips`.
///
/// The clips are subtracted one after another, so overlapping clips never cancel out.
pub fn difference(rect: &FixedBox, clips: &[&FixedMultiPolygon]) -> Result<FixedMultiPolygon> {
	let mut remaining = MultiPolygon::new(vec![box_to_geo(rect)]);
	for clip in clips {
		if remaining.0.is_empty() {
			break;
		}
		remaining = remaining.difference(&to_geo(clip));
	}
	from_geo(&remaining).with_context(|| format!("subtracting from {rect:?}"))
}

/// True if `clipped`, a subset of `rect`, covers all of it.
///
/// Compares exact integer areas, so it does not depend on how the overlay orders or
/// duplicates the corner points of the result.
#[must_use]
pub fn covers_box(clipped: &FixedMultiPolygon, rect: &FixedBox) -> bool {
	clipped.area2() == 2 * rect.area()
}
