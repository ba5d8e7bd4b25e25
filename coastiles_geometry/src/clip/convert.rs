//! Conversion between fixed geometry and `geo` polygons.

use crate::{FixedMultiPolygon, FixedPolygon, FixedRing};
use anyhow::{Result, ensure};
use coastiles_core::{FixedBox, FixedPoint};
use geo::{LineString, MultiPolygon, Polygon};
use log::trace;

fn ring_to_geo(ring: &FixedRing) -> LineString<f64> {
	LineString::from(ring.0.iter().map(|p| (p.x as f64, p.y as f64)).collect::<Vec<_>>())
}

fn polygon_to_geo(polygon: &FixedPolygon) -> Polygon<f64> {
	Polygon::new(ring_to_geo(&polygon.outer), polygon.inners.iter().map(ring_to_geo).collect())
}

pub(super) fn to_geo(multi: &FixedMultiPolygon) -> MultiPolygon<f64> {
	MultiPolygon::new(multi.0.iter().map(polygon_to_geo).collect())
}

pub(super) fn box_to_geo(bbox: &FixedBox) -> Polygon<f64> {
	polygon_to_geo(&super::box_polygon(bbox))
}

/// Rounds a `geo` ring onto the integer grid.
///
/// Consecutive duplicates are merged; rings with fewer than three distinct points are
/// dropped and reported as `None`.
fn ring_from_geo(line: &LineString<f64>) -> Result<Option<FixedRing>> {
	let mut points: Vec<FixedPoint> = Vec::with_capacity(line.0.len() + 1);
	for coord in line.coords() {
		ensure!(
			coord.x.is_finite() && coord.y.is_finite(),
			"overlay produced a non-finite coordinate ({}, {})",
			coord.x,
			coord.y
		);
		let point = FixedPoint::new(coord.x.round() as i64, coord.y.round() as i64);
		if points.last() != Some(&point) {
			points.push(point);
		}
	}
	if points.len() > 1 && points.first() == points.last() {
		points.pop();
	}
	if points.len() < 3 {
		trace!("dropping degenerate ring with {} points", points.len());
		return Ok(None);
	}
	points.push(points[0]);
	Ok(Some(FixedRing(points)))
}

pub(super) fn from_geo(multi: &MultiPolygon<f64>) -> Result<FixedMultiPolygon> {
	let mut polygons = Vec::with_capacity(multi.0.len());
	for polygon in &multi.0 {
		let Some(outer) = ring_from_geo(polygon.exterior())? else {
			continue;
		};
		let mut inners = Vec::new();
		for interior in polygon.interiors() {
			if let Some(ring) = ring_from_geo(interior)? {
				inners.push(ring);
			}
		}
		let mut polygon = FixedPolygon::new(outer, inners);
		polygon.correct();
		polygons.push(polygon);
	}
	Ok(FixedMultiPolygon(polygons))
}
