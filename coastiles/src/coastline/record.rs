use anyhow::{Context, Result};
use coastiles_core::FixedBox;
use coastiles_geometry::{FixedMultiPolygon, FixedPolygon, GeometryTrait};
use std::sync::Arc;

/// A piece of land with its bounding box.
///
/// Records never change after creation. Sibling tasks share them through `Arc`.
#[derive(Debug, PartialEq, Eq)]
pub struct Coastline {
	pub bbox: FixedBox,
	pub geometry: FixedMultiPolygon,
}

impl Coastline {
	/// # Errors
	/// Fails if the geometry has no points.
	pub fn from_multi_polygon(geometry: FixedMultiPolygon) -> Result<Arc<Coastline>> {
		let bbox = geometry.bounding_box().context("coastline geometry must not be empty")?;
		Ok(Arc::new(Coastline { bbox, geometry }))
	}

	/// Validates a loaded polygon and wraps it into a record.
	pub fn from_polygon(mut polygon: FixedPolygon) -> Result<Arc<Coastline>> {
		polygon.verify().context("invalid coastline polygon")?;
		polygon.correct();
		Coastline::from_multi_polygon(FixedMultiPolygon::from(polygon))
	}
}
