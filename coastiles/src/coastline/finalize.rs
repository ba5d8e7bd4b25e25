use super::Coastline;
use anyhow::Result;
use coastiles_core::{Blob, FIXED_LEVEL, TileSpec};
use coastiles_geometry::{
	FixedMultiPolygon,
	clip::{difference, intersect},
	feature::Feature,
};
use std::sync::Arc;

/// Layer index of the water polygons.
pub const LAYER_COASTLINE: u32 = 0;

/// Zoom levels the water polygons are valid for, upper bound exclusive.
pub const COASTLINE_ZOOM_RANGE: (u32, u32) = (0, FIXED_LEVEL as u32 + 1);

/// Serializes the water of a tile at the maximum level: the draw rectangle minus all land.
///
/// Returns `None` if no water reaches into the tile itself, which makes the tile
/// fully dirtside.
pub fn finalize_tile(spec: &TileSpec, coastlines: &[Arc<Coastline>]) -> Result<Option<Blob>> {
	let land: Vec<&FixedMultiPolygon> = coastlines.iter().map(|coastline| &coastline.geometry).collect();
	let water = difference(&spec.draw_bounds, &land)?;
	if water.0.is_empty() || intersect(&water, &spec.insert_bounds)?.0.is_empty() {
		return Ok(None);
	}

	let feature = Feature::new(LAYER_COASTLINE, COASTLINE_ZOOM_RANGE, water.into());
	Ok(Some(feature.serialize(spec)?))
}
