use super::Coastline;
use coastiles_core::{Blob, TileCoord};
use std::sync::Arc;

/// A tile whose children still need to be classified, with the coastlines touching it.
#[derive(Debug)]
pub struct GeoTask {
	pub coord: TileCoord,
	pub coastlines: Vec<Arc<Coastline>>,
}

impl GeoTask {
	pub fn new(coord: TileCoord, coastlines: Vec<Arc<Coastline>>) -> GeoTask {
		GeoTask { coord, coastlines }
	}
}

/// A serialized feature on its way to the writer.
#[derive(Debug)]
pub struct OutputTile {
	pub coord: TileCoord,
	pub feature: Blob,
}
