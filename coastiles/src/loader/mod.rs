//! Reads land polygons into coastline records.

mod shp;

pub use shp::{load_shapefile, polygons_from_shape};

use crate::Coastline;
use anyhow::Result;
use log::info;
use std::{path::Path, sync::Arc};

/// Loads every polygon of the shapefile at `path` as a coastline record.
pub fn load_coastlines(path: &Path) -> Result<Vec<Arc<Coastline>>> {
	let mut coastlines = Vec::new();
	let count = load_shapefile(path, |polygon| {
		coastlines.push(Coastline::from_polygon(polygon)?);
		Ok(())
	})?;
	info!("loaded {count} coastline polygons from {path:?}");
	Ok(coastlines)
}
