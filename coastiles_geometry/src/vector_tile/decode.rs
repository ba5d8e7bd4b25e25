use super::{Command, GeomType};
use crate::{
	FixedGeometry, FixedLineString, FixedMultiLineString, FixedMultiPoint, FixedMultiPolygon, FixedPolygon, FixedRing,
	GeometryTrait,
};
use anyhow::{Context, Result, bail, ensure};
use coastiles_core::{FixedPoint, TileSpec, io::zigzag_decode};
use log::trace;

/// Decodes a command stream back into geometry.
///
/// Coordinates are absolute tile pixels at the tile's zoom level. Polygon rings are
/// re-closed and grouped by orientation: a positive ring starts a new polygon, a negative
/// ring is a hole of the current one. Rings without area are skipped.
pub fn decode_geometry(geom_type: GeomType, commands: &[u32], spec: &TileSpec) -> Result<FixedGeometry> {
	let paths = decode_paths(commands, spec.pixel_bounds.min)?;

	match geom_type {
		GeomType::Unknown => {
			ensure!(paths.is_empty(), "geometry of unknown type carries {} paths", paths.len());
			Ok(FixedGeometry::Null)
		}
		GeomType::MultiPoint => {
			let points: Vec<FixedPoint> = paths.into_iter().flatten().collect();
			ensure!(!points.is_empty(), "point geometry must not be empty");
			Ok(FixedMultiPoint(points).into())
		}
		GeomType::MultiLineString => {
			ensure!(!paths.is_empty(), "line geometry must contain at least one line");
			let lines = paths.into_iter().map(FixedLineString).collect::<Vec<_>>();
			let lines = FixedMultiLineString(lines);
			lines.verify()?;
			Ok(lines.into())
		}
		GeomType::MultiPolygon => {
			ensure!(!paths.is_empty(), "polygon geometry must contain at least one ring");
			let mut polygons: Vec<FixedPolygon> = Vec::new();
			for points in paths {
				let ring = FixedRing(points);
				ensure!(ring.is_closed(), "polygon ring is not closed by ClosePath");
				let area = ring.area2();
				if area > 0 {
					polygons.push(FixedPolygon::new(ring, Vec::new()));
				} else if area < 0 {
					match polygons.last_mut() {
						Some(polygon) => polygon.inners.push(ring),
						None => bail!("hole found before any outer ring"),
					}
				} else {
					trace!("skipping ring without area");
				}
			}
			Ok(FixedMultiPolygon(polygons).into())
		}
	}
}

/// Splits the stream into paths of absolute pixel positions. ClosePath closes the current
/// path, unless its last point already repeats the first.
fn decode_paths(commands: &[u32], origin: FixedPoint) -> Result<Vec<Vec<FixedPoint>>> {
	let mut paths: Vec<Vec<FixedPoint>> = Vec::new();
	let mut path: Vec<FixedPoint> = Vec::new();
	let mut cursor = origin;
	let mut iter = commands.iter();

	while let Some(&value) = iter.next() {
		let (command, count) = Command::decode(value)?;
		match command {
			Command::MoveTo | Command::LineTo => {
				for _ in 0..count {
					if command == Command::MoveTo && !path.is_empty() {
						paths.push(std::mem::take(&mut path));
					}
					let dx = iter.next().context("missing x delta")?;
					let dy = iter.next().context("missing y delta")?;
					cursor.x += zigzag_decode(u64::from(*dx));
					cursor.y += zigzag_decode(u64::from(*dy));
					path.push(cursor);
				}
			}
			Command::ClosePath => {
				ensure!(!path.is_empty(), "ClosePath on an empty path");
				let mut ring = FixedRing(std::mem::take(&mut path));
				ring.close();
				path = ring.0;
			}
		}
	}

	if !path.is_empty() {
		paths.push(path);
	}
	Ok(paths)
}
