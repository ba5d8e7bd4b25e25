use anyhow::{Context, Result, bail, ensure};
use coastiles_core::FixedPoint;
use coastiles_geometry::{FixedPolygon, FixedRing};
use shapefile::{Point, PolygonRing, Shape, ShapeReader};
use std::path::Path;

/// Calls `handler` once for every simple polygon in the shapefile at `path` and returns
/// the number of polygons.
pub fn load_shapefile<F>(path: &Path, mut handler: F) -> Result<usize>
where
	F: FnMut(FixedPolygon) -> Result<()>,
{
	let mut reader = ShapeReader::from_path(path).with_context(|| format!("Failed to open shapefile {path:?}"))?;

	let mut count = 0;
	for (index, shape) in reader.iter_shapes().enumerate() {
		let shape = shape.with_context(|| format!("Failed to read shape {index} of {path:?}"))?;
		let polygons = polygons_from_shape(&shape).with_context(|| format!("Invalid shape {index} in {path:?}"))?;
		for polygon in polygons {
			handler(polygon)?;
			count += 1;
		}
	}
	Ok(count)
}

/// Splits a shape into simple polygons: every outer ring opens a polygon, the inner
/// rings following it become its holes.
pub fn polygons_from_shape(shape: &Shape) -> Result<Vec<FixedPolygon>> {
	let polygon = match shape {
		Shape::NullShape => return Ok(Vec::new()),
		Shape::Polygon(polygon) => polygon,
		other => bail!("expected polygons, found {:?}", other.shapetype()),
	};

	let mut polygons: Vec<FixedPolygon> = Vec::new();
	for ring in polygon.rings() {
		match ring {
			PolygonRing::Outer(points) => polygons.push(FixedPolygon::new(convert_ring(points)?, Vec::new())),
			PolygonRing::Inner(points) => {
				let hole = convert_ring(points)?;
				match polygons.last_mut() {
					Some(polygon) => polygon.inners.push(hole),
					None => bail!("inner ring found before any outer ring"),
				}
			}
		}
	}
	Ok(polygons)
}

fn convert_ring(points: &[Point]) -> Result<FixedRing> {
	ensure!(points.len() >= 4, "ring must have at least 4 points, found {}", points.len());
	let points = points
		.iter()
		.map(|point| FixedPoint::from_lon_lat(point.x, point.y))
		.collect::<Result<Vec<_>>>()?;
	ensure!(points.first() == points.last(), "ring is not closed");
	Ok(FixedRing(points))
}

#[cfg(test)]
mod tests {
	use super::*;
	use coastiles_core::FIXED_WORLD_SIZE;
	use pretty_assertions::assert_eq;

	fn ring(coords: &[(f64, f64)]) -> Vec<Point> {
		coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
	}

	#[test]
	fn outer_rings_collect_their_holes() -> Result<()> {
		let shape = Shape::Polygon(shapefile::Polygon::with_rings(vec![
			PolygonRing::Outer(ring(&[(-10.0, -10.0), (-10.0, 10.0), (10.0, 10.0), (10.0, -10.0), (-10.0, -10.0)])),
			PolygonRing::Inner(ring(&[(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0)])),
			PolygonRing::Outer(ring(&[(20.0, 0.0), (20.0, 5.0), (25.0, 5.0), (25.0, 0.0), (20.0, 0.0)])),
		]));
		let polygons = polygons_from_shape(&shape)?;
		assert_eq!(polygons.len(), 2);
		assert_eq!(polygons[0].inners.len(), 1);
		assert_eq!(polygons[1].inners.len(), 0);

		let center = FIXED_WORLD_SIZE / 2;
		assert!(polygons[0].outer.0.iter().all(|p| (p.x - center).abs() < FIXED_WORLD_SIZE / 16));
		Ok(())
	}

	#[test]
	fn null_shapes_are_skipped() -> Result<()> {
		assert!(polygons_from_shape(&Shape::NullShape)?.is_empty());
		Ok(())
	}

	#[test]
	fn other_shapes_are_rejected() {
		let shape = Shape::Point(Point::new(1.0, 2.0));
		assert!(polygons_from_shape(&shape).is_err());
	}

	#[test]
	fn rings_need_four_points() {
		let err = convert_ring(&ring(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)])).unwrap_err();
		assert!(err.to_string().contains("at least 4 points"));
	}

	#[test]
	fn rings_must_be_closed() {
		let err = convert_ring(&ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])).unwrap_err();
		assert!(err.to_string().contains("not closed"));
	}

	#[test]
	fn missing_file_names_the_path() {
		let err = load_shapefile(Path::new("/does/not/exist.shp"), |_| Ok(())).unwrap_err();
		assert!(format!("{err:?}").contains("/does/not/exist.shp"));
	}
}
