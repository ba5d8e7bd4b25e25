use super::{Command, GeomType};
use crate::{FixedGeometry, FixedRing};
use anyhow::{Context, Result, ensure};
use coastiles_core::{FixedPoint, TileSpec, io::zigzag_encode_u32};

/// A geometry serialized into tile-local commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodedGeometry {
	pub geom_type: GeomType,
	pub commands: Vec<u32>,
}

/// Writes commands for one geometry. The delta cursor starts at the tile's pixel origin
/// and carries across all parts of the geometry.
struct GeometryEncoder<'a> {
	spec: &'a TileSpec,
	cursor: FixedPoint,
	commands: Vec<u32>,
}

impl<'a> GeometryEncoder<'a> {
	fn new(spec: &'a TileSpec) -> Self {
		GeometryEncoder {
			spec,
			cursor: spec.pixel_bounds.min,
			commands: Vec::new(),
		}
	}

	fn push_command(&mut self, command: Command, count: usize) -> Result<()> {
		let count = u32::try_from(count).context("too many points for one command")?;
		ensure!(count < 1 << 29, "command count {count} exceeds 29 bits");
		self.commands.push(command.encode(count));
		Ok(())
	}

	fn push_point(&mut self, point: &FixedPoint) -> Result<()> {
		let pixel = self.spec.to_pixel(point);
		self.commands.push(zigzag_encode_u32(pixel.x - self.cursor.x)?);
		self.commands.push(zigzag_encode_u32(pixel.y - self.cursor.y)?);
		self.cursor = pixel;
		Ok(())
	}

	fn push_points(&mut self, points: &[FixedPoint]) -> Result<()> {
		ensure!(!points.is_empty(), "point set must not be empty");
		self.push_command(Command::MoveTo, points.len())?;
		points.iter().try_for_each(|p| self.push_point(p))
	}

	/// MoveTo the first point, LineTo the rest.
	fn push_path(&mut self, points: &[FixedPoint]) -> Result<()> {
		let (first, rest) = points.split_first().context("path must not be empty")?;
		self.push_command(Command::MoveTo, 1)?;
		self.push_point(first)?;
		if !rest.is_empty() {
			self.push_command(Command::LineTo, rest.len())?;
			rest.iter().try_for_each(|p| self.push_point(p))?;
		}
		Ok(())
	}

	fn push_line(&mut self, points: &[FixedPoint]) -> Result<()> {
		ensure!(points.len() >= 2, "line must have at least 2 points, found {}", points.len());
		self.push_path(points)
	}

	/// Every point is written, the closing one included, and then ClosePath.
	fn push_ring(&mut self, ring: &FixedRing) -> Result<()> {
		ensure!(ring.0.len() >= 2, "ring must have at least 2 points, found {}", ring.0.len());
		self.push_path(&ring.0)?;
		self.push_command(Command::ClosePath, 1)
	}
}

/// Encodes `geometry` relative to the tile described by `spec`.
///
/// # Errors
/// Fails on empty point sets, lines or rings with fewer than 2 points, multi polygons
/// without polygons, and deltas that do not fit into 32 bits.
pub fn encode_geometry(geometry: &FixedGeometry, spec: &TileSpec) -> Result<EncodedGeometry> {
	let mut encoder = GeometryEncoder::new(spec);
	match geometry {
		FixedGeometry::Null => {}
		FixedGeometry::MultiPoint(points) => encoder.push_points(&points.0)?,
		FixedGeometry::MultiLineString(lines) => {
			for (index, line) in lines.0.iter().enumerate() {
				encoder.push_line(&line.0).with_context(|| format!("encoding line {index}"))?;
			}
		}
		FixedGeometry::MultiPolygon(polygons) => {
			ensure!(!polygons.0.is_empty(), "multi polygon must contain at least one polygon");
			for (index, polygon) in polygons.0.iter().enumerate() {
				for ring in polygon.rings() {
					encoder.push_ring(ring).with_context(|| format!("encoding polygon {index}"))?;
				}
			}
		}
	}
	Ok(EncodedGeometry {
		geom_type: GeomType::from(geometry),
		commands: encoder.commands,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{FixedLineString, FixedMultiLineString, FixedMultiPoint, FixedMultiPolygon, FixedPolygon};
	use coastiles_core::{TileCoord, io::zigzag_decode};
	use pretty_assertions::assert_eq;

	/// At level 0 one tile pixel is 2^16 fixed units.
	fn px(x: i64, y: i64) -> [i64; 2] {
		[x << 16, y << 16]
	}

	fn world() -> TileSpec {
		TileSpec::new(TileCoord::new(0, 0, 0).unwrap()).unwrap()
	}

	fn encode(geometry: FixedGeometry) -> Result<Vec<u32>> {
		Ok(encode_geometry(&geometry, &world())?.commands)
	}

	#[test]
	fn single_point() -> Result<()> {
		let points = FixedMultiPoint::from(vec![px(25, 17)]);
		assert_eq!(encode(points.into())?, vec![9, 50, 34]);
		Ok(())
	}

	#[test]
	fn multi_point() -> Result<()> {
		let points = FixedMultiPoint::from(vec![px(5, 7), px(3, 2)]);
		assert_eq!(encode(points.into())?, vec![17, 10, 14, 3, 9]);
		Ok(())
	}

	#[test]
	fn single_line() -> Result<()> {
		let lines = FixedMultiLineString(vec![FixedLineString::from(vec![px(2, 2), px(2, 10), px(10, 10)])]);
		assert_eq!(encode(lines.into())?, vec![9, 4, 4, 18, 0, 16, 16, 0]);
		Ok(())
	}

	#[test]
	fn cursor_carries_across_lines() -> Result<()> {
		let lines = FixedMultiLineString(vec![
			FixedLineString::from(vec![px(2, 2), px(2, 10), px(10, 10)]),
			FixedLineString::from(vec![px(1, 1), px(3, 5)]),
		]);
		assert_eq!(
			encode(lines.into())?,
			vec![9, 4, 4, 18, 0, 16, 16, 0, 9, 17, 17, 10, 4, 8]
		);
		Ok(())
	}

	#[test]
	fn polygon_with_close_path() -> Result<()> {
		let polygon = FixedPolygon::from(vec![vec![px(3, 6), px(8, 12), px(20, 34), px(3, 6)]]);
		assert_eq!(
			encode(FixedMultiPolygon::from(polygon).into())?,
			vec![9, 6, 12, 26, 10, 12, 24, 44, 33, 55, 15]
		);
		Ok(())
	}

	#[test]
	fn two_point_ring_writes_both_points() -> Result<()> {
		let polygon = FixedPolygon::from(vec![vec![px(1, 1), px(1, 1)]]);
		assert_eq!(encode(FixedMultiPolygon::from(polygon).into())?, vec![9, 2, 2, 10, 0, 0, 15]);
		Ok(())
	}

	#[test]
	fn polygon_with_hole() -> Result<()> {
		let polygon = FixedPolygon::from(vec![
			vec![px(0, 0), px(10, 0), px(10, 10), px(0, 10), px(0, 0)],
			vec![px(2, 2), px(2, 4), px(4, 4), px(4, 2), px(2, 2)],
		]);
		assert_eq!(
			encode(FixedMultiPolygon::from(polygon).into())?,
			vec![
				9, 0, 0, 34, 20, 0, 0, 20, 19, 0, 0, 19, 15, //
				9, 4, 4, 34, 0, 4, 4, 0, 0, 3, 3, 0, 15,
			]
		);
		Ok(())
	}

	#[test]
	fn deltas_are_tile_local() -> Result<()> {
		let spec = TileSpec::new(TileCoord::new(3, 5, 2)?)?;
		let origin = spec.insert_bounds.min;
		let point = FixedPoint::new(origin.x + (7 << 13), origin.y + (3 << 13));
		let encoded = encode_geometry(&FixedMultiPoint(vec![point]).into(), &spec)?;
		assert_eq!(encoded.geom_type, GeomType::MultiPoint);
		assert_eq!(encoded.commands, vec![9, 14, 6]);
		Ok(())
	}

	#[test]
	fn decoding_deltas_restores_pixels() -> Result<()> {
		let pixels = [[4000, 12], [-100, 4200], [0, 0], [4095, 4095]];
		let points = FixedMultiPoint(pixels.iter().map(|&[x, y]| FixedPoint::from(px(x, y))).collect());
		let commands = encode(points.into())?;
		let (mut x, mut y) = (0, 0);
		let mut restored = Vec::new();
		for pair in commands[1..].chunks(2) {
			x += zigzag_decode(u64::from(pair[0]));
			y += zigzag_decode(u64::from(pair[1]));
			restored.push([x, y]);
		}
		assert_eq!(restored, pixels.to_vec());
		Ok(())
	}

	#[test]
	fn null_encodes_nothing() -> Result<()> {
		let encoded = encode_geometry(&FixedGeometry::Null, &world())?;
		assert_eq!(encoded, EncodedGeometry::default());
		Ok(())
	}

	#[test]
	fn preconditions() {
		let short_line = FixedMultiLineString(vec![FixedLineString::from(vec![px(1, 1)])]);
		assert!(encode(short_line.into()).is_err());
		assert!(encode(FixedMultiPolygon::default().into()).is_err());
		assert!(encode(FixedMultiPoint(vec![]).into()).is_err());
		let short_ring = FixedPolygon::from(vec![vec![px(1, 1)]]);
		assert!(encode(FixedMultiPolygon::from(short_ring).into()).is_err());
	}
}
