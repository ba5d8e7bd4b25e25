use super::{FixedMultiLineString, FixedMultiPoint, FixedMultiPolygon, GeometryTrait};
use anyhow::Result;
use coastiles_core::FixedBox;

/// Closed set of geometry kinds a stored feature can carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FixedGeometry {
	Null,
	MultiPoint(FixedMultiPoint),
	MultiLineString(FixedMultiLineString),
	MultiPolygon(FixedMultiPolygon),
}

impl FixedGeometry {
	#[must_use]
	pub fn type_name(&self) -> &str {
		match self {
			FixedGeometry::Null => "Null",
			FixedGeometry::MultiPoint(_) => "MultiPoint",
			FixedGeometry::MultiLineString(_) => "MultiLineString",
			FixedGeometry::MultiPolygon(_) => "MultiPolygon",
		}
	}
}

impl GeometryTrait for FixedGeometry {
	fn area2(&self) -> i128 {
		match self {
			FixedGeometry::Null => 0,
			FixedGeometry::MultiPoint(g) => g.area2(),
			FixedGeometry::MultiLineString(g) => g.area2(),
			FixedGeometry::MultiPolygon(g) => g.area2(),
		}
	}

	fn verify(&self) -> Result<()> {
		match self {
			FixedGeometry::Null => Ok(()),
			FixedGeometry::MultiPoint(g) => g.verify(),
			FixedGeometry::MultiLineString(g) => g.verify(),
			FixedGeometry::MultiPolygon(g) => g.verify(),
		}
	}

	fn bounding_box(&self) -> Option<FixedBox> {
		match self {
			FixedGeometry::Null => None,
			FixedGeometry::MultiPoint(g) => g.bounding_box(),
			FixedGeometry::MultiLineString(g) => g.bounding_box(),
			FixedGeometry::MultiPolygon(g) => g.bounding_box(),
		}
	}
}

impl From<FixedMultiPolygon> for FixedGeometry {
	fn from(value: FixedMultiPolygon) -> Self {
		FixedGeometry::MultiPolygon(value)
	}
}

impl From<FixedMultiLineString> for FixedGeometry {
	fn from(value: FixedMultiLineString) -> Self {
		FixedGeometry::MultiLineString(value)
	}
}

impl From<FixedMultiPoint> for FixedGeometry {
	fn from(value: FixedMultiPoint) -> Self {
		FixedGeometry::MultiPoint(value)
	}
}
