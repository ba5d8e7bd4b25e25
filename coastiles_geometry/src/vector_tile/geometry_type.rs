use crate::FixedGeometry;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GeomType {
	#[default]
	Unknown = 0,
	MultiPoint = 1,
	MultiLineString = 2,
	MultiPolygon = 3,
}

impl GeomType {
	pub fn as_u64(&self) -> u64 {
		*self as u64
	}
}

impl From<u64> for GeomType {
	fn from(value: u64) -> Self {
		match value {
			1 => GeomType::MultiPoint,
			2 => GeomType::MultiLineString,
			3 => GeomType::MultiPolygon,
			_ => GeomType::Unknown,
		}
	}
}

impl From<&FixedGeometry> for GeomType {
	fn from(geometry: &FixedGeometry) -> Self {
		match geometry {
			FixedGeometry::Null => GeomType::Unknown,
			FixedGeometry::MultiPoint(_) => GeomType::MultiPoint,
			FixedGeometry::MultiLineString(_) => GeomType::MultiLineString,
			FixedGeometry::MultiPolygon(_) => GeomType::MultiPolygon,
		}
	}
}
