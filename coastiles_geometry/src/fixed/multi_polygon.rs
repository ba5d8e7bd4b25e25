use super::{FixedPolygon, GeometryTrait, multi_line_string::merged_box};
use anyhow::{Context, Result, ensure};
use coastiles_core::FixedBox;
use std::fmt::Debug;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct FixedMultiPolygon(pub Vec<FixedPolygon>);

impl FixedMultiPolygon {
	pub fn correct(&mut self) {
		self.0.iter_mut().for_each(FixedPolygon::correct);
	}
}

impl GeometryTrait for FixedMultiPolygon {
	fn area2(&self) -> i128 {
		self.0.iter().map(FixedPolygon::area2).sum()
	}

	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "multi polygon must contain at least one polygon");
		for (index, polygon) in self.0.iter().enumerate() {
			polygon.verify().with_context(|| format!("invalid polygon {index}"))?;
		}
		Ok(())
	}

	fn bounding_box(&self) -> Option<FixedBox> {
		merged_box(self.0.iter().filter_map(FixedPolygon::bounding_box))
	}
}

impl Debug for FixedMultiPolygon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite!(FixedMultiPolygon, FixedPolygon);

impl From<FixedPolygon> for FixedMultiPolygon {
	fn from(polygon: FixedPolygon) -> Self {
		FixedMultiPolygon(vec![polygon])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use coastiles_core::FixedPoint;

	#[test]
	fn bounding_box_covers_all_polygons() {
		let multi = FixedMultiPolygon::from(vec![
			vec![vec![[0, 0], [5, 0], [5, 5], [0, 0]]],
			vec![vec![[-3, 8], [1, 8], [1, 9], [-3, 8]]],
		]);
		assert_eq!(multi.0.len(), 2);
		let bbox = multi.bounding_box().unwrap();
		assert_eq!(bbox.min, FixedPoint::new(-3, 0));
		assert_eq!(bbox.max, FixedPoint::new(5, 9));
		assert_eq!(multi.area2(), 25 + 4);
	}

	#[test]
	fn empty() {
		let multi = FixedMultiPolygon::default();
		assert!(multi.0.is_empty());
		assert!(multi.bounding_box().is_none());
		assert!(multi.verify().is_err());
	}
}
