use super::GeometryTrait;
use anyhow::{Result, ensure};
use coastiles_core::{FixedBox, FixedPoint};
use std::fmt::Debug;

#[derive(Clone, PartialEq, Eq)]
pub struct FixedMultiPoint(pub Vec<FixedPoint>);

impl GeometryTrait for FixedMultiPoint {
	fn area2(&self) -> i128 {
		0
	}

	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "point set must not be empty");
		Ok(())
	}

	fn bounding_box(&self) -> Option<FixedBox> {
		FixedBox::from_points(&self.0)
	}
}

impl Debug for FixedMultiPoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite!(FixedMultiPoint, FixedPoint);
