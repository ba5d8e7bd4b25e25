use super::{FixedLineString, GeometryTrait};
use anyhow::{Result, ensure};
use coastiles_core::FixedBox;
use std::fmt::Debug;

#[derive(Clone, PartialEq, Eq)]
pub struct FixedMultiLineString(pub Vec<FixedLineString>);

impl GeometryTrait for FixedMultiLineString {
	fn area2(&self) -> i128 {
		0
	}

	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "multi line must contain at least one line");
		self.0.iter().try_for_each(FixedLineString::verify)
	}

	fn bounding_box(&self) -> Option<FixedBox> {
		merged_box(self.0.iter().filter_map(FixedLineString::bounding_box))
	}
}

impl Debug for FixedMultiLineString {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite!(FixedMultiLineString, FixedLineString);

/// Union of all given boxes.
pub(crate) fn merged_box(boxes: impl Iterator<Item = FixedBox>) -> Option<FixedBox> {
	boxes.reduce(|mut a, b| {
		a.include_box(&b);
		a
	})
}
