use anyhow::Result;
use coastiles_core::FixedBox;
use std::fmt::Debug;

/// Shared interface of all fixed-coordinate geometries.
pub trait GeometryTrait: Debug + Clone {
	/// Twice the enclosed area, exact. Holes count negatively; lines and points enclose nothing.
	fn area2(&self) -> i128;

	/// Checks structural validity, e.g. that rings are closed and long enough.
	fn verify(&self) -> Result<()>;

	/// `None` for empty geometries.
	fn bounding_box(&self) -> Option<FixedBox>;
}
