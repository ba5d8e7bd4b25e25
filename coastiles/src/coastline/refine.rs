use super::{Coastline, CoastlineStats, GeoTask, OutputTile, SeasideAccumulator, WorkQueue, finalize_tile};
use anyhow::{Context, Result};
use coastiles_core::{Blob, TileCoord, TileSpec};
use coastiles_geometry::clip::{covers_box, intersect, touches, within};
use std::sync::Arc;

/// How a single child tile is settled.
#[derive(Debug, PartialEq, Eq)]
pub enum ChildOutcome {
	/// Only land, nothing to store.
	Dirtside,
	/// No land at all.
	Seaside,
	/// Mixed above the maximum level, refine further with these coastlines.
	Subdivide(Vec<Arc<Coastline>>),
	/// Mixed at the maximum level, the serialized water polygon.
	Finalized(Blob),
}

/// Classifies `child` against the coastlines of its parent task.
pub fn classify_child(child: &TileCoord, candidates: &[Arc<Coastline>], max_level: u8) -> Result<ChildOutcome> {
	let spec = TileSpec::new(*child)?;

	let mut matching = Vec::new();
	for coastline in candidates {
		if !touches(&spec.insert_bounds, &coastline.bbox) {
			continue;
		}

		if within(&spec.insert_bounds, &coastline.bbox) {
			matching.push(Arc::clone(coastline));
			continue;
		}

		let clipped = intersect(&coastline.geometry, &spec.draw_bounds)?;
		if clipped.0.is_empty() {
			continue;
		}
		if covers_box(&clipped, &spec.draw_bounds) {
			return Ok(ChildOutcome::Dirtside);
		}
		matching.push(Coastline::from_multi_polygon(clipped)?);
	}

	if matching.is_empty() {
		Ok(ChildOutcome::Seaside)
	} else if child.level < max_level {
		Ok(ChildOutcome::Subdivide(matching))
	} else {
		Ok(match finalize_tile(&spec, &matching)? {
			Some(feature) => ChildOutcome::Finalized(feature),
			None => ChildOutcome::Dirtside,
		})
	}
}

/// Everything a worker needs, handed to it at spawn.
pub(super) struct RefineContext<'a> {
	pub geo_queue: &'a WorkQueue<GeoTask>,
	pub db_queue: &'a WorkQueue<OutputTile>,
	pub stats: &'a CoastlineStats,
	pub seaside: &'a SeasideAccumulator,
	pub max_level: u8,
}

/// Settles or re-enqueues each of the four children of `task`.
pub(super) fn process_task(task: GeoTask, context: &RefineContext) -> Result<()> {
	for child in task.coord.direct_children() {
		let outcome = classify_child(&child, &task.coastlines, context.max_level)
			.with_context(|| format!("Failed to classify tile {child}"))?;
		match outcome {
			ChildOutcome::Dirtside => context.stats.add_dirtside(child.level),
			ChildOutcome::Seaside => {
				context.seaside.append(child);
				context.stats.add_seaside(child.level);
			}
			ChildOutcome::Subdivide(coastlines) => context.geo_queue.enqueue(GeoTask::new(child, coastlines))?,
			ChildOutcome::Finalized(feature) => {
				context.db_queue.enqueue(OutputTile { coord: child, feature })?;
				context.stats.add_finalized(child.level);
			}
		}
	}
	Ok(())
}
