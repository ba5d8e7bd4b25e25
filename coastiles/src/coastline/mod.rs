//! The quadtree refinement engine and the scheduler driving it.
//!
//! Seed tasks cover one level of the pyramid. A worker takes a task, classifies its
//! four children and either settles them (dirtside, seaside, finalized) or pushes them
//! back as new tasks. Finalized tiles travel through a second queue to the single writer.

mod finalize;
mod queue;
mod record;
mod refine;
mod scheduler;
mod seaside;
mod stats;
mod task;

pub use finalize::{COASTLINE_ZOOM_RANGE, LAYER_COASTLINE, finalize_tile};
pub use queue::WorkQueue;
pub use record::Coastline;
pub use refine::{ChildOutcome, classify_child};
pub use scheduler::{CoastlineReport, process_coastlines};
pub use seaside::SeasideAccumulator;
pub use stats::CoastlineStats;
pub use task::{GeoTask, OutputTile};
