//! Destinations for finalized tiles and the seaside summary.
//!
//! The scheduler drives a store from a single writer thread: features are inserted one
//! by one as they arrive, metadata is written once at the end of the run.

mod memory;
mod sqlite;

pub use memory::MemoryTileStore;
pub use sqlite::SqliteTileStore;

use anyhow::Result;
use coastiles_core::{Blob, TileCoord};

/// Metadata key of the serialized [`coastiles_core::SeasideTree`].
pub const META_KEY_SEASIDE_TREE: &str = "fully_seaside_tree";

pub trait TileStore {
	/// Stores one serialized feature for `coord`. A tile may hold several features.
	fn insert_feature(&mut self, coord: &TileCoord, feature: &Blob) -> Result<()>;

	/// Sets `key` to `value`, replacing a previous value.
	fn put_meta(&mut self, key: &str, value: &Blob) -> Result<()>;
}
