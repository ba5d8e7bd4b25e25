use anyhow::Result;
use coastiles_core::{SeasideTree, TileCoord};
use parking_lot::Mutex;

/// Collects fully seaside tiles from all workers.
#[derive(Default)]
pub struct SeasideAccumulator {
	tiles: Mutex<Vec<TileCoord>>,
}

impl SeasideAccumulator {
	pub fn append(&self, coord: TileCoord) {
		self.tiles.lock().push(coord);
	}

	pub fn len(&self) -> usize {
		self.tiles.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.tiles.lock().is_empty()
	}

	/// Builds the summary once all workers are done.
	pub fn into_tree(self) -> Result<SeasideTree> {
		SeasideTree::new(&self.tiles.into_inner())
	}
}
