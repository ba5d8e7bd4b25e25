use super::TileStore;
use anyhow::Result;
use coastiles_core::{Blob, TileCoord};
use std::collections::{BTreeMap, HashMap};

/// Keeps everything in memory. Features are ordered by tile.
#[derive(Debug, Default)]
pub struct MemoryTileStore {
	features: BTreeMap<TileCoord, Vec<Blob>>,
	meta: HashMap<String, Blob>,
}

impl MemoryTileStore {
	pub fn new() -> MemoryTileStore {
		MemoryTileStore::default()
	}

	pub fn feature_count(&self) -> usize {
		self.features.values().map(Vec::len).sum()
	}

	pub fn get_features(&self, coord: &TileCoord) -> &[Blob] {
		self.features.get(coord).map(Vec::as_slice).unwrap_or_default()
	}

	pub fn iter_features(&self) -> impl Iterator<Item = (&TileCoord, &Blob)> {
		self.features.iter().flat_map(|(coord, blobs)| blobs.iter().map(move |blob| (coord, blob)))
	}

	pub fn get_meta(&self, key: &str) -> Option<&Blob> {
		self.meta.get(key)
	}
}

impl TileStore for MemoryTileStore {
	fn insert_feature(&mut self, coord: &TileCoord, feature: &Blob) -> Result<()> {
		self.features.entry(*coord).or_default().push(feature.clone());
		Ok(())
	}

	fn put_meta(&mut self, key: &str, value: &Blob) -> Result<()> {
		self.meta.insert(key.to_string(), value.clone());
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn features_accumulate_per_tile() -> Result<()> {
		let coord = TileCoord::new(3, 1, 2)?;
		let mut store = MemoryTileStore::new();
		store.insert_feature(&coord, &Blob::from(vec![1]))?;
		store.insert_feature(&coord, &Blob::from(vec![2]))?;
		store.insert_feature(&TileCoord::new(3, 0, 0)?, &Blob::from(vec![3]))?;

		assert_eq!(store.feature_count(), 3);
		assert_eq!(store.get_features(&coord), &[Blob::from(vec![1]), Blob::from(vec![2])]);
		assert!(store.get_features(&TileCoord::new(3, 7, 7)?).is_empty());

		let order: Vec<TileCoord> = store.iter_features().map(|(coord, _)| *coord).collect();
		assert_eq!(order, vec![TileCoord::new(3, 0, 0)?, coord, coord]);
		Ok(())
	}

	#[test]
	fn meta_is_replaced() -> Result<()> {
		let mut store = MemoryTileStore::new();
		store.put_meta("key", &Blob::from(vec![1]))?;
		store.put_meta("key", &Blob::from(vec![2]))?;
		assert_eq!(store.get_meta("key"), Some(&Blob::from(vec![2])));
		assert_eq!(store.get_meta("other"), None);
		Ok(())
	}
}
