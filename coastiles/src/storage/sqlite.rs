//! SQLite output, laid out like an MBTiles file but with one row per feature.
//!
//! ```sql
//! CREATE TABLE features (zoom_level integer, tile_column integer, tile_row integer, feature_data blob);
//! CREATE TABLE metadata (name text, value blob, UNIQUE (name));
//! ```
//!
//! `tile_row` counts from the top, like the tile address itself.

use super::TileStore;
use anyhow::{Context, Result, ensure};
use coastiles_core::{Blob, TileCoord};
use r2d2::Pool;
use r2d2_sqlite::{
	SqliteConnectionManager,
	rusqlite::{OpenFlags, OptionalExtension, params},
};
use std::path::{Path, PathBuf};

pub struct SqliteTileStore {
	path: PathBuf,
	pool: Pool<SqliteConnectionManager>,
}

impl SqliteTileStore {
	/// Opens or creates the database at `path` and ensures the tables exist.
	pub fn open(path: &Path) -> Result<SqliteTileStore> {
		let store = SqliteTileStore::connect(path, SqliteConnectionManager::file(path))?;
		store
			.pool
			.get()?
			.execute_batch(
				"
				CREATE TABLE IF NOT EXISTS metadata (name text, value blob, UNIQUE (name));
				CREATE TABLE IF NOT EXISTS features (zoom_level integer, tile_column integer, tile_row integer, feature_data blob);
				CREATE INDEX IF NOT EXISTS feature_index on features (zoom_level, tile_column, tile_row);
				",
			)
			.with_context(|| format!("Failed to create tables in {path:?}"))?;
		Ok(store)
	}

	/// Opens an existing database read-only.
	pub fn open_existing(path: &Path) -> Result<SqliteTileStore> {
		ensure!(path.exists(), "database {path:?} does not exist");
		let manager = SqliteConnectionManager::file(path).with_flags(OpenFlags::SQLITE_OPEN_READ_ONLY);
		SqliteTileStore::connect(path, manager)
	}

	fn connect(path: &Path, manager: SqliteConnectionManager) -> Result<SqliteTileStore> {
		let pool = Pool::builder()
			.max_size(4)
			.build(manager)
			.with_context(|| format!("Failed to open database {path:?}"))?;
		Ok(SqliteTileStore {
			path: path.to_path_buf(),
			pool,
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn feature_count(&self) -> Result<u64> {
		let count: i64 = self
			.pool
			.get()?
			.query_row("SELECT COUNT(*) FROM features", [], |row| row.get(0))?;
		Ok(count as u64)
	}

	pub fn get_features(&self, coord: &TileCoord) -> Result<Vec<Blob>> {
		let connection = self.pool.get()?;
		let mut statement = connection.prepare(
			"SELECT feature_data FROM features WHERE zoom_level = ?1 AND tile_column = ?2 AND tile_row = ?3 ORDER BY rowid",
		)?;
		let rows = statement.query_map(params![coord.level, coord.x, coord.y], |row| row.get::<_, Vec<u8>>(0))?;
		let mut features = Vec::new();
		for row in rows {
			features.push(Blob::from(row?));
		}
		Ok(features)
	}

	pub fn get_meta(&self, key: &str) -> Result<Option<Blob>> {
		let value = self
			.pool
			.get()?
			.query_row("SELECT value FROM metadata WHERE name = ?1", params![key], |row| {
				row.get::<_, Vec<u8>>(0)
			})
			.optional()?;
		Ok(value.map(Blob::from))
	}
}

impl TileStore for SqliteTileStore {
	fn insert_feature(&mut self, coord: &TileCoord, feature: &Blob) -> Result<()> {
		self
			.pool
			.get()?
			.execute(
				"INSERT INTO features (zoom_level, tile_column, tile_row, feature_data) VALUES (?1, ?2, ?3, ?4)",
				params![coord.level, coord.x, coord.y, feature.as_slice()],
			)
			.with_context(|| format!("Failed to insert feature for tile {coord} into {:?}", self.path))?;
		Ok(())
	}

	fn put_meta(&mut self, key: &str, value: &Blob) -> Result<()> {
		let mut connection = self.pool.get()?;
		let transaction = connection.transaction()?;
		transaction.execute(
			"INSERT OR REPLACE INTO metadata (name, value) VALUES (?1, ?2)",
			params![key, value.as_slice()],
		)?;
		transaction
			.commit()
			.with_context(|| format!("Failed to commit metadata '{key}' to {:?}", self.path))?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use tempfile::tempdir;

	#[test]
	fn write_and_read_back() -> Result<()> {
		let dir = tempdir()?;
		let path = dir.path().join("coastline.db");
		let coord = TileCoord::new(10, 512, 340)?;

		let mut store = SqliteTileStore::open(&path)?;
		store.insert_feature(&coord, &Blob::from(vec![1, 2, 3]))?;
		store.insert_feature(&coord, &Blob::from(vec![4]))?;
		store.insert_feature(&TileCoord::new(10, 0, 0)?, &Blob::from(vec![5]))?;
		store.put_meta("fully_seaside_tree", &Blob::from(vec![0, 0, 0, 0]))?;
		drop(store);

		let store = SqliteTileStore::open_existing(&path)?;
		assert_eq!(store.feature_count()?, 3);
		assert_eq!(
			store.get_features(&coord)?,
			vec![Blob::from(vec![1, 2, 3]), Blob::from(vec![4])]
		);
		assert!(store.get_features(&TileCoord::new(10, 1, 1)?)?.is_empty());
		assert_eq!(store.get_meta("fully_seaside_tree")?, Some(Blob::from(vec![0, 0, 0, 0])));
		assert_eq!(store.get_meta("missing")?, None);
		Ok(())
	}

	#[test]
	fn reopening_keeps_data() -> Result<()> {
		let dir = tempdir()?;
		let path = dir.path().join("coastline.db");
		SqliteTileStore::open(&path)?.put_meta("a", &Blob::from(vec![1]))?;

		let mut store = SqliteTileStore::open(&path)?;
		store.put_meta("a", &Blob::from(vec![2]))?;
		assert_eq!(store.get_meta("a")?, Some(Blob::from(vec![2])));
		assert_eq!(store.feature_count()?, 0);
		Ok(())
	}

	#[test]
	fn missing_database_names_the_path() {
		let err = SqliteTileStore::open_existing(Path::new("/does/not/exist.db"))
			.err()
			.unwrap();
		assert!(err.to_string().contains("/does/not/exist.db"), "{err}");
	}
}
