use anyhow::Result;
use coastiles::{
	Coastline, CoastlineConfig, CoastlineReport, process_coastlines,
	storage::{META_KEY_SEASIDE_TREE, MemoryTileStore, SqliteTileStore},
};
use coastiles_core::{Blob, FixedBox, FixedPoint, SeasideTree, TileCoord, TileSpec};
use coastiles_geometry::{FixedGeometry, FixedPolygon, GeometryTrait, clip::box_polygon, feature::Feature};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn config(initial_level: u8, max_level: u8, workers: usize) -> CoastlineConfig {
	CoastlineConfig {
		initial_level,
		max_level,
		workers: Some(workers),
		poll_interval_ms: 5,
	}
}

fn coord(level: u8, x: u32, y: u32) -> TileCoord {
	TileCoord::new(level, x, y).unwrap()
}

/// A square island spanning 80..140 of 256 units per axis, one unit being 2^20.
fn island() -> Vec<Arc<Coastline>> {
	let (a, b) = (80 << 20, 140 << 20);
	let polygon = FixedPolygon::from(vec![vec![[a, a], [b, a], [b, b], [a, b], [a, a]]]);
	vec![Coastline::from_polygon(polygon).unwrap()]
}

fn run(coastlines: Vec<Arc<Coastline>>, config: &CoastlineConfig) -> Result<(CoastlineReport, MemoryTileStore)> {
	let mut store = MemoryTileStore::new();
	let report = process_coastlines(coastlines, &mut store, config)?;
	Ok((report, store))
}

fn seaside_tree(store: &MemoryTileStore) -> SeasideTree {
	SeasideTree::from_blob(store.get_meta(META_KEY_SEASIDE_TREE).unwrap()).unwrap()
}

#[test]
fn land_covering_the_world_is_dirtside() -> Result<()> {
	let world = TileSpec::new(coord(0, 0, 0))?;
	let polygon = box_polygon(&world.draw_bounds);
	let coastlines = vec![Coastline::from_multi_polygon(polygon.into())?];

	let (report, store) = run(coastlines, &config(0, 3, 2))?;
	assert_eq!(
		report,
		CoastlineReport {
			fully_seaside: 0,
			fully_dirtside: 4,
			finalized: 0,
			seaside_nodes: 0,
		}
	);
	assert_eq!(store.feature_count(), 0);
	assert!(seaside_tree(&store).is_empty());
	Ok(())
}

#[test]
fn no_coastlines_is_all_seaside() -> Result<()> {
	let (report, store) = run(Vec::new(), &config(2, 4, 3))?;
	assert_eq!(report.fully_seaside, 64);
	assert_eq!(report.fully_dirtside, 0);
	assert_eq!(report.finalized, 0);
	assert_eq!(store.feature_count(), 0);

	let tree = seaside_tree(&store);
	for coord in TileCoord::iter_level(2) {
		assert!(tree.contains(&coord), "{coord}");
	}
	Ok(())
}

#[test]
fn island_tiles() -> Result<()> {
	let (report, store) = run(island(), &config(0, 3, 4))?;
	assert!(report.finalized > 0);
	assert!(report.fully_seaside > 0);
	assert!(report.fully_dirtside > 0);
	assert_eq!(store.feature_count() as u64, report.finalized);

	let tree = seaside_tree(&store);
	assert_eq!(tree.node_count(), report.seaside_nodes);
	// open sea in the north-west, the island's interior is land
	assert!(tree.contains(&coord(3, 0, 0)));
	assert!(!tree.contains(&coord(3, 3, 3)));
	assert!(store.get_features(&coord(3, 3, 3)).is_empty());

	for (coord, blob) in store.iter_features() {
		assert_eq!(coord.level, 3);
		assert!(!tree.contains(coord), "{coord} is both seaside and finalized");

		let spec = TileSpec::new(*coord)?;
		let feature = Feature::deserialize(blob, &spec)?;
		let FixedGeometry::MultiPolygon(water) = &feature.geometry else {
			panic!("{coord} holds a {}", feature.geometry.type_name());
		};
		let bbox = water.bounding_box().unwrap();
		let draw = spec.to_pixel_box(&spec.draw_bounds);
		let insert = spec.to_pixel_box(&spec.insert_bounds);
		assert!(draw.contains_box(&bbox), "{coord}: {bbox:?} outside {draw:?}");
		assert!(insert.touches(&bbox), "{coord}: {bbox:?} misses {insert:?}");
		assert!(water.area2() > 0);
	}
	Ok(())
}

#[test]
fn island_coast_tile_holds_water_around_the_corner() -> Result<()> {
	// tile 3/2/2 spans 64..96 per axis, the island covers its south-east from 80 on
	let (_, store) = run(island(), &config(1, 3, 2))?;
	let tile = coord(3, 2, 2);
	let blobs = store.get_features(&tile);
	assert_eq!(blobs.len(), 1);

	let spec = TileSpec::new(tile)?;
	let feature = Feature::deserialize(&blobs[0], &spec)?;
	let FixedGeometry::MultiPolygon(water) = feature.geometry else {
		panic!("expected water polygons");
	};

	// draw rectangle minus the island's north-west corner, in tile pixels
	let p = spec.pixel_bounds.min;
	let (lo, hi, corner) = (p.x - 128, p.x + 4096 + 128, p.x + 2048);
	let area = (hi - lo) * (hi - lo) - (hi - corner) * (hi - corner);
	assert_eq!(water.area2(), 2 * i128::from(area));
	Ok(())
}

#[test]
fn runs_are_deterministic() -> Result<()> {
	let collect = |store: &MemoryTileStore| -> Vec<(TileCoord, Blob)> {
		store.iter_features().map(|(coord, blob)| (*coord, blob.clone())).collect()
	};

	let (report1, store1) = run(island(), &config(0, 4, 1))?;
	let (report2, store2) = run(island(), &config(0, 4, 6))?;
	assert_eq!(report1, report2);
	assert_eq!(collect(&store1), collect(&store2));
	assert_eq!(
		store1.get_meta(META_KEY_SEASIDE_TREE),
		store2.get_meta(META_KEY_SEASIDE_TREE)
	);
	Ok(())
}

#[test]
fn results_land_in_sqlite() -> Result<()> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("coastline.db");

	let mut store = SqliteTileStore::open(&path)?;
	let report = process_coastlines(island(), &mut store, &config(0, 3, 2))?;
	drop(store);

	let store = SqliteTileStore::open_existing(&path)?;
	assert_eq!(store.feature_count()?, report.finalized);
	let blob = store.get_meta(META_KEY_SEASIDE_TREE)?.unwrap();
	assert_eq!(SeasideTree::from_blob(&blob)?.node_count(), report.seaside_nodes);
	Ok(())
}

#[test]
fn contained_lake_survives_in_the_water_polygon() -> Result<()> {
	// a land square with a lake, both inside tile 3/5/5
	let tile = TileSpec::new(coord(3, 5, 5))?.insert_bounds;
	let unit = tile.width() / 32;
	let at = |x: i64, y: i64| [tile.min.x + x * unit, tile.min.y + y * unit];
	let land = FixedPolygon::from(vec![
		vec![at(4, 4), at(28, 4), at(28, 28), at(4, 28), at(4, 4)],
		vec![at(12, 12), at(12, 20), at(20, 20), at(20, 12), at(12, 12)],
	]);
	let (report, store) = run(vec![Coastline::from_polygon(land)?], &config(1, 3, 2))?;
	assert_eq!(report.finalized, 1);
	assert_eq!(report.fully_dirtside, 0);

	let spec = TileSpec::new(coord(3, 5, 5))?;
	let feature = Feature::deserialize(&store.get_features(&spec.coord)[0], &spec)?;
	let FixedGeometry::MultiPolygon(water) = feature.geometry else {
		panic!("expected water polygons");
	};
	// the sea around the island and the lake inside it
	assert_eq!(water.0.len(), 2);
	let lake = water.0.iter().find(|polygon| polygon.inners.is_empty()).unwrap();
	let lake_box = FixedBox::from_points(&lake.outer.0).unwrap();
	let p = spec.pixel_bounds.min;
	assert_eq!(lake_box.min, FixedPoint::new(p.x + 12 * 128, p.y + 12 * 128));
	assert_eq!(lake_box.max, FixedPoint::new(p.x + 20 * 128, p.y + 20 * 128));
	Ok(())
}
