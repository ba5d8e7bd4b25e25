use anyhow::Result;
use coastiles::storage::{META_KEY_SEASIDE_TREE, SqliteTileStore};
use coastiles_core::{SeasideTree, TileCoord, TileSpec};
use coastiles_geometry::feature::Feature;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// coastline database written by `build`
	#[arg(required = true)]
	filename: PathBuf,

	/// tile to inspect, as z/x/y
	#[arg(long, short)]
	tile: Option<TileCoord>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let store = SqliteTileStore::open_existing(&arguments.filename)?;
	println!("features: {}", store.feature_count()?);

	let tree = match store.get_meta(META_KEY_SEASIDE_TREE)? {
		Some(blob) => Some(SeasideTree::from_blob(&blob)?),
		None => None,
	};
	match &tree {
		Some(tree) => println!("seaside tree nodes: {}", tree.node_count()),
		None => println!("seaside tree: missing"),
	}

	if let Some(coord) = &arguments.tile {
		let seaside = tree.as_ref().is_some_and(|tree| tree.contains(coord));
		println!("tile {coord}: fully seaside: {seaside}");

		let spec = TileSpec::new(*coord)?;
		for blob in store.get_features(coord)? {
			let feature = Feature::deserialize(&blob, &spec)?;
			println!(
				"  feature {} in layer {}: {}",
				feature.id,
				feature.layer,
				feature.geometry.type_name()
			);
		}
	}

	Ok(())
}
