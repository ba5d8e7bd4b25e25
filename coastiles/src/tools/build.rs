use anyhow::Result;
use coastiles::{CoastlineConfig, loader::load_coastlines, process_coastlines, storage::SqliteTileStore};
use log::info;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// shapefile (*.shp) with the land polygons
	#[arg(required = true)]
	input_file: PathBuf,

	/// SQLite database receiving the water features and the seaside summary
	#[arg(required = true)]
	output_file: PathBuf,

	/// YAML file with run settings, overridden by the options below
	#[arg(long, short, value_name = "FILE")]
	config: Option<PathBuf>,

	/// level of the seed tiles
	#[arg(long, value_name = "LEVEL")]
	initial_level: Option<u8>,

	/// level at which mixed tiles are stored instead of subdivided
	#[arg(long, value_name = "LEVEL")]
	max_level: Option<u8>,

	/// number of worker threads, defaults to the number of CPUs
	#[arg(long, short)]
	workers: Option<usize>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let config = match &arguments.config {
		Some(path) => CoastlineConfig::from_path(path)?,
		None => CoastlineConfig::default(),
	}
	.with_overrides(arguments.initial_level, arguments.max_level, arguments.workers);
	config.verify()?;

	let coastlines = load_coastlines(&arguments.input_file)?;
	let mut store = SqliteTileStore::open(&arguments.output_file)?;
	let report = process_coastlines(coastlines, &mut store, &config)?;

	info!(
		"finished {:?}: {} finalized tiles, {} seaside tree nodes",
		arguments.output_file, report.finalized, report.seaside_nodes
	);
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn missing_input_names_the_path() {
		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("coastline.db");
		let err = run_command(vec![
			"coastiles",
			"build",
			"-q",
			"/does/not/exist.shp",
			output.to_str().unwrap(),
		])
		.unwrap_err();
		assert!(format!("{err:?}").contains("/does/not/exist.shp"));
	}

	#[test]
	fn invalid_levels_fail_before_loading() {
		let err = run_command(vec![
			"coastiles",
			"build",
			"-q",
			"--initial-level",
			"6",
			"--max-level",
			"5",
			"/does/not/exist.shp",
			"out.db",
		])
		.unwrap_err();
		assert!(err.to_string().contains("must be lower than max_level"), "{err}");
	}
}
