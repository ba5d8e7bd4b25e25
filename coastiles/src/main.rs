mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<InfoLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Clip a coastline shapefile into water tiles
	Build(tools::build::Subcommand),

	/// Show what a coastline database contains
	Probe(tools::probe::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Build(arguments) => tools::build::run(arguments),
		Commands::Probe(arguments) => tools::probe::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["coastiles"]).unwrap_err().to_string();
		assert!(err.starts_with("Builds water polygons and a fully-seaside tile summary"));
		assert!(err.contains("\nUsage: coastiles [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["coastiles", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("coastiles "));
	}

	#[test]
	fn build_subcommand() {
		let output = run_command(vec!["coastiles", "build"]).unwrap_err().to_string();
		assert!(output.starts_with("Clip a coastline shapefile into water tiles"));
	}

	#[test]
	fn probe_subcommand() {
		let output = run_command(vec!["coastiles", "probe"]).unwrap_err().to_string();
		assert!(output.starts_with("Show what a coastline database contains"));
	}
}
