//! Run settings, read from YAML.
//!
//! ```yaml
//! initial_level: 4
//! max_level: 10
//! workers: 8
//! poll_interval_ms: 100
//! ```

use anyhow::{Context, Result, ensure};
use coastiles_core::FIXED_LEVEL;
use serde::Deserialize;
use std::{fs::File, io::BufReader, io::Read, path::Path, time::Duration};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CoastlineConfig {
	/// Level of the seed tiles. Each seed carries the complete coastline set.
	#[serde(default = "default_initial_level")]
	pub initial_level: u8,

	/// Mixed tiles at this level are finalized instead of subdivided.
	#[serde(default = "default_max_level")]
	pub max_level: u8,

	/// Worker threads, defaults to the number of CPUs.
	#[serde(default)]
	pub workers: Option<usize>,

	/// How long an idle worker or the writer waits for a task before rechecking termination.
	#[serde(default = "default_poll_interval_ms")]
	pub poll_interval_ms: u64,
}

fn default_initial_level() -> u8 {
	4
}

fn default_max_level() -> u8 {
	10
}

fn default_poll_interval_ms() -> u64 {
	100
}

impl Default for CoastlineConfig {
	fn default() -> Self {
		CoastlineConfig {
			initial_level: default_initial_level(),
			max_level: default_max_level(),
			workers: None,
			poll_interval_ms: default_poll_interval_ms(),
		}
	}
}

impl CoastlineConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("Failed to open config file {path:?}"))?;
		CoastlineConfig::from_reader(BufReader::new(file)).with_context(|| format!("Failed to parse config file {path:?}"))
	}

	/// Replaces the values given on the command line.
	pub fn with_overrides(mut self, initial_level: Option<u8>, max_level: Option<u8>, workers: Option<usize>) -> Self {
		if let Some(level) = initial_level {
			self.initial_level = level;
		}
		if let Some(level) = max_level {
			self.max_level = level;
		}
		if workers.is_some() {
			self.workers = workers;
		}
		self
	}

	pub fn verify(&self) -> Result<()> {
		ensure!(
			self.initial_level < self.max_level,
			"initial_level ({}) must be lower than max_level ({})",
			self.initial_level,
			self.max_level
		);
		ensure!(
			self.max_level <= FIXED_LEVEL,
			"max_level ({}) must not exceed {FIXED_LEVEL}",
			self.max_level
		);
		ensure!(self.workers != Some(0), "workers must be at least 1");
		ensure!(self.poll_interval_ms > 0, "poll_interval_ms must be positive");
		Ok(())
	}

	#[must_use]
	pub fn poll_interval(&self) -> Duration {
		Duration::from_millis(self.poll_interval_ms)
	}
}
