use log::info;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by all workers.
///
/// Progress is measured in tiles of `max_level`: a tile settled at level `z` accounts for
/// `4^(max_level - z)` of the `4^max_level` total.
pub struct CoastlineStats {
	max_level: u8,
	progress: AtomicU64,
	fully_seaside: AtomicU64,
	fully_dirtside: AtomicU64,
	finalized: AtomicU64,
}

impl CoastlineStats {
	pub fn new(max_level: u8) -> CoastlineStats {
		CoastlineStats {
			max_level,
			progress: AtomicU64::new(0),
			fully_seaside: AtomicU64::new(0),
			fully_dirtside: AtomicU64::new(0),
			finalized: AtomicU64::new(0),
		}
	}

	fn total(&self) -> u64 {
		1 << (2 * u32::from(self.max_level))
	}

	pub fn add_seaside(&self, level: u8) {
		self.fully_seaside.fetch_add(1, Ordering::Relaxed);
		self.report_progress(level);
	}

	pub fn add_dirtside(&self, level: u8) {
		self.fully_dirtside.fetch_add(1, Ordering::Relaxed);
		self.report_progress(level);
	}

	pub fn add_finalized(&self, level: u8) {
		self.finalized.fetch_add(1, Ordering::Relaxed);
		self.report_progress(level);
	}

	/// Logs whenever the progress crosses a multiple of 5%.
	fn report_progress(&self, level: u8) {
		let increment = 1u64 << (2 * u32::from(self.max_level.saturating_sub(level)));
		let post = self.progress.fetch_add(increment, Ordering::Relaxed) + increment;
		let pre = post - increment;
		let total = self.total();

		let pre_step = pre * 20 / total;
		let post_step = post * 20 / total;
		if pre == 0 || post == total || pre_step != post_step {
			info!("process coastline: {}%", post_step * 5);
		}
	}

	/// Fraction of the tile universe settled so far, in `0.0..=1.0`.
	pub fn progress(&self) -> f64 {
		self.progress.load(Ordering::Relaxed) as f64 / self.total() as f64
	}

	pub fn fully_seaside(&self) -> u64 {
		self.fully_seaside.load(Ordering::Relaxed)
	}

	pub fn fully_dirtside(&self) -> u64 {
		self.fully_dirtside.load(Ordering::Relaxed)
	}

	pub fn finalized(&self) -> u64 {
		self.finalized.load(Ordering::Relaxed)
	}

	pub fn summary(&self) {
		info!(
			"fully seaside: {}, fully dirtside: {}, finalized: {}",
			self.fully_seaside(),
			self.fully_dirtside(),
			self.finalized()
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn progress_is_weighted_by_level() {
		let stats = CoastlineStats::new(3);
		stats.add_seaside(1);
		assert_eq!(stats.progress(), 0.25);
		stats.add_dirtside(2);
		stats.add_finalized(3);
		assert_eq!(stats.progress(), 0.25 + 1.0 / 16.0 + 1.0 / 64.0);
		assert_eq!(
			(stats.fully_seaside(), stats.fully_dirtside(), stats.finalized()),
			(1, 1, 1)
		);
	}

	#[test]
	fn full_coverage_reaches_one() {
		let stats = CoastlineStats::new(2);
		for _ in 0..3 {
			stats.add_seaside(1);
		}
		for _ in 0..4 {
			stats.add_dirtside(2);
		}
		assert_eq!(stats.progress(), 1.0);
	}
}
