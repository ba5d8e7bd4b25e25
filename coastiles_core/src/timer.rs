use log::info;
use std::time::{Duration, Instant};

/// Logs the wall time of a scope when dropped.
///
/// ```
/// use coastiles_core::ScopedTimer;
///
/// let timer = ScopedTimer::new("build seaside tree");
/// // ... work ...
/// drop(timer);
/// ```
pub struct ScopedTimer {
	label: String,
	start: Instant,
}

impl ScopedTimer {
	pub fn new(label: &str) -> ScopedTimer {
		ScopedTimer {
			label: label.to_string(),
			start: Instant::now(),
		}
	}

	#[must_use]
	pub fn elapsed(&self) -> Duration {
		self.start.elapsed()
	}
}

impl Drop for ScopedTimer {
	fn drop(&mut self) {
		info!("{}: {:.3}s", self.label, self.elapsed().as_secs_f64());
	}
}
