//! Sizing of the clipping worker pool.
//!
//! Clipping is CPU-bound, so the pool defaults to one worker per logical CPU.
//!
//! ```
//! use coastiles_core::ConcurrencyLimits;
//!
//! let limits = ConcurrencyLimits::from_requested(Some(3));
//! assert_eq!(limits.workers, 3);
//! assert!(ConcurrencyLimits::default().workers >= 1);
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcurrencyLimits {
	/// Number of worker threads processing clip tasks.
	pub workers: usize,
}

impl ConcurrencyLimits {
	/// Uses `requested` if given, otherwise the CPU count. Never returns zero workers.
	pub fn from_requested(requested: Option<usize>) -> Self {
		let workers = requested.unwrap_or_else(Self::cpu_count);
		Self { workers: workers.max(1) }
	}

	pub fn cpu_count() -> usize {
		num_cpus::get()
	}
}

impl Default for ConcurrencyLimits {
	fn default() -> Self {
		Self::from_requested(None)
	}
}
