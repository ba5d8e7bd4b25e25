//! Contains tile addresses, the fixed coordinate domain, binary value readers and writers, and the seaside summary.

pub mod io;

pub mod types;
pub use types::*;

mod concurrency;
pub use concurrency::*;

mod timer;
pub use timer::*;
