//! Zigzag mapping between signed integers and the unsigned varint domain.
//!
//! Small magnitudes map to small codes: `0, -1, 1, -2, 2` become `0, 1, 2, 3, 4`.

use anyhow::{Context, Result};

#[must_use]
pub fn zigzag_encode(value: i64) -> u64 {
	((value << 1) ^ (value >> 63)) as u64
}

#[must_use]
pub fn zigzag_decode(value: u64) -> i64 {
	((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Zigzag-encodes `value` and checks that the code fits into 32 bits.
pub fn zigzag_encode_u32(value: i64) -> Result<u32> {
	u32::try_from(zigzag_encode(value)).with_context(|| format!("value {value} does not fit into a 32 bit zigzag code"))
}
