//! The [`ValueWriter`] trait: byte-order aware writing of words, varints and protobuf-style fields.
//!
//! Implementors only provide the underlying [`Write`] and the current position. Everything
//! else is built on top of these two methods.
//!
//! ```rust
//! use coastiles_core::io::{ValueWriter, ValueWriterBlob};
//!
//! let mut writer = ValueWriterBlob::new_le();
//! writer.write_pbf_key(6, 2).unwrap();
//! writer.write_pbf_packed_uint32(&[9, 50, 34]).unwrap();
//! assert_eq!(writer.into_blob().into_vec(), vec![0x32, 3, 9, 50, 34]);
//! ```

use super::ValueWriterBlob;
use crate::Blob;
use anyhow::{Context, Result};
use byteorder::{ByteOrder, WriteBytesExt};
use std::io::Write;

/// Protobuf wire type of varint fields.
pub const PBF_VARINT: u8 = 0;
/// Protobuf wire type of length-delimited fields.
pub const PBF_LENGTH_DELIMITED: u8 = 2;

/// Writes values to an underlying [`Write`] using the byte order `E`.
pub trait ValueWriter<E: ByteOrder> {
	fn get_writer(&mut self) -> &mut dyn Write;

	/// Number of bytes written so far.
	fn position(&mut self) -> Result<u64>;

	fn is_empty(&mut self) -> Result<bool> {
		Ok(self.position()? == 0)
	}

	/// Writes `value` as an unsigned LEB128 varint.
	fn write_varint(&mut self, mut value: u64) -> Result<()> {
		while value >= 0x80 {
			self.get_writer().write_all(&[((value & 0x7F) as u8) | 0x80])?;
			value >>= 7;
		}
		self.get_writer().write_all(&[value as u8])?;
		Ok(())
	}

	fn write_u32(&mut self, value: u32) -> Result<()> {
		Ok(self.get_writer().write_u32::<E>(value)?)
	}

	fn write_blob(&mut self, blob: &Blob) -> Result<()> {
		self.get_writer().write_all(blob.as_slice())?;
		Ok(())
	}

	fn write_string(&mut self, text: &str) -> Result<()> {
		self.get_writer().write_all(text.as_bytes())?;
		Ok(())
	}

	/// Writes the key of a protobuf field: `(field_number << 3) | wire_type`.
	fn write_pbf_key(&mut self, field_number: u32, wire_type: u8) -> Result<()> {
		self
			.write_varint((u64::from(field_number) << 3) | u64::from(wire_type))
			.context("Failed to write PBF key")
	}

	/// Writes a length-prefixed block of varints.
	fn write_pbf_packed_uint32(&mut self, data: &[u32]) -> Result<()> {
		let mut writer = ValueWriterBlob::new_le();
		for &value in data {
			writer.write_varint(u64::from(value))?;
		}
		self
			.write_pbf_blob(&writer.into_blob())
			.context("Failed to write packed uint32 field")
	}

	fn write_pbf_blob(&mut self, blob: &Blob) -> Result<()> {
		self.write_varint(blob.len())?;
		self.write_blob(blob).context("Failed to write PBF blob")
	}

	fn write_pbf_string(&mut self, text: &str) -> Result<()> {
		self.write_varint(text.len() as u64)?;
		self.write_string(text).context("Failed to write PBF string")
	}
}
