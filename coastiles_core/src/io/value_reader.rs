//! The [`ValueReader`] trait: the reading counterpart of [`ValueWriter`](super::ValueWriter).
//!
//! Implementors provide access to a seekable reader, its length and position, and a way to
//! split off bounded sub-readers for embedded protobuf messages.

use crate::Blob;
use anyhow::{Context, Result, bail};
use byteorder::{ByteOrder, ReadBytesExt};
use std::io::{Read, Seek};

pub trait SeekRead: Seek + Read {}

pub trait ValueReader<'a, E: ByteOrder + 'a> {
	fn get_reader(&mut self) -> &mut dyn SeekRead;

	fn len(&self) -> u64;

	fn position(&mut self) -> u64;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn remaining(&mut self) -> u64 {
		self.len() - self.position()
	}

	fn has_remaining(&mut self) -> bool {
		self.remaining() > 0
	}

	/// Reads an unsigned LEB128 varint of at most ten bytes.
	fn read_varint(&mut self) -> Result<u64> {
		let mut value = 0;
		let mut shift = 0;
		loop {
			let byte = self.get_reader().read_u8()?;
			value |= (u64::from(byte) & 0x7F) << shift;
			if byte & 0x80 == 0 {
				break;
			}
			shift += 7;
			if shift >= 70 {
				bail!("Varint too long");
			}
		}
		Ok(value)
	}

	fn read_u32(&mut self) -> Result<u32> {
		Ok(self.get_reader().read_u32::<E>()?)
	}

	fn read_blob(&mut self, length: u64) -> Result<Blob> {
		let mut buffer = vec![0u8; usize::try_from(length)?];
		self.get_reader().read_exact(&mut buffer)?;
		Ok(Blob::from(buffer))
	}

	fn read_string(&mut self, length: u64) -> Result<String> {
		let mut buffer = vec![0u8; usize::try_from(length)?];
		self.get_reader().read_exact(&mut buffer)?;
		Ok(String::from_utf8(buffer)?)
	}

	/// Reads a protobuf field key and returns `(field_number, wire_type)`.
	fn read_pbf_key(&mut self) -> Result<(u32, u8)> {
		let value = self.read_varint().context("Failed to read varint for PBF key")?;
		Ok(((value >> 3) as u32, (value & 0x07) as u8))
	}

	/// Returns a reader over the next `length` bytes and advances past them.
	fn get_sub_reader<'b>(&'b mut self, length: u64) -> Result<Box<dyn ValueReader<'b, E> + 'b>>
	where
		E: 'b;

	fn get_pbf_sub_reader<'b>(&'b mut self) -> Result<Box<dyn ValueReader<'b, E> + 'b>>
	where
		E: 'b,
	{
		let length = self.read_varint().context("Failed to read length of embedded message")?;
		self.get_sub_reader(length)
	}

	fn read_pbf_packed_uint32(&mut self) -> Result<Vec<u32>> {
		let mut reader = self.get_pbf_sub_reader()?;
		let mut values = Vec::new();
		while reader.has_remaining() {
			let value = reader.read_varint().context("Failed to read packed uint32")?;
			values.push(u32::try_from(value).context("packed value exceeds 32 bits")?);
		}
		Ok(values)
	}

	fn read_pbf_string(&mut self) -> Result<String> {
		let length = self.read_varint()?;
		self.read_string(length).context("Failed to read PBF string")
	}

	fn read_pbf_blob(&mut self) -> Result<Blob> {
		let length = self.read_varint()?;
		self.read_blob(length).context("Failed to read PBF blob")
	}
}

#[cfg(test)]
mod tests {
	use super::super::ValueReaderSlice;
	use super::*;

	#[test]
	fn varints() -> Result<()> {
		let mut reader = ValueReaderSlice::new_le(&[0xAC, 0x02, 0x01]);
		assert_eq!(reader.read_varint()?, 300);
		assert_eq!(reader.read_varint()?, 1);
		assert!(!reader.has_remaining());
		Ok(())
	}

	#[test]
	fn varint_too_long() {
		let mut reader = ValueReaderSlice::new_le(&[0x80; 11]);
		assert!(reader.read_varint().is_err());
	}

	#[test]
	fn pbf_fields() -> Result<()> {
		let data = [0x1A, 0x02, 0x00, 0x11, 0x22, 0x03, b'k', b'e', b'y', 0x32, 0x02, 0x07, 0x08];
		let mut reader = ValueReaderSlice::new_le(&data);
		assert_eq!(reader.read_pbf_key()?, (3, 2));
		assert_eq!(reader.read_pbf_packed_uint32()?, vec![0, 17]);
		assert_eq!(reader.read_pbf_key()?, (4, 2));
		assert_eq!(reader.read_pbf_string()?, "key");
		assert_eq!(reader.read_pbf_key()?, (6, 2));
		assert_eq!(reader.read_pbf_blob()?.as_slice(), &[7, 8]);
		assert_eq!(reader.remaining(), 0);
		Ok(())
	}

	#[test]
	fn truncated_blob() {
		let mut reader = ValueReaderSlice::new_le(&[0x05, 1, 2]);
		assert!(reader.read_pbf_blob().is_err());
	}
}
