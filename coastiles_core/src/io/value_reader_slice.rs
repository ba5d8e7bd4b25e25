use super::{SeekRead, ValueReader};
use anyhow::{Context, Result, ensure};
use byteorder::{ByteOrder, LittleEndian};
use std::{io::Cursor, marker::PhantomData};

/// Reads values from a borrowed byte slice.
pub struct ValueReaderSlice<'a, E: ByteOrder> {
	_phantom: PhantomData<E>,
	cursor: Cursor<&'a [u8]>,
	len: u64,
}

impl<'a, E: ByteOrder> ValueReaderSlice<'a, E> {
	#[must_use]
	pub fn new(slice: &'a [u8]) -> ValueReaderSlice<'a, E> {
		ValueReaderSlice {
			_phantom: PhantomData,
			len: slice.len() as u64,
			cursor: Cursor::new(slice),
		}
	}
}

impl<'a> ValueReaderSlice<'a, LittleEndian> {
	#[must_use]
	pub fn new_le(slice: &'a [u8]) -> ValueReaderSlice<'a, LittleEndian> {
		ValueReaderSlice::new(slice)
	}
}

impl SeekRead for Cursor<&[u8]> {}

impl<'a, E: ByteOrder + 'a> ValueReader<'a, E> for ValueReaderSlice<'a, E> {
	fn get_reader(&mut self) -> &mut dyn SeekRead {
		&mut self.cursor
	}

	fn len(&self) -> u64 {
		self.len
	}

	fn position(&mut self) -> u64 {
		self.cursor.position()
	}

	fn get_sub_reader<'b>(&'b mut self, length: u64) -> Result<Box<dyn ValueReader<'b, E> + 'b>>
	where
		E: 'b,
	{
		let start = self.cursor.position();
		let end = start + length;
		ensure!(
			end <= self.len,
			"sub-reader of {length} bytes at {start} exceeds data length {}",
			self.len
		);

		self.cursor.set_position(end);
		let slice = self
			.cursor
			.get_ref()
			.get(start as usize..end as usize)
			.context("sub-reader out of bounds")?;
		Ok(Box::new(ValueReaderSlice::<E>::new(slice)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn words() -> Result<()> {
		let mut reader = ValueReaderSlice::new_le(&[0x0F, 0, 0, 0, 4, 3, 2, 1]);
		assert_eq!(reader.len(), 8);
		assert_eq!(reader.read_u32()?, 15);
		assert_eq!(reader.read_u32()?, 0x0102_0304);
		assert!(reader.read_u32().is_err());
		Ok(())
	}

	#[test]
	fn sub_reader_advances_parent() -> Result<()> {
		let data = [0x01, 0x02, 0x03, 0x04, 0x05];
		let mut reader = ValueReaderSlice::new_le(&data);
		{
			let mut sub = reader.get_sub_reader(3)?;
			assert_eq!(sub.len(), 3);
			assert_eq!(sub.read_varint()?, 1);
			assert_eq!(sub.remaining(), 2);
		}
		assert_eq!(reader.position(), 3);
		assert_eq!(reader.read_varint()?, 4);
		Ok(())
	}

	#[test]
	fn sub_reader_out_of_bounds() {
		let mut reader = ValueReaderSlice::new_le(&[1, 2, 3]);
		assert!(reader.get_sub_reader(5).is_err());
	}
}
