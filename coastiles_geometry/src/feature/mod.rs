//! The stored feature: one geometry plus its layer, zoom range and attributes,
//! serialized as a small protobuf-style message.
//!
//! | field | wire type | content                                   |
//! |-------|-----------|-------------------------------------------|
//! | 1     | varint    | id                                        |
//! | 2     | varint    | layer                                     |
//! | 3     | packed    | zoom range `[min, max]`                   |
//! | 4     | embedded  | attribute `{1: key, 2: value}`, repeated  |
//! | 5     | varint    | geometry type                             |
//! | 6     | packed    | geometry commands                         |

use crate::{
	FixedGeometry,
	vector_tile::{GeomType, decode_geometry, encode_geometry},
};
use anyhow::{Context, Result, bail, ensure};
use byteorder::LE;
use coastiles_core::{
	Blob, TileSpec,
	io::{PBF_LENGTH_DELIMITED, PBF_VARINT, ValueReader, ValueReaderSlice, ValueWriter, ValueWriterBlob},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feature {
	pub id: u64,
	pub layer: u32,
	/// First and last zoom level the feature is valid for, `max` exclusive.
	pub zoom_range: (u32, u32),
	pub attributes: Vec<(String, String)>,
	pub geometry: FixedGeometry,
}

impl Feature {
	pub fn new(layer: u32, zoom_range: (u32, u32), geometry: FixedGeometry) -> Feature {
		Feature {
			id: 0,
			layer,
			zoom_range,
			attributes: Vec::new(),
			geometry,
		}
	}

	/// Serializes the feature for the tile described by `spec`.
	pub fn serialize(&self, spec: &TileSpec) -> Result<Blob> {
		let encoded = encode_geometry(&self.geometry, spec).context("Failed to encode feature geometry")?;
		let mut writer = ValueWriterBlob::new_le();

		writer.write_pbf_key(1, PBF_VARINT)?;
		writer.write_varint(self.id)?;

		writer.write_pbf_key(2, PBF_VARINT)?;
		writer.write_varint(u64::from(self.layer))?;

		writer.write_pbf_key(3, PBF_LENGTH_DELIMITED)?;
		writer.write_pbf_packed_uint32(&[self.zoom_range.0, self.zoom_range.1])?;

		for (key, value) in &self.attributes {
			let mut attribute = ValueWriterBlob::new_le();
			attribute.write_pbf_key(1, PBF_LENGTH_DELIMITED)?;
			attribute.write_pbf_string(key)?;
			attribute.write_pbf_key(2, PBF_LENGTH_DELIMITED)?;
			attribute.write_pbf_string(value)?;
			writer.write_pbf_key(4, PBF_LENGTH_DELIMITED)?;
			writer.write_pbf_blob(&attribute.into_blob())?;
		}

		writer.write_pbf_key(5, PBF_VARINT)?;
		writer.write_varint(encoded.geom_type.as_u64())?;

		if !encoded.commands.is_empty() {
			writer.write_pbf_key(6, PBF_LENGTH_DELIMITED)?;
			writer.write_pbf_packed_uint32(&encoded.commands)?;
		}

		Ok(writer.into_blob())
	}

	/// Parses a serialized feature. The geometry is returned in tile-pixel space of
	/// `spec`'s zoom level.
	pub fn deserialize(blob: &Blob, spec: &TileSpec) -> Result<Feature> {
		let mut reader = ValueReaderSlice::new_le(blob.as_slice());
		let mut feature = Feature::new(0, (0, 0), FixedGeometry::Null);
		let mut geom_type = GeomType::Unknown;
		let mut commands = Vec::new();

		while reader.has_remaining() {
			match reader.read_pbf_key().context("Failed to read PBF key")? {
				(1, PBF_VARINT) => feature.id = reader.read_varint().context("Failed to read feature id")?,
				(2, PBF_VARINT) => {
					feature.layer = u32::try_from(reader.read_varint()?).context("layer id exceeds 32 bits")?;
				}
				(3, PBF_LENGTH_DELIMITED) => {
					let range = reader.read_pbf_packed_uint32().context("Failed to read zoom range")?;
					ensure!(range.len() == 2, "zoom range must have 2 entries, found {}", range.len());
					feature.zoom_range = (range[0], range[1]);
				}
				(4, PBF_LENGTH_DELIMITED) => feature.attributes.push(read_attribute(&mut reader)?),
				(5, PBF_VARINT) => geom_type = GeomType::from(reader.read_varint()?),
				(6, PBF_LENGTH_DELIMITED) => {
					commands = reader.read_pbf_packed_uint32().context("Failed to read geometry")?;
				}
				(f, w) => bail!("Unexpected combination of field number ({f}) and wire type ({w})"),
			}
		}

		feature.geometry = decode_geometry(geom_type, &commands, spec).context("Failed to decode feature geometry")?;
		Ok(feature)
	}
}

fn read_attribute(reader: &mut ValueReaderSlice<'_, LE>) -> Result<(String, String)> {
	let mut reader = reader.get_pbf_sub_reader()?;
	let (mut key, mut value) = (None, None);
	while reader.has_remaining() {
		match reader.read_pbf_key()? {
			(1, PBF_LENGTH_DELIMITED) => key = Some(reader.read_pbf_string()?),
			(2, PBF_LENGTH_DELIMITED) => value = Some(reader.read_pbf_string()?),
			(f, w) => bail!("Unexpected attribute field ({f}) with wire type ({w})"),
		}
	}
	Ok((
		key.context("attribute without key")?,
		value.context("attribute without value")?,
	))
}
