//! A compact bitmask quadtree recording which tiles are fully covered by water.
//!
//! The tree is flattened breadth-first into `u32` words, one word per node that has at
//! least one partially covered child:
//!
//! | bits  | meaning                                          |
//! |-------|--------------------------------------------------|
//! | 0-3   | child `i` is fully seaside                       |
//! | 4-7   | child `i` has its own node                       |
//! | 8-31  | index of the first child node                    |
//!
//! Child nodes of one parent are stored contiguously, in child order
//! `(x & 1) + 2 * (y & 1)`. An empty tree has no words, a fully seaside world is the
//! single word `0x0F`.

use crate::{
	Blob, TileCoord,
	io::{ValueReader, ValueReaderSlice, ValueWriter, ValueWriterBlob},
};
use anyhow::{Context, Result, ensure};
use std::collections::VecDeque;

const FULL_MASK: u32 = 0x0F;
const SUBTREE_SHIFT: u32 = 4;
const OFFSET_SHIFT: u32 = 8;
const MAX_OFFSET: u32 = (1 << 24) - 1;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct SeasideTree {
	nodes: Vec<u32>,
}

enum BuildNode {
	Empty,
	Full,
	Partial(Box<[BuildNode; 4]>),
}

impl BuildNode {
	fn empty_children() -> Box<[BuildNode; 4]> {
		Box::new([BuildNode::Empty, BuildNode::Empty, BuildNode::Empty, BuildNode::Empty])
	}

	fn insert(&mut self, coord: &TileCoord, level: u8) {
		if matches!(self, BuildNode::Full) {
			return;
		}
		if level == coord.level {
			*self = BuildNode::Full;
			return;
		}
		if matches!(self, BuildNode::Empty) {
			*self = BuildNode::Partial(BuildNode::empty_children());
		}
		if let BuildNode::Partial(children) = self {
			children[coord.child_index_at(level + 1)].insert(coord, level + 1);
		}
	}

	/// Collapses uniform subtrees bottom-up.
	fn normalize(&mut self) {
		if let BuildNode::Partial(children) = self {
			children.iter_mut().for_each(BuildNode::normalize);
			if children.iter().all(|c| matches!(c, BuildNode::Full)) {
				*self = BuildNode::Full;
			} else if children.iter().all(|c| matches!(c, BuildNode::Empty)) {
				*self = BuildNode::Empty;
			}
		}
	}
}

impl SeasideTree {
	/// Builds the tree from the complete list of fully seaside tiles.
	pub fn new(tiles: &[TileCoord]) -> Result<SeasideTree> {
		let mut root = BuildNode::Empty;
		for coord in tiles {
			root.insert(coord, 0);
		}
		root.normalize();

		let children = match &root {
			BuildNode::Empty => return Ok(SeasideTree::default()),
			BuildNode::Full => return Ok(SeasideTree { nodes: vec![FULL_MASK] }),
			BuildNode::Partial(children) => children,
		};

		let mut nodes = Vec::new();
		let mut queue: VecDeque<&[BuildNode; 4]> = VecDeque::from([&**children]);
		let mut next_index: u32 = 1;
		while let Some(children) = queue.pop_front() {
			let mut word = 0u32;
			let mut subtrees = 0u32;
			for (index, child) in children.iter().enumerate() {
				match child {
					BuildNode::Empty => {}
					BuildNode::Full => word |= 1 << index,
					BuildNode::Partial(grandchildren) => {
						word |= 1 << (SUBTREE_SHIFT + index as u32);
						queue.push_back(grandchildren);
						subtrees += 1;
					}
				}
			}
			if subtrees > 0 {
				ensure!(
					next_index <= MAX_OFFSET,
					"seaside tree node index {next_index} exceeds 24 bits"
				);
				word |= next_index << OFFSET_SHIFT;
				next_index += subtrees;
			}
			nodes.push(word);
		}

		Ok(SeasideTree { nodes })
	}

	#[must_use]
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	#[must_use]
	pub fn nodes(&self) -> &[u32] {
		&self.nodes
	}

	/// True if `coord` lies inside an area recorded as fully seaside.
	///
	/// Visits at most `coord.level` words.
	#[must_use]
	pub fn contains(&self, coord: &TileCoord) -> bool {
		let Some(mut word) = self.nodes.first().copied() else {
			return false;
		};
		if coord.level == 0 {
			return word & FULL_MASK == FULL_MASK;
		}
		for level in 1..=coord.level {
			let child = coord.child_index_at(level) as u32;
			if word & (1 << child) != 0 {
				return true;
			}
			let subtrees = word >> SUBTREE_SHIFT;
			if subtrees & (1 << child) == 0 {
				return false;
			}
			let preceding = (subtrees & ((1 << child) - 1) & FULL_MASK).count_ones();
			let index = (word >> OFFSET_SHIFT) + preceding;
			word = match self.nodes.get(index as usize) {
				Some(word) => *word,
				None => return false,
			};
		}
		false
	}

	/// Word count followed by the words, little-endian.
	pub fn to_blob(&self) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_le();
		writer.write_u32(u32::try_from(self.nodes.len()).context("seaside tree too large")?)?;
		for word in &self.nodes {
			writer.write_u32(*word)?;
		}
		Ok(writer.into_blob())
	}

	pub fn from_blob(blob: &Blob) -> Result<SeasideTree> {
		let mut reader = ValueReaderSlice::new_le(blob.as_slice());
		let count = reader.read_u32().context("reading seaside tree node count")?;
		ensure!(
			u64::from(count) * 4 == reader.remaining(),
			"seaside tree blob holds {} bytes for {count} nodes",
			reader.remaining()
		);
		let mut nodes = Vec::with_capacity(count as usize);
		for _ in 0..count {
			nodes.push(reader.read_u32()?);
		}
		for (index, word) in nodes.iter().enumerate() {
			let subtrees = (word >> SUBTREE_SHIFT) & FULL_MASK;
			if subtrees == 0 {
				continue;
			}
			let first = word >> OFFSET_SHIFT;
			ensure!(
				first as usize > index && (first + subtrees.count_ones()) as usize <= nodes.len(),
				"seaside tree node {index} points outside the tree"
			);
		}
		Ok(SeasideTree { nodes })
	}
}

impl std::fmt::Debug for SeasideTree {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SeasideTree").field("nodes", &self.nodes.len()).finish()
	}
}
