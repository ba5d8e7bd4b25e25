//! [`Blob`]: an owned byte buffer for serialized features and the persisted seaside summary.

use std::fmt::Debug;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Blob(Vec<u8>);

impl Blob {
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_slice()
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Lowercase hex dump, separated by spaces.
	#[must_use]
	pub fn as_hex(&self) -> String {
		self.0.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(" ")
	}

	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Self {
		Blob(item)
	}
}

impl From<&[u8]> for Blob {
	fn from(item: &[u8]) -> Self {
		Blob(item.to_vec())
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.0.len() <= 16 {
			write!(f, "Blob({}: {})", self.0.len(), self.as_hex())
		} else {
			write!(f, "Blob({}: {} ...)", self.0.len(), Blob::from(&self.0[..16]).as_hex())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn basics() {
		let blob = Blob::from(vec![0x0f, 0x00, 0xab]);
		assert_eq!(blob.len(), 3);
		assert!(!blob.is_empty());
		assert_eq!(blob.as_hex(), "0f 00 ab");
		assert_eq!(format!("{blob:?}"), "Blob(3: 0f 00 ab)");
		assert_eq!(blob.into_vec(), vec![15, 0, 171]);
		assert!(Blob::new_empty().is_empty());
	}

	#[test]
	fn debug_is_truncated() {
		let blob = Blob::from(&[1u8; 20][..]);
		assert_eq!(
			format!("{blob:?}"),
			"Blob(20: 01 01 01 01 01 01 01 01 01 01 01 01 01 01 01 01 ...)"
		);
	}
}
