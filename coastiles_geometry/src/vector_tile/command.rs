use anyhow::{Result, bail};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
	MoveTo = 1,
	LineTo = 2,
	ClosePath = 7,
}

impl Command {
	/// Packs the command id and repeat count into one command integer.
	#[must_use]
	pub fn encode(self, count: u32) -> u32 {
		(self as u32 & 0x7) | (count << 3)
	}

	/// Splits a command integer into command and repeat count.
	pub fn decode(value: u32) -> Result<(Command, u32)> {
		let command = match value & 0x7 {
			1 => Command::MoveTo,
			2 => Command::LineTo,
			7 => Command::ClosePath,
			id => bail!("unknown geometry command {id}"),
		};
		Ok((command, value >> 3))
	}
}
