//! The sponge construction over Keccak-f[1600].

use super::padding::FINAL_BIT;
use super::{State, STATE_BYTES};
use crate::Error;

/// Where a [`Sponge`] is in its absorb-then-squeeze lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	Empty,
	Absorbing,
	Squeezing,
	Done,
}

/// An incremental sponge with a fixed rate and domain suffix.
///
/// Input is XORed straight into the state; a block is permuted as soon as it
/// fills up. The first squeeze pads whatever is left of the current block and
/// switches the sponge into output mode for good.
#[derive(Clone, Debug)]
pub struct Sponge {
	state: State,
	rate: usize,
	suffix: u8,
	// byte offset into the current block, for input or output depending on phase
	position: usize,
	phase: Phase,
}

impl Sponge {
	/// Creates an empty sponge absorbing `rate` bytes per block.
	///
	/// Panics unless `rate` is a whole number of lanes strictly between 0
	/// and the state size. That is a programming error, not an input error.
	pub fn new(rate: usize, suffix: u8) -> Self {
		assert!(
			rate > 0 && rate < STATE_BYTES && rate % 8 == 0,
			"invalid sponge rate: {}",
			rate,
		);

		Self {
			state: State::new(),
			rate,
			suffix,
			position: 0,
			phase: Phase::Empty,
		}
	}

	pub fn rate(&self) -> usize {
		self.rate
	}

	pub fn capacity(&self) -> usize {
		STATE_BYTES - self.rate
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn absorb(&mut self, mut bytes: &[u8]) -> Result<(), Error> {
		match self.phase {
			Phase::Empty => {
				log::trace!("sponge (rate {}) absorbing", self.rate);
				self.phase = Phase::Absorbing;
			},
			Phase::Absorbing => {},
			Phase::Squeezing | Phase::Done => return Err(Error::InvalidState),
		}

		while !bytes.is_empty() {
			let take = (self.rate - self.position).min(bytes.len());

			self.state.xor_bytes_at(self.position, &bytes[.. take]);
			self.position += take;
			bytes = &bytes[take ..];

			if self.position == self.rate {
				self.state.permute();
				self.position = 0;
			}
		}

		Ok(())
	}

	// the pending block always has room for at least one byte, since full
	// blocks are permuted eagerly
	fn pad(&mut self) {
		self.state.xor_bytes_at(self.position, &[self.suffix]);
		self.state.xor_bytes_at(self.rate - 1, &[FINAL_BIT]);
		self.state.permute();

		self.position = 0;
		self.phase = Phase::Squeezing;

		log::trace!("sponge (rate {}) squeezing", self.rate);
	}

	/// Fills `out` with the next output bytes. Can be called any number of times.
	pub fn squeeze(&mut self, mut out: &mut [u8]) -> Result<(), Error> {
		match self.phase {
			Phase::Empty | Phase::Absorbing => self.pad(),
			Phase::Squeezing => {},
			Phase::Done => return Err(Error::InvalidState),
		}

		while !out.is_empty() {
			if self.position == self.rate {
				self.state.permute();
				self.position = 0;
			}

			let take = (self.rate - self.position).min(out.len());
			let (chunk, rest) = core::mem::take(&mut out).split_at_mut(take);

			self.state.copy_bytes_at(self.position, chunk);
			self.position += take;
			out = rest;
		}

		Ok(())
	}

	/// Squeezes the last output and wipes the state. The sponge can't be used
	/// again until it is [reset](Self::reset).
	pub fn finish(&mut self, out: &mut [u8]) -> Result<(), Error> {
		self.squeeze(out)?;

		self.state.clear();
		self.position = 0;
		self.phase = Phase::Done;

		log::trace!("sponge (rate {}) done", self.rate);

		Ok(())
	}

	pub fn reset(&mut self) {
		self.state.clear();
		self.position = 0;
		self.phase = Phase::Empty;
	}
}

#[cfg(test)]
use alloc::vec;

#[test]
fn test_phases() {
	let mut sponge = Sponge::new(136, 0x06);
	assert_eq!(sponge.phase(), Phase::Empty);

	sponge.absorb(b"").unwrap();
	assert_eq!(sponge.phase(), Phase::Absorbing);

	let mut out = [0; 32];
	sponge.squeeze(&mut out).unwrap();
	assert_eq!(sponge.phase(), Phase::Squeezing);
	assert_eq!(sponge.absorb(b"more"), Err(Error::InvalidState));

	sponge.finish(&mut out).unwrap();
	assert_eq!(sponge.phase(), Phase::Done);
	assert_eq!(sponge.absorb(b"more"), Err(Error::InvalidState));
	assert_eq!(sponge.squeeze(&mut out), Err(Error::InvalidState));
	assert_eq!(sponge.finish(&mut out), Err(Error::InvalidState));

	sponge.reset();
	assert_eq!(sponge.phase(), Phase::Empty);
}

#[test]
fn test_split_absorb_matches_single_absorb() {
	let message: vec::Vec<u8> = (0 .. 500u32).map(|i| (i * 7) as u8).collect();

	let mut whole = Sponge::new(72, 0x06);
	whole.absorb(&message).unwrap();
	let mut expected = [0; 64];
	whole.squeeze(&mut expected).unwrap();

	for split in [0, 1, 71, 72, 73, 144, 499, 500] {
		let mut sponge = Sponge::new(72, 0x06);
		sponge.absorb(&message[.. split]).unwrap();
		sponge.absorb(&message[split ..]).unwrap();

		let mut out = [0; 64];
		sponge.squeeze(&mut out).unwrap();
		assert_eq!(out, expected, "split at {}", split);
	}
}

#[test]
fn test_split_squeeze_matches_single_squeeze() {
	let mut whole = Sponge::new(168, 0x1f);
	let mut expected = vec![0; 1000];
	whole.squeeze(&mut expected).unwrap();

	let mut sponge = Sponge::new(168, 0x1f);
	let mut out = vec![0; 1000];

	for chunk in out.chunks_mut(167) {
		sponge.squeeze(chunk).unwrap();
	}

	assert_eq!(out, expected);
}

#[test]
fn test_reset_starts_over() {
	let mut sponge = Sponge::new(136, 0x06);
	let mut first = [0; 32];
	sponge.absorb(b"abc").unwrap();
	sponge.finish(&mut first).unwrap();

	sponge.reset();
	let mut second = [0; 32];
	sponge.absorb(b"abc").unwrap();
	sponge.finish(&mut second).unwrap();

	assert_eq!(first, second);
}

#[test]
#[should_panic]
fn test_rejects_full_width_rate() {
	Sponge::new(STATE_BYTES, 0x06);
}

#[test]
#[should_panic]
fn test_rejects_partial_lane_rate() {
	Sponge::new(135, 0x06);
}
