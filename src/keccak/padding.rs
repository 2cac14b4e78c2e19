//! Domain separation and pad10*1 framing.

use alloc::vec::Vec;

use super::STATE_BYTES;
use crate::Error;

/// Domain suffix for the fixed-output SHA-3 functions (`01` + first pad bit).
pub const SHA3_SUFFIX: u8 = 0x06;

/// Domain suffix for the SHAKE extendable-output functions (`1111` + first pad bit).
pub const SHAKE_SUFFIX: u8 = 0x1f;

/// The trailing `1` bit of pad10*1, always in the last byte of the block.
pub const FINAL_BIT: u8 = 0x80;

/// The smallest multiple of `rate` that leaves room for at least one padding byte.
pub fn padded_len(len: usize, rate: usize) -> Result<usize, Error> {
	if rate == 0 {
		return Err(Error::InvalidRate);
	}

	(len / rate + 1)
		.checked_mul(rate)
		.ok_or(Error::LengthOverflow(len))
}

/// Pads `input` for the SHA-3 hash functions.
///
/// The result is `input || 0x06 || 0x00.. || 0x80`, or `input || 0x86` when
/// only a single byte of padding fits.
pub fn pad(input: &[u8], rate: usize) -> Result<Vec<u8>, Error> {
	pad_with_suffix(input, rate, SHA3_SUFFIX)
}

pub fn pad_with_suffix(input: &[u8], rate: usize, suffix: u8) -> Result<Vec<u8>, Error> {
	let padded_len = padded_len(input.len(), rate)?;

	let mut out = Vec::with_capacity(padded_len);
	out.extend_from_slice(input);
	out.resize(padded_len, 0);

	out[input.len()] ^= suffix;
	out[padded_len - 1] ^= FINAL_BIT;

	Ok(out)
}

/// Splits a message into rate-sized blocks, padding the last one.
///
/// Yields the same blocks as [`pad_with_suffix`] without copying the whole
/// message. Only the first `rate` bytes of each block are meaningful; the
/// rest are zero.
pub struct PaddedBlocks<'a> {
	bytes: &'a [u8],
	rate: usize,
	suffix: u8,
	done: bool,
}

impl<'a> PaddedBlocks<'a> {
	/// Panics unless `0 < rate < STATE_BYTES`.
	pub fn new(bytes: &'a [u8], rate: usize, suffix: u8) -> Self {
		assert!(rate > 0 && rate < STATE_BYTES, "invalid sponge rate: {}", rate);

		Self {bytes, rate, suffix, done: false}
	}
}

impl<'a> Iterator for PaddedBlocks<'a> {
	type Item = [u8; STATE_BYTES];

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		let mut buf = [0; STATE_BYTES];
		let rate = self.rate;

		if self.bytes.len() >= rate {
			buf[.. rate].copy_from_slice(&self.bytes[.. rate]);
			self.bytes = &self.bytes[rate ..];
		} else {
			buf[.. self.bytes.len()].copy_from_slice(self.bytes);
			buf[self.bytes.len()] ^= self.suffix;
			buf[rate - 1] ^= FINAL_BIT;
			self.done = true;
		}

		Some(buf)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = if self.done {0} else {self.bytes.len() / self.rate + 1};

		(remaining, Some(remaining))
	}
}

impl<'a> ExactSizeIterator for PaddedBlocks<'a> {}

#[cfg(test)]
const RATE: usize = 136;

#[test]
fn test_padded_len() {
	assert_eq!(padded_len(0, RATE), Ok(RATE));
	assert_eq!(padded_len(RATE - 2, RATE), Ok(RATE));
	assert_eq!(padded_len(RATE - 1, RATE), Ok(RATE));
	assert_eq!(padded_len(RATE, RATE), Ok(2 * RATE));
	assert_eq!(padded_len(RATE + 1, RATE), Ok(2 * RATE));

	assert_eq!(padded_len(5, 0), Err(Error::InvalidRate));
	assert_eq!(padded_len(usize::MAX, 2), Err(Error::LengthOverflow(usize::MAX)));
}

#[test]
fn test_pad_empty() {
	let padded = pad(b"", RATE).unwrap();

	assert_eq!(padded.len(), RATE);
	assert_eq!(padded[0], 0x06);
	assert!(padded[1 .. RATE - 1].iter().all(|&b| b == 0));
	assert_eq!(padded[RATE - 1], 0x80);
}

#[test]
fn test_pad_two_bytes_short() {
	let input = [0xab; RATE - 2];
	let padded = pad(&input, RATE).unwrap();

	assert_eq!(padded.len(), RATE);
	assert_eq!(&padded[.. RATE - 2], &input[..]);
	assert_eq!(&padded[RATE - 2 ..], &[0x06, 0x80]);
}

#[test]
fn test_pad_one_byte_short() {
	let input = [0xab; RATE - 1];
	let padded = pad(&input, RATE).unwrap();

	assert_eq!(padded.len(), RATE);
	assert_eq!(&padded[.. RATE - 1], &input[..]);
	assert_eq!(padded[RATE - 1], 0x86);
}

#[test]
fn test_pad_full_block() {
	let input = [0xab; RATE];
	let padded = pad(&input, RATE).unwrap();

	assert_eq!(padded.len(), 2 * RATE);
	assert_eq!(&padded[.. RATE], &input[..]);
	assert_eq!(padded[RATE], 0x06);
	assert_eq!(padded[2 * RATE - 1], 0x80);
}

#[test]
fn test_shake_suffix_coincides_with_final_bit() {
	let padded = pad_with_suffix(&[0; 167], 168, SHAKE_SUFFIX).unwrap();

	assert_eq!(padded[167], 0x9f);
}

#[test]
fn test_blocks_match_pad() {
	let message: Vec<u8> = (0 .. 3 * RATE + 17).map(|i| i as u8).collect();

	for len in [0, 1, RATE - 1, RATE, RATE + 1, 2 * RATE, message.len()] {
		let padded = pad(&message[.. len], RATE).unwrap();
		let blocks = PaddedBlocks::new(&message[.. len], RATE, SHA3_SUFFIX);

		assert_eq!(blocks.len(), padded.len() / RATE);

		for (block, expected) in blocks.zip(padded.chunks_exact(RATE)) {
			assert_eq!(&block[.. RATE], expected);
			assert!(block[RATE ..].iter().all(|&b| b == 0));
		}
	}
}
