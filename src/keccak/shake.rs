//! The SHAKE extendable-output functions.

use alloc::vec;
use alloc::vec::Vec;

use super::padding::SHAKE_SUFFIX;
use super::sponge::Sponge;
use crate::Error;

pub const SHAKE128_RATE: usize = 168;
pub const SHAKE256_RATE: usize = 136;

/// Incremental SHAKE128/SHAKE256.
///
/// Absorb the whole input first; after the first `squeeze` any amount of
/// output can be read in pieces, but no more input is accepted.
#[derive(Clone, Debug)]
pub struct Shake {
	sponge: Sponge,
}

impl Shake {
	pub fn shake128() -> Self {
		Self {sponge: Sponge::new(SHAKE128_RATE, SHAKE_SUFFIX)}
	}

	pub fn shake256() -> Self {
		Self {sponge: Sponge::new(SHAKE256_RATE, SHAKE_SUFFIX)}
	}

	pub fn absorb(&mut self, bytes: &[u8]) -> Result<(), Error> {
		self.sponge.absorb(bytes)
	}

	pub fn squeeze(&mut self, out: &mut [u8]) -> Result<(), Error> {
		self.sponge.squeeze(out)
	}
}

/// Returns `len` bytes of SHAKE128 output for `bytes`.
pub fn shake128(bytes: &[u8], len: usize) -> Vec<u8> {
	squeeze_all(Shake::shake128(), bytes, len)
}

/// Returns `len` bytes of SHAKE256 output for `bytes`.
pub fn shake256(bytes: &[u8], len: usize) -> Vec<u8> {
	squeeze_all(Shake::shake256(), bytes, len)
}

fn squeeze_all(mut shake: Shake, bytes: &[u8], len: usize) -> Vec<u8> {
	let mut out = vec![0; len];

	// a fresh sponge always accepts input and output
	let squeezed = shake.absorb(bytes).and_then(|()| shake.squeeze(&mut out));
	debug_assert!(squeezed.is_ok());

	out
}

#[test]
fn test_empty_inputs() {
	assert_eq!(
		shake128(b"", 8),
		[0x7f, 0x9c, 0x2b, 0xa4, 0xe8, 0x8f, 0x82, 0x7d],
	);

	assert_eq!(
		shake256(b"", 8),
		[0x46, 0xb9, 0xdd, 0x2b, 0x0b, 0xa8, 0x8d, 0x13],
	);
}

#[test]
fn test_output_is_a_stream() {
	let long = shake256(b"tiny", 3 * SHAKE256_RATE + 5);
	let short = shake256(b"tiny", 10);

	assert_eq!(&long[.. 10], &short[..]);

	let mut shake = Shake::shake256();
	shake.absorb(b"ti").unwrap();
	shake.absorb(b"ny").unwrap();

	let mut pieces = vec![0; long.len()];
	let (first, second) = pieces.split_at_mut(SHAKE256_RATE + 1);
	shake.squeeze(first).unwrap();
	shake.squeeze(second).unwrap();

	assert_eq!(pieces, long);
	assert_eq!(shake.absorb(b"late"), Err(Error::InvalidState));
}
