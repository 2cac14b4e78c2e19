//! The Keccak-f[1600] permutation and the sponge functions built on it.

mod round_constants;

pub use round_constants::ROUND_CONSTANTS;

mod components {
	pub mod chi;
	pub mod iota;
	pub mod pi;
	pub mod rho;
	pub mod theta;
}

use components::chi::chi;
use components::iota::iota;
use components::pi::pi;
use components::rho::rho;
use components::theta::theta;

pub mod padding;
pub mod sha3;
pub mod shake;
pub mod sponge;

/// Number of rounds in Keccak-f[1600]: `12 + 2 * log2(64)`.
pub const NUM_ROUNDS: usize = 24;

/// Number of 64-bit lanes in the state.
pub const NUM_LANES: usize = 25;

/// Size of the state in bytes (1600 bits).
pub const STATE_BYTES: usize = 8 * NUM_LANES;

/// Flat index of lane (x, y). Both coordinates wrap modulo 5.
pub const fn index(x: usize, y: usize) -> usize {
	x % 5 + 5 * (y % 5)
}

/// One round of Keccak-f[1600].
pub fn keccak_round(lanes: &mut [u64; NUM_LANES], round_constant: u64) {
	theta(lanes);
	rho(lanes);
	pi(lanes);
	chi(lanes);
	iota(lanes, round_constant);
}

/// The full 24-round Keccak-f[1600] permutation.
pub fn keccak_f1600(lanes: &mut [u64; NUM_LANES]) {
	keccak_f1600_observed(lanes, |_| {});
}

pub(crate) fn keccak_f1600_observed(lanes: &mut [u64; NUM_LANES], mut on_round: impl FnMut(usize)) {
	for (round, &round_constant) in ROUND_CONSTANTS.iter().enumerate() {
		keccak_round(lanes, round_constant);
		on_round(round);
	}
}

/// The 1600-bit Keccak state, stored as 25 little-endian lanes.
///
/// Byte `i` of the state is byte `i % 8` of lane `i / 8`, which is the
/// layout FIPS 202 uses when absorbing and squeezing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
	lanes: [u64; NUM_LANES],
}

impl State {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_lanes(lanes: [u64; NUM_LANES]) -> Self {
		Self {lanes}
	}

	pub fn lanes(&self) -> &[u64; NUM_LANES] {
		&self.lanes
	}

	pub fn lane(&self, x: usize, y: usize) -> u64 {
		self.lanes[index(x, y)]
	}

	pub fn permute(&mut self) {
		keccak_f1600(&mut self.lanes);
	}

	/// XORs `bytes` into the state starting at byte `offset`.
	///
	/// Panics if `offset + bytes.len()` exceeds [`STATE_BYTES`].
	pub fn xor_bytes_at(&mut self, offset: usize, bytes: &[u8]) {
		assert!(offset + bytes.len() <= STATE_BYTES);

		for (i, &byte) in bytes.iter().enumerate() {
			let pos = offset + i;
			self.lanes[pos / 8] ^= (byte as u64) << (8 * (pos % 8));
		}
	}

	pub fn xor_bytes(&mut self, bytes: &[u8]) {
		self.xor_bytes_at(0, bytes);
	}

	/// Copies state bytes starting at `offset` into `out`.
	///
	/// Panics if `offset + out.len()` exceeds [`STATE_BYTES`].
	pub fn copy_bytes_at(&self, offset: usize, out: &mut [u8]) {
		assert!(offset + out.len() <= STATE_BYTES);

		for (i, byte) in out.iter_mut().enumerate() {
			let pos = offset + i;
			*byte = (self.lanes[pos / 8] >> (8 * (pos % 8))) as u8;
		}
	}

	pub fn copy_bytes(&self, out: &mut [u8]) {
		self.copy_bytes_at(0, out);
	}

	/// Zeroes every lane.
	pub fn clear(&mut self) {
		self.lanes = [0; NUM_LANES];
	}
}

#[test]
fn test_index_wraps() {
	assert_eq!(index(0, 0), 0);
	assert_eq!(index(4, 0), 4);
	assert_eq!(index(0, 1), 5);
	assert_eq!(index(4, 4), 24);
	assert_eq!(index(5, 7), index(0, 2));
}

#[test]
fn test_round_count() {
	let mut rounds = alloc::vec::Vec::new();
	let mut lanes = [0x0123_4567_89ab_cdef; NUM_LANES];

	keccak_f1600_observed(&mut lanes, |round| rounds.push(round));

	assert_eq!(rounds.len(), NUM_ROUNDS);
	assert!(rounds.iter().enumerate().all(|(i, &round)| i == round));
}

#[test]
fn test_zero_state_permutation() {
	let mut state = State::new();
	state.permute();

	assert_eq!(state.lane(0, 0), 0xf1258f7940e1dde7);
	assert_eq!(state.lane(1, 0), 0x84d5ccf933c0478a);
}

#[test]
fn test_byte_layout() {
	let mut state = State::new();
	state.xor_bytes_at(7, &[0xaa, 0xbb]);

	assert_eq!(state.lanes()[0], 0xaa << 56);
	assert_eq!(state.lanes()[1], 0xbb);

	let mut out = [0; 3];
	state.copy_bytes_at(6, &mut out);
	assert_eq!(out, [0x00, 0xaa, 0xbb]);

	state.xor_bytes_at(7, &[0xaa, 0xbb]);
	assert_eq!(state, State::new());
}

#[test]
#[should_panic]
fn test_xor_past_end() {
	State::new().xor_bytes_at(STATE_BYTES - 3, &[0; 4]);
}

#[test]
#[should_panic]
fn test_copy_past_end() {
	State::new().copy_bytes_at(1, &mut [0; STATE_BYTES]);
}
