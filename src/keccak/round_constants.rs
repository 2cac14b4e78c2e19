use super::NUM_ROUNDS;

/// The iota constants, one per round.
pub const ROUND_CONSTANTS: [u64; NUM_ROUNDS] = [
	0x0000000000000001, 0x0000000000008082, 0x800000000000808a, 0x8000000080008000,
	0x000000000000808b, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
	0x000000000000008a, 0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
	0x000000008000808b, 0x800000000000008b, 0x8000000000008089, 0x8000000000008003,
	0x8000000000008002, 0x8000000000000080, 0x000000000000800a, 0x800000008000000a,
	0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

// Bit t of the x^8 + x^6 + x^5 + x^4 + 1 LFSR sequence, FIPS 202 Algorithm 5.
// Bit k of the register holds R[k].
#[cfg(test)]
fn rc(t: usize) -> bool {
	let mut register: u16 = 1;

	for _ in 0 .. t % 255 {
		register <<= 1;

		if register & 0x100 != 0 {
			register ^= 0x171;
		}
	}

	register & 1 == 1
}

#[test]
fn test_round_constants_follow_lfsr() {
	for (round, &constant) in ROUND_CONSTANTS.iter().enumerate() {
		let mut expected = 0u64;

		for j in 0 ..= 6 {
			if rc(j + 7 * round) {
				expected |= 1 << ((1 << j) - 1);
			}
		}

		assert_eq!(constant, expected, "round {round}");
	}
}

#[test]
fn test_lfsr_output() {
	// feedback first reaches R[0] on the eighth step
	let head: alloc::vec::Vec<u8> = (0 .. 16).map(|t| rc(t) as u8).collect();
	assert_eq!(head, [1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 1]);
}
