use super::super::NUM_LANES;

// Lanes are stored row after row, so column x is every fifth lane from x.
pub fn theta(lanes: &mut [u64; NUM_LANES]) {
	let mut parities = [0u64; 5];

	for (i, &lane) in lanes.iter().enumerate() {
		parities[i % 5] ^= lane;
	}

	for x in 0 .. 5 {
		let d = parities[(x + 4) % 5] ^ parities[(x + 1) % 5].rotate_left(1);

		for lane in lanes.iter_mut().skip(x).step_by(5) {
			*lane ^= d;
		}
	}
}

#[cfg(test)]
use super::super::index;

#[test]
fn test_single_bit_spreads_to_two_columns() {
	let mut lanes = [0; NUM_LANES];
	lanes[index(2, 3)] = 1;

	theta(&mut lanes);

	for y in 0 .. 5 {
		// column 3 sees column 2 as its left neighbour, column 1 sees it rotated
		assert_eq!(lanes[index(3, y)], 1);
		assert_eq!(lanes[index(1, y)], 2);
		assert_eq!(lanes[index(0, y)], 0);
		assert_eq!(lanes[index(4, y)], 0);
	}

	assert_eq!(lanes[index(2, 3)], 1);
	assert_eq!(lanes[index(2, 0)], 0);
}

#[test]
fn test_even_columns_are_fixed() {
	// every column has even parity, so nothing moves
	let mut lanes = [0; NUM_LANES];
	lanes[index(0, 1)] = 0xdead_beef;
	lanes[index(0, 4)] = 0xdead_beef;
	lanes[index(3, 0)] = u64::MAX;
	lanes[index(3, 2)] = u64::MAX;

	let before = lanes;
	theta(&mut lanes);

	assert_eq!(lanes, before);
}
