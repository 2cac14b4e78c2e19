use super::super::{index, NUM_LANES};

pub fn chi(lanes: &mut [u64; NUM_LANES]) {
	for y in 0 .. 5 {
		let mut row = [0u64; 5];

		for x in 0 .. 5 {
			row[x] = lanes[index(x, y)];
		}

		for x in 0 .. 5 {
			let xp1 = (x + 1) % 5;
			let xp2 = (x + 2) % 5;

			lanes[index(x, y)] = row[x] ^ (!row[xp1] & row[xp2]);
		}
	}
}

#[test]
fn test_row_nonlinearity() {
	let mut lanes = [0; NUM_LANES];
	lanes[index(2, 1)] = 0xff;

	chi(&mut lanes);

	// only lane x = 0 has lane 2 as its "two over" neighbour
	assert_eq!(lanes[index(0, 1)], 0xff);
	assert_eq!(lanes[index(1, 1)], 0);
	assert_eq!(lanes[index(2, 1)], 0xff);

	for x in 0 .. 5 {
		assert_eq!(lanes[index(x, 0)], 0);
	}
}
