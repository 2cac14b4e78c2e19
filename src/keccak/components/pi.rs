use super::super::{index, NUM_LANES};

pub fn pi(lanes: &mut [u64; NUM_LANES]) {
	let mut new_lanes = [0; NUM_LANES];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			new_lanes[index(y, 2 * x + 3 * y)] = lanes[index(x, y)];
		}
	}

	*lanes = new_lanes;
}

#[test]
fn test_relocation() {
	let mut lanes = [0; NUM_LANES];

	for (i, lane) in lanes.iter_mut().enumerate() {
		*lane = i as u64;
	}

	pi(&mut lanes);

	assert_eq!(lanes[index(0, 0)], index(0, 0) as u64);
	// (1, 0) moves to (0, 2)
	assert_eq!(lanes[index(0, 2)], index(1, 0) as u64);
	// (2, 3) moves to (3, 13 mod 5)
	assert_eq!(lanes[index(3, 3)], index(2, 3) as u64);

	let mut seen = lanes;
	seen.sort_unstable();
	assert!(seen.iter().enumerate().all(|(i, &lane)| lane == i as u64));
}
