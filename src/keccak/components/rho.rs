use super::super::{index, NUM_LANES};

// walks the 24 non-origin lanes in pi order, the t-th one rotating by
// (t + 1)(t + 2) / 2 mod 64
const fn compute_rotation_offsets() -> [u32; NUM_LANES] {
	let mut out = [0; NUM_LANES];
	let mut rotation_amount = 0;

	let mut x = 1;
	let mut y = 0;

	let mut t = 0;

	while t < 24 {
		rotation_amount += t + 1;
		out[index(x, y)] = (rotation_amount % 64) as u32;

		let new_x = y;
		let new_y = (2 * x + 3 * y) % 5;

		x = new_x;
		y = new_y;

		t += 1;
	}

	out
}

/// Rotation amount of each lane, indexed like the state.
pub const ROTATION_OFFSETS: [u32; NUM_LANES] = compute_rotation_offsets();

pub fn rho(lanes: &mut [u64; NUM_LANES]) {
	for (lane, &offset) in lanes.iter_mut().zip(ROTATION_OFFSETS.iter()) {
		*lane = lane.rotate_left(offset);
	}
}

#[test]
fn test_rotation_offsets() {
	assert_eq!(ROTATION_OFFSETS, [
		0, 1, 62, 28, 27,
		36, 44, 6, 55, 20,
		3, 10, 43, 25, 39,
		41, 45, 15, 21, 8,
		18, 2, 61, 56, 14,
	]);
}

#[test]
fn test_origin_lane_untouched() {
	let mut lanes = [0x8000_0000_0000_0001; NUM_LANES];
	rho(&mut lanes);

	assert_eq!(lanes[0], 0x8000_0000_0000_0001);
	assert_eq!(lanes[1], 0x0000_0000_0000_0003);
}
