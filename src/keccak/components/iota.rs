use super::super::NUM_LANES;

pub fn iota(lanes: &mut [u64; NUM_LANES], round_constant: u64) {
	lanes[0] ^= round_constant;
}
