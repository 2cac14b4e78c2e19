use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tiny_sha3::padding::{pad, padded_len};
use tiny_sha3::{hash, Width};

fn bit_difference(a: &[u8], b: &[u8]) -> u32 {
	a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

#[test]
fn deterministic() {
	let mut rng = StdRng::seed_from_u64(1);

	for width in Width::ALL {
		let msg: Vec<u8> = (0 .. rng.gen_range(0 .. 400)).map(|_| rng.gen()).collect();
		assert_eq!(hash(&msg, width), hash(&msg, width));
	}
}

#[test]
fn avalanche() {
	let mut rng = StdRng::seed_from_u64(2);

	for width in Width::ALL {
		let bits = width.bits();
		let samples = 200;
		let mut total = 0;

		for _ in 0 .. samples {
			let mut msg: Vec<u8> = (0 .. rng.gen_range(1 .. 300)).map(|_| rng.gen()).collect();
			let original = hash(&msg, width);

			let bit = rng.gen_range(0 .. msg.len() * 8);
			msg[bit / 8] ^= 1 << (bit % 8);

			let flipped = hash(&msg, width);
			let diff = bit_difference(&original, &flipped);

			// far outside any plausible binomial tail
			assert!(diff > bits / 8 && diff < bits - bits / 8, "{width}: only {diff} bits changed");
			total += diff;
		}

		// mean over all samples lands close to half the output
		let mean = total as f64 / samples as f64;
		let half = bits as f64 / 2.0;
		assert!((mean - half).abs() < half * 0.05, "{width}: mean {mean} bits changed");
	}
}

#[test]
fn length_sensitivity_at_block_boundaries() {
	for width in Width::ALL {
		let rate = width.rate();

		for blocks in 1 .. 4 {
			let under = vec![0u8; rate * blocks - 1];
			let exact = vec![0u8; rate * blocks];
			let over = vec![0u8; rate * blocks + 1];

			// filling a block exactly costs a whole extra block of padding
			assert_eq!(padded_len(under.len(), rate).unwrap(), rate * blocks);
			assert_eq!(padded_len(exact.len(), rate).unwrap(), rate * (blocks + 1));
			assert_eq!(pad(&over, rate).unwrap().len(), rate * (blocks + 1));

			let digests = [hash(&under, width), hash(&exact, width), hash(&over, width)];

			assert_ne!(digests[0], digests[1], "{width}, {blocks} blocks");
			assert_ne!(digests[1], digests[2], "{width}, {blocks} blocks");
			assert_ne!(digests[0], digests[2], "{width}, {blocks} blocks");
		}
	}
}
