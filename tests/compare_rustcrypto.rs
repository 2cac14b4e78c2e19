//! Byte-for-byte comparison against the RustCrypto `sha3` crate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha3::digest::{Digest, ExtendableOutput, Update, XofReader};
use tiny_sha3::{hash, Sha3, Shake, Width};

fn reference(width: Width, msg: &[u8]) -> Vec<u8> {
	match width {
		Width::W224 => sha3::Sha3_224::digest(msg).to_vec(),
		Width::W256 => sha3::Sha3_256::digest(msg).to_vec(),
		Width::W384 => sha3::Sha3_384::digest(msg).to_vec(),
		Width::W512 => sha3::Sha3_512::digest(msg).to_vec(),
	}
}

fn message(len: usize, seed: u64) -> Vec<u8> {
	let mut rng = StdRng::seed_from_u64(seed);
	(0 .. len).map(|_| rng.gen()).collect()
}

#[test]
fn one_shot_matches() {
	for width in Width::ALL {
		// covers every padding position for three blocks of the widest rate
		for len in 0 .. 3 * 144 + 2 {
			let msg = message(len, len as u64);
			assert_eq!(hash(&msg, width), reference(width, &msg), "{width}, len {len}");
		}
	}
}

#[test]
fn streaming_matches() {
	let mut rng = StdRng::seed_from_u64(0x5a3);

	for width in Width::ALL {
		for round in 0 .. 50 {
			let msg = message(rng.gen_range(0 .. 2000), round);
			let mut hasher = Sha3::new(width);

			let mut rest = &msg[..];

			while !rest.is_empty() {
				let take = rng.gen_range(0 ..= rest.len().min(300));
				hasher.absorb(&rest[.. take]).unwrap();
				rest = &rest[take ..];
			}

			assert_eq!(hasher.finalize().unwrap(), reference(width, &msg), "{width}, len {}", msg.len());
		}
	}
}

#[test]
fn shake_matches() {
	for (len, out_len) in [(0, 1), (3, 168), (167, 169), (168, 500), (1000, 1337)] {
		let msg = message(len, out_len as u64);

		let mut expected = vec![0; out_len];
		let mut reference = sha3::Shake128::default();
		reference.update(&msg);
		reference.finalize_xof().read(&mut expected);
		assert_eq!(tiny_sha3::shake128(&msg, out_len), expected, "SHAKE128 {len} -> {out_len}");

		let mut expected = vec![0; out_len];
		let mut reference = sha3::Shake256::default();
		reference.update(&msg);
		reference.finalize_xof().read(&mut expected);

		let mut shake = Shake::shake256();
		shake.absorb(&msg).unwrap();

		let mut out = vec![0; out_len];
		for chunk in out.chunks_mut(100) {
			shake.squeeze(chunk).unwrap();
		}

		assert_eq!(out, expected, "SHAKE256 {len} -> {out_len}");
	}
}
