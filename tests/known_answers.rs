//! Published FIPS 202 example values.

use tiny_sha3::{keccak_f1600, sha3, sha3_256, shake128, shake256, Sha3, Width};

const MSG_448: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

fn check(width: u32, msg: &[u8], expected: &str) {
	let digest = sha3(msg, width).unwrap();
	assert_eq!(hex::encode(digest), expected, "SHA3-{width} of {} bytes", msg.len());
}

#[test]
fn empty_message() {
	check(224, b"", "6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7");
	check(256, b"", "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a");
	check(
		384,
		b"",
		"0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f004",
	);
	check(
		512,
		b"",
		"a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
	);
}

#[test]
fn abc() {
	check(224, b"abc", "e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf");
	check(256, b"abc", "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532");
	check(
		384,
		b"abc",
		"ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b298d88cea927ac7f539f1edf228376d25",
	);
	check(
		512,
		b"abc",
		"b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
	);
}

#[test]
fn message_448_bits() {
	check(256, MSG_448, "41c0dba2a9d6240849100376a8235e2c82e1b9998a999e21db32dd97496d3376");
}

#[test]
fn one_million_a() {
	let mut hasher = Sha3::new(Width::W256);

	// uneven chunks so blocks straddle absorb calls
	for chunk in vec![b'a'; 1_000_000].chunks(1000 - 7) {
		hasher.absorb(chunk).unwrap();
	}

	assert_eq!(
		hex::encode(hasher.finalize().unwrap()),
		"5c8875ae474a3634ba4fd55ec85bffd661f32aca75c6d699d0cdcb6c115891c1",
	);
}

#[test]
fn shake_empty_message() {
	assert_eq!(
		hex::encode(shake128(b"", 32)),
		"7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26",
	);

	assert_eq!(
		hex::encode(shake256(b"", 32)),
		"46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f",
	);
}

#[test]
fn keccak_f_of_zero_state() {
	let mut lanes = [0; 25];
	keccak_f1600(&mut lanes);

	assert_eq!(lanes[0], 0xf1258f7940e1dde7);
	assert_eq!(lanes[1], 0x84d5ccf933c0478a);
}

#[test]
fn hashes_a_reader() {
	let mut hasher = Sha3::new(Width::W256);
	let mut reader: &[u8] = MSG_448;

	std::io::copy(&mut reader, &mut hasher).unwrap();

	assert_eq!(hasher.finalize().unwrap(), sha3_256(MSG_448));
}
