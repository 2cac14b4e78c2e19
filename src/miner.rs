//! A SHA3-256 proof-of-work nonce search.
//!
//! Each 32-bit nonce is hashed on its own, and the search stops at the first
//! nonce whose truncated hash lies strictly below the target. [`Miner`]
//! mirrors the register-level behaviour of the hardware miner: a status
//! register, a result nonce and a 64-bit count of hashes tried.

use core::fmt;

use crate::keccak::sha3::sha3_256;

// number of distinct nonces; a search that has tried all of them gives up
const NONCE_SPACE: u64 = 1 << 32;

/// Hashes a nonce: SHA3-256 over its four little-endian bytes, truncated to
/// the first four digest bytes read as a little-endian integer.
pub fn hash_nonce(nonce: u32) -> u32 {
	let digest = sha3_256(&nonce.to_le_bytes());

	u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
}

pub fn meets_target(hash: u32, target: u32) -> bool {
	hash < target
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
	Idle,
	Running,
	Found,
	Stopped,
}

impl Status {
	/// The value the hardware reports in its status register.
	pub const fn code(self) -> u32 {
		match self {
			Status::Idle => 0,
			Status::Running => 1,
			Status::Found => 2,
			Status::Stopped => 3,
		}
	}

	pub const fn from_code(code: u32) -> Option<Self> {
		match code {
			0 => Some(Status::Idle),
			1 => Some(Status::Running),
			2 => Some(Status::Found),
			3 => Some(Status::Stopped),
			_ => None,
		}
	}

	pub const fn name(self) -> &'static str {
		match self {
			Status::Idle => "IDLE",
			Status::Running => "RUNNING",
			Status::Found => "FOUND",
			Status::Stopped => "STOPPED",
		}
	}
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MinerConfig {
	/// First nonce tried. The search wraps around past `u32::MAX`.
	pub initial_nonce: u32,
	/// A nonce wins when its hash is strictly below this.
	pub target: u32,
	/// Nonces hashed per [`Miner::step`]. Zero is treated as one.
	pub batch_size: u32,
}

impl Default for MinerConfig {
	fn default() -> Self {
		Self {
			initial_nonce: 0,
			target: 0x8000_0000,
			batch_size: 64,
		}
	}
}

#[derive(Clone, Debug)]
pub struct Miner {
	config: MinerConfig,
	status: Status,
	next_nonce: u32,
	result_nonce: Option<u32>,
	hash_count: u64,
}

impl Miner {
	pub fn new(config: MinerConfig) -> Self {
		Self {
			config,
			status: Status::Idle,
			next_nonce: config.initial_nonce,
			result_nonce: None,
			hash_count: 0,
		}
	}

	pub fn config(&self) -> &MinerConfig {
		&self.config
	}

	pub fn status(&self) -> Status {
		self.status
	}

	pub fn result_nonce(&self) -> Option<u32> {
		self.result_nonce
	}

	/// Hashes tried since the last [`start`](Self::start).
	pub fn hash_count(&self) -> u64 {
		self.hash_count
	}

	pub fn next_nonce(&self) -> u32 {
		self.next_nonce
	}

	/// (Re)starts the search from the configured initial nonce, whatever
	/// state the miner was in.
	pub fn start(&mut self) {
		log::info!(
			"mining from nonce {:#010x} towards target {:#010x}",
			self.config.initial_nonce,
			self.config.target,
		);

		self.status = Status::Running;
		self.next_nonce = self.config.initial_nonce;
		self.result_nonce = None;
		self.hash_count = 0;
	}

	/// Moves the miner to [`Status::Stopped`] from any state. A found
	/// nonce and the hash count are kept until the next start.
	pub fn stop(&mut self) {
		log::info!("mining stopped in state {} after {} hashes", self.status, self.hash_count);
		self.status = Status::Stopped;
	}

	/// Hashes up to one batch of nonces. Does nothing unless running.
	pub fn step(&mut self) -> Status {
		self.advance(self.batch_size())
	}

	/// Steps until a nonce is found, the search stops, or `max_hashes`
	/// hashes have been tried since the last start.
	pub fn run(&mut self, max_hashes: u64) -> Option<u32> {
		while self.status == Status::Running && self.hash_count < max_hashes {
			let batch = self.batch_size().min(max_hashes - self.hash_count);
			self.advance(batch);
		}

		self.result_nonce
	}

	fn batch_size(&self) -> u64 {
		self.config.batch_size.max(1) as u64
	}

	fn advance(&mut self, limit: u64) -> Status {
		if self.status != Status::Running {
			return self.status;
		}

		let batch = limit.min(NONCE_SPACE - self.hash_count);

		for _ in 0 .. batch {
			let nonce = self.next_nonce;
			self.next_nonce = nonce.wrapping_add(1);
			self.hash_count += 1;

			let hash = hash_nonce(nonce);

			if meets_target(hash, self.config.target) {
				log::info!(
					"found nonce {:#010x} (hash {:#010x}) after {} hashes",
					nonce,
					hash,
					self.hash_count,
				);

				self.result_nonce = Some(nonce);
				self.status = Status::Found;

				return self.status;
			}
		}

		if self.hash_count == NONCE_SPACE {
			log::warn!("nonce space exhausted without meeting target {:#010x}", self.config.target);
			self.status = Status::Stopped;
		} else {
			log::debug!("{} hashes tried, next nonce {:#010x}", self.hash_count, self.next_nonce);
		}

		self.status
	}
}

#[test]
fn test_hash_nonce() {
	use crate::keccak::{keccak_f1600, NUM_LANES};

	// a four byte message fits in lane 0 along with its padding
	for nonce in [0, 1, 77777, 0x12345678, 0xffffffff] {
		let mut lanes = [0u64; NUM_LANES];
		lanes[0] ^= nonce as u64 | 0x06 << 32;
		lanes[136 / 8 - 1] ^= 1 << 63;
		keccak_f1600(&mut lanes);

		assert_eq!(hash_nonce(nonce), lanes[0] as u32, "nonce {:#010x}", nonce);
	}

	assert_ne!(hash_nonce(0), hash_nonce(1));
}

#[test]
fn test_meets_target() {
	let hash = 0x12345678;

	let cases = [
		(0x00000000, false),
		(0x12345677, false),
		(0x12345678, false),
		(0x12345679, true),
		(0xffffffff, true),
	];

	for (target, expected) in cases {
		assert_eq!(meets_target(hash, target), expected, "target {:#010x}", target);
	}
}

#[test]
fn test_status_codes() {
	for status in [Status::Idle, Status::Running, Status::Found, Status::Stopped] {
		assert_eq!(Status::from_code(status.code()), Some(status));
	}

	assert_eq!(Status::from_code(4), None);
	assert_eq!(alloc::format!("{}", Status::Found), "FOUND");
}

#[test]
fn test_idle_miner_does_nothing() {
	let mut miner = Miner::new(MinerConfig::default());

	assert_eq!(miner.step(), Status::Idle);
	assert_eq!(miner.hash_count(), 0);
	assert_eq!(miner.run(1000), None);

	miner.stop();
	assert_eq!(miner.status(), Status::Stopped);
	assert_eq!(miner.step(), Status::Stopped);
	assert_eq!(miner.hash_count(), 0);

	miner.start();
	assert_eq!(miner.status(), Status::Running);
}

#[test]
fn test_stop_keeps_found_nonce() {
	let mut miner = Miner::new(MinerConfig::default());
	miner.start();

	let nonce = miner.run(1000);
	assert!(nonce.is_some());

	let count = miner.hash_count();
	miner.stop();

	assert_eq!(miner.status(), Status::Stopped);
	assert_eq!(miner.result_nonce(), nonce);
	assert_eq!(miner.hash_count(), count);
}

#[test]
fn test_easy_target() {
	let config = MinerConfig {initial_nonce: 1000, ..MinerConfig::default()};
	let mut miner = Miner::new(config);
	miner.start();

	let nonce = miner.run(1000).unwrap();

	assert_eq!(miner.status(), Status::Found);
	assert!(meets_target(hash_nonce(nonce), config.target));

	let tried = (nonce - config.initial_nonce) as u64 + 1;
	assert_eq!(miner.hash_count(), tried);
	assert!((config.initial_nonce .. nonce).all(|n| !meets_target(hash_nonce(n), config.target)));

	// further steps keep the result
	assert_eq!(miner.step(), Status::Found);
	assert_eq!(miner.result_nonce(), Some(nonce));

	miner.start();
	assert_eq!(miner.status(), Status::Running);
	assert_eq!(miner.result_nonce(), None);
	assert_eq!(miner.hash_count(), 0);
}

#[test]
fn test_impossible_target() {
	let config = MinerConfig {target: 0, batch_size: 64, ..MinerConfig::default()};
	let mut miner = Miner::new(config);
	miner.start();

	assert_eq!(miner.step(), Status::Running);
	assert_eq!(miner.hash_count(), 64);

	assert_eq!(miner.run(100), None);
	assert_eq!(miner.hash_count(), 100);
	assert_eq!(miner.next_nonce(), 100);

	miner.stop();
	assert_eq!(miner.status(), Status::Stopped);
	assert_eq!(miner.step(), Status::Stopped);
	assert_eq!(miner.hash_count(), 100);
}

#[test]
fn test_nonce_wraps() {
	let config = MinerConfig {initial_nonce: u32::MAX, target: 0, batch_size: 2};
	let mut miner = Miner::new(config);
	miner.start();
	miner.step();

	assert_eq!(miner.next_nonce(), 1);
}

#[cfg(feature = "serde")]
#[test]
fn test_config_serde() {
	let config = MinerConfig {initial_nonce: 7, target: 0x0100_0000, batch_size: 16};

	let json = serde_json::to_string(&config).unwrap();
	assert_eq!(json, r#"{"initial_nonce":7,"target":16777216,"batch_size":16}"#);
	assert_eq!(serde_json::from_str::<MinerConfig>(&json).unwrap(), config);

	// missing fields come from Default
	let partial: MinerConfig = serde_json::from_str(r#"{"target": 5}"#).unwrap();
	assert_eq!(partial, MinerConfig {target: 5, ..MinerConfig::default()});

	let empty: MinerConfig = serde_json::from_str("{}").unwrap();
	assert_eq!(empty, MinerConfig::default());
}

#[cfg(feature = "serde")]
#[test]
fn test_status_serde() {
	for status in [Status::Idle, Status::Running, Status::Found, Status::Stopped] {
		let json = serde_json::to_string(&status).unwrap();
		assert_eq!(serde_json::from_str::<Status>(&json).unwrap(), status);
	}

	assert_eq!(serde_json::to_string(&Status::Found).unwrap(), r#""Found""#);
}
