#![cfg_attr(not(feature = "std"), no_std)]

//! A small SHA-3 core built around a straightforward Keccak-f[1600].
//!
//! The fixed-width functions ([`sha3_256`] and friends) hash a whole slice at
//! once; [`Sha3`] and [`Shake`] accept input in pieces.
//!
//! ```
//! let digest = tiny_sha3::sha3(b"abc", 256)?;
//! assert_eq!(digest, tiny_sha3::sha3_256(b"abc"));
//! # Ok::<(), tiny_sha3::Error>(())
//! ```

extern crate alloc;

mod error;
mod keccak;

pub mod batch;
pub mod miner;

pub use error::Error;

pub use keccak::{
	index,
	keccak_f1600,
	keccak_round,
	State,
	NUM_LANES,
	NUM_ROUNDS,
	ROUND_CONSTANTS,
	STATE_BYTES,
};

pub use keccak::padding;
pub use keccak::sponge::{Phase, Sponge};

#[doc(inline)]
pub use keccak::sha3::{hash, sha3, sha3_224, sha3_256, sha3_384, sha3_512, Sha3, Width};

#[doc(inline)]
pub use keccak::shake::{shake128, shake256, Shake};

#[test]
fn test_send_sync() {
	fn assert_send_sync<T: Send + Sync>() {}

	assert_send_sync::<Sha3>();
	assert_send_sync::<Shake>();
	assert_send_sync::<Sponge>();
	assert_send_sync::<miner::Miner>();
}
