//! An implementation of [SHA-3](https://en.wikipedia.org/wiki/SHA-3).

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use super::padding::{PaddedBlocks, SHA3_SUFFIX};
use super::sponge::Sponge;
use super::{State, STATE_BYTES};
use crate::Error;

/// The four fixed SHA-3 output widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Width {
	W224,
	W256,
	W384,
	W512,
}

impl Width {
	pub const ALL: [Width; 4] = [Width::W224, Width::W256, Width::W384, Width::W512];

	pub fn from_bits(bits: u32) -> Result<Self, Error> {
		match bits {
			224 => Ok(Width::W224),
			256 => Ok(Width::W256),
			384 => Ok(Width::W384),
			512 => Ok(Width::W512),
			_ => Err(Error::InvalidWidth(bits)),
		}
	}

	pub const fn bits(self) -> u32 {
		match self {
			Width::W224 => 224,
			Width::W256 => 256,
			Width::W384 => 384,
			Width::W512 => 512,
		}
	}

	/// Digest length in bytes.
	pub const fn digest_len(self) -> usize {
		self.bits() as usize / 8
	}

	/// Rate in bytes: the state minus twice the digest.
	pub const fn rate(self) -> usize {
		STATE_BYTES - 2 * self.digest_len()
	}

	/// Capacity in bytes.
	pub const fn capacity(self) -> usize {
		STATE_BYTES - self.rate()
	}
}

impl TryFrom<u32> for Width {
	type Error = Error;

	fn try_from(bits: u32) -> Result<Self, Error> {
		Self::from_bits(bits)
	}
}

impl fmt::Display for Width {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SHA3-{}", self.bits())
	}
}

// the digest always fits in the first block: every width's rate exceeds its
// digest length, so no extra permutation is needed on the way out
fn hash_into(bytes: &[u8], width: Width, out: &mut [u8]) {
	debug_assert_eq!(out.len(), width.digest_len());

	let rate = width.rate();
	let mut state = State::new();

	for block in PaddedBlocks::new(bytes, rate, SHA3_SUFFIX) {
		state.xor_bytes(&block[.. rate]);
		state.permute();
	}

	state.copy_bytes(out);
}

/// Returns the digest of `bytes` for the given width.
pub fn hash(bytes: &[u8], width: Width) -> Vec<u8> {
	let mut out = vec![0; width.digest_len()];
	hash_into(bytes, width, &mut out);

	out
}

/// Returns the digest of `bytes` for a width given in bits.
///
/// Fails with [`Error::InvalidWidth`] unless `width` is 224, 256, 384 or 512.
pub fn sha3(bytes: &[u8], width: u32) -> Result<Vec<u8>, Error> {
	Ok(hash(bytes, Width::from_bits(width)?))
}

/// Returns the SHA3-224 digest of the byte slice passed to it.
pub fn sha3_224(bytes: &[u8]) -> [u8; 28] {
	let mut out = [0; 28];
	hash_into(bytes, Width::W224, &mut out);

	out
}

/// Returns the SHA3-256 digest of the byte slice passed to it.
pub fn sha3_256(bytes: &[u8]) -> [u8; 32] {
	let mut out = [0; 32];
	hash_into(bytes, Width::W256, &mut out);

	out
}

/// Returns the SHA3-384 digest of the byte slice passed to it.
pub fn sha3_384(bytes: &[u8]) -> [u8; 48] {
	let mut out = [0; 48];
	hash_into(bytes, Width::W384, &mut out);

	out
}

/// Returns the SHA3-512 digest of the byte slice passed to it.
pub fn sha3_512(bytes: &[u8]) -> [u8; 64] {
	let mut out = [0; 64];
	hash_into(bytes, Width::W512, &mut out);

	out
}

/// Incremental SHA-3 hasher.
///
/// ```
/// use tiny_sha3::{Sha3, Width};
///
/// let mut hasher = Sha3::new(Width::W256);
/// hasher.absorb(b"ab")?;
/// hasher.absorb(b"c")?;
///
/// assert_eq!(hasher.finalize()?, tiny_sha3::sha3_256(b"abc"));
/// # Ok::<(), tiny_sha3::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Sha3 {
	width: Width,
	sponge: Sponge,
}

impl Sha3 {
	pub fn new(width: Width) -> Self {
		Self {
			width,
			sponge: Sponge::new(width.rate(), SHA3_SUFFIX),
		}
	}

	/// Like [`Sha3::new`], with the width given in bits.
	pub fn init(width: u32) -> Result<Self, Error> {
		Ok(Self::new(Width::from_bits(width)?))
	}

	pub fn width(&self) -> Width {
		self.width
	}

	/// Feeds more of the message in. Fails once the hasher has been finalized.
	pub fn absorb(&mut self, bytes: &[u8]) -> Result<(), Error> {
		self.sponge.absorb(bytes)
	}

	/// Pads the buffered input and returns the digest. Every later call to
	/// `absorb` or `finalize` fails with [`Error::InvalidState`] until
	/// [`reset`](Self::reset).
	pub fn finalize(&mut self) -> Result<Vec<u8>, Error> {
		let mut out = vec![0; self.width.digest_len()];
		self.sponge.finish(&mut out)?;

		log::trace!("{} finalized", self.width);

		Ok(out)
	}

	pub fn is_finalized(&self) -> bool {
		self.sponge.phase() == super::sponge::Phase::Done
	}

	pub fn reset(&mut self) {
		self.sponge.reset();
	}
}

#[cfg(feature = "std")]
impl std::io::Write for Sha3 {
	fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
		self.absorb(buf)?;

		Ok(buf.len())
	}

	fn flush(&mut self) -> std::io::Result<()> {
		Ok(())
	}
}

#[cfg(test)]
fn format_hash<I: AsRef<[u8]>>(
	hasher: impl FnOnce(&[u8]) -> I,
	input: &[u8],
) -> alloc::string::String {
	use core::fmt::Write;

	let mut out = alloc::string::String::new();

	for &byte in hasher(input).as_ref() {
		write!(out, "{:>02x}", byte).unwrap();
	}

	out
}

#[test]
fn test_empty_inputs() {
	assert_eq!(
		format_hash(sha3_224, b""),
		"6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
	);

	assert_eq!(
		format_hash(sha3_256, b""),
		"a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
	);

	assert_eq!(
		format_hash(sha3_384, b""),
		"0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f004",
	);

	assert_eq!(
		format_hash(sha3_512, b""),
		"a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
	);
}

#[test]
fn test_abc() {
	assert_eq!(
		format_hash(sha3_256, b"abc"),
		"3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
	);

	assert_eq!(
		format_hash(sha3_512, b"abc"),
		"b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
	);
}

#[test]
fn test_widths() {
	assert_eq!(Width::ALL.map(Width::rate), [144, 136, 104, 72]);
	assert_eq!(Width::ALL.map(Width::digest_len), [28, 32, 48, 64]);
	assert!(Width::ALL.iter().all(|w| w.rate() + w.capacity() == STATE_BYTES));

	assert_eq!(Width::try_from(384), Ok(Width::W384));
	assert_eq!(Width::from_bits(160), Err(Error::InvalidWidth(160)));
	assert_eq!(sha3(b"abc", 0), Err(Error::InvalidWidth(0)));

	assert_eq!(alloc::format!("{}", Width::W224), "SHA3-224");
}

#[test]
fn test_dynamic_matches_fixed() {
	let message = [0x5a; 300];

	assert_eq!(sha3(&message, 224).unwrap(), sha3_224(&message));
	assert_eq!(sha3(&message, 256).unwrap(), sha3_256(&message));
	assert_eq!(sha3(&message, 384).unwrap(), sha3_384(&message));
	assert_eq!(sha3(&message, 512).unwrap(), sha3_512(&message));
}

#[test]
fn test_streaming_matches_one_shot() {
	let message: Vec<u8> = (0 .. 1000u32).map(|i| (i % 251) as u8).collect();

	for width in Width::ALL {
		let mut hasher = Sha3::new(width);

		for chunk in message.chunks(width.rate() - 3) {
			hasher.absorb(chunk).unwrap();
		}

		assert_eq!(hasher.finalize().unwrap(), hash(&message, width), "{}", width);
	}
}

#[test]
fn test_finalize_invalidates() {
	let mut hasher = Sha3::init(256).unwrap();
	hasher.absorb(b"abc").unwrap();

	let digest = hasher.finalize().unwrap();
	assert_eq!(digest, sha3_256(b"abc"));
	assert!(hasher.is_finalized());

	assert_eq!(hasher.absorb(b"abc"), Err(Error::InvalidState));
	assert_eq!(hasher.finalize(), Err(Error::InvalidState));

	hasher.reset();
	assert!(!hasher.is_finalized());
	assert_eq!(hasher.finalize().unwrap(), sha3_256(b""));

	assert_eq!(Sha3::init(100).unwrap_err(), Error::InvalidWidth(100));
}

#[cfg(feature = "serde")]
#[test]
fn test_width_serde() {
	for width in Width::ALL {
		let json = serde_json::to_string(&width).unwrap();
		assert_eq!(serde_json::from_str::<Width>(&json).unwrap(), width);
	}

	assert!(serde_json::from_str::<Width>(r#""W160""#).is_err());
}
