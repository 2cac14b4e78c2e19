//! Hashing many short messages packed back to back into one buffer.
//!
//! This is the software model of the streaming hardware core: the host
//! writes every message into a single input memory along with a table of
//! message lengths, and reads back the digests laid out one after another.

use alloc::vec::Vec;

use crate::keccak::sha3::{hash, Width};
use crate::Error;

/// Lazily hashes each message of a packed stream.
pub struct BatchDigests<'a> {
	stream: &'a [u8],
	lengths: core::slice::Iter<'a, usize>,
	width: Width,
}

impl<'a> BatchDigests<'a> {
	/// Checks up front that `lengths` fits inside `stream`, so iteration itself
	/// can't fail. Bytes past the last message are ignored.
	pub fn new(stream: &'a [u8], lengths: &'a [usize], width: Width) -> Result<Self, Error> {
		let needed = lengths
			.iter()
			.try_fold(0usize, |total, &len| total.checked_add(len))
			.unwrap_or(usize::MAX);

		if needed > stream.len() {
			return Err(Error::BatchOverrun {needed, available: stream.len()});
		}

		Ok(Self {stream, lengths: lengths.iter(), width})
	}
}

impl<'a> Iterator for BatchDigests<'a> {
	type Item = Vec<u8>;

	fn next(&mut self) -> Option<Self::Item> {
		let &len = self.lengths.next()?;

		let (message, rest) = self.stream.split_at(len);
		self.stream = rest;

		Some(hash(message, self.width))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.lengths.size_hint()
	}
}

impl<'a> ExactSizeIterator for BatchDigests<'a> {}

/// Hashes every message in `stream` and returns the digests concatenated in
/// order. An empty entry in `lengths` hashes the empty message.
pub fn hash_batch(stream: &[u8], lengths: &[usize], width: Width) -> Result<Vec<u8>, Error> {
	let digests = BatchDigests::new(stream, lengths, width)?;

	log::debug!("hashing a batch of {} messages with {}", digests.len(), width);

	let mut out = Vec::with_capacity(lengths.len() * width.digest_len());

	for digest in digests {
		out.extend_from_slice(&digest);
	}

	Ok(out)
}

#[test]
fn test_matches_individual_hashes() {
	use crate::keccak::sha3::sha3_256;

	let stream = b"abcdefghij";
	let out = hash_batch(stream, &[3, 0, 7], Width::W256).unwrap();

	assert_eq!(out.len(), 3 * 32);
	assert_eq!(&out[.. 32], &sha3_256(b"abc")[..]);
	assert_eq!(&out[32 .. 64], &sha3_256(b"")[..]);
	assert_eq!(&out[64 ..], &sha3_256(b"defghij")[..]);
}

#[test]
fn test_overrun() {
	assert_eq!(
		hash_batch(b"abc", &[2, 2], Width::W512),
		Err(Error::BatchOverrun {needed: 4, available: 3}),
	);

	assert_eq!(
		hash_batch(b"abc", &[usize::MAX, 1], Width::W512),
		Err(Error::BatchOverrun {needed: usize::MAX, available: 3}),
	);
}

#[test]
fn test_empty_batch() {
	assert_eq!(hash_batch(b"ignored", &[], Width::W224), Ok(Vec::new()));
}
