use thiserror::Error;

/// Everything that can go wrong at the API boundary. The permutation itself
/// has no failure modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
	#[error("unsupported SHA-3 output width of {0} bits (expected 224, 256, 384 or 512)")]
	InvalidWidth(u32),

	#[error("hasher has already been finalized")]
	InvalidState,

	#[error("padding rate must be non-zero")]
	InvalidRate,

	#[error("a message of {0} bytes is too long to pad")]
	LengthOverflow(usize),

	#[error("batch needs {needed} bytes but the stream only holds {available}")]
	BatchOverrun {
		needed: usize,
		available: usize,
	},
}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
	fn from(err: Error) -> Self {
		let kind = match err {
			Error::InvalidState => std::io::ErrorKind::Other,
			_ => std::io::ErrorKind::InvalidInput,
		};

		std::io::Error::new(kind, err)
	}
}

#[test]
fn test_messages() {
	use alloc::string::ToString;

	assert_eq!(
		Error::InvalidWidth(128).to_string(),
		"unsupported SHA-3 output width of 128 bits (expected 224, 256, 384 or 512)",
	);

	assert_eq!(
		Error::BatchOverrun {needed: 10, available: 4}.to_string(),
		"batch needs 10 bytes but the stream only holds 4",
	);
}
