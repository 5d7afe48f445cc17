//! Error types for RESP decoding.

use thiserror::Error;

/// Errors that can occur while decoding a RESP value.
///
/// Decoding is all-or-nothing: when any of these is returned, no value was
/// produced and the caller must not advance its buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
	/// The input buffer has zero length
	#[error("Empty input")]
	EmptyInput,

	/// The first byte is not one of `+ - : $ *`
	#[error("Unknown type tag: {0:#04x}")]
	UnknownTag(u8),

	/// No CRLF was found before the end of the buffer
	#[error("Missing CRLF terminator")]
	MissingTerminator,

	/// A bulk string length or array count is not a valid decimal
	#[error("Invalid length field: {0:?}")]
	InvalidLengthField(String),

	/// The declared length or count runs past the end of the buffer, or the
	/// CRLF that must follow a bulk payload is absent
	#[error("Truncated payload: declared length {declared} does not fit the remaining input")]
	TruncatedPayload { declared: usize },

	/// Arrays are nested deeper than [`MAX_NESTING_DEPTH`]
	#[error("Maximum nesting depth of {limit} exceeded")]
	NestingTooDeep { limit: usize },

	/// An array element failed to decode. `path` holds the element index at
	/// each enclosing array, outermost first.
	#[error("Array element {}: {source}", join_path(.path))]
	Nested {
		path: Vec<usize>,
		#[source]
		source: Box<DecodeError>,
	},
}

/// Deepest array nesting `decode` accepts.
///
/// Decoded values are dropped, compared and encoded recursively, so the
/// depth has to stay well inside a default thread stack.
pub const MAX_NESTING_DEPTH: usize = 1024;

fn join_path(path: &[usize]) -> String {
	path.iter()
		.map(|index| index.to_string())
		.collect::<Vec<_>>()
		.join(".")
}

impl DecodeError {
	/// Returns the error that caused decoding to fail, without the `Nested`
	/// wrapper.
	pub fn root_cause(&self) -> &DecodeError {
		match self {
			DecodeError::Nested { source, .. } => source.as_ref(),
			err => err,
		}
	}

	/// Element indices leading to the failure, outermost first. Empty when
	/// the failure was not inside an array.
	pub fn path(&self) -> &[usize] {
		match self {
			DecodeError::Nested { path, .. } => path.as_slice(),
			_ => &[],
		}
	}

	pub(crate) fn invalid_length(field: &[u8]) -> Self {
		DecodeError::InvalidLengthField(String::from_utf8_lossy(field).into_owned())
	}
}
