//! Utility functions and constants for the RESP wire format.

use crate::error::DecodeError;

/// CRLF line ending
pub const CRLF: &[u8] = b"\r\n";

/// Type markers
pub const SIMPLE_STRING: u8 = b'+';
pub const ERROR: u8 = b'-';
pub const INTEGER: u8 = b':';
pub const BULK_STRING: u8 = b'$';
pub const ARRAY: u8 = b'*';

/// Length field marking an absent bulk string or array
pub const NULL_LENGTH: &[u8] = b"-1";

/// Smallest possible encoded record (`+\r\n`)
pub const MIN_RECORD_LEN: usize = 3;

/// Find the position of CRLF in a byte slice
#[inline]
pub fn find_crlf(buf: &[u8]) -> Option<usize> {
	memchr::memmem::find(buf, CRLF)
}

/// Extract a line from buffer (without CRLF), returning it together with the
/// number of bytes it occupies including the terminator.
#[inline]
pub fn extract_line(buf: &[u8]) -> Result<(&[u8], usize), DecodeError> {
	match find_crlf(buf) {
		Some(pos) => Ok((&buf[..pos], pos + CRLF.len())),
		None => Err(DecodeError::MissingTerminator),
	}
}

/// Parse a length or count field.
///
/// Returns `None` for the `-1` null sentinel. Anything other than the
/// sentinel must be a non-empty run of ASCII digits that fits in `usize`;
/// leading zeros are tolerated.
pub fn parse_length(field: &[u8]) -> Result<Option<usize>, DecodeError> {
	if field == NULL_LENGTH {
		return Ok(None);
	}
	if field.is_empty() {
		return Err(DecodeError::invalid_length(field));
	}

	let mut value: usize = 0;
	for &b in field {
		if !b.is_ascii_digit() {
			return Err(DecodeError::invalid_length(field));
		}
		value = value
			.checked_mul(10)
			.and_then(|v| v.checked_add(usize::from(b - b'0')))
			.ok_or_else(|| DecodeError::invalid_length(field))?;
	}
	Ok(Some(value))
}

/// Number of decimal digits needed to print `n`
#[inline]
pub fn decimal_len(mut n: usize) -> usize {
	let mut len = 1;
	while n >= 10 {
		n /= 10;
		len += 1;
	}
	len
}
