//! RESP decoder.
//!
//! Decoding works on a buffer that already holds at least one complete
//! value. Every step reports how many bytes it used, and arrays add up the
//! counts reported for their elements, so the caller learns exactly where the
//! decoded value ends without re-encoding anything.
//!
//! Nested arrays are tracked on an explicit frame stack instead of the call
//! stack. Depth is capped at [`MAX_NESTING_DEPTH`] so that the finished value,
//! whose drop and comparison recurse, stays shallow enough for any thread.

use bytes::Bytes;

use crate::error::DecodeError;
use crate::error::MAX_NESTING_DEPTH;
use crate::types::RespKind;
use crate::types::RespValue;
use crate::utils::CRLF;
use crate::utils::MIN_RECORD_LEN;
use crate::utils::extract_line;
use crate::utils::parse_length;

/// An array whose elements are still being decoded.
#[derive(Debug)]
struct Frame {
	expected: usize,
	elements: Vec<RespValue>,
	/// Header bytes plus the consumed counts of all finished elements
	consumed: usize,
}

/// Outcome of decoding a single record.
enum Step {
	/// A finished value and the bytes it occupied
	Value(RespValue, usize),
	/// The header of a non-empty array; its elements follow
	ArrayStart { expected: usize, header: usize },
}

/// Decode one RESP value from the start of `buf`.
///
/// Returns the value together with the number of bytes it occupied. Bytes
/// after that point are left alone. Payloads are copied out, so the result
/// does not borrow from `buf`.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the buffer is empty, starts with an unknown
/// tag, holds a malformed or incomplete value, or nests arrays deeper than
/// [`MAX_NESTING_DEPTH`]. Failures inside an array come back wrapped in a
/// single [`DecodeError::Nested`] carrying the element path.
pub fn decode(buf: &[u8]) -> Result<(RespValue, usize), DecodeError> {
	decode_value(buf).inspect_err(|e| log::trace!("Failed to decode RESP value: {}", e))
}

fn decode_value(buf: &[u8]) -> Result<(RespValue, usize), DecodeError> {
	let mut frames: Vec<Frame> = Vec::new();
	let mut pos = 0;

	loop {
		let rest = &buf[pos..];
		if rest.is_empty() {
			return Err(match frames.split_last() {
				Some((open, parents)) => wrap_in_frames(
					parents,
					DecodeError::TruncatedPayload {
						declared: open.expected,
					},
				),
				None => DecodeError::EmptyInput,
			});
		}

		let step = decode_step(rest).map_err(|e| wrap_in_frames(&frames, e))?;
		let (mut value, mut consumed) = match step {
			Step::Value(value, consumed) => (value, consumed),
			Step::ArrayStart { expected, header } => {
				if frames.len() == MAX_NESTING_DEPTH {
					return Err(wrap_in_frames(
						&frames,
						DecodeError::NestingTooDeep {
							limit: MAX_NESTING_DEPTH,
						},
					));
				}
				pos += header;
				let capacity = expected.min((buf.len() - pos) / MIN_RECORD_LEN);
				frames.push(Frame {
					expected,
					elements: Vec::with_capacity(capacity),
					consumed: header,
				});
				continue;
			}
		};
		pos += consumed;

		// Hand the finished value to its parent, closing every array it completes
		loop {
			let Some(mut frame) = frames.pop() else {
				debug_assert_eq!(consumed, pos);
				return Ok((value, consumed));
			};
			frame.elements.push(value);
			frame.consumed += consumed;
			if frame.elements.len() < frame.expected {
				frames.push(frame);
				break;
			}
			value = RespValue::Array(Some(frame.elements));
			consumed = frame.consumed;
		}
	}
}

/// Record which element of each open array `err` happened in.
fn wrap_in_frames(frames: &[Frame], err: DecodeError) -> DecodeError {
	if frames.is_empty() {
		return err;
	}
	DecodeError::Nested {
		path: frames.iter().map(|frame| frame.elements.len()).collect(),
		source: Box::new(err),
	}
}

fn decode_step(buf: &[u8]) -> Result<Step, DecodeError> {
	let Some(&tag) = buf.first() else {
		return Err(DecodeError::EmptyInput);
	};
	let Some(kind) = RespKind::from_tag(tag) else {
		return Err(DecodeError::UnknownTag(tag));
	};

	let body = &buf[1..];
	match kind {
		RespKind::SimpleString => {
			let (line, consumed) = decode_line(body)?;
			Ok(Step::Value(RespValue::SimpleString(line), 1 + consumed))
		}
		RespKind::Error => {
			let (line, consumed) = decode_line(body)?;
			Ok(Step::Value(RespValue::Error(line), 1 + consumed))
		}
		RespKind::Integer => {
			let (line, consumed) = decode_line(body)?;
			Ok(Step::Value(RespValue::Integer(line), 1 + consumed))
		}
		RespKind::BulkString => decode_bulk_string(body),
		RespKind::Array => decode_array_header(body),
	}
}

fn decode_line(body: &[u8]) -> Result<(Bytes, usize), DecodeError> {
	let (line, consumed) = extract_line(body)?;
	Ok((Bytes::copy_from_slice(line), consumed))
}

fn decode_bulk_string(body: &[u8]) -> Result<Step, DecodeError> {
	// $6\r\nfoobar\r\n
	let (field, header) = extract_line(body)?;
	let Some(length) = parse_length(field)? else {
		return Ok(Step::Value(RespValue::BulkString(None), 1 + header));
	};

	let payload = &body[header..];
	let truncated = DecodeError::TruncatedPayload { declared: length };
	let end = length.checked_add(CRLF.len()).ok_or(truncated.clone())?;
	if payload.len() < end || &payload[length..end] != CRLF {
		return Err(truncated);
	}

	let data = Bytes::copy_from_slice(&payload[..length]);
	Ok(Step::Value(RespValue::BulkString(Some(data)), 1 + header + end))
}

fn decode_array_header(body: &[u8]) -> Result<Step, DecodeError> {
	let (field, header) = extract_line(body)?;
	match parse_length(field)? {
		None => Ok(Step::Value(RespValue::Array(None), 1 + header)),
		Some(0) => Ok(Step::Value(RespValue::Array(Some(Vec::new())), 1 + header)),
		Some(expected) => Ok(Step::ArrayStart {
			expected,
			header: 1 + header,
		}),
	}
}
