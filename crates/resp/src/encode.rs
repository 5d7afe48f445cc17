use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

use crate::types::RespValue;
use crate::utils::ARRAY;
use crate::utils::BULK_STRING;
use crate::utils::CRLF;
use crate::utils::ERROR;
use crate::utils::INTEGER;
use crate::utils::NULL_LENGTH;
use crate::utils::SIMPLE_STRING;
use crate::utils::decimal_len;

/// Trait for encoding RESP values.
///
/// Encoding never fails: every `RespValue` has exactly one wire form.
pub trait RespEncoder {
	fn encode_to(&self, buf: &mut BytesMut);

	/// Exact number of bytes `encode_to` will write
	fn encoded_len(&self) -> usize;

	fn encode(&self) -> Bytes {
		let mut buf = BytesMut::with_capacity(self.encoded_len());
		self.encode_to(&mut buf);
		buf.freeze()
	}
}

/// Encode a value into a freshly allocated buffer.
pub fn encode(value: &RespValue) -> Bytes {
	value.encode()
}

impl RespEncoder for RespValue {
	fn encode_to(&self, buf: &mut BytesMut) {
		match self {
			RespValue::SimpleString(s) => encode_line(buf, SIMPLE_STRING, s),
			RespValue::Error(e) => encode_line(buf, ERROR, e),
			RespValue::Integer(i) => encode_line(buf, INTEGER, i),
			RespValue::BulkString(Some(s)) => encode_bulk_string(buf, s),
			RespValue::BulkString(None) => encode_null(buf, BULK_STRING),
			RespValue::Array(Some(arr)) => encode_array(buf, arr),
			RespValue::Array(None) => encode_null(buf, ARRAY),
		}
	}

	fn encoded_len(&self) -> usize {
		match self {
			RespValue::SimpleString(s) | RespValue::Error(s) | RespValue::Integer(s) => {
				1 + s.len() + CRLF.len()
			}
			RespValue::BulkString(Some(s)) => length_line_len(s.len()) + s.len() + CRLF.len(),
			RespValue::Array(Some(arr)) => {
				length_line_len(arr.len()) + arr.iter().map(RespEncoder::encoded_len).sum::<usize>()
			}
			RespValue::BulkString(None) | RespValue::Array(None) => {
				1 + NULL_LENGTH.len() + CRLF.len()
			}
		}
	}
}

#[inline]
fn encode_line(buf: &mut BytesMut, marker: u8, payload: &[u8]) {
	buf.put_u8(marker);
	buf.put_slice(payload);
	buf.put_slice(CRLF);
}

#[inline]
fn encode_length(buf: &mut BytesMut, marker: u8, length: usize) {
	buf.put_u8(marker);
	buf.put_slice(length.to_string().as_bytes());
	buf.put_slice(CRLF);
}

#[inline]
fn length_line_len(length: usize) -> usize {
	1 + decimal_len(length) + CRLF.len()
}

#[inline]
fn encode_bulk_string(buf: &mut BytesMut, s: &Bytes) {
	encode_length(buf, BULK_STRING, s.len());
	buf.put_slice(s);
	buf.put_slice(CRLF);
}

fn encode_array(buf: &mut BytesMut, arr: &[RespValue]) {
	encode_length(buf, ARRAY, arr.len());
	for value in arr {
		value.encode_to(buf);
	}
}

#[inline]
fn encode_null(buf: &mut BytesMut, marker: u8) {
	buf.put_u8(marker);
	buf.put_slice(NULL_LENGTH);
	buf.put_slice(CRLF);
}
