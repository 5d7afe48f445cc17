//! RESP data types and value representation.

use bytes::Bytes;

use crate::utils::ARRAY;
use crate::utils::BULK_STRING;
use crate::utils::ERROR;
use crate::utils::INTEGER;
use crate::utils::SIMPLE_STRING;

/// Represents a RESP protocol value.
///
/// Bulk strings and arrays carry an `Option` so that an absent value
/// (`$-1`, `*-1`) stays distinct from an empty one (`$0`, `*0`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RespValue {
	/// Simple string: `+OK\r\n`
	SimpleString(Bytes),

	/// Error: `-ERR message\r\n`
	Error(Bytes),

	/// Integer: `:1000\r\n`
	///
	/// Holds the literal as it appears on the wire. Decoding does not check
	/// that the bytes are numeric; use [`RespValue::as_integer`] to parse.
	Integer(Bytes),

	/// Bulk string: `$6\r\nfoobar\r\n`, or `$-1\r\n` when `None`
	BulkString(Option<Bytes>),

	/// Array: `*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n`, or `*-1\r\n` when `None`
	Array(Option<Vec<RespValue>>),
}

/// The five RESP value kinds, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RespKind {
	SimpleString,
	Error,
	Integer,
	BulkString,
	Array,
}

impl RespKind {
	/// The tag byte that introduces this kind on the wire.
	pub const fn tag(self) -> u8 {
		match self {
			RespKind::SimpleString => SIMPLE_STRING,
			RespKind::Error => ERROR,
			RespKind::Integer => INTEGER,
			RespKind::BulkString => BULK_STRING,
			RespKind::Array => ARRAY,
		}
	}

	/// Look up the kind a tag byte introduces.
	pub const fn from_tag(tag: u8) -> Option<RespKind> {
		match tag {
			SIMPLE_STRING => Some(RespKind::SimpleString),
			ERROR => Some(RespKind::Error),
			INTEGER => Some(RespKind::Integer),
			BULK_STRING => Some(RespKind::BulkString),
			ARRAY => Some(RespKind::Array),
			_ => None,
		}
	}

	pub const fn name(self) -> &'static str {
		match self {
			RespKind::SimpleString => "simple string",
			RespKind::Error => "error",
			RespKind::Integer => "integer",
			RespKind::BulkString => "bulk string",
			RespKind::Array => "array",
		}
	}
}

impl std::fmt::Display for RespKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl RespValue {
	/// Which of the five cases this value is
	pub fn kind(&self) -> RespKind {
		match self {
			RespValue::SimpleString(_) => RespKind::SimpleString,
			RespValue::Error(_) => RespKind::Error,
			RespValue::Integer(_) => RespKind::Integer,
			RespValue::BulkString(_) => RespKind::BulkString,
			RespValue::Array(_) => RespKind::Array,
		}
	}

	/// Check if the value is an error
	pub fn is_error(&self) -> bool {
		matches!(self, RespValue::Error(_))
	}

	/// Check if the value is a null bulk string or a null array
	pub fn is_null(&self) -> bool {
		matches!(self, RespValue::BulkString(None) | RespValue::Array(None))
	}

	pub fn as_simple_string(&self) -> Option<&Bytes> {
		match self {
			RespValue::SimpleString(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_error(&self) -> Option<&Bytes> {
		match self {
			RespValue::Error(e) => Some(e),
			_ => None,
		}
	}

	/// Raw bytes of an integer, exactly as they appear on the wire
	pub fn as_integer_bytes(&self) -> Option<&Bytes> {
		match self {
			RespValue::Integer(i) => Some(i),
			_ => None,
		}
	}

	/// Payload of a bulk string. The outer `Option` is `None` for other
	/// kinds; the inner one is `None` for a null bulk string.
	pub fn as_bulk_string(&self) -> Option<Option<&Bytes>> {
		match self {
			RespValue::BulkString(b) => Some(b.as_ref()),
			_ => None,
		}
	}

	/// Elements of an array. The outer `Option` is `None` for other kinds;
	/// the inner one is `None` for a null array.
	pub fn as_array(&self) -> Option<Option<&[RespValue]>> {
		match self {
			RespValue::Array(a) => Some(a.as_deref()),
			_ => None,
		}
	}

	/// Try to convert to a string slice
	pub fn as_str(&self) -> Option<&str> {
		self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
	}

	/// Try to convert to bytes. Null bulk strings have no bytes.
	pub fn as_bytes(&self) -> Option<&Bytes> {
		match self {
			RespValue::SimpleString(b) | RespValue::BulkString(Some(b)) => Some(b),
			_ => None,
		}
	}

	/// Try to parse an integer payload as `i64`
	pub fn as_integer(&self) -> Option<i64> {
		match self {
			RespValue::Integer(i) => std::str::from_utf8(i).ok()?.parse().ok(),
			_ => None,
		}
	}

	/// Convert to String with lossy UTF-8 conversion
	pub fn to_string_lossy(&self) -> Option<String> {
		self.as_bytes()
			.map(|b| String::from_utf8_lossy(b).into_owned())
	}

	/// Try to consume and convert to Vec<RespValue>
	pub fn into_vec(self) -> Option<Vec<RespValue>> {
		match self {
			RespValue::Array(Some(a)) => Some(a),
			_ => None,
		}
	}

	// Convenience constructors

	/// Create a simple string value
	pub fn simple_string(s: impl Into<Bytes>) -> Self {
		RespValue::SimpleString(s.into())
	}

	/// Create an error value
	pub fn error(e: impl Into<Bytes>) -> Self {
		RespValue::Error(e.into())
	}

	/// Create an integer value
	pub fn integer(i: i64) -> Self {
		RespValue::Integer(Bytes::from(i.to_string()))
	}

	/// Create an integer value from its raw decimal bytes
	pub fn integer_raw(raw: impl Into<Bytes>) -> Self {
		RespValue::Integer(raw.into())
	}

	/// Create a bulk string value
	pub fn bulk_string(s: impl Into<Bytes>) -> Self {
		RespValue::BulkString(Some(s.into()))
	}

	/// Create a null bulk string
	pub fn null_bulk_string() -> Self {
		RespValue::BulkString(None)
	}

	/// Create an array value from an iterator
	pub fn array(items: impl IntoIterator<Item = RespValue>) -> Self {
		RespValue::Array(Some(items.into_iter().collect()))
	}

	/// Create a null array
	pub fn null_array() -> Self {
		RespValue::Array(None)
	}

	/// Create a request in the shape clients send: an array of bulk strings
	pub fn command<I, A>(args: I) -> Self
	where
		I: IntoIterator<Item = A>,
		A: Into<Bytes>,
	{
		RespValue::array(args.into_iter().map(RespValue::bulk_string))
	}
}

// Convenient From implementations
impl From<&str> for RespValue {
	fn from(s: &str) -> Self {
		RespValue::bulk_string(Bytes::copy_from_slice(s.as_bytes()))
	}
}

impl From<String> for RespValue {
	fn from(s: String) -> Self {
		RespValue::bulk_string(s)
	}
}

impl From<&[u8]> for RespValue {
	fn from(b: &[u8]) -> Self {
		RespValue::bulk_string(Bytes::copy_from_slice(b))
	}
}

impl From<Vec<u8>> for RespValue {
	fn from(v: Vec<u8>) -> Self {
		RespValue::bulk_string(v)
	}
}

impl From<Bytes> for RespValue {
	fn from(b: Bytes) -> Self {
		RespValue::bulk_string(b)
	}
}

impl From<i64> for RespValue {
	fn from(i: i64) -> Self {
		RespValue::integer(i)
	}
}

impl From<i32> for RespValue {
	fn from(i: i32) -> Self {
		RespValue::integer(i64::from(i))
	}
}

impl<T: Into<RespValue>> From<Vec<T>> for RespValue {
	fn from(v: Vec<T>) -> Self {
		RespValue::array(v.into_iter().map(Into::into))
	}
}

impl<T: Into<RespValue>> From<Option<T>> for RespValue {
	fn from(o: Option<T>) -> Self {
		match o {
			Some(v) => v.into(),
			None => RespValue::BulkString(None),
		}
	}
}
