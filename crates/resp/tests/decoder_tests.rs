//! Integration tests for RESP decoder

use bytes::Bytes;
use respwire::DecodeError;
use respwire::MAX_NESTING_DEPTH;
use respwire::RespEncoder;
use respwire::RespKind;
use respwire::RespValue;
use rstest::rstest;

fn sample_values() -> Vec<RespValue> {
	vec![
		RespValue::simple_string("OK"),
		RespValue::simple_string(""),
		RespValue::error("ERR unknown command 'FOO'"),
		RespValue::integer(0),
		RespValue::integer(i64::MIN),
		RespValue::integer(i64::MAX),
		RespValue::bulk_string("hello world"),
		RespValue::bulk_string(Bytes::new()),
		RespValue::bulk_string(Bytes::from_static(b"bin\r\n\x00\xff")),
		RespValue::null_bulk_string(),
		RespValue::array(Vec::new()),
		RespValue::null_array(),
		RespValue::command(["SET", "key", "value"]),
		RespValue::array(vec![
			RespValue::array(vec![RespValue::integer(1), RespValue::integer(2)]),
			RespValue::null_array(),
			RespValue::array(vec![
				RespValue::error("WRONGTYPE"),
				RespValue::array(vec![RespValue::null_bulk_string()]),
			]),
			RespValue::simple_string("tail"),
		]),
	]
}

#[test]
fn test_simple_string_scenario() {
	assert_eq!(&RespValue::simple_string("OK").encode()[..], b"+OK\r\n");
}

#[test]
fn test_null_bulk_string_scenario() {
	assert_eq!(&RespValue::BulkString(None).encode()[..], b"$-1\r\n");
}

#[test]
fn test_decode_command_array() {
	let (value, consumed) = respwire::decode(b"*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n").unwrap();
	assert_eq!(
		value,
		RespValue::array(vec![
			RespValue::bulk_string("foo"),
			RespValue::bulk_string("bar"),
		])
	);
	assert_eq!(consumed, 20);
}

#[test]
fn test_decode_empty_input() {
	assert_eq!(respwire::decode(b""), Err(DecodeError::EmptyInput));
}

#[test]
fn test_decode_null_array() {
	let (value, consumed) = respwire::decode(b"*-1\r\n").unwrap();
	assert_eq!(value, RespValue::Array(None));
	assert_eq!(consumed, 5);
}

#[test]
fn test_decode_bulk_string_missing_terminator() {
	let err = respwire::decode(b"$5\r\nhello").unwrap_err();
	assert!(
		matches!(
			err,
			DecodeError::TruncatedPayload { .. } | DecodeError::MissingTerminator
		),
		"unexpected error: {:?}",
		err
	);
}

#[test]
fn test_decode_array_with_null_element() {
	let input = b"*3\r\n$5\r\nhello\r\n$-1\r\n$5\r\nworld\r\n";
	let (value, consumed) = respwire::decode(input).unwrap();
	assert_eq!(
		value,
		RespValue::array(vec![
			RespValue::bulk_string("hello"),
			RespValue::BulkString(None),
			RespValue::bulk_string("world"),
		])
	);
	assert_eq!(consumed, input.len());
}

#[test]
fn test_roundtrip_all_samples() {
	for original in sample_values() {
		let encoded = original.encode();
		let (decoded, consumed) = respwire::decode(&encoded).unwrap();
		assert_eq!(decoded, original, "Roundtrip failed for {:?}", original);
		assert_eq!(consumed, encoded.len(), "Wrong length for {:?}", original);
	}
}

#[test]
fn test_null_and_empty_stay_distinct() {
	let (null_bulk, _) = respwire::decode(b"$-1\r\n").unwrap();
	let (empty_bulk, _) = respwire::decode(b"$0\r\n\r\n").unwrap();
	assert_eq!(null_bulk.as_bulk_string(), Some(None));
	assert_eq!(empty_bulk.as_bulk_string(), Some(Some(&Bytes::new())));

	let (null_array, _) = respwire::decode(b"*-1\r\n").unwrap();
	let (empty_array, _) = respwire::decode(b"*0\r\n").unwrap();
	assert_eq!(null_array.as_array(), Some(None));
	assert_eq!(empty_array.as_array(), Some(Some(&[][..])));
}

#[test]
fn test_truncation_at_every_boundary_is_an_error() {
	for original in sample_values() {
		let encoded = original.encode();
		for cut in 0..encoded.len() {
			let result = respwire::decode(&encoded[..cut]);
			assert!(
				result.is_err(),
				"prefix of {} bytes of {:?} decoded as {:?}",
				cut,
				original,
				result
			);
		}
	}
}

#[test]
fn test_deep_nesting() {
	const DEPTH: usize = 1000;

	let mut value = RespValue::bulk_string("core");
	for _ in 0..DEPTH {
		value = RespValue::array(vec![value]);
	}
	let mut encoded = value.encode().to_vec();
	encoded.extend_from_slice(b"+after\r\n");

	let (decoded, consumed) = respwire::decode(&encoded).unwrap();
	assert_eq!(consumed, encoded.len() - 8);
	assert_eq!(decoded, value);

	let mut cursor = &decoded;
	for _ in 0..DEPTH {
		cursor = &cursor.as_array().flatten().unwrap()[0];
	}
	assert_eq!(cursor.as_str(), Some("core"));
}

#[test]
fn test_deep_nesting_truncated_reports_path() {
	let input = b"*1\r\n*1\r\n*2\r\n:1\r\n";
	let err = respwire::decode(input).unwrap_err();
	assert_eq!(err.root_cause(), &DecodeError::TruncatedPayload { declared: 2 });
	assert_eq!(err.path(), &[0, 0]);
}

#[test]
fn test_hostile_depth_truncated_is_an_error() {
	let input = b"*1\r\n".repeat(200_000);
	let err = respwire::decode(&input).unwrap_err();
	assert_eq!(
		err.root_cause(),
		&DecodeError::NestingTooDeep {
			limit: MAX_NESTING_DEPTH
		}
	);
	assert_eq!(err.path().len(), MAX_NESTING_DEPTH);
	drop(err);
}

#[test]
fn test_hostile_depth_complete_is_an_error() {
	let mut input = b"*1\r\n".repeat(200_000);
	input.extend_from_slice(b":1\r\n");
	let err = respwire::decode(&input).unwrap_err();
	assert!(matches!(
		err.root_cause(),
		DecodeError::NestingTooDeep { .. }
	));
	drop(err);
}

#[test]
fn test_cursor_walks_back_to_back_values() {
	let mut buf = Vec::new();
	for value in sample_values() {
		buf.extend_from_slice(&value.encode());
	}

	let mut decoded = Vec::new();
	let mut rest = &buf[..];
	while !rest.is_empty() {
		let (value, consumed) = respwire::decode(rest).unwrap();
		decoded.push(value);
		rest = &rest[consumed..];
	}
	assert_eq!(decoded, sample_values());
}

#[rstest]
#[case(b"+OK\r\n".as_slice(), RespKind::SimpleString)]
#[case(b"-ERR\r\n".as_slice(), RespKind::Error)]
#[case(b":-5\r\n".as_slice(), RespKind::Integer)]
#[case(b"$-1\r\n".as_slice(), RespKind::BulkString)]
#[case(b"*-1\r\n".as_slice(), RespKind::Array)]
fn test_decode_dispatches_on_tag(#[case] input: &[u8], #[case] kind: RespKind) {
	let (value, _) = respwire::decode(input).unwrap();
	assert_eq!(value.kind(), kind);
}

#[rstest]
#[case(b"#t\r\n".as_slice())]
#[case(b",3.14\r\n".as_slice())]
#[case(b"%1\r\n+a\r\n:1\r\n".as_slice())]
#[case(b"PING\r\n".as_slice())]
fn test_decode_rejects_non_classic_tags(#[case] input: &[u8]) {
	assert_eq!(
		respwire::decode(input),
		Err(DecodeError::UnknownTag(input[0]))
	);
}

#[test]
fn test_decode_unknown_tag_inside_array() {
	let err = respwire::decode(b"*2\r\n:1\r\n#t\r\n").unwrap_err();
	assert_eq!(
		err,
		DecodeError::Nested {
			path: vec![1],
			source: Box::new(DecodeError::UnknownTag(b'#')),
		}
	);
}
