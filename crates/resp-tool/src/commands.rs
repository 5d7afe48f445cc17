//! The `decode` and `encode` subcommands.

use std::io::Read;
use std::io::Write;

use log::debug;
use respwire::RespEncoder;
use respwire::RespValue;

use crate::config::Command;
use crate::config::DecodeArgs;
use crate::config::EncodeArgs;
use crate::config::EncodeKind;
use crate::error::ToolError;
use crate::escape::escape;
use crate::escape::unescape;
use crate::render::render;

/// A value found in a buffer, with where it started and how long it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
	pub offset: usize,
	pub consumed: usize,
	pub value: RespValue,
}

pub fn run(command: &Command, out: &mut impl Write) -> Result<(), ToolError> {
	match command {
		Command::Decode(args) => run_decode(args, out),
		Command::Encode(args) => run_encode(args, out),
	}
}

/// Decode values back to back until `input` is used up.
pub fn decode_all(input: &[u8]) -> Result<Vec<Decoded>, ToolError> {
	let mut values = Vec::new();
	let mut offset = 0;

	while offset < input.len() {
		let (value, consumed) = respwire::decode(&input[offset..])
			.map_err(|source| ToolError::Decode { offset, source })?;
		tracing::debug!(offset, consumed, kind = %value.kind(), "Decoded value");
		values.push(Decoded {
			offset,
			consumed,
			value,
		});
		offset += consumed;
	}

	Ok(values)
}

pub fn run_decode(args: &DecodeArgs, out: &mut impl Write) -> Result<(), ToolError> {
	let raw = read_input(args)?;
	let input = if args.escaped { unescape(&raw)? } else { raw };
	debug!("Decoding {} bytes of input", input.len());

	for decoded in decode_all(&input)? {
		if args.show_consumed {
			writeln!(
				out,
				"# offset {}, {} bytes",
				decoded.offset, decoded.consumed
			)?;
		}
		out.write_all(render(&decoded.value).as_bytes())?;
	}
	out.flush()?;
	Ok(())
}

fn read_input(args: &DecodeArgs) -> Result<Vec<u8>, ToolError> {
	match &args.file {
		Some(path) => std::fs::read(path).map_err(|source| ToolError::ReadInput {
			path: path.display().to_string(),
			source,
		}),
		None => {
			let mut buf = Vec::new();
			std::io::stdin().lock().read_to_end(&mut buf)?;
			Ok(buf)
		}
	}
}

/// Build the value an `encode` invocation describes.
pub fn build_value(kind: EncodeKind, args: &[String]) -> Result<RespValue, ToolError> {
	match kind {
		EncodeKind::Command => Ok(RespValue::command(args.iter().cloned())),
		EncodeKind::Simple => Ok(RespValue::simple_string(single_line(kind, args)?)),
		EncodeKind::Error => Ok(RespValue::error(single_line(kind, args)?)),
		EncodeKind::Integer => {
			let raw = single_arg(kind, args)?;
			raw.parse::<i64>()
				.map(RespValue::integer)
				.map_err(|_| ToolError::InvalidInteger(raw.to_string()))
		}
		EncodeKind::Bulk => Ok(RespValue::bulk_string(single_arg(kind, args)?.to_string())),
		EncodeKind::NullBulk => no_args(kind, args).map(|()| RespValue::null_bulk_string()),
		EncodeKind::NullArray => no_args(kind, args).map(|()| RespValue::null_array()),
	}
}

fn single_arg(kind: EncodeKind, args: &[String]) -> Result<&str, ToolError> {
	match args {
		[arg] => Ok(arg.as_str()),
		_ => Err(ToolError::ArgCount {
			kind,
			expected: "exactly one argument",
			got: args.len(),
		}),
	}
}

/// Simple strings and errors end at the first CRLF, so they cannot carry one.
fn single_line(kind: EncodeKind, args: &[String]) -> Result<String, ToolError> {
	let arg = single_arg(kind, args)?;
	if arg.contains(['\r', '\n']) {
		return Err(ToolError::LineBreakInPayload { kind });
	}
	Ok(arg.to_string())
}

fn no_args(kind: EncodeKind, args: &[String]) -> Result<(), ToolError> {
	if args.is_empty() {
		Ok(())
	} else {
		Err(ToolError::ArgCount {
			kind,
			expected: "no arguments",
			got: args.len(),
		})
	}
}

pub fn run_encode(args: &EncodeArgs, out: &mut impl Write) -> Result<(), ToolError> {
	let value = build_value(args.kind, &args.args)?;
	let encoded = value.encode();
	debug!("Encoded {} as {} bytes", value.kind(), encoded.len());

	if args.escape {
		writeln!(out, "{}", escape(&encoded))?;
	} else {
		out.write_all(&encoded)?;
	}
	out.flush()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use respwire::DecodeError;
	use rstest::rstest;

	use super::*;

	fn strings(args: &[&str]) -> Vec<String> {
		args.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn test_decode_all_tracks_offsets() {
		let values = decode_all(b"+OK\r\n*1\r\n$4\r\nPING\r\n$-1\r\n").unwrap();
		let spans: Vec<(usize, usize)> = values.iter().map(|d| (d.offset, d.consumed)).collect();
		assert_eq!(spans, vec![(0, 5), (5, 14), (19, 5)]);
		assert_eq!(values[2].value, RespValue::null_bulk_string());
	}

	#[test]
	fn test_decode_all_reports_failing_offset() {
		match decode_all(b":1\r\n$3\r\nab") {
			Err(ToolError::Decode { offset, source }) => {
				assert_eq!(offset, 4);
				assert_eq!(source, DecodeError::TruncatedPayload { declared: 3 });
			}
			other => panic!("Expected decode error, got {:?}", other),
		}
	}

	#[test]
	fn test_decode_all_empty_input() {
		assert!(decode_all(b"").unwrap().is_empty());
	}

	#[rstest]
	#[case(EncodeKind::Command, &["GET", "key"], RespValue::command(["GET", "key"]))]
	#[case(EncodeKind::Command, &[], RespValue::array(Vec::new()))]
	#[case(EncodeKind::Simple, &["OK"], RespValue::simple_string("OK"))]
	#[case(EncodeKind::Error, &["ERR bad"], RespValue::error("ERR bad"))]
	#[case(EncodeKind::Integer, &["+0042"], RespValue::integer(42))]
	#[case(EncodeKind::Bulk, &["a\r\nb"], RespValue::bulk_string("a\r\nb"))]
	#[case(EncodeKind::NullBulk, &[], RespValue::null_bulk_string())]
	#[case(EncodeKind::NullArray, &[], RespValue::null_array())]
	fn test_build_value(
		#[case] kind: EncodeKind,
		#[case] args: &[&str],
		#[case] expected: RespValue,
	) {
		assert_eq!(build_value(kind, &strings(args)).unwrap(), expected);
	}

	#[test]
	fn test_build_value_rejects_bad_input() {
		assert!(matches!(
			build_value(EncodeKind::Simple, &strings(&["a", "b"])),
			Err(ToolError::ArgCount { got: 2, .. })
		));
		assert!(matches!(
			build_value(EncodeKind::NullArray, &strings(&["x"])),
			Err(ToolError::ArgCount { got: 1, .. })
		));
		assert!(matches!(
			build_value(EncodeKind::Error, &strings(&["ERR\r\nX"])),
			Err(ToolError::LineBreakInPayload {
				kind: EncodeKind::Error
			})
		));
		assert!(matches!(
			build_value(EncodeKind::Integer, &strings(&["12x"])),
			Err(ToolError::InvalidInteger(raw)) if raw == "12x"
		));
	}

	#[test]
	fn test_run_encode_escaped() {
		let args = EncodeArgs {
			kind: EncodeKind::Command,
			escape: true,
			args: strings(&["PING"]),
		};
		let mut out = Vec::new();
		run_encode(&args, &mut out).unwrap();
		assert_eq!(out, b"*1\\r\\n$4\\r\\nPING\\r\\n\n");
	}

	#[test]
	fn test_run_encode_raw() {
		let args = EncodeArgs {
			kind: EncodeKind::NullBulk,
			escape: false,
			args: Vec::new(),
		};
		let mut out = Vec::new();
		run_encode(&args, &mut out).unwrap();
		assert_eq!(out, b"$-1\r\n");
	}
}
