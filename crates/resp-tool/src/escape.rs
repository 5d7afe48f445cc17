//! Conversion between raw bytes and a printable, backslash-escaped form.

use crate::error::ToolError;

/// Render bytes as printable ASCII.
///
/// `\r`, `\n`, `\t`, `\\` and `\"` use their short escapes, other bytes
/// outside printable ASCII become `\xNN`.
pub fn escape(bytes: &[u8]) -> String {
	let mut out = String::with_capacity(bytes.len());
	for &b in bytes {
		match b {
			b'\r' => out.push_str("\\r"),
			b'\n' => out.push_str("\\n"),
			b'\t' => out.push_str("\\t"),
			b'\\' => out.push_str("\\\\"),
			b'"' => out.push_str("\\\""),
			0x20..=0x7e => out.push(char::from(b)),
			_ => out.push_str(&format!("\\x{:02x}", b)),
		}
	}
	out
}

/// Turn escaped text back into raw bytes.
///
/// Literal CR and LF characters in `text` are skipped, so escaped input may
/// be wrapped over several lines.
pub fn unescape(text: &[u8]) -> Result<Vec<u8>, ToolError> {
	let mut out = Vec::with_capacity(text.len());
	let mut i = 0;
	while i < text.len() {
		match text[i] {
			b'\r' | b'\n' => i += 1,
			b'\\' => {
				let Some(&code) = text.get(i + 1) else {
					return Err(ToolError::InvalidEscape {
						offset: i,
						reason: "dangling backslash",
					});
				};
				match code {
					b'r' => out.push(b'\r'),
					b'n' => out.push(b'\n'),
					b't' => out.push(b'\t'),
					b'\\' => out.push(b'\\'),
					b'"' => out.push(b'"'),
					b'x' => {
						let hex = text
							.get(i + 2..i + 4)
							.filter(|h| h.iter().all(u8::is_ascii_hexdigit))
							.and_then(|h| std::str::from_utf8(h).ok())
							.and_then(|h| u8::from_str_radix(h, 16).ok())
							.ok_or(ToolError::InvalidEscape {
								offset: i,
								reason: "\\x must be followed by two hex digits",
							})?;
						out.push(hex);
						i += 2;
					}
					_ => {
						return Err(ToolError::InvalidEscape {
							offset: i,
							reason: "unknown escape",
						});
					}
				}
				i += 2;
			}
			b => {
				out.push(b);
				i += 1;
			}
		}
	}
	Ok(out)
}
