//! Human-readable rendering of decoded values, in the style of `redis-cli`.

use respwire::RespValue;

use crate::escape::escape;

/// Render a value as one or more lines, each ending in `\n`.
///
/// ```text
/// 1) "SET"
/// 2) 1) (integer) 1
///    2) (nil)
/// ```
pub fn render(value: &RespValue) -> String {
	let mut out = String::new();
	render_into(&mut out, value, 0);
	out
}

fn render_into(out: &mut String, value: &RespValue, indent: usize) {
	match value {
		RespValue::SimpleString(s) => {
			out.push_str(&format!("{}\n", String::from_utf8_lossy(s)));
		}
		RespValue::Error(e) => {
			out.push_str(&format!("(error) {}\n", String::from_utf8_lossy(e)));
		}
		RespValue::Integer(i) => {
			out.push_str(&format!("(integer) {}\n", String::from_utf8_lossy(i)));
		}
		RespValue::BulkString(Some(b)) => out.push_str(&format!("\"{}\"\n", escape(b))),
		RespValue::BulkString(None) | RespValue::Array(None) => out.push_str("(nil)\n"),
		RespValue::Array(Some(items)) if items.is_empty() => out.push_str("(empty array)\n"),
		RespValue::Array(Some(items)) => {
			let width = items.len().to_string().len();
			for (i, item) in items.iter().enumerate() {
				if i > 0 {
					out.extend(std::iter::repeat_n(' ', indent));
				}
				let label = format!("{:>width$}) ", i + 1);
				out.push_str(&label);
				render_into(out, item, indent + label.len());
			}
		}
	}
}
