use respwire::DecodeError;
use telemetry::TelemetryError;
use thiserror::Error;

use crate::config::EncodeKind;

#[derive(Error, Debug)]
pub enum ToolError {
	#[error("Failed to read input '{path}': {source}")]
	ReadInput {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Invalid escape sequence at byte {offset}: {reason}")]
	InvalidEscape { offset: usize, reason: &'static str },

	#[error("Failed to decode value at byte {offset}: {source}")]
	Decode {
		offset: usize,
		#[source]
		source: DecodeError,
	},

	#[error("'{kind}' takes {expected}, got {got} argument(s)")]
	ArgCount {
		kind: EncodeKind,
		expected: &'static str,
		got: usize,
	},

	#[error("'{kind}' payload must not contain CR or LF")]
	LineBreakInPayload { kind: EncodeKind },

	#[error("Invalid integer '{0}'")]
	InvalidInteger(String),

	#[error(transparent)]
	Telemetry(#[from] TelemetryError),
}
