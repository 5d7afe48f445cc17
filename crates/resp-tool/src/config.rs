//! Command-line configuration for resp-tool
//!
//! # Example
//!
//! ```no_run
//! use resp_tool::config::{Cli, Parser};
//!
//! let args = Cli::parse();
//! telemetry::init(&args.log_level)?;
//! # Ok::<(), telemetry::TelemetryError>(())
//! ```

use std::path::PathBuf;

use clap::Args;
pub use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

/// Inspect and produce RESP-encoded bytes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "warn", global = true)]
	pub log_level: String,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Decode every value in a buffer and print it
	Decode(DecodeArgs),
	/// Build a value and write its encoding to stdout
	Encode(EncodeArgs),
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
	/// File to read; stdin when omitted
	pub file: Option<PathBuf>,

	/// Input is text with \r, \n, \t, \\, \" and \xNN escapes. Literal line
	/// breaks in the text are ignored.
	#[arg(long)]
	pub escaped: bool,

	/// Print the offset and byte length of each value
	#[arg(long)]
	pub show_consumed: bool,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
	/// Kind of value to build from the arguments
	#[arg(short, long, value_enum, default_value_t = EncodeKind::Command)]
	pub kind: EncodeKind,

	/// Print the encoding as one escaped line instead of raw bytes
	#[arg(long)]
	pub escape: bool,

	/// Payload; `command` takes any number, `null-bulk` and `null-array` take
	/// none, the rest take exactly one
	pub args: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeKind {
	/// Array of bulk strings, the shape of a client request
	Command,
	Simple,
	Error,
	Integer,
	Bulk,
	NullBulk,
	NullArray,
}

impl EncodeKind {
	pub fn name(self) -> &'static str {
		match self {
			EncodeKind::Command => "command",
			EncodeKind::Simple => "simple",
			EncodeKind::Error => "error",
			EncodeKind::Integer => "integer",
			EncodeKind::Bulk => "bulk",
			EncodeKind::NullBulk => "null-bulk",
			EncodeKind::NullArray => "null-array",
		}
	}
}

impl std::fmt::Display for EncodeKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
