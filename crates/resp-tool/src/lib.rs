//! Command-line companion to `respwire`: decodes RESP byte streams into a
//! readable form and encodes values from arguments.

pub mod commands;
pub mod config;
pub mod error;
pub mod escape;
pub mod render;

pub use error::ToolError;
