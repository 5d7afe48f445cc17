pub mod logger;

use thiserror::Error;

/// Errors raised while setting up or changing logging
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
	#[error("Invalid log level '{0}', expected one of: trace, debug, info, warn, error")]
	InvalidLogLevel(String),

	#[error("Logger has not been initialized")]
	NotInitialized,

	#[error("Logger is already initialized")]
	AlreadyInitialized,

	#[error("Failed to reload log level: {0}")]
	ReloadFailed(String),
}

// Re-export logger initialization for convenience
pub use logger::init;
pub use logger::reload_log_level;
