use std::path::PathBuf;

/// Library-level structured errors for envgen.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum EnvgenError {
	#[error("Failed to list config directory: {path}")]
	DirReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write override file: {path}")]
	OutputWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("No config directories given, nowhere to write the override")]
	NoWriteTarget,
}

/// Result type alias using EnvgenError.
pub type Result<T> = std::result::Result<T, EnvgenError>;
