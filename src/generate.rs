//! One full generator pass: merge, rearrange, conditionally write.

use crate::config::discover::discover_files;
use crate::env::environment::evaluate;
use crate::error::{EnvgenError, Result};
use crate::paths::rearrange::rearrange_bin_sbin;
use std::path::PathBuf;

/// Name of the override file dropped into the highest-priority directory.
///
/// The `90-` prefix sorts it after typical base config, so a later
/// generator pass reads the override on top of everything it overrode.
pub const OUTPUT_FILE_NAME: &str = "90-rearrange-path.conf";

/// What a generator run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	/// The merged environment had no `PATH`, or an empty one.
	NoPath,
	/// `PATH` was already ordered; nothing written.
	Unchanged,
	/// The override file was written at the contained path.
	Written(PathBuf),
}

/// Run one generator pass over the directory list, lowest to highest
/// priority. The last directory is the write target.
///
/// The override file contains a single `PATH=...` assignment and stays
/// valid input for a later pass over the same directories.
pub fn run(dirs: &[PathBuf]) -> Result<Outcome> {
	let target = dirs.last().ok_or(EnvgenError::NoWriteTarget)?;

	let files = discover_files(dirs)?;
	let env = evaluate(&files)?;

	let path = match env.get("PATH") {
		Some(path) if !path.is_empty() => path,
		_ => return Ok(Outcome::NoPath),
	};

	let rearranged = rearrange_bin_sbin(path);
	if rearranged == path {
		return Ok(Outcome::Unchanged);
	}

	let out_path = target.join(OUTPUT_FILE_NAME);
	std::fs::write(&out_path, format!("PATH={rearranged}\n")).map_err(|source| {
		EnvgenError::OutputWriteError {
			path: out_path.clone(),
			source,
		}
	})?;

	Ok(Outcome::Written(out_path))
}
