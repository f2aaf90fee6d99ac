use crate::error::{EnvgenError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Mapping from config-file basename to the path that provides it.
///
/// A basename found in a later (higher-priority) directory shadows the same
/// basename from an earlier one. Iteration is in alphanumeric basename
/// order, which fixes the evaluation order.
#[derive(Debug, Clone, Default)]
pub struct ConfigFileSet {
	files: BTreeMap<String, PathBuf>,
}

impl ConfigFileSet {
	/// Record a basename → path entry, replacing any earlier entry.
	pub fn insert(&mut self, name: String, path: PathBuf) {
		self.files.insert(name, path);
	}

	/// Path currently mapped for a basename.
	pub fn get(&self, name: &str) -> Option<&Path> {
		self.files.get(name).map(PathBuf::as_path)
	}

	/// Resolved paths in ascending basename order.
	pub fn sorted_paths(&self) -> impl Iterator<Item = &Path> {
		self.files.values().map(PathBuf::as_path)
	}

	pub fn len(&self) -> usize {
		self.files.len()
	}

	pub fn is_empty(&self) -> bool {
		self.files.is_empty()
	}
}

/// Scan the directories for `*.conf` files, lowest to highest priority.
///
/// The scan is a single directory level deep. Hidden files are not
/// considered. Entries are kept by basename with last-write-wins, so a
/// same-named file in a later directory shadows the earlier one. An
/// unreadable directory fails the whole run.
pub fn discover_files(dirs: &[PathBuf]) -> Result<ConfigFileSet> {
	let mut set = ConfigFileSet::default();

	for dir in dirs {
		let entries = std::fs::read_dir(dir).map_err(|source| EnvgenError::DirReadError {
			path: dir.clone(),
			source,
		})?;

		for entry in entries {
			let entry = entry.map_err(|source| EnvgenError::DirReadError {
				path: dir.clone(),
				source,
			})?;

			let path = entry.path();
			let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
				continue;
			};

			if name.starts_with('.') || !name.ends_with(".conf") {
				continue;
			}

			set.insert(name.to_string(), path);
		}
	}

	Ok(set)
}
