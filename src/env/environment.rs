use crate::config::discover::ConfigFileSet;
use crate::config::parser::{logical_lines, split_assignment};
use crate::env::substitute::substitute;
use crate::error::{EnvgenError, Result};
use std::collections::HashMap;

/// Variable state accumulated by evaluating config files.
///
/// Keys are taken verbatim. Entries are only ever overwritten, never
/// removed. The struct is threaded through evaluation explicitly so the
/// merge logic stays independently testable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
	vars: HashMap<String, String>,
}

impl Environment {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.vars.get(name).map(String::as_str)
	}

	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.vars.insert(name.into(), value.into());
	}

	pub fn len(&self) -> usize {
		self.vars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.vars.is_empty()
	}

	/// Evaluate one config file's content into this environment.
	///
	/// Each assignment's value is substituted against the state as of just
	/// before that assignment, so `PATH=$PATH:/extra` appends to the
	/// previous value. Lines without `=` contribute nothing.
	pub fn apply(&mut self, content: &str) {
		for line in logical_lines(content) {
			if let Some((name, value)) = split_assignment(&line) {
				let value = substitute(value, self);
				self.set(name, value);
			}
		}
	}
}

/// Evaluate every file of the set, in ascending basename order, into one
/// merged environment. An unreadable file fails the whole run.
pub fn evaluate(files: &ConfigFileSet) -> Result<Environment> {
	let mut env = Environment::new();

	for path in files.sorted_paths() {
		let content =
			std::fs::read_to_string(path).map_err(|source| EnvgenError::ConfigReadError {
				path: path.to_path_buf(),
				source,
			})?;
		env.apply(&content);
	}

	Ok(env)
}
