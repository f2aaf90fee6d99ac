//! Environment accumulation and variable substitution.
//!
//! This module handles:
//! - The `Environment` state built up by evaluating config files in order
//! - `$NAME` / `${NAME}` expansion with backslash escaping

pub mod environment;
pub mod substitute;

pub use environment::{Environment, evaluate};
pub use substitute::substitute;
