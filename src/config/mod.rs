//! Config file discovery and parsing for envgen.
//!
//! This module handles:
//! - `*.conf` discovery across layered directories with basename shadowing
//! - Logical-line assembly (comments, backslash continuations)
//! - `NAME=VALUE` assignment splitting

pub mod discover;
pub mod parser;

pub use discover::{ConfigFileSet, discover_files};
pub use parser::{logical_lines, split_assignment};
