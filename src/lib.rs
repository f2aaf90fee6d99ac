//! Envgen - environment generator that keeps bin before sbin in PATH.
//!
//! This library provides the core functionality for envgen, including:
//! - Config file discovery across layered directories with shadowing
//! - Line-oriented `KEY=VALUE` parsing with continuations and comments
//! - Shell-like variable substitution against the accumulating environment
//! - PATH segment reordering so bin directories precede their sbin siblings
//!
//! # Example
//!
//! ```no_run
//! use envgen_cli::generate::{self, Outcome};
//! use std::path::PathBuf;
//!
//! let dirs = vec![
//!     PathBuf::from("/usr/lib/env.d"),
//!     PathBuf::from("/run/env.d"),
//! ];
//!
//! match generate::run(&dirs).unwrap() {
//!     Outcome::Written(path) => println!("wrote {}", path.display()),
//!     Outcome::Unchanged | Outcome::NoPath => {}
//! }
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod generate;
pub mod paths;

pub use error::{EnvgenError, Result};
