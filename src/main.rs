use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use envgen_cli::generate;

#[derive(Parser)]
#[command(name = "envgen")]
#[command(
	author,
	version,
	about = "Environment generator that merges layered config directories and keeps bin before sbin in PATH"
)]
struct Cli {
	/// Config directories in ascending priority; the last one receives the override file
	#[arg(required = true, value_name = "DIR")]
	dirs: Vec<PathBuf>,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	generate::run(&cli.dirs).context("Failed to generate environment override")?;

	Ok(ExitCode::SUCCESS)
}
