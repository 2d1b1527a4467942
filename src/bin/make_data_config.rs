//! make-data-config
//!
//! Builds the `dataFilesList` JSON document from `name\0url` lines.
//!
//! ## Usage
//!
//! ```bash
//! printf 'train\0https://example.com/train.csv\n' | make-data-config > data.json
//! make-data-config --input files.txt
//! ```

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use reinhardt_htmlhelpers::data_files::DataFilesConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "make-data-config")]
#[command(about = "Convert name\\0url lines into a dataFilesList JSON document", long_about = None)]
#[command(version)]
struct Cli {
	/// Read lines from this file instead of stdin
	#[arg(short, long, value_name = "PATH")]
	input: Option<PathBuf>,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbosity: u8,
}

fn init_tracing(verbosity: u8) {
	let default_level = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbosity);

	let config = match &cli.input {
		Some(path) => {
			let file = File::open(path)
				.with_context(|| format!("failed to open {}", path.display()))?;
			DataFilesConfig::from_reader(BufReader::new(file))
		}
		None => DataFilesConfig::from_reader(io::stdin().lock()),
	}
	.context("failed to read data file list")?;

	tracing::info!(entries = config.data_files_list.len(), "writing data config");

	let stdout = io::stdout();
	let mut out = stdout.lock();
	config.to_writer(&mut out)?;
	out.flush()?;
	Ok(())
}
