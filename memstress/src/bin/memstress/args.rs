//! Arguments

// Imports
use std::path::PathBuf;

/// Arguments
#[derive(Debug)]
#[derive(clap::Parser)]
#[clap(about = "Measures memory bandwidth under concurrent sequential or random access")]
pub struct Args {
	/// Log file
	///
	/// Specifies a file to perform verbose logging to.
	/// You can use `RUST_LOG_FILE` to set filtering options
	#[clap(long = "log-file")]
	pub log_file: Option<PathBuf>,

	/// Whether to append to the log file
	#[clap(long = "log-file-append")]
	pub log_file_append: bool,

	/// Config file
	///
	/// Any options also passed on the command line override the ones in this file.
	#[clap(long = "config")]
	pub config_file: Option<PathBuf>,

	/// Output file
	///
	/// Writes the configuration and result of the run to this file, as json.
	#[clap(long = "output")]
	pub output_file: Option<PathBuf>,

	/// Use random access instead of sequential
	#[clap(short = 'r', long = "random")]
	pub random: bool,

	/// Number of worker threads
	#[clap(short = 't', long = "threads")]
	pub threads: Option<usize>,

	/// Buffer size, in bytes
	#[clap(short = 'b', long = "buffer-size")]
	pub buffer_size: Option<usize>,

	/// Passes over the buffer per worker
	#[clap(short = 'i', long = "iterations")]
	pub iterations: Option<usize>,

	/// Seed for the random access permutations
	///
	/// If unset, a random one is chosen on each run.
	#[clap(long = "seed")]
	pub seed: Option<u64>,
}
