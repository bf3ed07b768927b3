//! Configuration

// Imports
use {
	crate::args::Args,
	memstress::{AccessMode, BenchConfig, SeedStrategy},
};

/// Configuration file
///
/// All fields are optional, and fall back to the defaults.
#[derive(PartialEq, Eq, Default, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Number of worker threads
	pub threads: Option<usize>,

	/// Buffer size, in bytes
	pub buffer_size: Option<usize>,

	/// Passes over the buffer per worker
	pub iterations: Option<usize>,

	/// Access mode
	pub access_mode: Option<AccessMode>,

	/// Seed for the random access permutations
	pub seed: Option<u64>,
}

impl Config {
	/// Creates the benchmark config from this file, with `args` taking precedence
	pub fn into_bench_config(self, args: &Args) -> BenchConfig {
		let defaults = BenchConfig::default();
		let access_mode = match args.random {
			true => AccessMode::Randomized,
			false => self.access_mode.unwrap_or(defaults.access_mode),
		};

		BenchConfig {
			thread_count: args.threads.or(self.threads).unwrap_or(defaults.thread_count),
			buffer_size: args.buffer_size.or(self.buffer_size).unwrap_or(defaults.buffer_size),
			iterations: args.iterations.or(self.iterations).unwrap_or(defaults.iterations),
			access_mode,
			seed: args.seed.or(self.seed).map_or(defaults.seed, SeedStrategy::Fixed),
		}
	}
}
