//! Configuration

// Imports
use {
	crate::{buffer::WORD_SIZE, Error, Result},
	std::fmt,
};

/// Default number of worker threads
pub const DEFAULT_THREAD_COUNT: usize = 8;

/// Default buffer size, in bytes (512 MiB)
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024 * 1024;

/// Default number of passes per worker
pub const DEFAULT_ITERATIONS: usize = 10;

/// Base of every worker's seed
const WORKER_SEED_BASE: u64 = 0xC0FFEE;

/// Benchmark configuration
#[derive(Clone, Debug)]
#[derive(serde::Serialize)]
pub struct BenchConfig {
	/// Number of worker threads
	pub thread_count: usize,

	/// Buffer size, in bytes
	///
	/// Only whole words are used, any trailing bytes are ignored.
	pub buffer_size: usize,

	/// Number of read-then-write passes each worker performs
	pub iterations: usize,

	/// Access mode
	pub access_mode: AccessMode,

	/// Seeding strategy for the randomized access mode
	pub seed: SeedStrategy,
}

impl BenchConfig {
	/// Validates this configuration.
	///
	/// # Errors
	/// Returns [`Error::Configuration`] if there are no threads, no iterations,
	/// or the buffer can't hold a single word.
	pub fn validate(&self) -> Result<()> {
		if self.thread_count == 0 {
			return Err(Error::Configuration("thread count must be positive".to_owned()));
		}
		if self.iterations == 0 {
			return Err(Error::Configuration("iteration count must be positive".to_owned()));
		}
		if self.buffer_words() == 0 {
			return Err(Error::Configuration(format!(
				"buffer size must be at least {WORD_SIZE} bytes, found {}",
				self.buffer_size
			)));
		}

		Ok(())
	}

	/// Returns the number of whole words in the buffer
	#[must_use]
	pub fn buffer_words(&self) -> usize {
		self.buffer_size / WORD_SIZE
	}
}

impl Default for BenchConfig {
	fn default() -> Self {
		Self {
			thread_count: DEFAULT_THREAD_COUNT,
			buffer_size:  DEFAULT_BUFFER_SIZE,
			iterations:   DEFAULT_ITERATIONS,
			access_mode:  AccessMode::default(),
			seed:         SeedStrategy::default(),
		}
	}
}

/// Access mode
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
	/// Ascending index order
	#[default]
	Sequential,

	/// Through a per-worker random permutation
	Randomized,
}

impl AccessMode {
	/// Returns the label of this mode for reports
	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::Sequential => "Sequential",
			Self::Randomized => "Random",
		}
	}
}

impl fmt::Display for AccessMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Seeding strategy for the workers' random generators
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
#[derive(serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedStrategy {
	/// Fixed run seed, for reproducible permutations
	Fixed(u64),

	/// Run seed drawn from the thread-local generator
	#[default]
	Entropy,
}

impl SeedStrategy {
	/// Returns the seed for a whole run
	#[must_use]
	pub fn run_seed(self) -> u64 {
		match self {
			Self::Fixed(seed) => seed,
			Self::Entropy => rand::random(),
		}
	}
}

/// Derives the seed of worker `worker_idx` from the run seed
#[must_use]
pub fn worker_seed(run_seed: u64, worker_idx: usize) -> u64 {
	run_seed ^ WORKER_SEED_BASE ^ ((worker_idx as u64) << 32)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let config = BenchConfig::default();
		assert_eq!(config.thread_count, 8);
		assert_eq!(config.buffer_size, 536_870_912);
		assert_eq!(config.iterations, 10);
		assert_eq!(config.access_mode, AccessMode::Sequential);
		assert_eq!(config.seed, SeedStrategy::Entropy);
		config.validate().expect("Default config should be valid");
	}

	#[test]
	fn rejects_zero_threads() {
		let config = BenchConfig {
			thread_count: 0,
			..BenchConfig::default()
		};
		assert!(matches!(config.validate(), Err(Error::Configuration(_))));
	}

	#[test]
	fn rejects_zero_iterations() {
		let config = BenchConfig {
			iterations: 0,
			..BenchConfig::default()
		};
		assert!(matches!(config.validate(), Err(Error::Configuration(_))));
	}

	#[test]
	fn rejects_sub_word_buffer() {
		for buffer_size in [0, 1, WORD_SIZE - 1] {
			let config = BenchConfig {
				buffer_size,
				..BenchConfig::default()
			};
			assert!(matches!(config.validate(), Err(Error::Configuration(_))), "{buffer_size}");
		}
	}

	#[test]
	fn trailing_bytes_are_ignored() {
		let config = BenchConfig {
			buffer_size: 3 * WORD_SIZE + 5,
			..BenchConfig::default()
		};
		assert_eq!(config.buffer_words(), 3);
	}

	#[test]
	fn worker_seeds_differ() {
		let seeds = (0..64).map(|worker_idx| worker_seed(1234, worker_idx)).collect::<Vec<_>>();
		for (idx, seed) in seeds.iter().enumerate() {
			assert!(!seeds[..idx].contains(seed));
		}
	}

	#[test]
	fn fixed_seed_is_stable() {
		assert_eq!(SeedStrategy::Fixed(7).run_seed(), 7);
	}

	#[test]
	fn labels() {
		assert_eq!(AccessMode::Sequential.to_string(), "Sequential");
		assert_eq!(AccessMode::Randomized.to_string(), "Random");
	}
}
