//! Workers

// Imports
use {
	crate::{buffer::WORD_SIZE, AccessMode, Error, Result},
	rand::{rngs::StdRng, seq::SliceRandom, SeedableRng},
	std::{hint, mem},
};

/// Mask every word is xor-ed with on each write pass
pub const WRITE_MASK: u64 = 0xA5A5_A5A5_A5A5_A5A5;

/// Result of a single worker
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
#[derive(serde::Serialize)]
pub struct WorkerResult {
	/// Bytes read and written
	pub bytes_processed: u64,

	/// Mix of every value read
	pub accumulator: u64,
}

/// Order in which a worker visits the words of its partition
#[derive(Clone, Debug)]
pub struct AccessPlan {
	/// Partition-local indices
	indices: Vec<usize>,
}

impl AccessPlan {
	/// Creates a random permutation of `0..len`.
	///
	/// # Errors
	/// Returns [`Error::Allocation`] if the indices can't be allocated.
	pub fn random(len: usize, rng: &mut StdRng) -> Result<Self> {
		let mut indices = Vec::new();
		indices.try_reserve_exact(len).map_err(|source| Error::Allocation {
			bytes: len.saturating_mul(mem::size_of::<usize>()),
			source,
		})?;
		indices.extend(0..len);
		indices.shuffle(rng);

		Ok(Self { indices })
	}

	/// Returns the indices, in visiting order
	#[must_use]
	pub fn indices(&self) -> &[usize] {
		&self.indices
	}
}

/// Worker over a single partition
#[derive(Debug)]
pub struct Worker<'a> {
	/// Index of this worker
	idx: usize,

	/// Partition
	partition: &'a mut [u64],

	/// Access plan, if randomized
	plan: Option<AccessPlan>,

	/// Number of passes
	iterations: usize,
}

impl<'a> Worker<'a> {
	/// Creates a new worker, generating its access plan if `access_mode` is randomized.
	///
	/// # Errors
	/// Returns [`Error::Allocation`] if the access plan can't be allocated.
	pub fn new(
		idx: usize,
		partition: &'a mut [u64],
		access_mode: AccessMode,
		iterations: usize,
		seed: u64,
	) -> Result<Self> {
		let plan = match access_mode {
			AccessMode::Sequential => None,
			AccessMode::Randomized => {
				let mut rng = StdRng::seed_from_u64(seed);
				Some(AccessPlan::random(partition.len(), &mut rng)?)
			},
		};
		tracing::debug!(idx, len = partition.len(), ?access_mode, "Created worker");

		Ok(Self {
			idx,
			partition,
			plan,
			iterations,
		})
	}

	/// Returns the access plan of this worker, if any
	#[must_use]
	pub fn plan(&self) -> Option<&AccessPlan> {
		self.plan.as_ref()
	}

	/// Performs all passes over the partition
	pub fn run(self) -> WorkerResult {
		let Self {
			idx,
			partition,
			plan,
			iterations,
		} = self;

		if partition.is_empty() {
			tracing::debug!(idx, "Worker has an empty partition, skipping");
			return WorkerResult::default();
		}

		let mut accumulator = 0;
		let mut bytes_processed = 0;
		for _ in 0..iterations {
			accumulator = match &plan {
				Some(plan) => self::random_pass(partition, plan.indices(), accumulator),
				None => self::sequential_pass(partition, accumulator),
			};

			// Note: We keep the writes observable, even if the buffer is never read after
			hint::black_box(&mut *partition);

			bytes_processed += self::bytes_per_pass(partition.len());
		}
		tracing::debug!(idx, bytes_processed, accumulator, "Worker finished");

		WorkerResult {
			bytes_processed,
			accumulator,
		}
	}
}

/// Returns the bytes accounted for a single pass over `len` words.
///
/// A pass reads, then writes, every word once.
#[must_use]
pub const fn bytes_per_pass(len: usize) -> u64 {
	2 * (len as u64) * (WORD_SIZE as u64)
}

/// Mixes `value` into `accumulator`
#[must_use]
pub const fn mix(accumulator: u64, value: u64) -> u64 {
	accumulator.wrapping_add(value ^ (accumulator << 1))
}

/// Reads all of `words` in ascending order, then writes them all back
fn sequential_pass(words: &mut [u64], mut accumulator: u64) -> u64 {
	for &value in words.iter() {
		accumulator = self::mix(accumulator, value);
	}
	for value in words.iter_mut() {
		*value ^= WRITE_MASK;
	}

	accumulator
}

/// Reads all of `words` in the order of `indices`, then writes them all back in the same order
fn random_pass(words: &mut [u64], indices: &[usize], mut accumulator: u64) -> u64 {
	for &idx in indices {
		accumulator = self::mix(accumulator, words[idx]);
	}
	for &idx in indices {
		words[idx] ^= WRITE_MASK;
	}

	accumulator
}
