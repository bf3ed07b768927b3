//! Results

// Imports
use {
	crate::WorkerResult,
	memstress_util::ByteCount,
	std::time::Duration,
};

/// Aggregate result of a whole run
#[derive(Clone, Debug)]
#[derive(serde::Serialize)]
pub struct BenchResult {
	/// Total bytes processed, across all workers
	pub total_bytes: u64,

	/// Xor of all worker accumulators
	pub checksum: u64,

	/// Wall-clock time between the gate release and the last worker joining, in seconds
	pub elapsed_secs: f64,

	/// Per-worker results, by worker index
	pub workers: Vec<WorkerResult>,
}

impl BenchResult {
	/// Aggregates all worker results
	#[must_use]
	pub fn aggregate(workers: Vec<WorkerResult>, elapsed: Duration) -> Self {
		Self {
			total_bytes: workers.iter().map(|worker| worker.bytes_processed).sum(),
			checksum: self::combine_checksums(&workers),
			elapsed_secs: elapsed.as_secs_f64().max(0.0),
			workers,
		}
	}

	/// Returns the throughput, in MiB/s.
	///
	/// Returns `0.0` if no time elapsed.
	#[must_use]
	pub fn throughput_mib_per_sec(&self) -> f64 {
		self.total_bytes.mib_per_sec(self.elapsed_secs)
	}
}

/// Combines the accumulators of all `workers`.
///
/// The result doesn't depend on the order of `workers`.
pub fn combine_checksums<'a>(workers: impl IntoIterator<Item = &'a WorkerResult>) -> u64 {
	workers.into_iter().fold(0, |checksum, worker| checksum ^ worker.accumulator)
}
