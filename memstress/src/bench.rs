//! Benchmark driver

// Imports
use {
	crate::{
		buffer::{Buffer, WORD_SIZE},
		config::worker_seed,
		gate::StartGate,
		partition,
		worker::{Worker, WorkerResult},
		BenchConfig,
		BenchResult,
		Error,
		Result,
	},
	std::{
		panic,
		thread,
		time::{Duration, Instant},
	},
};

/// Runs the benchmark described by `config`.
///
/// Every worker first creates its access plan, then waits on a shared gate.
/// Once all workers are waiting, the clock starts and the gate is released.
/// The clock stops once every worker has been joined.
///
/// # Errors
/// Returns an error if `config` is invalid, if the buffer or an access plan
/// can't be allocated, or if a worker can't be spawned. No measurement is made
/// in any of these cases.
///
/// # Panics
/// Propagates any panic from a worker.
pub fn run(config: &BenchConfig) -> Result<BenchResult> {
	config.validate()?;

	let words = config.buffer_words();
	let trailing_bytes = config.buffer_size % WORD_SIZE;
	if trailing_bytes != 0 {
		tracing::warn!(
			buffer_size = config.buffer_size,
			trailing_bytes,
			"Buffer size isn't a multiple of the word size, ignoring trailing bytes"
		);
	}

	let partitions = partition::partition(words, config.thread_count)?;
	let mut buffer = Buffer::alloc(words)?;
	let slices = buffer.split_mut(&partitions);

	let run_seed = config.seed.run_seed();
	tracing::debug!(?config, run_seed, "Starting run");

	let access_mode = config.access_mode;
	let iterations = config.iterations;
	let setups = slices
		.into_iter()
		.enumerate()
		.map(|(worker_idx, slice)| {
			let seed = worker_seed(run_seed, worker_idx);
			move || {
				let slice = slice;
				Worker::new(worker_idx, slice, access_mode, iterations, seed)
			}
		})
		.collect::<Vec<_>>();
	let (workers, elapsed) = self::run_workers(setups)?;

	let result = BenchResult::aggregate(workers, elapsed);
	tracing::info!(
		total_bytes = result.total_bytes,
		elapsed_secs = result.elapsed_secs,
		checksum = result.checksum,
		"Finished run"
	);

	Ok(result)
}

/// Spawns one worker per setup and times them from a common start.
///
/// Each worker runs its setup, then waits on a shared gate. Once all of them
/// are waiting, the clock starts and the gate is released. The clock stops
/// once every worker has been joined.
///
/// If any setup fails, or a worker can't be spawned, the gate is aborted
/// instead, no worker performs any passes, and the error is returned once
/// all workers were joined.
fn run_workers<'a, S>(setups: Vec<S>) -> Result<(Vec<WorkerResult>, Duration)>
where
	S: FnOnce() -> Result<Worker<'a>> + Send + 'a,
{
	let gate = StartGate::new();
	thread::scope(|s| {
		let mut handles = Vec::with_capacity(setups.len());
		for (worker_idx, setup) in setups.into_iter().enumerate() {
			let gate = &gate;
			let spawn_res = thread::Builder::new()
				.name(format!("memstress-worker-{worker_idx}"))
				.spawn_scoped(s, move || {
					let worker = match setup() {
						Ok(worker) => worker,
						Err(err) => {
							tracing::debug!(worker_idx, ?err, "Worker setup failed, aborting run");
							gate.abort();
							return Err(err);
						},
					};

					match gate.wait() {
						true => Ok(worker.run()),
						false => Ok(WorkerResult::default()),
					}
				});

			match spawn_res {
				Ok(handle) => handles.push(handle),
				Err(source) => {
					// Note: The scope joins the already spawned workers, so they can't stay parked.
					gate.abort();
					return Err(Error::Spawn { worker_idx, source });
				},
			}
		}

		gate.wait_ready(handles.len());
		let start = Instant::now();
		gate.release();

		let results = handles
			.into_iter()
			.map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
			.collect::<Vec<_>>();
		let end = Instant::now();

		let workers = results.into_iter().collect::<Result<Vec<_>>>()?;
		Ok((workers, self::elapsed(start, end)))
	})
}

/// Returns the time elapsed between `start` and `end`.
///
/// If `end` is before `start`, logs a warning and returns zero.
pub fn elapsed(start: Instant, end: Instant) -> Duration {
	end.checked_duration_since(start).unwrap_or_else(|| {
		tracing::warn!(?start, ?end, "Clock went backwards, clamping elapsed time to zero");
		Duration::ZERO
	})
}
