//! Errors

// Imports
use std::{collections::TryReserveError, io};

/// Benchmark error
///
/// All of these are fatal to a run, and are all reported before any
/// measurement takes place.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Invalid configuration
	#[error("invalid configuration: {0}")]
	Configuration(String),

	/// Unable to allocate the buffer
	#[error("unable to allocate {bytes} bytes for the buffer")]
	Allocation {
		/// Requested bytes
		bytes:  usize,
		#[source]
		source: TryReserveError,
	},

	/// Unable to spawn a worker thread
	#[error("unable to spawn worker #{worker_idx}")]
	Spawn {
		/// Index of the worker
		worker_idx: usize,
		#[source]
		source:     io::Error,
	},
}

/// Result type for benchmark operations
pub type Result<T> = std::result::Result<T, Error>;
