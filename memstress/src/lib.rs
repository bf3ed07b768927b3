//! Multi-threaded memory bandwidth stress test (`memstress`)
//!
//! Splits a single zero-initialized buffer into one disjoint partition per
//! worker thread, releases all workers at once and measures how long they take
//! to perform a fixed number of read-then-write passes over their partition,
//! either sequentially or through a per-worker random permutation.

// Modules
pub mod bench;
pub mod buffer;
pub mod config;
pub mod error;
pub mod gate;
pub mod partition;
pub mod report;
pub mod result;
pub mod worker;

// Exports
pub use self::{
	bench::run,
	config::{AccessMode, BenchConfig, SeedStrategy},
	error::{Error, Result},
	partition::Partition,
	result::BenchResult,
	worker::WorkerResult,
};
