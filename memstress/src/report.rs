//! Reports

// Imports
use {
	crate::{BenchConfig, BenchResult},
	memstress_util::Hex,
	std::fmt,
};

/// Banner describing a run, displayed before it starts
#[derive(Clone, Copy, Debug)]
pub struct Banner<'a>(pub &'a BenchConfig);

impl fmt::Display for Banner<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let config = self.0;
		writeln!(f, "Memory Stress Test")?;
		writeln!(f, "------------------")?;
		writeln!(f, "Buffer size    : {} bytes", config.buffer_size)?;
		writeln!(f, "Iterations     : {}", config.iterations)?;
		writeln!(f, "Threads        : {}", config.thread_count)?;
		writeln!(f, "Access pattern : {}", config.access_mode)?;

		Ok(())
	}
}

/// Summary of a finished run
#[derive(Clone, Copy, Debug)]
pub struct Summary<'a>(pub &'a BenchResult);

impl fmt::Display for Summary<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let result = self.0;
		writeln!(f, "Total bytes processed : {:.2} bytes", result.total_bytes as f64)?;
		writeln!(f, "Elapsed time          : {:.2} s", result.elapsed_secs)?;
		writeln!(f, "Throughput            : {:.2} MB/s", result.throughput_mib_per_sec())?;
		writeln!(f, "Checksum              : {}", Hex(result.checksum))?;

		Ok(())
	}
}

/// Machine-readable report of a run
#[derive(Clone, Debug)]
#[derive(serde::Serialize)]
pub struct Report<'a> {
	/// Configuration of the run
	pub config: &'a BenchConfig,

	/// Result of the run
	pub result: &'a BenchResult,

	/// Throughput, in MiB/s
	pub throughput_mib_per_sec: f64,
}

impl<'a> Report<'a> {
	/// Creates a report
	#[must_use]
	pub fn new(config: &'a BenchConfig, result: &'a BenchResult) -> Self {
		Self {
			config,
			result,
			throughput_mib_per_sec: result.throughput_mib_per_sec(),
		}
	}
}

#[cfg(test)]
mod tests {
	use {
		super::*,
		crate::{AccessMode, WorkerResult},
		std::time::Duration,
	};

	fn result() -> BenchResult {
		BenchResult::aggregate(
			vec![WorkerResult {
				bytes_processed: 10 * 1024 * 1024,
				accumulator:     0xabc,
			}],
			Duration::from_secs(4),
		)
	}

	#[test]
	fn banner() {
		let config = BenchConfig {
			access_mode: AccessMode::Randomized,
			..BenchConfig::default()
		};
		let banner = Banner(&config).to_string();
		assert!(banner.starts_with("Memory Stress Test\n"));
		assert!(banner.contains("Buffer size    : 536870912 bytes\n"));
		assert!(banner.contains("Iterations     : 10\n"));
		assert!(banner.contains("Threads        : 8\n"));
		assert!(banner.contains("Access pattern : Random\n"));
	}

	#[test]
	fn summary() {
		let summary = Summary(&self::result()).to_string();
		assert_eq!(
			summary,
			"Total bytes processed : 10485760.00 bytes\n\
			 Elapsed time          : 4.00 s\n\
			 Throughput            : 2.50 MB/s\n\
			 Checksum              : 0xabc\n"
		);
	}

	#[test]
	fn json_report() {
		let config = BenchConfig::default();
		let result = self::result();
		let json = serde_json::to_value(Report::new(&config, &result)).expect("Unable to serialize report");
		assert_eq!(json["result"]["total_bytes"], 10_485_760);
		assert_eq!(json["throughput_mib_per_sec"], 2.5);
		assert_eq!(json["config"]["access_mode"], "sequential");
		assert_eq!(json["config"]["seed"], "entropy");
	}
}
