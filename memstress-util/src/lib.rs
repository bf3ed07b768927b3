//! Utilities

// Modules
pub mod logger;

// Imports
use std::fmt;

/// Bytes per mebibyte
pub const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Extension trait for byte counts
#[extend::ext(name = ByteCount)]
pub impl u64 {
	/// Returns this byte count in mebibytes
	fn as_mib(self) -> f64 {
		self as f64 / BYTES_PER_MIB
	}

	/// Returns the throughput, in MiB/s, of processing this many bytes in `secs` seconds.
	///
	/// Returns `0.0` if `secs` isn't positive, instead of an infinite or undefined value.
	fn mib_per_sec(self, secs: f64) -> f64 {
		match secs > 0.0 {
			true => self.as_mib() / secs,
			false => 0.0,
		}
	}
}

/// [`fmt::Display`] helper to display a value as lowercase hex with a `0x` prefix
#[derive(Clone, Copy, Debug)]
pub struct Hex(pub u64);

impl fmt::Display for Hex {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:#x}", self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mib_conversion() {
		assert_eq!(1_048_576u64.as_mib(), 1.0);
		assert_eq!((512u64 * 1024 * 1024).as_mib(), 512.0);
	}

	#[test]
	fn throughput_zero_elapsed() {
		assert_eq!(1_048_576u64.mib_per_sec(0.0), 0.0);
		assert_eq!(1_048_576u64.mib_per_sec(-1.0), 0.0);
		assert_eq!(2_097_152u64.mib_per_sec(2.0), 1.0);
	}

	#[test]
	fn hex_display() {
		assert_eq!(Hex(0xdead_beef).to_string(), "0xdeadbeef");
		assert_eq!(Hex(0).to_string(), "0x0");
	}
}
