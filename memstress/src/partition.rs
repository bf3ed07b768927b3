//! Workload partitioning

// Imports
use crate::{Error, Result};

/// A contiguous range of the buffer owned by a single worker
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Partition {
	/// Start offset, in words
	pub start: usize,

	/// Length, in words
	pub len: usize,
}

impl Partition {
	/// Returns the end offset of this partition
	#[must_use]
	pub const fn end(&self) -> usize {
		self.start + self.len
	}

	/// Returns if this partition is empty
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}
}

/// Splits `len` words into `count` ordered, disjoint partitions covering `0..len`.
///
/// Each partition is `ceil(len / count)` words long, clamped to `len`, so the
/// trailing partitions may be shorter, or even empty when `count > len`.
///
/// # Errors
/// Returns [`Error::Configuration`] if either `len` or `count` are zero.
pub fn partition(len: usize, count: usize) -> Result<Vec<Partition>> {
	if count == 0 {
		return Err(Error::Configuration("cannot partition between 0 workers".to_owned()));
	}
	if len == 0 {
		return Err(Error::Configuration("cannot partition an empty buffer".to_owned()));
	}

	let chunk_len = len.div_ceil(count);
	let partitions = (0..count)
		.map(|idx| {
			let start = idx.saturating_mul(chunk_len).min(len);
			let end = start.saturating_add(chunk_len).min(len);
			Partition { start, len: end - start }
		})
		.collect::<Vec<_>>();
	tracing::debug!(len, count, chunk_len, "Partitioned buffer");

	Ok(partitions)
}

#[cfg(test)]
mod tests {
	use {super::*, itertools::Itertools};

	/// Asserts `partitions` are ordered, disjoint and cover `0..len` exactly
	fn assert_covers(partitions: &[Partition], len: usize, count: usize) {
		assert_eq!(partitions.len(), count);
		assert_eq!(partitions.first().map(|p| p.start), Some(0));
		assert_eq!(partitions.last().map(Partition::end), Some(len));
		for (lhs, rhs) in partitions.iter().tuple_windows() {
			assert_eq!(lhs.end(), rhs.start, "{lhs:?} and {rhs:?} aren't adjacent");
		}
		assert!(partitions.iter().all(|p| p.end() <= len));
		assert_eq!(partitions.iter().map(|p| p.len).sum::<usize>(), len);
	}

	#[test]
	fn even_split() {
		let partitions = partition(8, 4).expect("Unable to partition");
		let starts = partitions.iter().map(|p| p.start).collect::<Vec<_>>();
		assert_eq!(starts, [0, 2, 4, 6]);
		assert!(partitions.iter().all(|p| p.len == 2));
		assert_covers(&partitions, 8, 4);
	}

	#[test]
	fn last_absorbs_remainder() {
		let partitions = partition(10, 3).expect("Unable to partition");
		assert_eq!(partitions, [
			Partition { start: 0, len: 4 },
			Partition { start: 4, len: 4 },
			Partition { start: 8, len: 2 },
		]);
	}

	#[test]
	fn more_workers_than_words() {
		let partitions = partition(3, 5).expect("Unable to partition");
		assert_covers(&partitions, 3, 5);
		assert_eq!(partitions.iter().filter(|p| p.is_empty()).count(), 2);
		assert!(partitions.iter().all(|p| p.start <= 3));
	}

	#[test]
	fn exhaustive_small() {
		for len in 1..=64 {
			for count in 1..=17 {
				let partitions = partition(len, count).expect("Unable to partition");
				assert_covers(&partitions, len, count);
			}
		}
	}

	#[test]
	fn rejects_degenerate() {
		assert!(matches!(partition(0, 4), Err(Error::Configuration(_))));
		assert!(matches!(partition(8, 0), Err(Error::Configuration(_))));
	}
}
