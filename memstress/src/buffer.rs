//! Shared buffer

// Imports
use {
	crate::{Error, Partition, Result},
	std::mem,
};

/// Size of a buffer element, in bytes
pub const WORD_SIZE: usize = mem::size_of::<u64>();

/// Zero-initialized buffer of words
#[derive(Debug)]
pub struct Buffer {
	/// Words
	words: Vec<u64>,
}

impl Buffer {
	/// Allocates a zeroed buffer of `len` words.
	///
	/// # Errors
	/// Returns [`Error::Allocation`] if the memory can't be reserved.
	pub fn alloc(len: usize) -> Result<Self> {
		let bytes = len.saturating_mul(WORD_SIZE);

		let mut words = Vec::new();
		words
			.try_reserve_exact(len)
			.map_err(|source| Error::Allocation { bytes, source })?;
		words.resize(len, 0);
		tracing::debug!(len, bytes, "Allocated buffer");

		Ok(Self { words })
	}

	/// Returns the number of words in this buffer
	#[must_use]
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Returns if this buffer is empty
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Returns all words
	#[must_use]
	pub fn as_slice(&self) -> &[u64] {
		&self.words
	}

	/// Splits this buffer into one mutable slice per partition.
	///
	/// # Panics
	/// Panics if `partitions` aren't adjacent, starting at 0, and within this buffer.
	pub fn split_mut(&mut self, partitions: &[Partition]) -> Vec<&mut [u64]> {
		let mut rest = self.words.as_mut_slice();
		let mut offset = 0;
		let mut slices = Vec::with_capacity(partitions.len());
		for partition in partitions {
			assert_eq!(partition.start, offset, "Partitions must be adjacent");
			let (head, tail) = mem::take(&mut rest).split_at_mut(partition.len);
			slices.push(head);
			rest = tail;
			offset = partition.end();
		}

		slices
	}
}

#[cfg(test)]
mod tests {
	use {super::*, crate::partition};

	#[test]
	fn alloc_is_zeroed() {
		let buffer = Buffer::alloc(1024).expect("Unable to allocate buffer");
		assert_eq!(buffer.len(), 1024);
		assert!(buffer.as_slice().iter().all(|&word| word == 0));
	}

	#[test]
	fn alloc_too_large() {
		let err = Buffer::alloc(usize::MAX).expect_err("Allocation should fail");
		assert!(matches!(err, Error::Allocation { .. }));
	}

	#[test]
	fn split_matches_partitions() {
		let mut buffer = Buffer::alloc(10).expect("Unable to allocate buffer");
		let partitions = partition::partition(10, 4).expect("Unable to partition");
		let lens = buffer.split_mut(&partitions).iter().map(|slice| slice.len()).collect::<Vec<_>>();
		assert_eq!(lens, partitions.iter().map(|p| p.len).collect::<Vec<_>>());
	}

	#[test]
	fn split_slices_are_disjoint() {
		let mut buffer = Buffer::alloc(8).expect("Unable to allocate buffer");
		let partitions = partition::partition(8, 4).expect("Unable to partition");
		for (idx, slice) in buffer.split_mut(&partitions).into_iter().enumerate() {
			slice.fill(idx as u64);
		}
		assert_eq!(buffer.as_slice(), [0, 0, 1, 1, 2, 2, 3, 3]);
	}
}
