//! Start gate

// Imports
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// Single-release gate that holds workers until the driver starts the clock
#[derive(Debug, Default)]
pub struct StartGate {
	/// State
	state: Mutex<GateState>,

	/// Condition variable, signaled on arrivals and on release
	cond: Condvar,
}

/// Gate state
#[derive(Debug, Default)]
struct GateState {
	/// Number of workers waiting, or that have waited, on the gate
	arrived: usize,

	/// Whether the gate was released
	released: bool,

	/// Whether the run was aborted before release
	aborted: bool,
}

impl StartGate {
	/// Creates a new, closed, gate
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Waits until the gate is released or aborted.
	///
	/// Returns immediately if it already was.
	/// Returns `false` if the run was aborted, in which case the caller shouldn't do any work.
	pub fn wait(&self) -> bool {
		let mut state = self.lock();
		state.arrived += 1;
		self.cond.notify_all();

		let state = self
			.cond
			.wait_while(state, |state| !state.released && !state.aborted)
			.unwrap_or_else(PoisonError::into_inner);
		!state.aborted
	}

	/// Waits until at least `count` workers arrived at the gate, or it's released or aborted
	pub fn wait_ready(&self, count: usize) {
		let state = self.lock();
		let state = self
			.cond
			.wait_while(state, |state| state.arrived < count && !state.released && !state.aborted)
			.unwrap_or_else(PoisonError::into_inner);
		tracing::trace!(arrived = state.arrived, aborted = state.aborted, "Workers ready");
	}

	/// Releases the gate, waking all workers.
	///
	/// Does nothing if the gate was already released or aborted.
	pub fn release(&self) {
		let mut state = self.lock();
		if state.released || state.aborted {
			return;
		}

		state.released = true;
		self.cond.notify_all();
		tracing::trace!(arrived = state.arrived, "Released start gate");
	}

	/// Aborts the run, waking all workers and the driver.
	///
	/// Does nothing if the gate was already released.
	pub fn abort(&self) {
		let mut state = self.lock();
		if state.released {
			return;
		}

		state.aborted = true;
		self.cond.notify_all();
		tracing::trace!(arrived = state.arrived, "Aborted start gate");
	}

	/// Returns if the run was aborted
	pub fn is_aborted(&self) -> bool {
		self.lock().aborted
	}

	/// Returns if the gate was released
	pub fn is_released(&self) -> bool {
		self.lock().released
	}

	/// Returns the number of arrived workers
	pub fn arrived(&self) -> usize {
		self.lock().arrived
	}

	fn lock(&self) -> MutexGuard<'_, GateState> {
		// Note: The state is only ever changed by single assignments, so it's
		//       always consistent, even if another thread panicked.
		self.state.lock().unwrap_or_else(PoisonError::into_inner)
	}
}
