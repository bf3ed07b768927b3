//! Logger
//!
//! Logs to stderr, filtered by `RUST_LOG`, and optionally to a file,
//! filtered by `RUST_LOG_FILE`.

// Imports
use {
	std::{fs, io, path::Path, sync::Mutex},
	tracing_subscriber::{prelude::*, EnvFilter},
};

/// Default stderr filter
const DEFAULT_TERM_FILTER: &str = "info";

/// Default log file filter
const DEFAULT_FILE_FILTER: &str = "debug";

/// Initializes the logger.
///
/// Any messages logged through [`pre_init`] are emitted right after.
pub fn init(log_file: Option<&Path>, log_file_append: bool) {
	let term_layer = tracing_subscriber::fmt::layer()
		.with_writer(io::stderr)
		.with_filter(self::env_filter("RUST_LOG", DEFAULT_TERM_FILTER));

	// Note: We can't log a failure yet, so we keep it until the subscriber is up.
	let (file_layer, file_err) = match log_file.map(|path| self::open_log_file(path, log_file_append)) {
		Some(Ok(file)) => {
			let layer = tracing_subscriber::fmt::layer()
				.with_ansi(false)
				.with_writer(Mutex::new(file))
				.with_filter(self::env_filter("RUST_LOG_FILE", DEFAULT_FILE_FILTER));
			(Some(layer), None)
		},
		Some(Err(err)) => (None, Some(err)),
		None => (None, None),
	};

	if let Err(err) = tracing_subscriber::registry().with(term_layer).with(file_layer).try_init() {
		eprintln!("Unable to initialize logger: {err}");
		return;
	}

	if let Some(err) = file_err {
		tracing::warn!(?log_file, ?err, "Unable to open log file");
	}

	for message in pre_init::take() {
		tracing::debug!(target: "memstress_util::logger::pre_init", "{message}");
	}
}

/// Creates an env filter from `var`, or `default` if unset or invalid
fn env_filter(var: &str, default: &str) -> EnvFilter {
	EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Opens the log file
fn open_log_file(path: &Path, append: bool) -> Result<fs::File, io::Error> {
	fs::OpenOptions::new()
		.create(true)
		.write(true)
		.append(append)
		.truncate(!append)
		.open(path)
}

/// Logging before [`init`] is called
pub mod pre_init {
	// Imports
	use std::sync::Mutex;

	/// Messages logged before initialization
	static MESSAGES: Mutex<Vec<String>> = Mutex::new(Vec::new());

	/// Queues a debug message
	pub fn debug(message: impl Into<String>) {
		self::messages().push(message.into());
	}

	/// Takes all queued messages
	pub(super) fn take() -> Vec<String> {
		std::mem::take(&mut *self::messages())
	}

	fn messages() -> std::sync::MutexGuard<'static, Vec<String>> {
		// Note: Pushing a string can't leave the vector in a bad state, so
		//       we can ignore poisoning.
		MESSAGES.lock().unwrap_or_else(|err| err.into_inner())
	}

	#[cfg(test)]
	mod tests {
		#[test]
		fn queue_then_take() {
			super::debug("first");
			super::debug(String::from("second"));

			let messages = super::take();
			assert!(messages.iter().any(|message| message == "first"));
			assert!(messages.iter().any(|message| message == "second"));
			assert!(super::take().is_empty());
		}
	}
}
