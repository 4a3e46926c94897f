//! File-backed `tracing` subscriber.
//!
//! The terminal belongs to the UI while it runs, so log records go to a file:
//! `log.file` when configured, `<data dir>/bookworm.log` otherwise. `RUST_LOG`
//! wins over the configured level when it is set.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::app_dirs;

pub const DEFAULT_LEVEL: &str = "info";

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
	/// Filter directive used when `RUST_LOG` is unset, e.g. `info` or
	/// `bookworm_tui=debug`.
	pub level: String,
	pub file: Option<PathBuf>,
}

impl Default for LogOptions {
	fn default() -> Self {
		Self {
			level: DEFAULT_LEVEL.to_string(),
			file: None,
		}
	}
}

impl LogOptions {
	/// Resolve the file records are appended to.
	pub fn log_path(&self) -> Result<PathBuf> {
		match &self.file {
			Some(path) => Ok(path.clone()),
			None => app_dirs::default_log_file(),
		}
	}
}

/// Install the global subscriber and return the log file path.
///
/// Calling this twice keeps the first subscriber.
pub fn initialize(options: &LogOptions) -> Result<PathBuf> {
	let path = options.log_path()?;
	let file = open_log_file(&path)?;

	let filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(&options.level))
		.with_context(|| format!("invalid log level `{}`", options.level))?;

	let layer = fmt::layer()
		.with_ansi(false)
		.with_target(true)
		.with_writer(Mutex::new(file));

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(layer)
		.try_init();

	tracing::debug!(path = %path.display(), "logging initialized");
	Ok(path)
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn explicit_file_is_used_verbatim() {
		let options = LogOptions {
			file: Some(PathBuf::from("/tmp/custom.log")),
			..LogOptions::default()
		};
		assert_eq!(
			options.log_path().expect("path"),
			PathBuf::from("/tmp/custom.log")
		);
	}

	#[test]
	fn log_file_is_created_with_missing_parents() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("nested").join("bookworm.log");
		open_log_file(&path).expect("open");
		assert!(path.exists());
	}
}
