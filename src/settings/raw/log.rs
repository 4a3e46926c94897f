use std::path::PathBuf;

use anyhow::Result;
use bookworm::logging::{DEFAULT_LEVEL, LogOptions};
use serde::Deserialize;

use super::{ConfigSources, validation};
use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<LogOptions> {
		let level = match self.level {
			Some(level) => validation::log_level(&level, sources)?,
			None => DEFAULT_LEVEL.to_string(),
		};
		Ok(LogOptions {
			level,
			file: self.file,
		})
	}
}
