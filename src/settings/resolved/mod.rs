use std::path::PathBuf;

use bookworm::logging::LogOptions;
use bookworm_catalog::HttpCatalogConfig;
use bookworm_tui::{Theme, TriggerPolicy, View};

mod errors;
mod sources;
mod summary;
pub(super) mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, Setting, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub api: HttpCatalogConfig,
	pub trigger: TriggerPolicy,
	/// Query submitted as soon as the interface opens.
	pub initial_query: Option<String>,
	pub theme_name: String,
	pub theme: Theme,
	pub start_view: View,
	pub log: LogOptions,
	/// Configuration files that existed and were merged, in order.
	pub config_files: Vec<PathBuf>,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}
