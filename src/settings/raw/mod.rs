use anyhow::Result;
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, Setting, SettingSource, validation};

mod api;
mod log;
mod search;
mod ui;

use api::ApiSection;
use log::LogSection;
use search::SearchSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	search: SearchSection,
	ui: UiSection,
	log: LogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.api.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.log.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = self.sources(cli);

		let api = self.api.resolve(&sources)?;
		let (trigger, initial_query) = self.search.resolve(&sources)?;
		let (theme_name, theme, start_view) = self.ui.resolve(&sources)?;
		let log = self.log.resolve(&sources)?;

		Ok(ResolvedConfig {
			api,
			trigger,
			initial_query,
			theme_name,
			theme,
			start_view,
			log,
			config_files: Vec::new(),
		})
	}

	fn sources(&self, cli: &CliArgs) -> ConfigSources {
		let mut sources = ConfigSources::default();
		let entries = [
			(Setting::ApiBaseUrl, cli.api_url.is_some(), self.api.base_url.is_some()),
			(Setting::ApiTimeout, cli.timeout.is_some(), self.api.timeout_secs.is_some()),
			(Setting::ApiPageSize, cli.page_size.is_some(), self.api.page_size.is_some()),
			(Setting::SearchTrigger, cli.trigger.is_some(), self.search.trigger.is_some()),
			(
				Setting::SearchDebounce,
				cli.debounce_ms.is_some(),
				self.search.debounce_ms.is_some(),
			),
			(Setting::UiTheme, cli.theme.is_some(), self.ui.theme.is_some()),
			(Setting::UiStartView, cli.view.is_some(), self.ui.start_view.is_some()),
			(Setting::LogLevel, cli.log_level.is_some(), self.log.level.is_some()),
		];
		for (setting, cli_present, value_present) in entries {
			if let Some(source) = detect_source(setting, cli_present, value_present) {
				sources.record(setting, source);
			}
		}
		sources
	}
}

fn detect_source(
	setting: Setting,
	cli_present: bool,
	value_present: bool,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(setting.cli_flag()));
	}

	if env::var_os(setting.env_var()).is_some() {
		return Some(SettingSource::Environment(setting.env_var()));
	}

	Some(SettingSource::ConfigKey(setting.key()))
}
