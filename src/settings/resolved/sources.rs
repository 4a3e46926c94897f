use std::fmt;

/// Where an effective setting value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Settings that are validated and can therefore be blamed on a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Setting {
	ApiBaseUrl,
	ApiTimeout,
	ApiPageSize,
	SearchTrigger,
	SearchDebounce,
	UiTheme,
	UiStartView,
	LogLevel,
}

impl Setting {
	pub(crate) const fn key(self) -> &'static str {
		match self {
			Self::ApiBaseUrl => "api.base_url",
			Self::ApiTimeout => "api.timeout_secs",
			Self::ApiPageSize => "api.page_size",
			Self::SearchTrigger => "search.trigger",
			Self::SearchDebounce => "search.debounce_ms",
			Self::UiTheme => "ui.theme",
			Self::UiStartView => "ui.start_view",
			Self::LogLevel => "log.level",
		}
	}

	pub(crate) const fn env_var(self) -> &'static str {
		match self {
			Self::ApiBaseUrl => "BOOKWORM__API__BASE_URL",
			Self::ApiTimeout => "BOOKWORM__API__TIMEOUT_SECS",
			Self::ApiPageSize => "BOOKWORM__API__PAGE_SIZE",
			Self::SearchTrigger => "BOOKWORM__SEARCH__TRIGGER",
			Self::SearchDebounce => "BOOKWORM__SEARCH__DEBOUNCE_MS",
			Self::UiTheme => "BOOKWORM__UI__THEME",
			Self::UiStartView => "BOOKWORM__UI__START_VIEW",
			Self::LogLevel => "BOOKWORM__LOG__LEVEL",
		}
	}

	pub(crate) const fn cli_flag(self) -> &'static str {
		match self {
			Self::ApiBaseUrl => "--api-url",
			Self::ApiTimeout => "--timeout",
			Self::ApiPageSize => "--page-size",
			Self::SearchTrigger => "--trigger",
			Self::SearchDebounce => "--debounce-ms",
			Self::UiTheme => "--theme",
			Self::UiStartView => "--view",
			Self::LogLevel => "--log-level",
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	entries: Vec<(Setting, SettingSource)>,
}

impl ConfigSources {
	pub(crate) fn record(&mut self, setting: Setting, source: SettingSource) {
		self.entries.retain(|(existing, _)| *existing != setting);
		self.entries.push((setting, source));
	}

	/// Source of `setting`, falling back to its configuration key.
	pub(crate) fn source_for(&self, setting: Setting) -> SettingSource {
		self.entries
			.iter()
			.find(|(existing, _)| *existing == setting)
			.map(|(_, source)| source.clone())
			.unwrap_or(SettingSource::ConfigKey(setting.key()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unrecorded_settings_blame_the_config_key() {
		let sources = ConfigSources::default();
		assert_eq!(
			sources.source_for(Setting::ApiPageSize),
			SettingSource::ConfigKey("api.page_size")
		);
	}

	#[test]
	fn later_records_replace_earlier_ones() {
		let mut sources = ConfigSources::default();
		sources.record(
			Setting::UiTheme,
			SettingSource::Environment(Setting::UiTheme.env_var()),
		);
		sources.record(Setting::UiTheme, SettingSource::CliFlag("--theme"));
		assert_eq!(
			sources.source_for(Setting::UiTheme).to_string(),
			"CLI flag `--theme`"
		);
	}
}
