use std::time::Duration;

use bookworm_tui::{Theme, TriggerPolicy, View, style};
use tracing_subscriber::EnvFilter;

use super::{ConfigError, ConfigSources, Setting};

pub(crate) fn positive(
	setting: Setting,
	value: u64,
	sources: &ConfigSources,
) -> Result<u64, ConfigError> {
	if value == 0 {
		return Err(ConfigError::new(
			setting,
			value.to_string(),
			sources,
			"must be greater than zero",
		));
	}
	Ok(value)
}

/// Accept absolute `http` or `https` URLs, trimming trailing slashes.
pub(crate) fn base_url(value: &str, sources: &ConfigSources) -> Result<String, ConfigError> {
	let trimmed = value.trim().trim_end_matches('/');
	let host = trimmed
		.strip_prefix("https://")
		.or_else(|| trimmed.strip_prefix("http://"));
	match host {
		Some(host) if !host.is_empty() => Ok(trimmed.to_string()),
		Some(_) => Err(ConfigError::new(Setting::ApiBaseUrl, value, sources, "missing host")),
		None => Err(ConfigError::new(
			Setting::ApiBaseUrl,
			value,
			sources,
			"must start with http:// or https://",
		)),
	}
}

pub(crate) fn trigger(
	value: &str,
	quiet: Duration,
	sources: &ConfigSources,
) -> Result<TriggerPolicy, ConfigError> {
	match value.trim().to_ascii_lowercase().as_str() {
		"explicit" => Ok(TriggerPolicy::Explicit),
		"live" => Ok(TriggerPolicy::Live { quiet }),
		_ => Err(ConfigError::new(
			Setting::SearchTrigger,
			value,
			sources,
			"expected `explicit` or `live`",
		)),
	}
}

pub(crate) fn theme(value: &str, sources: &ConfigSources) -> Result<Theme, ConfigError> {
	style::by_name(value).ok_or_else(|| {
		ConfigError::new(
			Setting::UiTheme,
			value,
			sources,
			format!("unknown theme, expected one of {}", style::names().join(", ")),
		)
	})
}

pub(crate) fn start_view(value: &str, sources: &ConfigSources) -> Result<View, ConfigError> {
	value
		.parse()
		.map_err(|err| ConfigError::new(Setting::UiStartView, value, sources, format!("{err}")))
}

pub(crate) fn log_level(value: &str, sources: &ConfigSources) -> Result<String, ConfigError> {
	EnvFilter::try_new(value)
		.map(|_| value.trim().to_string())
		.map_err(|err| ConfigError::new(Setting::LogLevel, value, sources, err.to_string()))
}
