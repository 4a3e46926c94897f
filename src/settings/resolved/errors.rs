use thiserror::Error;

use super::{ConfigSources, Setting, SettingSource};

/// A setting whose effective value failed validation, blamed on the layer
/// that supplied it.
#[derive(Debug, Error)]
#[error("invalid {key} `{value}` ({origin}): {reason}", key = .setting.key())]
pub(crate) struct ConfigError {
	pub(crate) setting: Setting,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn new(
		setting: Setting,
		value: impl Into<String>,
		sources: &ConfigSources,
		reason: impl Into<String>,
	) -> Self {
		Self {
			setting,
			value: value.into(),
			origin: sources.source_for(setting),
			reason: reason.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message_names_key_value_source_and_reason() {
		let mut sources = ConfigSources::default();
		sources.record(
			Setting::ApiTimeout,
			SettingSource::Environment(Setting::ApiTimeout.env_var()),
		);
		let err = ConfigError::new(Setting::ApiTimeout, "0", &sources, "must be greater than zero");
		insta::assert_snapshot!(
			err.to_string(),
			@"invalid api.timeout_secs `0` (environment variable `BOOKWORM__API__TIMEOUT_SECS`): must be greater than zero"
		);
	}
}
