use std::time::Duration;

use anyhow::Result;
use bookworm_tui::TriggerPolicy;
use serde::Deserialize;

use super::{ConfigSources, Setting, validation};
use crate::cli::CliArgs;

/// Search behaviour settings prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) trigger: Option<String>,
	pub(super) debounce_ms: Option<u64>,
	pub(super) initial_query: Option<String>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(trigger) = cli.trigger {
			self.trigger = Some(trigger.as_str().to_string());
		}
		if let Some(value) = cli.debounce_ms {
			self.debounce_ms = Some(value);
		}
		if let Some(query) = cli.query.clone() {
			self.initial_query = Some(query);
		}
	}

	pub(super) fn resolve(
		self,
		sources: &ConfigSources,
	) -> Result<(TriggerPolicy, Option<String>)> {
		let quiet = match self.debounce_ms {
			Some(ms) => Duration::from_millis(validation::positive(
				Setting::SearchDebounce,
				ms,
				sources,
			)?),
			None => TriggerPolicy::DEFAULT_QUIET,
		};
		let trigger = match self.trigger {
			Some(name) => validation::trigger(&name, quiet, sources)?,
			None => TriggerPolicy::default(),
		};
		let initial_query = self
			.initial_query
			.filter(|query| !query.trim().is_empty());

		Ok((trigger, initial_query))
	}
}
