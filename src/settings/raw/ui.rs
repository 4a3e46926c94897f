use anyhow::Result;
use bookworm_tui::{Theme, View, style};
use serde::Deserialize;

use super::{ConfigSources, validation};
use crate::cli::CliArgs;

const DEFAULT_THEME_NAME: &str = "slate";

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) start_view: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(view) = cli.view {
			self.start_view = Some(view.as_str().to_string());
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<(String, Theme, View)> {
		let (theme_name, theme) = match self.theme {
			Some(name) => {
				let theme = validation::theme(&name, sources)?;
				(name.trim().to_ascii_lowercase(), theme)
			}
			None => (DEFAULT_THEME_NAME.to_string(), style::default_theme()),
		};
		let start_view = match self.start_view {
			Some(name) => validation::start_view(&name, sources)?,
			None => View::default(),
		};
		Ok((theme_name, theme, start_view))
	}
}
