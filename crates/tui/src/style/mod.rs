//! Visual styling utilities.
//!
//! Themes are the color schemes applied to the terminal UI. [`StyleConfig`]
//! wraps the active one so further visual knobs can sit alongside it.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, by_name, default_theme, names};

#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
