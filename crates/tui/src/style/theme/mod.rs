mod builtins;
mod types;

pub use builtins::{LIGHT, SLATE, SOLARIZED};
pub use types::{Theme, ThemeDefinition};

/// Get the default built-in theme.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtins::DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

/// Look a theme up by name or alias, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	types::find(&builtins::DEFINITIONS, name).map(|definition| definition.theme)
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
