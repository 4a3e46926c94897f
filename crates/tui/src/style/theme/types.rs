use ratatui::style::{Color, Modifier, Style};

use crate::notification::Variant;

/// A theme containing styles for various UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Table headers, borders and separators.
	pub header: Style,
	/// Highlighted result row.
	pub row_highlight: Style,
	/// Input prompt and enabled controls.
	pub prompt: Style,
	/// Placeholders and disabled controls.
	pub empty: Style,
	/// Emphasised text such as titles and the active view.
	pub highlight: Style,
	/// Destructive notifications.
	pub danger: Style,
}

impl Theme {
	fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header_fg())
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn title_style(&self) -> Style {
		self.highlight.add_modifier(Modifier::BOLD)
	}

	/// Style for a control that can be toggled off, like the pagination buttons.
	#[must_use]
	pub fn control_style(&self, enabled: bool) -> Style {
		if enabled { self.prompt } else { self.empty }
	}

	#[must_use]
	pub fn notification_style(&self, variant: Variant) -> Style {
		match variant {
			Variant::Normal => self.prompt,
			Variant::Destructive => self.danger,
		}
	}
}

/// A built-in theme and the names it answers to.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	fn answers_to(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

pub(super) fn find<'a>(definitions: &'a [ThemeDefinition], name: &str) -> Option<&'a ThemeDefinition> {
	let name = name.trim();
	definitions.iter().find(|definition| definition.answers_to(name))
}
