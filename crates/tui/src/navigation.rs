//! Top-level destinations and keyboard focus.

use std::fmt;
use std::str::FromStr;

/// The three destinations reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
	#[default]
	Browse,
	Search,
	Account,
}

impl View {
	pub const ALL: [View; 3] = [View::Browse, View::Search, View::Account];

	#[must_use]
	pub const fn title(self) -> &'static str {
		match self {
			View::Browse => "Browse",
			View::Search => "Search",
			View::Account => "Account",
		}
	}

	/// Function key that jumps to this view.
	#[must_use]
	pub const fn hotkey(self) -> u8 {
		match self {
			View::Browse => 1,
			View::Search => 2,
			View::Account => 3,
		}
	}

	#[must_use]
	pub fn from_hotkey(key: u8) -> Option<Self> {
		Self::ALL.into_iter().find(|view| view.hotkey() == key)
	}
}

impl fmt::Display for View {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.title().to_ascii_lowercase())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view '{0}' (expected browse, search or account)")]
pub struct UnknownView(pub String);

impl FromStr for View {
	type Err = UnknownView;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let trimmed = value.trim();
		Self::ALL
			.into_iter()
			.find(|view| view.title().eq_ignore_ascii_case(trimmed))
			.ok_or_else(|| UnknownView(trimmed.to_owned()))
	}
}

/// Which part of the search view receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Input,
	Results,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn views_parse_case_insensitively() {
		assert_eq!("Search".parse::<View>(), Ok(View::Search));
		assert_eq!(" account ".parse::<View>(), Ok(View::Account));
		assert!("home".parse::<View>().is_err());
	}

	#[test]
	fn hotkeys_round_trip() {
		for view in View::ALL {
			assert_eq!(View::from_hotkey(view.hotkey()), Some(view));
		}
		assert_eq!(View::from_hotkey(9), None);
	}
}
