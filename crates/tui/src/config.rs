/// Heading and subheading shown at the top of a view.
#[derive(Debug, Clone)]
pub struct ViewLabels {
	pub title: String,
	pub subtitle: String,
}

impl ViewLabels {
	#[must_use]
	pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			subtitle: subtitle.into(),
		}
	}
}

/// Textual configuration used when rendering views and surrounding UI.
#[derive(Debug, Clone)]
pub struct UiLabels {
	pub browse: ViewLabels,
	pub search: ViewLabels,
	pub account: ViewLabels,
	/// Title of the account placeholder card.
	pub account_card_title: String,
	/// Placeholder text displayed inside the empty search input.
	pub input_placeholder: String,
	/// Call to action on the browse view.
	pub start_searching: String,
	/// Title of the sidebar block.
	pub navigation_title: String,
	/// Shown in the results area while a search is running.
	pub searching: String,
	/// Shown when a committed search returned nothing.
	pub no_results: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			browse: ViewLabels::new(
				"BookWorm Portal",
				"Your gateway to knowledge across multiple libraries and academic resources",
			),
			search: ViewLabels::new(
				"Find Resources",
				"Search across multiple libraries and databases",
			),
			account: ViewLabels::new(
				"Account",
				"Connect your accounts to access various libraries and databases. (Coming soon)",
			),
			account_card_title: "Connected Libraries".to_string(),
			input_placeholder: "Search for books, articles, and more...".to_string(),
			start_searching: "Start Searching".to_string(),
			navigation_title: "Navigation".to_string(),
			searching: "Searching...".to_string(),
			no_results: "No results".to_string(),
		}
	}
}
