/// Query, committed query and pagination totals for the active search.
///
/// `committed_text` is the text whose results are currently loaded; it is
/// empty whenever no results are loaded. Once `total_pages > 0` the page
/// stays within `1..=total_pages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
	/// Live contents of the search input.
	pub text: String,
	/// Text the loaded results were fetched for.
	pub committed_text: String,
	/// Current page, starting at 1.
	pub page: u32,
	pub total_pages: u32,
	pub total_results: u64,
}

impl Default for QueryState {
	fn default() -> Self {
		Self {
			text: String::new(),
			committed_text: String::new(),
			page: 1,
			total_pages: 0,
			total_results: 0,
		}
	}
}

impl QueryState {
	/// Whether the input still shows the query the loaded results belong to.
	#[must_use]
	pub fn is_committed(&self) -> bool {
		!self.committed_text.is_empty() && self.committed_text == self.text
	}

	pub(crate) fn clear_results_metadata(&mut self) {
		self.committed_text.clear();
		self.page = 1;
		self.total_pages = 0;
		self.total_results = 0;
	}
}
