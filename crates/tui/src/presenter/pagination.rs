use super::format::group_thousands;
use crate::coordinator::QueryState;

/// Pagination controls derived from the query state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
	pub page: u32,
	pub total_pages: u32,
	pub previous_enabled: bool,
	pub next_enabled: bool,
}

impl PaginationView {
	/// `None` until a search has produced at least one page.
	#[must_use]
	pub fn from_query(query: &QueryState) -> Option<Self> {
		if query.total_pages == 0 {
			return None;
		}
		Some(Self {
			page: query.page,
			total_pages: query.total_pages,
			previous_enabled: query.page > 1,
			next_enabled: query.page < query.total_pages,
		})
	}

	#[must_use]
	pub fn label(&self) -> String {
		format!("Page {} of {}", self.page, self.total_pages)
	}
}

/// Headline shown above the results, e.g. "Found approximately 1,204 results".
#[must_use]
pub fn results_summary(total_results: u64) -> Option<String> {
	(total_results > 0).then(|| {
		format!(
			"Found approximately {} results",
			group_thousands(total_results)
		)
	})
}
