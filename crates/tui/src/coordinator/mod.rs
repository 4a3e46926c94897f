//! Search coordination.
//!
//! [`SearchCoordinator`] is the single owner of the query, pagination and
//! result state. Every change goes through [`SearchCoordinator::update`],
//! which may hand back one [`SearchEffect`] for the caller to perform: a
//! fetch to dispatch to a worker or a notification to show. Responses come
//! back in as [`SearchEvent::Resolved`] and are applied only when they belong
//! to the most recently issued request.

mod debounce;
mod state;
#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

use bookworm_catalog::{CatalogError, ResultItem, SearchPage};
use tracing::{debug, trace, warn};

use self::debounce::Debounce;
pub use self::state::QueryState;
use crate::notification::Notification;

/// How searches get triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerPolicy {
	/// Only an explicit submit (or a page change for the committed query)
	/// issues a search.
	#[default]
	Explicit,
	/// Editing the text or changing page schedules a search once input has
	/// been quiet for `quiet`.
	Live { quiet: Duration },
}

impl TriggerPolicy {
	pub const DEFAULT_QUIET: Duration = Duration::from_millis(500);

	#[must_use]
	pub const fn live() -> Self {
		Self::Live {
			quiet: Self::DEFAULT_QUIET,
		}
	}

	#[must_use]
	pub const fn is_live(self) -> bool {
		matches!(self, Self::Live { .. })
	}
}

/// Relative or absolute page navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
	Previous,
	Next,
	To(u32),
}

/// A fetch the caller must dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
	/// Monotonic request id; only the latest one is accepted back.
	pub id: u64,
	/// Trimmed query sent to the catalog.
	pub query: String,
	/// Raw input text the request was issued for.
	pub text: String,
	pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
	pub id: u64,
	pub outcome: Result<SearchPage, CatalogError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
	/// The input text changed.
	EditText(String),
	/// The user asked to run the search.
	Submit,
	ChangePage(PageStep),
	/// Open the detail view for the result at this index.
	Select(usize),
	ClearSelection,
	/// Time passed; fires a due debounced search.
	Tick,
	Resolved(SearchResponse),
	/// The view is going away; nothing pending may fire afterwards.
	Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEffect {
	Fetch(SearchRequest),
	Notify(Notification),
}

#[derive(Debug, Clone)]
struct InFlight {
	id: u64,
	text: String,
	page: u32,
}

#[derive(Debug)]
pub struct SearchCoordinator {
	policy: TriggerPolicy,
	query: QueryState,
	results: Vec<ResultItem>,
	/// Page the loaded results belong to.
	results_page: u32,
	loading: bool,
	selected: Option<usize>,
	next_request_id: u64,
	in_flight: Option<InFlight>,
	debounce: Debounce,
	/// Bumped whenever `results` is replaced or cleared.
	revision: u64,
}

impl SearchCoordinator {
	#[must_use]
	pub fn new(policy: TriggerPolicy) -> Self {
		Self {
			policy,
			query: QueryState::default(),
			results: Vec::new(),
			results_page: 1,
			loading: false,
			selected: None,
			next_request_id: 0,
			in_flight: None,
			debounce: Debounce::default(),
			revision: 0,
		}
	}

	pub fn update(&mut self, event: SearchEvent, now: Instant) -> Option<SearchEffect> {
		match event {
			SearchEvent::EditText(text) => {
				self.change_text(text, now);
				None
			}
			SearchEvent::Submit => self.submit(),
			SearchEvent::ChangePage(step) => self.change_page(step, now),
			SearchEvent::Select(index) => {
				// Rows on screen are about to be replaced while a search runs.
				if !self.loading && index < self.results.len() {
					self.selected = Some(index);
				}
				None
			}
			SearchEvent::ClearSelection => {
				self.selected = None;
				None
			}
			SearchEvent::Tick => self.fire_debounced(now),
			SearchEvent::Resolved(response) => self.apply_response(response),
			SearchEvent::Shutdown => {
				self.shutdown();
				None
			}
		}
	}

	#[must_use]
	pub fn policy(&self) -> TriggerPolicy {
		self.policy
	}

	#[must_use]
	pub fn query(&self) -> &QueryState {
		&self.query
	}

	#[must_use]
	pub fn results(&self) -> &[ResultItem] {
		&self.results
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	#[must_use]
	pub fn selected_index(&self) -> Option<usize> {
		self.selected
	}

	#[must_use]
	pub fn selected_item(&self) -> Option<&ResultItem> {
		self.selected.and_then(|index| self.results.get(index))
	}

	#[must_use]
	pub fn has_pending_search(&self) -> bool {
		self.debounce.is_armed()
	}

	#[must_use]
	pub fn revision(&self) -> u64 {
		self.revision
	}

	fn change_text(&mut self, text: String, now: Instant) {
		if text == self.query.text {
			return;
		}
		self.query.text = text;
		if self.query.text != self.query.committed_text {
			self.reset_for_new_query();
		}
		if let TriggerPolicy::Live { quiet } = self.policy {
			if self.query.text.trim().is_empty() {
				self.debounce.cancel();
			} else {
				self.debounce.arm(now + quiet);
			}
		}
	}

	fn reset_for_new_query(&mut self) {
		if let Some(stale) = self.in_flight.take() {
			debug!(id = stale.id, "query edited; dropping in-flight search");
		}
		self.loading = false;
		self.query.clear_results_metadata();
		self.results_page = 1;
		self.selected = None;
		if !self.results.is_empty() {
			self.results.clear();
			self.revision += 1;
		}
	}

	fn submit(&mut self) -> Option<SearchEffect> {
		if self.query.text.trim().is_empty() {
			trace!("ignoring submit of empty query");
			return None;
		}
		self.debounce.cancel();
		Some(SearchEffect::Fetch(self.issue(self.query.page)))
	}

	fn change_page(&mut self, step: PageStep, now: Instant) -> Option<SearchEffect> {
		let total = self.query.total_pages;
		if total == 0 {
			return None;
		}
		let current = self.query.page;
		let target = match step {
			PageStep::Previous => current.saturating_sub(1).max(1),
			PageStep::Next => current.saturating_add(1).min(total),
			PageStep::To(page) if (1..=total).contains(&page) => page,
			PageStep::To(page) => {
				trace!(page, total, "ignoring out-of-range page");
				return None;
			}
		};
		if target == current {
			return None;
		}
		self.query.page = target;
		match self.policy {
			TriggerPolicy::Explicit => {
				if self.query.is_committed() {
					Some(SearchEffect::Fetch(self.issue(target)))
				} else {
					None
				}
			}
			TriggerPolicy::Live { quiet } => {
				self.debounce.arm(now + quiet);
				None
			}
		}
	}

	fn fire_debounced(&mut self, now: Instant) -> Option<SearchEffect> {
		if !self.debounce.fire(now) || self.query.text.trim().is_empty() {
			return None;
		}
		Some(SearchEffect::Fetch(self.issue(self.query.page)))
	}

	fn issue(&mut self, page: u32) -> SearchRequest {
		self.next_request_id += 1;
		let id = self.next_request_id;
		let text = self.query.text.clone();
		if let Some(previous) = self.in_flight.replace(InFlight {
			id,
			text: text.clone(),
			page,
		}) {
			debug!(superseded = previous.id, id, "search superseded");
		}
		self.loading = true;
		debug!(id, page, query = %text.trim(), "issuing search");
		SearchRequest {
			id,
			query: text.trim().to_owned(),
			text,
			page,
		}
	}

	fn apply_response(&mut self, response: SearchResponse) -> Option<SearchEffect> {
		let Some(request) = self
			.in_flight
			.take_if(|pending| pending.id == response.id)
		else {
			debug!(id = response.id, "discarding stale search response");
			return None;
		};
		self.loading = false;

		match response.outcome {
			Ok(page) if page.total_pages > 0 && request.page > page.total_pages => {
				// The result set shrank under us; the rows belong to no valid page.
				let last = page.total_pages;
				debug!(
					id = request.id,
					requested = request.page,
					total_pages = last,
					"requested page out of range; refetching last page"
				);
				self.query.committed_text = request.text;
				self.query.page = last;
				self.query.total_pages = last;
				self.query.total_results = page.total_results;
				self.results_page = self.results_page.min(last);
				Some(SearchEffect::Fetch(self.issue(last)))
			}
			Ok(page) => {
				let shown_page = request.page.max(1);
				debug!(
					id = request.id,
					page = shown_page,
					total_pages = page.total_pages,
					results = page.results.len(),
					"search resolved"
				);
				self.query.committed_text = request.text;
				self.query.page = shown_page;
				self.query.total_pages = page.total_pages;
				self.query.total_results = page.total_results;
				self.results = page.results;
				self.results_page = shown_page;
				self.selected = None;
				self.revision += 1;
				None
			}
			Err(err) => {
				warn!(id = request.id, error = %err, "search failed");
				self.query.page = self.results_page;
				Some(SearchEffect::Notify(Notification::search_failed(&err)))
			}
		}
	}

	fn shutdown(&mut self) {
		if self.debounce.cancel() {
			debug!("cancelled pending debounced search");
		}
		self.in_flight = None;
		self.loading = false;
	}
}
