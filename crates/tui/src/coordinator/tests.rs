use std::time::{Duration, Instant};

use bookworm_catalog::{CatalogError, ResultItem, SearchPage};

use super::*;
use crate::notification::Variant;

fn page_of(titles: &[&str], total_pages: u32, total_results: u64) -> SearchPage {
	SearchPage {
		results: titles
			.iter()
			.enumerate()
			.map(|(index, title)| ResultItem::new(format!("item-{index}"), *title))
			.collect(),
		total_pages,
		total_results,
		current_page: None,
	}
}

fn expect_fetch(effect: Option<SearchEffect>) -> SearchRequest {
	match effect {
		Some(SearchEffect::Fetch(request)) => request,
		other => panic!("expected a fetch, got {other:?}"),
	}
}

fn resolve(
	coordinator: &mut SearchCoordinator,
	request: &SearchRequest,
	outcome: Result<SearchPage, CatalogError>,
	now: Instant,
) -> Option<SearchEffect> {
	coordinator.update(
		SearchEvent::Resolved(SearchResponse {
			id: request.id,
			outcome,
		}),
		now,
	)
}

/// Runs an explicit search for `text` and resolves it with `page`.
fn searched(text: &str, page: SearchPage) -> SearchCoordinator {
	let now = Instant::now();
	let mut coordinator = SearchCoordinator::new(TriggerPolicy::Explicit);
	coordinator.update(SearchEvent::EditText(text.into()), now);
	let request = expect_fetch(coordinator.update(SearchEvent::Submit, now));
	assert!(resolve(&mut coordinator, &request, Ok(page), now).is_none());
	coordinator
}

#[test]
fn relativity_first_page_is_applied_verbatim() {
	let now = Instant::now();
	let mut coordinator = SearchCoordinator::new(TriggerPolicy::Explicit);
	coordinator.update(SearchEvent::EditText("relativity".into()), now);

	let request = expect_fetch(coordinator.update(SearchEvent::Submit, now));
	assert_eq!(request.query, "relativity");
	assert_eq!(request.page, 1);
	assert!(coordinator.is_loading());

	let response = page_of(&["Item A", "Item B"], 3, 42);
	resolve(&mut coordinator, &request, Ok(response.clone()), now);

	assert!(!coordinator.is_loading());
	assert_eq!(coordinator.results(), response.results.as_slice());
	let query = coordinator.query();
	assert_eq!(query.committed_text, "relativity");
	assert_eq!(query.page, 1);
	assert_eq!(query.total_pages, 3);
	assert_eq!(query.total_results, 42);
}

#[test]
fn next_page_refetches_committed_query() {
	let mut coordinator = searched("relativity", page_of(&["A", "B"], 3, 42));
	let now = Instant::now();

	let request = expect_fetch(coordinator.update(SearchEvent::ChangePage(PageStep::Next), now));
	assert_eq!(request.query, "relativity");
	assert_eq!(request.page, 2);
	assert_eq!(coordinator.query().page, 2);

	resolve(&mut coordinator, &request, Ok(page_of(&["C"], 3, 42)), now);
	assert_eq!(coordinator.query().page, 2);
	assert_eq!(coordinator.results()[0].title, "C");
}

#[test]
fn page_steps_stay_within_bounds() {
	let mut coordinator = searched("relativity", page_of(&["A"], 2, 12));
	let now = Instant::now();

	assert!(
		coordinator
			.update(SearchEvent::ChangePage(PageStep::Previous), now)
			.is_none()
	);
	assert_eq!(coordinator.query().page, 1);

	let request = expect_fetch(coordinator.update(SearchEvent::ChangePage(PageStep::Next), now));
	resolve(&mut coordinator, &request, Ok(page_of(&["B"], 2, 12)), now);
	assert_eq!(coordinator.query().page, 2);

	assert!(
		coordinator
			.update(SearchEvent::ChangePage(PageStep::Next), now)
			.is_none()
	);
	assert!(
		coordinator
			.update(SearchEvent::ChangePage(PageStep::To(7)), now)
			.is_none()
	);
	assert!(
		coordinator
			.update(SearchEvent::ChangePage(PageStep::To(0)), now)
			.is_none()
	);
	assert_eq!(coordinator.query().page, 2);

	let request = expect_fetch(coordinator.update(SearchEvent::ChangePage(PageStep::To(1)), now));
	assert_eq!(request.page, 1);
}

#[test]
fn page_change_without_results_is_ignored() {
	let mut coordinator = SearchCoordinator::new(TriggerPolicy::Explicit);
	let now = Instant::now();
	coordinator.update(SearchEvent::EditText("relativity".into()), now);

	assert!(
		coordinator
			.update(SearchEvent::ChangePage(PageStep::Next), now)
			.is_none()
	);
	assert_eq!(coordinator.query().page, 1);
}

#[test]
fn blank_submit_is_a_no_op() {
	let now = Instant::now();
	let mut coordinator = SearchCoordinator::new(TriggerPolicy::Explicit);
	assert!(coordinator.update(SearchEvent::Submit, now).is_none());

	coordinator.update(SearchEvent::EditText("   \t ".into()), now);
	assert!(coordinator.update(SearchEvent::Submit, now).is_none());
	assert!(!coordinator.is_loading());
	assert!(coordinator.results().is_empty());

	let mut loaded = searched("relativity", page_of(&["A"], 1, 1));
	loaded.update(SearchEvent::EditText("  ".into()), now);
	let before = loaded.revision();
	assert!(loaded.update(SearchEvent::Submit, now).is_none());
	assert!(!loaded.is_loading());
	assert_eq!(loaded.revision(), before);
}

#[test]
fn submit_trims_the_query_sent_to_the_catalog() {
	let now = Instant::now();
	let mut coordinator = SearchCoordinator::new(TriggerPolicy::Explicit);
	coordinator.update(SearchEvent::EditText("  dune ".into()), now);
	let request = expect_fetch(coordinator.update(SearchEvent::Submit, now));
	assert_eq!(request.query, "dune");
	assert_eq!(request.text, "  dune ");
}

#[test]
fn editing_the_query_clears_multi_page_results() {
	let mut coordinator = searched("relativity", page_of(&["A", "B"], 3, 42));
	let now = Instant::now();
	let request = expect_fetch(coordinator.update(SearchEvent::ChangePage(PageStep::Next), now));
	resolve(&mut coordinator, &request, Ok(page_of(&["C"], 3, 42)), now);
	coordinator.update(SearchEvent::Select(0), now);

	let effect = coordinator.update(SearchEvent::EditText("relativity theory".into()), now);

	assert!(effect.is_none());
	let query = coordinator.query();
	assert_eq!(query.text, "relativity theory");
	assert_eq!(query.page, 1);
	assert_eq!(query.total_pages, 0);
	assert_eq!(query.total_results, 0);
	assert!(query.committed_text.is_empty());
	assert!(coordinator.results().is_empty());
	assert!(coordinator.selected_item().is_none());
}

#[test]
fn edit_invalidates_the_in_flight_search() {
	let now = Instant::now();
	let mut coordinator = SearchCoordinator::new(TriggerPolicy::Explicit);
	coordinator.update(SearchEvent::EditText("relativity".into()), now);
	let request = expect_fetch(coordinator.update(SearchEvent::Submit, now));

	coordinator.update(SearchEvent::EditText("quantum".into()), now);
	assert!(!coordinator.is_loading());

	resolve(&mut coordinator, &request, Ok(page_of(&["A"], 1, 1)), now);
	assert!(coordinator.results().is_empty());
	assert!(coordinator.query().committed_text.is_empty());
}

#[test]
fn later_request_wins_when_earlier_resolves_last() {
	let now = Instant::now();
	let mut coordinator = searched("relativity", page_of(&["A"], 3, 30));

	let first = expect_fetch(coordinator.update(SearchEvent::ChangePage(PageStep::Next), now));
	let second = expect_fetch(coordinator.update(SearchEvent::ChangePage(PageStep::Next), now));
	assert!(second.id > first.id);
	assert_eq!(second.page, 3);

	resolve(&mut coordinator, &second, Ok(page_of(&["third"], 3, 30)), now);
	resolve(&mut coordinator, &first, Ok(page_of(&["second"], 3, 30)), now);

	assert_eq!(coordinator.results()[0].title, "third");
	assert_eq!(coordinator.query().page, 3);
	assert!(!coordinator.is_loading());
}

#[test]
fn stale_failure_is_silent() {
	let now = Instant::now();
	let mut coordinator = searched("relativity", page_of(&["A"], 3, 30));
	let first = expect_fetch(coordinator.update(SearchEvent::ChangePage(PageStep::Next), now));
	let second = expect_fetch(coordinator.update(SearchEvent::ChangePage(PageStep::Next), now));

	let effect = resolve(
		&mut coordinator,
		&first,
		Err(CatalogError::network("connection reset")),
		now,
	);
	assert!(effect.is_none());
	assert!(coordinator.is_loading());

	resolve(&mut coordinator, &second, Ok(page_of(&["C"], 3, 30)), now);
	assert_eq!(coordinator.query().page, 3);
}

#[test]
fn failure_keeps_previous_results_and_notifies() {
	let mut coordinator = searched("relativity", page_of(&["A", "B"], 3, 42));
	let now = Instant::now();
	let request = expect_fetch(coordinator.update(SearchEvent::ChangePage(PageStep::Next), now));

	let effect = resolve(
		&mut coordinator,
		&request,
		Err(CatalogError::Server {
			status: Some(503),
			message: Some("Search backend unavailable".into()),
		}),
		now,
	);

	let Some(SearchEffect::Notify(notification)) = effect else {
		panic!("expected a notification, got {effect:?}");
	};
	assert_eq!(notification.title, "Error");
	assert_eq!(notification.description, "Search backend unavailable");
	assert_eq!(notification.variant, Variant::Destructive);

	assert!(!coordinator.is_loading());
	assert_eq!(coordinator.results().len(), 2);
	assert_eq!(coordinator.query().page, 1);
	assert_eq!(coordinator.query().total_pages, 3);
}

#[test]
fn failure_without_message_uses_generic_text() {
	let now = Instant::now();
	let mut coordinator = SearchCoordinator::new(TriggerPolicy::Explicit);
	coordinator.update(SearchEvent::EditText("relativity".into()), now);
	let request = expect_fetch(coordinator.update(SearchEvent::Submit, now));

	let effect = resolve(
		&mut coordinator,
		&request,
		Err(CatalogError::Network { message: None }),
		now,
	);
	let Some(SearchEffect::Notify(notification)) = effect else {
		panic!("expected a notification, got {effect:?}");
	};
	assert_eq!(notification.description, "Failed to fetch search results");
}

#[test]
fn new_results_clear_the_selection() {
	let mut coordinator = searched("relativity", page_of(&["A", "B"], 2, 4));
	let now = Instant::now();

	coordinator.update(SearchEvent::Select(1), now);
	assert_eq!(coordinator.selected_item().map(|item| item.title.as_str()), Some("B"));

	coordinator.update(SearchEvent::Select(9), now);
	assert_eq!(coordinator.selected_index(), Some(1));

	let request = expect_fetch(coordinator.update(SearchEvent::ChangePage(PageStep::Next), now));
	resolve(&mut coordinator, &request, Ok(page_of(&["C", "D"], 2, 4)), now);
	assert!(coordinator.selected_item().is_none());
}

#[test]
fn live_mode_debounces_keystrokes() {
	let start = Instant::now();
	let quiet = Duration::from_millis(500);
	let mut coordinator = SearchCoordinator::new(TriggerPolicy::Live { quiet });

	coordinator.update(SearchEvent::EditText("rel".into()), start);
	coordinator.update(
		SearchEvent::EditText("relativity".into()),
		start + Duration::from_millis(300),
	);

	assert!(
		coordinator
			.update(SearchEvent::Tick, start + Duration::from_millis(600))
			.is_none()
	);

	let request = expect_fetch(
		coordinator.update(SearchEvent::Tick, start + Duration::from_millis(800)),
	);
	assert_eq!(request.query, "relativity");
	assert!(!coordinator.has_pending_search());
	assert!(
		coordinator
			.update(SearchEvent::Tick, start + Duration::from_secs(5))
			.is_none()
	);
}

#[test]
fn live_mode_clearing_the_text_cancels_the_schedule() {
	let start = Instant::now();
	let mut coordinator = SearchCoordinator::new(TriggerPolicy::live());

	coordinator.update(SearchEvent::EditText("r".into()), start);
	assert!(coordinator.has_pending_search());
	coordinator.update(SearchEvent::EditText(String::new()), start);
	assert!(!coordinator.has_pending_search());
	assert!(
		coordinator
			.update(SearchEvent::Tick, start + Duration::from_secs(2))
			.is_none()
	);
}

#[test]
fn live_mode_page_change_is_debounced() {
	let start = Instant::now();
	let quiet = Duration::from_millis(200);
	let mut coordinator = SearchCoordinator::new(TriggerPolicy::Live { quiet });
	coordinator.update(SearchEvent::EditText("relativity".into()), start);
	let request = expect_fetch(coordinator.update(SearchEvent::Tick, start + quiet));
	resolve(&mut coordinator, &request, Ok(page_of(&["A"], 3, 30)), start + quiet);

	let later = start + Duration::from_secs(1);
	assert!(
		coordinator
			.update(SearchEvent::ChangePage(PageStep::Next), later)
			.is_none()
	);
	assert_eq!(coordinator.query().page, 2);

	let request = expect_fetch(coordinator.update(SearchEvent::Tick, later + quiet));
	assert_eq!(request.page, 2);
}

#[test]
fn shutdown_cancels_pending_work() {
	let start = Instant::now();
	let mut coordinator = SearchCoordinator::new(TriggerPolicy::live());
	coordinator.update(SearchEvent::EditText("relativity".into()), start);

	coordinator.update(SearchEvent::Shutdown, start);

	assert!(!coordinator.has_pending_search());
	assert!(
		coordinator
			.update(SearchEvent::Tick, start + Duration::from_secs(2))
			.is_none()
	);
}

#[test]
fn shrunken_result_set_refetches_the_last_page() {
	let mut coordinator = searched("relativity", page_of(&["A", "B"], 3, 42));
	let now = Instant::now();
	let second = expect_fetch(coordinator.update(SearchEvent::ChangePage(PageStep::Next), now));
	resolve(&mut coordinator, &second, Ok(page_of(&["C", "D"], 3, 42)), now);
	let third = expect_fetch(coordinator.update(SearchEvent::ChangePage(PageStep::Next), now));
	assert_eq!(third.page, 3);

	// The catalog now only has two pages, and page 3 comes back empty.
	let refetch = expect_fetch(resolve(&mut coordinator, &third, Ok(page_of(&[], 2, 20)), now));
	assert_eq!(refetch.page, 2);
	assert_eq!(refetch.query, "relativity");
	assert!(coordinator.is_loading());
	assert_eq!(coordinator.query().page, 2);
	assert_eq!(coordinator.query().total_pages, 2);
	let titles: Vec<_> = coordinator.results().iter().map(|item| item.title.as_str()).collect();
	assert_eq!(titles, ["C", "D"]);

	assert!(resolve(&mut coordinator, &refetch, Ok(page_of(&["E"], 2, 20)), now).is_none());
	assert!(!coordinator.is_loading());
	assert_eq!(coordinator.query().page, 2);
	assert_eq!(coordinator.results()[0].title, "E");
}

#[test]
fn live_mode_submit_flushes_the_pending_schedule() {
	let start = Instant::now();
	let quiet = Duration::from_millis(500);
	let mut coordinator = SearchCoordinator::new(TriggerPolicy::Live { quiet });

	coordinator.update(SearchEvent::EditText("relativity".into()), start);
	assert!(coordinator.has_pending_search());

	let request = expect_fetch(
		coordinator.update(SearchEvent::Submit, start + Duration::from_millis(100)),
	);
	assert_eq!(request.query, "relativity");
	assert!(!coordinator.has_pending_search());
	assert!(
		coordinator
			.update(SearchEvent::Tick, start + Duration::from_secs(2))
			.is_none()
	);
}

#[test]
fn selection_is_ignored_while_a_search_runs() {
	let mut coordinator = searched("relativity", page_of(&["A", "B"], 3, 42));
	let now = Instant::now();
	let request = expect_fetch(coordinator.update(SearchEvent::ChangePage(PageStep::Next), now));

	coordinator.update(SearchEvent::Select(0), now);
	assert!(coordinator.selected_item().is_none());

	resolve(&mut coordinator, &request, Ok(page_of(&["C"], 3, 42)), now);
	coordinator.update(SearchEvent::Select(0), now);
	assert_eq!(coordinator.selected_item().map(|item| item.title.as_str()), Some("C"));
}
