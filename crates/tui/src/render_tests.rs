use std::sync::Arc;
use std::time::Instant;

use bookworm_catalog::{CatalogApi, CatalogError, DownloadTicket, ResultItem, SearchPage};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::coordinator::{PageStep, SearchEffect, SearchEvent, SearchResponse};
use crate::navigation::{Focus, View};
use crate::notification::Notification;
use crate::presenter::PaginationView;
use crate::{App, AppOptions};

/// Catalog that is never reached; tests feed responses in directly.
struct OfflineCatalog;

impl CatalogApi for OfflineCatalog {
	fn search(&self, _query: &str, _page: u32) -> Result<SearchPage, CatalogError> {
		Err(CatalogError::network("offline"))
	}

	fn download(&self, _id: &str) -> Result<DownloadTicket, CatalogError> {
		Err(CatalogError::download("offline"))
	}
}

fn search_view() -> App<'static> {
	App::new(
		Arc::new(OfflineCatalog),
		AppOptions {
			start_view: View::Search,
			..AppOptions::default()
		},
	)
}

fn relativity_page() -> SearchPage {
	SearchPage {
		results: vec![
			ResultItem {
				authors: Some(vec!["Albert Einstein".into()]),
				year: Some("1916".into()),
				language: Some("English".into()),
				format: Some("pdf".into()),
				..ResultItem::new("item-a", "Relativity")
			},
			ResultItem::new("item-b", "Spacetime Physics"),
		],
		total_pages: 3,
		total_results: 42,
		current_page: Some(1),
	}
}

/// Type `text`, submit it and resolve the request with `page` without
/// going through the workers.
fn load(app: &mut App<'_>, text: &str, page: SearchPage) {
	let now = Instant::now();
	app.search_input.set_text(text);
	app.apply(SearchEvent::EditText(text.into()), now);
	let Some(SearchEffect::Fetch(request)) = app.coordinator.update(SearchEvent::Submit, now) else {
		panic!("submit should fetch");
	};
	app.apply(
		SearchEvent::Resolved(SearchResponse {
			id: request.id,
			outcome: Ok(page),
		}),
		now,
	);
}

fn render(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(110, 34)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw frame");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line.trim_end().to_owned());
	}
	lines.join("\n")
}

#[test]
fn relativity_results_render_rows_and_pagination() {
	let mut app = search_view();
	load(&mut app, "relativity", relativity_page());

	let screen = render(&mut app);
	assert!(screen.contains("Find Resources"), "{screen}");
	assert!(screen.contains("Found approximately 42 results"), "{screen}");
	assert!(screen.contains("Author(s)"), "{screen}");
	assert!(screen.contains("Albert Einstein"), "{screen}");
	assert!(screen.contains("Spacetime Physics"), "{screen}");
	assert!(screen.contains("Unknown"), "{screen}");
	assert!(screen.contains("N/A"), "{screen}");
	assert!(screen.contains("Page 1 of 3"), "{screen}");
	assert!(screen.contains("◀ Previous"), "{screen}");
	assert!(screen.contains("Next ▶"), "{screen}");

	let pagination = PaginationView::from_query(app.coordinator.query()).expect("pagination");
	insta::assert_snapshot!(pagination.label(), @"Page 1 of 3");
	assert!(!pagination.previous_enabled);
	assert!(pagination.next_enabled);
}

#[test]
fn loading_replaces_results_with_a_spinner() {
	let mut app = search_view();
	app.search_input.set_text("relativity");
	let now = Instant::now();
	app.apply(SearchEvent::EditText("relativity".into()), now);
	let effect = app.coordinator.update(SearchEvent::Submit, now);
	assert!(matches!(effect, Some(SearchEffect::Fetch(_))));

	let screen = render(&mut app);
	assert!(screen.contains("Searching..."), "{screen}");
	assert!(!screen.contains("Author(s)"), "{screen}");
}

#[test]
fn empty_input_shows_placeholder() {
	let mut app = search_view();
	let screen = render(&mut app);
	assert!(
		screen.contains("Search for books, articles, and more..."),
		"{screen}"
	);
	assert!(!screen.contains("Page "), "{screen}");
}

#[test]
fn committed_search_without_hits_says_so() {
	let mut app = search_view();
	load(&mut app, "zzzz", SearchPage::default());
	let screen = render(&mut app);
	assert!(screen.contains("No results"), "{screen}");
	assert!(!screen.contains("Found approximately"), "{screen}");
}

#[test]
fn detail_popup_lists_fields_and_download_label() {
	let mut app = search_view();
	load(&mut app, "relativity", relativity_page());
	app.set_focus(Focus::Results);
	app.apply(SearchEvent::Select(0), Instant::now());

	let screen = render(&mut app);
	assert!(screen.contains("Publisher"), "{screen}");
	assert!(screen.contains("[ Download pdf ]"), "{screen}");
	assert!(screen.contains("d download"), "{screen}");
}

#[test]
fn selecting_while_a_page_loads_opens_nothing() {
	let mut app = search_view();
	load(&mut app, "relativity", relativity_page());
	app.set_focus(Focus::Results);
	let now = Instant::now();
	let effect = app
		.coordinator
		.update(SearchEvent::ChangePage(PageStep::Next), now);
	assert!(matches!(effect, Some(SearchEffect::Fetch(_))));

	app.apply(SearchEvent::Select(0), now);
	assert!(app.coordinator.selected_item().is_none());
	app.start_download(now);
	assert!(!app.download().is_downloading());

	let screen = render(&mut app);
	assert!(screen.contains("Searching..."), "{screen}");
	assert!(!screen.contains("Publisher"), "{screen}");
}

#[test]
fn open_detail_stays_visible_while_a_search_runs() {
	let mut app = search_view();
	load(&mut app, "relativity", relativity_page());
	app.set_focus(Focus::Results);
	let now = Instant::now();
	app.apply(SearchEvent::Select(0), now);
	let effect = app.coordinator.update(SearchEvent::Submit, now);
	assert!(matches!(effect, Some(SearchEffect::Fetch(_))));

	let screen = render(&mut app);
	assert!(screen.contains("Publisher"), "{screen}");
	assert!(screen.contains("[ Download pdf ]"), "{screen}");
}

#[test]
fn toasts_render_over_the_view() {
	let mut app = search_view();
	app.toasts.push(
		Notification::destructive("Download Failed", "quota exceeded"),
		Instant::now(),
	);
	let screen = render(&mut app);
	assert!(screen.contains("Download Failed"), "{screen}");
	assert!(screen.contains("quota exceeded"), "{screen}");
}

#[test]
fn browse_view_shows_landing_card_and_navigation() {
	let mut app = App::new(Arc::new(OfflineCatalog), AppOptions::default());
	let screen = render(&mut app);
	assert!(screen.contains("BookWorm Portal"), "{screen}");
	assert!(screen.contains("Start Searching"), "{screen}");
	assert!(screen.contains("Navigation"), "{screen}");
	assert!(screen.contains("Account F3"), "{screen}");
}
