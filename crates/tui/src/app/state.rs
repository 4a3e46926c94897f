//! Core state container for the terminal front-end.
//!
//! [`App`] bundles the search coordinator with everything the UI needs
//! around it: the input widget, table cursor, active view, notifications
//! and the channels to the catalog workers.

use std::sync::Arc;
use std::time::Instant;

use bookworm_catalog::CatalogApi;
use ratatui::widgets::{ScrollbarState, TableState};
use serde::Serialize;
use throbber_widgets_tui::ThrobberState;
use tracing::debug;

use super::CatalogRuntime;
use crate::components::QueryInput;
use crate::config::UiLabels;
use crate::coordinator::{QueryState, SearchCoordinator, SearchEvent, TriggerPolicy};
use crate::navigation::{Focus, View};
use crate::notification::Toasts;
use crate::presenter::DownloadTrigger;
use crate::style::{StyleConfig, Theme};

impl Drop for App<'_> {
	fn drop(&mut self) {
		self.coordinator.update(SearchEvent::Shutdown, Instant::now());
		self.catalog.shutdown();
	}
}

/// Construction options for [`App`].
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
	pub trigger: TriggerPolicy,
	/// Query searched as soon as the UI starts.
	pub initial_query: Option<String>,
	pub start_view: View,
	pub theme: Theme,
	pub labels: UiLabels,
}

/// What the session ended with, reported once the UI closes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
	/// Text left in the search box.
	pub query: String,
	/// Query of the results on screen when the session ended.
	pub committed_query: String,
	pub page: u32,
	pub total_pages: u32,
	pub total_results: u64,
	/// Number of searches dispatched to the catalog.
	pub searches: usize,
	pub downloads_started: usize,
}

pub struct App<'a> {
	pub(crate) coordinator: SearchCoordinator,
	/// Text input widget for the query.
	pub search_input: QueryInput<'a>,
	/// Cursor within the results table.
	pub table_state: TableState,
	pub(crate) scrollbar_state: ScrollbarState,
	pub(crate) view: View,
	pub(crate) focus: Focus,
	pub(crate) labels: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) toasts: Toasts,
	pub(crate) download: DownloadTrigger,
	pub(crate) catalog: CatalogRuntime,
	/// Coordinator revision the table cursor was last synced to.
	pub(crate) seen_revision: u64,
	pub(crate) searches_issued: usize,
	pub(crate) initial_query: Option<String>,
}

impl App<'_> {
	/// Construct an [`App`] that searches through `api`.
	pub fn new(api: Arc<dyn CatalogApi>, options: AppOptions) -> Self {
		let AppOptions {
			trigger,
			initial_query,
			start_view,
			theme,
			labels,
		} = options;
		debug!(?trigger, view = %start_view, "starting terminal front-end");

		Self {
			coordinator: SearchCoordinator::new(trigger),
			search_input: QueryInput::default(),
			table_state: TableState::default(),
			scrollbar_state: ScrollbarState::default(),
			view: start_view,
			focus: Focus::Input,
			labels,
			style: StyleConfig::with_theme(theme),
			throbber_state: ThrobberState::default(),
			toasts: Toasts::default(),
			download: DownloadTrigger::default(),
			catalog: CatalogRuntime::new(api),
			seen_revision: 0,
			searches_issued: 0,
			initial_query: initial_query.filter(|query| !query.trim().is_empty()),
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
	}

	#[must_use]
	pub fn view(&self) -> View {
		self.view
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	#[must_use]
	pub fn coordinator(&self) -> &SearchCoordinator {
		&self.coordinator
	}

	#[must_use]
	pub fn toasts(&self) -> &Toasts {
		&self.toasts
	}

	#[must_use]
	pub fn download(&self) -> &DownloadTrigger {
		&self.download
	}

	#[must_use]
	pub fn summary(&self) -> SessionSummary {
		let QueryState {
			text,
			committed_text,
			page,
			total_pages,
			total_results,
		} = self.coordinator.query().clone();
		SessionSummary {
			query: text,
			committed_query: committed_text,
			page,
			total_pages,
			total_results,
			searches: self.searches_issued,
			downloads_started: self.download.started(),
		}
	}

	/// Type the configured initial query into the search box and submit it.
	pub fn hydrate_initial_query(&mut self) {
		let Some(query) = self.initial_query.take() else {
			return;
		};
		let now = Instant::now();
		self.switch_view(View::Search);
		self.search_input.set_text(query.clone());
		self.apply(SearchEvent::EditText(query), now);
		self.apply(SearchEvent::Submit, now);
	}

	/// Advance timers: fire a due debounced search, expire toasts and spin
	/// the throbber while work is pending.
	pub fn tick(&mut self, now: Instant) {
		self.apply(SearchEvent::Tick, now);
		self.toasts.expire(now);
		if self.coordinator.is_loading() || self.download.is_downloading() {
			self.throbber_state.calc_next();
		}
	}

	pub(crate) fn switch_view(&mut self, view: View) {
		if self.view != view {
			debug!(from = %self.view, to = %view, "switching view");
		}
		self.view = view;
		if view == View::Search {
			self.set_focus(Focus::Input);
		}
	}

	pub(crate) fn set_focus(&mut self, focus: Focus) {
		self.focus = focus;
		self.search_input.set_focused(focus == Focus::Input);
	}
}
