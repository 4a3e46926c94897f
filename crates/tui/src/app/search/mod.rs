//! Bridges the coordinator and the background catalog workers.
//!
//! Effects produced by the coordinator are dispatched here, and worker
//! replies are fed back into it as events.

mod runtime;

use std::time::Instant;

use tracing::debug;

pub(crate) use runtime::CatalogRuntime;

use super::App;
use crate::coordinator::{SearchEffect, SearchEvent, SearchResponse};
use crate::navigation::Focus;
use crate::worker::CatalogReply;

impl App<'_> {
	/// Run `event` through the coordinator and perform the resulting effect.
	pub(crate) fn apply(&mut self, event: SearchEvent, now: Instant) {
		if let Some(effect) = self.coordinator.update(event, now) {
			self.perform(effect, now);
		}
		self.sync_results_view();
	}

	fn perform(&mut self, effect: SearchEffect, now: Instant) {
		match effect {
			SearchEffect::Fetch(request) => {
				self.searches_issued += 1;
				let id = request.id;
				if let Err(err) = self.catalog.dispatch_search(request) {
					let response = SearchResponse {
						id,
						outcome: Err(err),
					};
					self.apply(SearchEvent::Resolved(response), now);
				}
			}
			SearchEffect::Notify(notification) => self.toasts.push(notification, now),
		}
	}

	/// Drain every reply the workers have produced so far.
	pub(crate) fn pump_catalog_replies(&mut self, now: Instant) {
		while let Some(reply) = self.catalog.try_recv() {
			match reply {
				CatalogReply::Search(response) => {
					self.apply(SearchEvent::Resolved(response), now);
				}
				CatalogReply::Download { item_id, outcome } => {
					debug!(%item_id, ok = outcome.is_ok(), "download finished");
					let notification = self.download.finish(&outcome);
					self.toasts.push(notification, now);
				}
			}
		}
	}

	/// Start downloading the item shown in the detail view.
	pub(crate) fn start_download(&mut self, now: Instant) {
		let Some(item) = self.coordinator.selected_item() else {
			return;
		};
		let Some(item_id) = self.download.begin(item) else {
			return;
		};
		if let Err(err) = self.catalog.dispatch_download(item_id) {
			let notification = self.download.finish(&Err(err));
			self.toasts.push(notification, now);
		}
	}

	/// Reset the table cursor whenever the coordinator swaps the result set.
	fn sync_results_view(&mut self) {
		let revision = self.coordinator.revision();
		if revision == self.seen_revision {
			return;
		}
		self.seen_revision = revision;
		let has_rows = !self.coordinator.results().is_empty();
		self.table_state = ratatui::widgets::TableState::default().with_selected(has_rows.then_some(0));
		if !has_rows && self.focus == Focus::Results {
			self.set_focus(Focus::Input);
		}
	}
}
