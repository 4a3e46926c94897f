use bookworm_catalog::{CatalogError, DownloadTicket, ResultItem};
use tracing::{debug, info};

use super::format::{authors_label, or_not_available};
use crate::notification::Notification;

/// One labelled attribute of the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
	pub label: &'static str,
	pub value: String,
}

/// Extended attributes of the selected result.
#[derive(Debug, Clone, Copy)]
pub struct DetailView<'a> {
	item: &'a ResultItem,
}

impl<'a> DetailView<'a> {
	#[must_use]
	pub fn new(item: &'a ResultItem) -> Self {
		Self { item }
	}

	#[must_use]
	pub fn title(&self) -> &'a str {
		&self.item.title
	}

	/// Attributes in display order, each with its own fallback.
	#[must_use]
	pub fn fields(&self) -> Vec<DetailField> {
		let item = self.item;
		let field = |label, value: Option<&str>| DetailField {
			label,
			value: or_not_available(value).to_owned(),
		};
		vec![
			DetailField {
				label: "Author(s)",
				value: authors_label(item.authors.as_deref()),
			},
			field("Year", item.year.as_deref()),
			field("Publisher", item.publisher.as_deref()),
			field("Language", item.language.as_deref()),
			field("Format", item.format.as_deref()),
			field("Size", item.size.as_deref()),
			field("Rating", item.rating.as_deref()),
		]
	}

	/// Cover image reference, when the catalog supplied one.
	#[must_use]
	pub fn cover(&self) -> Option<&'a str> {
		self.item.cover.as_deref()
	}
}

/// State of the download button.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DownloadState {
	#[default]
	Idle,
	Downloading { item_id: String, title: String },
}

/// Download button state machine: `Idle -> Downloading -> Idle`.
///
/// [`begin`](Self::begin) switches to `Downloading` before the caller
/// dispatches the request. [`finish`](Self::finish) always returns to `Idle`
/// whatever the outcome.
#[derive(Debug, Default)]
pub struct DownloadTrigger {
	state: DownloadState,
	started: usize,
}

impl DownloadTrigger {
	#[must_use]
	pub fn state(&self) -> &DownloadState {
		&self.state
	}

	#[must_use]
	pub fn is_downloading(&self) -> bool {
		matches!(self.state, DownloadState::Downloading { .. })
	}

	/// Whether the button accepts a press for `item`.
	#[must_use]
	pub fn is_enabled_for(&self, item: &ResultItem) -> bool {
		!self.is_downloading() && item.id.is_some()
	}

	/// Number of downloads that reported success.
	#[must_use]
	pub fn started(&self) -> usize {
		self.started
	}

	#[must_use]
	pub fn label(&self, item: &ResultItem) -> String {
		if self.is_downloading() {
			return "Downloading...".to_owned();
		}
		match item.format.as_deref() {
			Some(format) => format!("Download {format}"),
			None => "Download".to_owned(),
		}
	}

	/// Enter `Downloading` for `item`. Returns the id to hand to the catalog,
	/// or `None` while the button is disabled.
	pub fn begin(&mut self, item: &ResultItem) -> Option<String> {
		if !self.is_enabled_for(item) {
			debug!(title = %item.title, "download trigger disabled");
			return None;
		}
		let item_id = item.id.clone()?;
		self.state = DownloadState::Downloading {
			item_id: item_id.clone(),
			title: item.title.clone(),
		};
		info!(%item_id, "download requested");
		Some(item_id)
	}

	/// Return to `Idle` and describe the outcome.
	pub fn finish(&mut self, outcome: &Result<DownloadTicket, CatalogError>) -> Notification {
		let previous = std::mem::take(&mut self.state);
		let title = match &previous {
			DownloadState::Downloading { title, .. } => title.as_str(),
			DownloadState::Idle => "the selected item",
		};
		match outcome {
			Ok(ticket) => {
				self.started += 1;
				info!(id = %ticket.id, url = %ticket.url, "download opened");
				Notification::download_started(title)
			}
			Err(err) => Notification::download_failed(err),
		}
	}
}
