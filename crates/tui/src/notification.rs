//! Transient user notifications.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use bookworm_catalog::CatalogError;
use tracing::{info, warn};

pub const SEARCH_FAILED_TITLE: &str = "Error";
pub const SEARCH_FAILED_FALLBACK: &str = "Failed to fetch search results";
pub const DOWNLOAD_STARTED_TITLE: &str = "Download Started";
pub const DOWNLOAD_FAILED_TITLE: &str = "Download Failed";
pub const DOWNLOAD_FAILED_FALLBACK: &str = "Failed to start the download";

const TOAST_LIFETIME: Duration = Duration::from_secs(5);
const TOAST_CAPACITY: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
	#[default]
	Normal,
	Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	pub title: String,
	pub description: String,
	pub variant: Variant,
}

impl Notification {
	pub fn normal(title: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			description: description.into(),
			variant: Variant::Normal,
		}
	}

	pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			description: description.into(),
			variant: Variant::Destructive,
		}
	}

	/// Failure of a search fetch. Uses the error's message when it has one.
	#[must_use]
	pub fn search_failed(err: &CatalogError) -> Self {
		Self::destructive(
			SEARCH_FAILED_TITLE,
			err.message().unwrap_or(SEARCH_FAILED_FALLBACK),
		)
	}

	#[must_use]
	pub fn download_started(title: &str) -> Self {
		Self::normal(
			DOWNLOAD_STARTED_TITLE,
			format!("\"{title}\" is opening in your browser"),
		)
	}

	#[must_use]
	pub fn download_failed(err: &CatalogError) -> Self {
		Self::destructive(
			DOWNLOAD_FAILED_TITLE,
			err.message().unwrap_or(DOWNLOAD_FAILED_FALLBACK),
		)
	}

	#[must_use]
	pub fn is_destructive(&self) -> bool {
		self.variant == Variant::Destructive
	}
}

#[derive(Debug, Clone)]
struct Toast {
	notification: Notification,
	expires_at: Instant,
}

/// Queue of visible notifications, newest last.
#[derive(Debug)]
pub struct Toasts {
	entries: VecDeque<Toast>,
	lifetime: Duration,
	capacity: usize,
}

impl Default for Toasts {
	fn default() -> Self {
		Self::new(TOAST_LIFETIME, TOAST_CAPACITY)
	}
}

impl Toasts {
	#[must_use]
	pub fn new(lifetime: Duration, capacity: usize) -> Self {
		Self {
			entries: VecDeque::with_capacity(capacity),
			lifetime,
			capacity: capacity.max(1),
		}
	}

	/// Show `notification` until `now + lifetime`, evicting the oldest toast
	/// when the queue is full.
	pub fn push(&mut self, notification: Notification, now: Instant) {
		match notification.variant {
			Variant::Normal => info!(
				title = %notification.title,
				description = %notification.description,
				"notification"
			),
			Variant::Destructive => warn!(
				title = %notification.title,
				description = %notification.description,
				"notification"
			),
		}
		if self.entries.len() == self.capacity {
			self.entries.pop_front();
		}
		self.entries.push_back(Toast {
			notification,
			expires_at: now + self.lifetime,
		});
	}

	/// Drop every toast whose lifetime has ended. Returns whether any were removed.
	pub fn expire(&mut self, now: Instant) -> bool {
		let before = self.entries.len();
		self.entries.retain(|toast| toast.expires_at > now);
		before != self.entries.len()
	}

	pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> {
		self.entries.iter().map(|toast| &toast.notification)
	}

	#[must_use]
	pub fn latest(&self) -> Option<&Notification> {
		self.entries.back().map(|toast| &toast.notification)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
