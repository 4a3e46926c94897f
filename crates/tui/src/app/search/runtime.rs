//! Channel plumbing between the UI thread and the catalog workers.
//!
//! [`CatalogRuntime`] publishes the id of each dispatched search so the
//! worker can skip requests that were superseded while queued.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use bookworm_catalog::{CatalogApi, CatalogError};
use tracing::warn;

use crate::coordinator::SearchRequest;
use crate::worker::{self, CatalogReply, DownloadCommand, SearchCommand};

/// Thin wrapper around the worker channels.
pub(crate) struct CatalogRuntime {
	search_tx: Sender<SearchCommand>,
	download_tx: Sender<DownloadCommand>,
	reply_rx: Receiver<CatalogReply>,
	latest_search_id: Arc<AtomicU64>,
}

impl CatalogRuntime {
	pub(crate) fn new(api: Arc<dyn CatalogApi>) -> Self {
		let channels = worker::spawn(api);
		Self {
			search_tx: channels.search_tx,
			download_tx: channels.download_tx,
			reply_rx: channels.reply_rx,
			latest_search_id: channels.latest_search_id,
		}
	}

	pub(crate) fn dispatch_search(&self, request: SearchRequest) -> Result<(), CatalogError> {
		self.latest_search_id
			.store(request.id, AtomicOrdering::Release);
		self.search_tx
			.send(SearchCommand::Query(request))
			.map_err(|_| worker_stopped("search"))
	}

	pub(crate) fn dispatch_download(&self, item_id: String) -> Result<(), CatalogError> {
		self.download_tx
			.send(DownloadCommand::Start { item_id })
			.map_err(|_| worker_stopped("download"))
	}

	pub(crate) fn try_recv(&self) -> Option<CatalogReply> {
		match self.reply_rx.try_recv() {
			Ok(reply) => Some(reply),
			Err(TryRecvError::Empty) => None,
			Err(TryRecvError::Disconnected) => {
				warn!("catalog workers disconnected");
				None
			}
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.search_tx.send(SearchCommand::Shutdown);
		let _ = self.download_tx.send(DownloadCommand::Shutdown);
	}
}

fn worker_stopped(kind: &str) -> CatalogError {
	warn!(worker = kind, "catalog worker is not running");
	CatalogError::network(format!("the {kind} worker stopped unexpectedly"))
}
