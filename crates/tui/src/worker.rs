//! Background catalog workers and command infrastructure.
//!
//! Searches and downloads each run on their own thread so a slow download
//! never holds up paging through results. Both workers report back over a
//! single reply channel drained by the event loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use bookworm_catalog::{CatalogApi, CatalogError, DownloadTicket};
use tracing::{debug, trace};

use crate::coordinator::{SearchRequest, SearchResponse};

/// Commands understood by the search worker.
#[derive(Debug)]
pub(crate) enum SearchCommand {
	Query(SearchRequest),
	Shutdown,
}

/// Commands understood by the download worker.
#[derive(Debug)]
pub(crate) enum DownloadCommand {
	Start { item_id: String },
	Shutdown,
}

/// Outcomes reported back to the event loop.
#[derive(Debug)]
pub(crate) enum CatalogReply {
	Search(SearchResponse),
	Download {
		item_id: String,
		outcome: Result<DownloadTicket, CatalogError>,
	},
}

/// Channels connecting the UI thread to the workers.
pub(crate) struct WorkerChannels {
	pub search_tx: Sender<SearchCommand>,
	pub download_tx: Sender<DownloadCommand>,
	pub reply_rx: Receiver<CatalogReply>,
	/// Id of the most recently dispatched search.
	pub latest_search_id: Arc<AtomicU64>,
}

/// Launch the search and download workers against `api`.
pub(crate) fn spawn(api: Arc<dyn CatalogApi>) -> WorkerChannels {
	let (search_tx, search_rx) = mpsc::channel();
	let (download_tx, download_rx) = mpsc::channel();
	let (reply_tx, reply_rx) = mpsc::channel();
	let latest_search_id = Arc::new(AtomicU64::new(0));

	let search_api = Arc::clone(&api);
	let search_replies = reply_tx.clone();
	let thread_latest = Arc::clone(&latest_search_id);
	thread::spawn(move || search_loop(search_api.as_ref(), &search_rx, &search_replies, &thread_latest));
	thread::spawn(move || download_loop(api.as_ref(), &download_rx, &reply_tx));

	WorkerChannels {
		search_tx,
		download_tx,
		reply_rx,
		latest_search_id,
	}
}

fn search_loop(
	api: &dyn CatalogApi,
	commands: &Receiver<SearchCommand>,
	replies: &Sender<CatalogReply>,
	latest_search_id: &AtomicU64,
) {
	while let Ok(command) = commands.recv() {
		let request = match command {
			SearchCommand::Query(request) => request,
			SearchCommand::Shutdown => break,
		};
		// A newer request is already queued behind this one.
		if request.id < latest_search_id.load(Ordering::Acquire) {
			trace!(id = request.id, "skipping superseded search");
			continue;
		}
		let outcome = api.search(&request.query, request.page);
		let response = SearchResponse {
			id: request.id,
			outcome,
		};
		if replies.send(CatalogReply::Search(response)).is_err() {
			break;
		}
	}
	debug!("search worker stopped");
}

fn download_loop(
	api: &dyn CatalogApi,
	commands: &Receiver<DownloadCommand>,
	replies: &Sender<CatalogReply>,
) {
	while let Ok(command) = commands.recv() {
		let item_id = match command {
			DownloadCommand::Start { item_id } => item_id,
			DownloadCommand::Shutdown => break,
		};
		let outcome = api.download(&item_id);
		if replies
			.send(CatalogReply::Download { item_id, outcome })
			.is_err()
		{
			break;
		}
	}
	debug!("download worker stopped");
}
