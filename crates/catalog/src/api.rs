use crate::{CatalogError, DownloadTicket, SearchPage};

/// Operations the front-end needs from a book catalog.
///
/// Implementations block the calling thread; the terminal UI only invokes
/// them from its background workers.
pub trait CatalogApi: Send + Sync {
	/// Fetch one page of results for `query`. Pages start at 1.
	fn search(&self, query: &str, page: u32) -> Result<SearchPage, CatalogError>;

	/// Resolve the download location for the item `id` and open it.
	fn download(&self, id: &str) -> Result<DownloadTicket, CatalogError>;
}
