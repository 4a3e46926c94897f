//! Pure presentation of search results.
//!
//! Nothing here owns or mutates search state: every function reads a
//! snapshot handed over by the coordinator. The only outward intent, a
//! download request, goes through [`DownloadTrigger`].

mod detail;
mod format;
mod pagination;
mod table;

pub use detail::{DetailField, DetailView, DownloadState, DownloadTrigger};
pub use format::{
	COLUMN_HEADERS, NOT_AVAILABLE, UNKNOWN, authors_label, group_thousands, or_not_available,
	row_cells,
};
pub use pagination::{PaginationView, results_summary};
pub use table::{build_result_rows, column_constraints};
