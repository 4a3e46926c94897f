//! Catalog client for `bookworm`.
//!
//! The crate defines the data returned by the remote book catalog, the
//! [`CatalogApi`] seam the terminal front-end talks to, and [`HttpCatalog`],
//! the blocking HTTP implementation used by the binary. Download actions
//! resolve an item's download location and hand it to a [`Launcher`].

mod api;
mod error;
pub mod http;
mod launcher;
mod types;

pub use api::CatalogApi;
pub use error::CatalogError;
pub use http::{HttpCatalog, HttpCatalogConfig};
pub use launcher::{Launcher, SystemLauncher};
pub use types::{DownloadTicket, ResultItem, SearchPage};
