//! Shared plumbing for the `bookworm` binary.
//!
//! The catalog client lives in `bookworm-catalog` and the terminal interface
//! in `bookworm-tui`; this crate only knows where files go and how logging is
//! set up, and re-exports the entry points embedders need.

pub mod app_dirs;
pub mod logging;

pub use bookworm_catalog::{CatalogApi, CatalogError, HttpCatalog, HttpCatalogConfig};
pub use bookworm_tui::{AppOptions, SessionSummary, TriggerPolicy, run};
