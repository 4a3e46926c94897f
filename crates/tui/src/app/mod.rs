//! Core application state and behavior for the terminal front-end.
//!
//! The [`App`] type owns the search coordinator and the UI state around it.
//! Supporting modules partition the implementation: actions (key handling),
//! rendering, and the bridge to the catalog workers.

mod actions;
mod render;
mod search;
mod state;

pub(crate) use search::CatalogRuntime;
pub use state::{App, AppOptions, SessionSummary};
