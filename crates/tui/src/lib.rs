//! Terminal front-end for the BookWorm catalog client.
//!
//! The crate is layered the same way the UI is: a [`SearchCoordinator`]
//! owns query, pagination and result state; the [`presenter`] turns that
//! state into rows, pagination controls and detail fields; and [`App`]
//! wires both to the keyboard, the screen and background catalog workers.

mod app;
pub mod components;
mod config;
pub mod coordinator;
pub mod navigation;
pub mod notification;
pub mod presenter;
#[cfg(test)]
mod render_tests;
mod runtime;
pub mod style;
mod worker;

pub use app::{App, AppOptions, SessionSummary};
pub use config::{UiLabels, ViewLabels};
pub use coordinator::{
	PageStep, QueryState, SearchCoordinator, SearchEffect, SearchEvent, SearchRequest,
	SearchResponse, TriggerPolicy,
};
pub use navigation::{Focus, UnknownView, View};
pub use notification::{Notification, Toasts, Variant};
pub use runtime::run;
pub use style::{StyleConfig, Theme};
