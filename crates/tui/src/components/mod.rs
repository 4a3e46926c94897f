//! UI building blocks shared across rendering and state modules.

/// Detail popup for the selected result.
pub mod detail;
/// Single-line query input.
pub mod input;
/// Static browse and account views.
pub mod pages;
/// Search box rendering and status display.
pub mod prompt;
pub mod scrollbar;
pub mod sidebar;
/// Table rendering and configuration.
pub mod tables;
pub mod toast;

pub use detail::{DetailContext, render_detail};
pub use input::QueryInput;
pub use pages::{render_account, render_browse};
pub use prompt::{InputContext, PromptStatus, render_input};
pub use scrollbar::render_scrollbar;
pub use sidebar::{SIDEBAR_WIDTH, render_sidebar};
pub use tables::{TableSpec, TableViewport, render_table};
pub use toast::render_toasts;
