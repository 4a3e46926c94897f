//! Configuration loading and resolution utilities.
//!
//! Sources are layered with the `config` crate: default files, then
//! `--config` files, then `BOOKWORM__SECTION__KEY` environment variables,
//! then CLI flags. `load` is the entry point and returns a validated
//! [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;

pub(crate) use loader::default_config_files;
pub use loader::load;
pub use resolved::ResolvedConfig;
