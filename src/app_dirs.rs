//! Where `bookworm` keeps its files.
//!
//! Each [`AppDir`] resolves to its `BOOKWORM_*_DIR` override when set and
//! non-empty, and to the platform location from `directories` otherwise.

use std::env;
use std::fmt;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

/// Name of the user configuration file inside [`AppDir::Config`].
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Name of the log file inside [`AppDir::Data`].
pub const LOG_FILE_NAME: &str = "bookworm.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppDir {
	/// Holds `config.toml`.
	Config,
	/// Holds the default log file.
	Data,
	Cache,
}

impl AppDir {
	pub const ALL: [Self; 3] = [Self::Config, Self::Data, Self::Cache];

	/// Environment variable that overrides this directory.
	#[must_use]
	pub const fn env_var(self) -> &'static str {
		match self {
			Self::Config => "BOOKWORM_CONFIG_DIR",
			Self::Data => "BOOKWORM_DATA_DIR",
			Self::Cache => "BOOKWORM_CACHE_DIR",
		}
	}

	pub fn path(self) -> Result<PathBuf> {
		if let Some(dir) = env::var_os(self.env_var()).filter(|value| !value.is_empty()) {
			return Ok(PathBuf::from(dir));
		}
		let dirs = ProjectDirs::from("org", "bookworm-portal", "bookworm")
			.ok_or_else(|| anyhow!("no home directory to place the {self} directory in"))?;
		let dir = match self {
			Self::Config => dirs.config_local_dir(),
			Self::Data => dirs.data_local_dir(),
			Self::Cache => dirs.cache_dir(),
		};
		Ok(dir.to_path_buf())
	}
}

impl fmt::Display for AppDir {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Config => "config",
			Self::Data => "data",
			Self::Cache => "cache",
		})
	}
}

/// The user configuration file, whether or not it exists yet.
pub fn config_file() -> Result<PathBuf> {
	Ok(AppDir::Config.path()?.join(CONFIG_FILE_NAME))
}

/// Log file used when `log.file` is not configured.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(AppDir::Data.path()?.join(LOG_FILE_NAME))
}
