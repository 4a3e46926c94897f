use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use bookworm::app_dirs;
use config::{Config, ConfigError, Environment, File};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

/// Prefix of `BOOKWORM__SECTION__KEY` environment overrides.
const ENV_PREFIX: &str = "BOOKWORM";

/// A file consulted while loading, in merge order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ConfigFile {
	path: PathBuf,
	/// Files named with `--config` must exist; default locations may not.
	required: bool,
}

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let files = config_files(cli);
	let builder = build_config(&files)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);

	let mut resolved = raw.resolve(cli)?;
	resolved.config_files = files
		.into_iter()
		.filter(|file| file.path.is_file())
		.map(|file| file.path)
		.collect();
	Ok(resolved)
}

/// Default locations in merge order: the user config, then `.bookworm.toml`
/// and `bookworm.toml` in the working directory.
pub(crate) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();
	if let Ok(path) = app_dirs::config_file() {
		files.push(path);
	}
	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".bookworm.toml"));
		files.push(current_dir.join("bookworm.toml"));
	}
	files
}

fn config_files(cli: &CliArgs) -> Vec<ConfigFile> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	let defaults = defaults.into_iter().map(|path| ConfigFile {
		path,
		required: false,
	});
	let explicit = cli.config.iter().map(|path| ConfigFile {
		path: path.clone(),
		required: true,
	});
	defaults.chain(explicit).collect()
}

fn build_config(files: &[ConfigFile]) -> Result<Config> {
	let builder = files.iter().fold(Config::builder(), |builder, file| {
		builder.add_source(File::from(file.path.clone()).required(file.required))
	});

	builder
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator("__")
				.try_parsing(true),
		)
		.build()
		.map_err(|err| match err {
			ConfigError::Frozen => anyhow!("configuration builder is frozen"),
			other => other.into(),
		})
}
