use std::time::Duration;

use anyhow::Result;
use bookworm_catalog::HttpCatalogConfig;
use serde::Deserialize;

use super::{ConfigSources, Setting, validation};
use crate::cli::CliArgs;

/// Catalog connection settings as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ApiSection {
	pub(super) base_url: Option<String>,
	pub(super) timeout_secs: Option<u64>,
	pub(super) page_size: Option<u32>,
}

impl ApiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.api_url.clone() {
			self.base_url = Some(url);
		}
		if let Some(value) = cli.timeout {
			self.timeout_secs = Some(value);
		}
		if let Some(value) = cli.page_size {
			self.page_size = Some(value);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<HttpCatalogConfig> {
		let defaults = HttpCatalogConfig::default();

		let base_url = match self.base_url {
			Some(url) => validation::base_url(&url, sources)?,
			None => defaults.base_url,
		};
		let timeout = match self.timeout_secs {
			Some(secs) => Duration::from_secs(validation::positive(
				Setting::ApiTimeout,
				secs,
				sources,
			)?),
			None => defaults.timeout,
		};
		let page_size = match self.page_size {
			Some(size) => {
				validation::positive(Setting::ApiPageSize, u64::from(size), sources)?;
				size
			}
			None => defaults.page_size,
		};

		Ok(HttpCatalogConfig {
			base_url,
			timeout,
			page_size,
			..defaults
		})
	}
}
