use std::sync::Arc;

use anyhow::{Context, Result, bail};
use bookworm::logging;
use bookworm_catalog::{CatalogApi, HttpCatalog, SearchPage};
use bookworm_tui::{AppOptions, SessionSummary, UiLabels};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates building the catalog client and running either the
/// interactive interface or a single batch search.
pub(crate) struct CatalogWorkflow {
	catalog: Arc<dyn CatalogApi>,
	options: AppOptions,
}

impl CatalogWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			api,
			trigger,
			initial_query,
			theme_name: _,
			theme,
			start_view,
			log,
			config_files: _,
		} = config;

		let log_path = logging::initialize(&log)?;
		info!(
			base_url = %api.base_url,
			page_size = api.page_size,
			log = %log_path.display(),
			"starting bookworm"
		);

		let catalog = HttpCatalog::new(api).context("failed to build catalog client")?;
		let options = AppOptions {
			trigger,
			initial_query,
			start_view,
			theme,
			labels: UiLabels::default(),
		};

		Ok(Self {
			catalog: Arc::new(catalog),
			options,
		})
	}

	/// Open the terminal interface and block until the user leaves it.
	pub(crate) fn run(self) -> Result<SessionSummary> {
		let summary = bookworm_tui::run(self.catalog, self.options)?;
		info!(searches = summary.searches, "session finished");
		Ok(summary)
	}

	/// Fetch one page for `query` without opening the interface.
	pub(crate) fn run_batch(&self, query: &str, page: u32) -> Result<SearchPage> {
		let query = query.trim();
		if query.is_empty() {
			bail!("batch mode needs a non-empty --query");
		}
		info!(query, page, "running batch search");
		self.catalog
			.search(query, page)
			.with_context(|| format!("search for '{query}' failed"))
	}
}
