//! Blocking HTTP implementation of [`CatalogApi`].
//!
//! The catalog service exposes two endpoints:
//!
//! - `GET /api/search?q=<query>&page=<page>&count=<page size>` returning a
//!   [`SearchPage`].
//! - `GET /api/book/<id>` returning the full book record, whose
//!   `download_url` (or `url`) is opened through the configured [`Launcher`].
//!
//! Non-success responses carry a JSON body of the form `{"detail": ...}`; the
//! detail text becomes the error message shown to the user.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{CatalogApi, CatalogError, DownloadTicket, Launcher, SearchPage, SystemLauncher};

/// Connection settings for [`HttpCatalog`].
#[derive(Debug, Clone)]
pub struct HttpCatalogConfig {
	/// Root URL of the catalog service, e.g. `http://localhost:8000`.
	pub base_url: String,
	/// Whole-request timeout.
	pub timeout: Duration,
	/// Number of results requested per page.
	pub page_size: u32,
	pub user_agent: String,
}

impl Default for HttpCatalogConfig {
	fn default() -> Self {
		Self {
			base_url: "http://localhost:8000".to_string(),
			timeout: Duration::from_secs(30),
			page_size: 10,
			user_agent: format!("bookworm/{} (Rust)", env!("CARGO_PKG_VERSION")),
		}
	}
}

/// Catalog client speaking the service's JSON API over blocking HTTP.
pub struct HttpCatalog {
	client: Client,
	base_url: Url,
	page_size: u32,
	launcher: Arc<dyn Launcher>,
}

#[derive(Debug, Deserialize)]
struct BookRecord {
	#[serde(default)]
	download_url: Option<String>,
	#[serde(default)]
	url: Option<String>,
}

impl BookRecord {
	fn link(self) -> Option<String> {
		[self.download_url, self.url]
			.into_iter()
			.flatten()
			.map(|link| link.trim().to_string())
			.find(|link| !link.is_empty())
	}
}

impl HttpCatalog {
	/// Build a client that opens downloads with the system handler.
	pub fn new(config: HttpCatalogConfig) -> Result<Self, CatalogError> {
		Self::with_launcher(config, Arc::new(SystemLauncher))
	}

	pub fn with_launcher(
		config: HttpCatalogConfig,
		launcher: Arc<dyn Launcher>,
	) -> Result<Self, CatalogError> {
		let base_url = Url::parse(config.base_url.trim())
			.map_err(|err| CatalogError::InvalidEndpoint(format!("{}: {err}", config.base_url)))?;
		if base_url.cannot_be_a_base() {
			return Err(CatalogError::InvalidEndpoint(config.base_url));
		}

		let client = Client::builder()
			.timeout(config.timeout)
			.user_agent(config.user_agent)
			.build()
			.map_err(CatalogError::from_transport)?;

		Ok(Self {
			client,
			base_url,
			page_size: config.page_size.max(1),
			launcher,
		})
	}

	/// The service root requests are resolved against.
	#[must_use]
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
		let mut url = self.base_url.clone();
		url.path_segments_mut()
			.map_err(|()| CatalogError::InvalidEndpoint(self.base_url.to_string()))?
			.pop_if_empty()
			.extend(segments);
		Ok(url)
	}

	fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, CatalogError> {
		let response = request.send().map_err(CatalogError::from_transport)?;
		let status = response.status();
		if !status.is_success() {
			let body = response.text().unwrap_or_default();
			return Err(CatalogError::Server {
				status: Some(status.as_u16()),
				message: detail_from_body(&body),
			});
		}
		response
			.json::<T>()
			.map_err(|err| CatalogError::InvalidResponse(err.to_string()))
	}

	fn resolve_link(&self, link: &str) -> Result<Url, CatalogError> {
		self.base_url
			.join(link)
			.map_err(|err| CatalogError::download(format!("invalid download link `{link}`: {err}")))
	}
}

impl CatalogApi for HttpCatalog {
	#[instrument(skip(self), level = "debug")]
	fn search(&self, query: &str, page: u32) -> Result<SearchPage, CatalogError> {
		let url = self.endpoint(&["api", "search"])?;
		let request = self.client.get(url).query(&[
			("q", query.to_string()),
			("page", page.max(1).to_string()),
			("count", self.page_size.to_string()),
		]);
		let page: SearchPage = self.get_json(request)?;
		debug!(
			results = page.results.len(),
			total_pages = page.total_pages,
			"catalog search answered"
		);
		Ok(page)
	}

	#[instrument(skip(self), level = "debug")]
	fn download(&self, id: &str) -> Result<DownloadTicket, CatalogError> {
		let url = self
			.endpoint(&["api", "book", id])
			.map_err(CatalogError::into_download)?;
		let record: BookRecord = self
			.get_json(self.client.get(url))
			.map_err(CatalogError::into_download)?;
		let link = record
			.link()
			.ok_or_else(|| CatalogError::download("no download link is available for this item"))?;
		let target = self.resolve_link(&link)?;

		self.launcher
			.open(target.as_str())
			.map_err(|err| CatalogError::download(format!("could not open {target}: {err}")))?;
		debug!(%target, "opened download location");

		Ok(DownloadTicket {
			id: id.to_string(),
			url: target.to_string(),
		})
	}
}

/// Extract the user-facing message from an error body.
///
/// Plain `detail` strings are used as-is; validation errors (a list of
/// objects with `msg`) contribute their first message.
fn detail_from_body(body: &str) -> Option<String> {
	let value: Value = serde_json::from_str(body).ok()?;
	let detail = value.get("detail").or_else(|| value.get("message"))?;
	let text = match detail {
		Value::String(text) => text.clone(),
		Value::Array(items) => items
			.iter()
			.find_map(|item| item.get("msg").and_then(Value::as_str))?
			.to_string(),
		_ => return None,
	};
	let text = text.trim();
	(!text.is_empty()).then(|| text.to_string())
}
