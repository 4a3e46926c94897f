use thiserror::Error;

/// Failures reported by a [`CatalogApi`](crate::CatalogApi) implementation.
///
/// Every variant that originates from the remote side keeps the optional
/// human-readable message so callers can surface it verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
	/// The request never produced an HTTP response (DNS, connect, timeout).
	#[error("network error: {}", .message.as_deref().unwrap_or("request failed"))]
	Network { message: Option<String> },

	/// The catalog answered with a non-success status.
	#[error("server error ({}): {}", status_label(.status), .message.as_deref().unwrap_or("no details"))]
	Server {
		status: Option<u16>,
		message: Option<String>,
	},

	/// Resolving or opening a download location failed.
	#[error("download failed: {}", .message.as_deref().unwrap_or("no details"))]
	Download { message: Option<String> },

	/// The response body could not be decoded.
	#[error("unexpected response from catalog: {0}")]
	InvalidResponse(String),

	/// The configured base URL cannot address catalog endpoints.
	#[error("invalid catalog endpoint: {0}")]
	InvalidEndpoint(String),
}

impl CatalogError {
	pub fn network(message: impl Into<String>) -> Self {
		Self::Network {
			message: Some(message.into()),
		}
	}

	pub fn download(message: impl Into<String>) -> Self {
		Self::Download {
			message: Some(message.into()),
		}
	}

	/// The message carried by the error, if any.
	#[must_use]
	pub fn message(&self) -> Option<&str> {
		match self {
			Self::Network { message } | Self::Server { message, .. } | Self::Download { message } => {
				message.as_deref()
			}
			Self::InvalidResponse(message) | Self::InvalidEndpoint(message) => Some(message),
		}
	}

	/// Re-tag any failure on the download path as a download failure while
	/// keeping its message.
	#[must_use]
	pub fn into_download(self) -> Self {
		match self {
			Self::Download { .. } => self,
			other => Self::Download {
				message: other.message().map(str::to_owned),
			},
		}
	}

	pub(crate) fn from_transport(err: reqwest::Error) -> Self {
		if err.is_decode() {
			return Self::InvalidResponse(err.to_string());
		}
		if let Some(status) = err.status() {
			return Self::Server {
				status: Some(status.as_u16()),
				message: Some(err.to_string()),
			};
		}
		if err.is_timeout() {
			return Self::network("the catalog did not respond in time");
		}
		Self::network(err.to_string())
	}
}

fn status_label(status: &Option<u16>) -> String {
	status
		.map(|code| code.to_string())
		.unwrap_or_else(|| "unknown status".to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message_is_exposed_for_remote_failures() {
		let err = CatalogError::Server {
			status: Some(500),
			message: Some("login expired".into()),
		};
		assert_eq!(err.message(), Some("login expired"));
		assert_eq!(err.to_string(), "server error (500): login expired");
	}

	#[test]
	fn missing_message_falls_back_in_display_only() {
		let err = CatalogError::Network { message: None };
		assert_eq!(err.message(), None);
		assert_eq!(err.to_string(), "network error: request failed");
	}

	#[test]
	fn into_download_keeps_message() {
		let err = CatalogError::Server {
			status: Some(404),
			message: Some("Book not found".into()),
		}
		.into_download();
		assert_eq!(err, CatalogError::download("Book not found"));
	}
}
