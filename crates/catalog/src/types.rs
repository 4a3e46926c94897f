use serde::{Deserialize, Deserializer, Serialize};

/// One catalog entry as delivered by the search endpoint.
///
/// Field names on the wire follow the catalog service (`name`, `extension`,
/// `cover`). Scalar attributes are normalized to trimmed strings and blank
/// values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
	#[serde(default, deserialize_with = "lenient_string")]
	pub id: Option<String>,
	#[serde(rename = "name", alias = "title", default)]
	pub title: String,
	#[serde(default, deserialize_with = "lenient_authors")]
	pub authors: Option<Vec<String>>,
	#[serde(default, deserialize_with = "lenient_string")]
	pub year: Option<String>,
	#[serde(default, deserialize_with = "lenient_string")]
	pub language: Option<String>,
	#[serde(
		rename = "extension",
		alias = "format",
		default,
		deserialize_with = "lenient_string"
	)]
	pub format: Option<String>,
	#[serde(default, deserialize_with = "lenient_string")]
	pub publisher: Option<String>,
	#[serde(default, deserialize_with = "lenient_string")]
	pub size: Option<String>,
	#[serde(default, deserialize_with = "lenient_string")]
	pub rating: Option<String>,
	#[serde(rename = "cover", default, deserialize_with = "lenient_string")]
	pub cover: Option<String>,
	#[serde(default, deserialize_with = "lenient_string")]
	pub url: Option<String>,
}

impl ResultItem {
	/// Convenience constructor used by tests and fixtures.
	#[must_use]
	pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			id: Some(id.into()),
			title: title.into(),
			..Self::default()
		}
	}
}

/// A single page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
	#[serde(default, deserialize_with = "null_as_default")]
	pub results: Vec<ResultItem>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub total_pages: u32,
	#[serde(default, deserialize_with = "null_as_default")]
	pub total_results: u64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub current_page: Option<u32>,
}

/// Confirmation that a download location was resolved and opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadTicket {
	pub id: String,
	pub url: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
	Text(String),
	Integer(i64),
	Float(f64),
	Flag(bool),
}

impl Scalar {
	fn into_text(self) -> Option<String> {
		let text = match self {
			Self::Text(text) => text,
			Self::Integer(value) => value.to_string(),
			Self::Float(value) => value.to_string(),
			Self::Flag(value) => value.to_string(),
		};
		let trimmed = text.trim();
		(!trimmed.is_empty()).then(|| trimmed.to_string())
	}
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Option::<Scalar>::deserialize(deserializer)?;
	Ok(value.and_then(Scalar::into_text))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Authors {
	List(Vec<Option<String>>),
	Single(String),
}

fn lenient_authors<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
	D: Deserializer<'de>,
{
	let names = match Option::<Authors>::deserialize(deserializer)? {
		None => return Ok(None),
		Some(Authors::Single(name)) => vec![name],
		Some(Authors::List(names)) => names.into_iter().flatten().collect(),
	};
	let names: Vec<String> = names
		.into_iter()
		.map(|name| name.trim().to_string())
		.filter(|name| !name.is_empty())
		.collect();
	Ok((!names.is_empty()).then_some(names))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de> + Default,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn decodes_catalog_field_names() {
		let item: ResultItem = serde_json::from_value(json!({
			"id": "123",
			"name": "Relativity",
			"authors": ["Albert Einstein"],
			"cover": "https://covers.example/123.jpg",
			"year": 1916,
			"language": "english",
			"extension": "pdf",
			"size": "2 MB",
			"rating": "5.0/5.0",
			"publisher": null
		}))
		.expect("decode");

		assert_eq!(item.id.as_deref(), Some("123"));
		assert_eq!(item.title, "Relativity");
		assert_eq!(item.authors, Some(vec!["Albert Einstein".to_string()]));
		assert_eq!(item.year.as_deref(), Some("1916"));
		assert_eq!(item.format.as_deref(), Some("pdf"));
		assert_eq!(item.cover.as_deref(), Some("https://covers.example/123.jpg"));
		assert_eq!(item.publisher, None);
	}

	#[test]
	fn blank_values_and_empty_author_lists_are_absent() {
		let item: ResultItem = serde_json::from_value(json!({
			"name": "Untitled",
			"authors": [],
			"year": "  ",
			"language": ""
		}))
		.expect("decode");

		assert_eq!(item.id, None);
		assert_eq!(item.authors, None);
		assert_eq!(item.year, None);
		assert_eq!(item.language, None);
	}

	#[test]
	fn page_tolerates_missing_and_null_totals() {
		let page: SearchPage = serde_json::from_value(json!({
			"results": [{"name": "A"}],
			"total_pages": null,
			"current_page": 1
		}))
		.expect("decode");

		assert_eq!(page.results.len(), 1);
		assert_eq!(page.total_pages, 0);
		assert_eq!(page.total_results, 0);
		assert_eq!(page.current_page, Some(1));
	}
}
