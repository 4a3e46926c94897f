use std::fmt::Write;

use anyhow::Result;
use bookworm_catalog::SearchPage;
use bookworm_tui::SessionSummary;
use bookworm_tui::presenter::{group_thousands, results_summary, row_cells};
use serde_json::json;

use super::OutputFormat;

const CELL_SEPARATOR: &str = " | ";

/// Describe how the interactive session ended.
pub(crate) fn format_summary_plain(summary: &SessionSummary) -> String {
	let mut text = if summary.committed_query.is_empty() {
		format!("No search loaded (query: '{}')", summary.query)
	} else {
		format!(
			"Last search: '{}', page {} of {} ({} results)",
			summary.committed_query,
			summary.page,
			summary.total_pages,
			group_thousands(summary.total_results)
		)
	};
	let _ = write!(
		text,
		"\nSearches: {}, downloads started: {}",
		summary.searches, summary.downloads_started
	);
	text
}

pub(crate) fn format_summary_json(summary: &SessionSummary) -> Result<String> {
	Ok(serde_json::to_string_pretty(summary)?)
}

/// Render one batch page as a header line followed by one line per result.
pub(crate) fn format_page_plain(query: &str, page: u32, results: &SearchPage) -> String {
	if results.results.is_empty() {
		return format!("No results for '{query}' on page {page}");
	}
	let mut text = format!("Page {page} of {}", results.total_pages);
	if let Some(summary) = results_summary(results.total_results) {
		let _ = write!(text, ", {}", summary.to_lowercase());
	}
	for item in &results.results {
		let _ = write!(text, "\n{}", row_cells(item).join(CELL_SEPARATOR));
	}
	text
}

pub(crate) fn format_page_json(query: &str, page: u32, results: &SearchPage) -> Result<String> {
	let payload = json!({
		"query": query,
		"page": page,
		"total_pages": results.total_pages,
		"total_results": results.total_results,
		"results": results.results,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the session summary in the chosen format.
pub(crate) fn print_summary(format: OutputFormat, summary: &SessionSummary) -> Result<()> {
	match format {
		OutputFormat::Plain => println!("{}", format_summary_plain(summary)),
		OutputFormat::Json => println!("{}", format_summary_json(summary)?),
	}
	Ok(())
}

/// Print a single page fetched in batch mode.
pub(crate) fn print_page(
	format: OutputFormat,
	query: &str,
	page: u32,
	results: &SearchPage,
) -> Result<()> {
	match format {
		OutputFormat::Plain => println!("{}", format_page_plain(query, page, results)),
		OutputFormat::Json => println!("{}", format_page_json(query, page, results)?),
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use bookworm_catalog::ResultItem;
	use insta::assert_snapshot;
	use serde_json::Value;

	use super::*;

	fn sample_page() -> SearchPage {
		let mut dune = ResultItem::new("1", "Dune");
		dune.authors = Some(vec!["Frank Herbert".into()]);
		dune.year = Some("1965".into());
		dune.language = Some("English".into());
		dune.format = Some("epub".into());
		SearchPage {
			results: vec![dune, ResultItem::new("2", "Dune Messiah")],
			total_pages: 4,
			total_results: 1204,
			current_page: Some(2),
		}
	}

	#[test]
	fn plain_page_lists_rows_under_a_header() {
		assert_snapshot!(format_page_plain("dune", 2, &sample_page()), @r"
		Page 2 of 4, found approximately 1,204 results
		Dune | Frank Herbert | 1965 | English | epub
		Dune Messiah | Unknown | N/A | N/A | N/A
		");
	}

	#[test]
	fn plain_page_reports_empty_results() {
		assert_snapshot!(
			format_page_plain("zzz", 1, &SearchPage::default()),
			@"No results for 'zzz' on page 1"
		);
	}

	#[test]
	fn plain_summary_describes_loaded_search() {
		let summary = SessionSummary {
			query: "dune".into(),
			committed_query: "dune".into(),
			page: 2,
			total_pages: 4,
			total_results: 1204,
			searches: 3,
			downloads_started: 1,
		};
		assert_snapshot!(format_summary_plain(&summary), @r"
		Last search: 'dune', page 2 of 4 (1,204 results)
		Searches: 3, downloads started: 1
		");
	}

	#[test]
	fn plain_summary_without_search() {
		let summary = SessionSummary {
			query: "du".into(),
			page: 1,
			..SessionSummary::default()
		};
		assert_snapshot!(format_summary_plain(&summary), @r"
		No search loaded (query: 'du')
		Searches: 0, downloads started: 0
		");
	}

	#[test]
	fn json_page_includes_pagination_and_results() {
		let json = format_page_json("dune", 2, &sample_page()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["page"], 2);
		assert_eq!(value["total_pages"], 4);
		assert_eq!(value["total_results"], 1204);
		assert_eq!(value["results"].as_array().map(Vec::len), Some(2));
	}

	#[test]
	fn json_summary_serializes_every_field() {
		let json = format_summary_json(&SessionSummary::default()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["searches"], 0);
		assert_eq!(value["committed_query"], "");
	}
}
