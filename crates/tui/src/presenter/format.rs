use bookworm_catalog::ResultItem;

pub const UNKNOWN: &str = "Unknown";
pub const NOT_AVAILABLE: &str = "N/A";

/// Headers of the results table, in column order.
pub const COLUMN_HEADERS: [&str; 5] = ["Title", "Author(s)", "Year", "Language", "Format"];

/// Authors joined by `", "`, or [`UNKNOWN`] when there are none.
#[must_use]
pub fn authors_label(authors: Option<&[String]>) -> String {
	match authors {
		Some(list) if !list.is_empty() => list.join(", "),
		_ => UNKNOWN.to_owned(),
	}
}

#[must_use]
pub fn or_not_available(value: Option<&str>) -> &str {
	value.unwrap_or(NOT_AVAILABLE)
}

/// Text of each column for one result row.
#[must_use]
pub fn row_cells(item: &ResultItem) -> [String; 5] {
	[
		item.title.clone(),
		authors_label(item.authors.as_deref()),
		or_not_available(item.year.as_deref()).to_owned(),
		or_not_available(item.language.as_deref()).to_owned(),
		or_not_available(item.format.as_deref()).to_owned(),
	]
}

/// `1234567` becomes `"1,234,567"`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
	let digits = value.to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (index, digit) in digits.chars().enumerate() {
		if index > 0 && (digits.len() - index) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(digit);
	}
	grouped
}
