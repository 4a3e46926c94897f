use bookworm_catalog::ResultItem;
use ratatui::layout::Constraint;
use ratatui::widgets::{Cell, Row};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use super::format::row_cells;

const ELLIPSIS: &str = "…";

/// Width constraints for the title, authors, year, language and format columns.
#[must_use]
pub fn column_constraints() -> Vec<Constraint> {
	vec![
		Constraint::Fill(3),
		Constraint::Fill(2),
		Constraint::Length(6),
		Constraint::Length(10),
		Constraint::Length(6),
	]
}

/// One table row per result, in catalog order.
///
/// When `column_widths` is known, cells wider than their column end in an
/// ellipsis instead of being clipped mid-glyph.
#[must_use]
pub fn build_result_rows(results: &[ResultItem], column_widths: Option<&[u16]>) -> Vec<Row<'static>> {
	results
		.iter()
		.map(|item| {
			let cells = row_cells(item)
				.into_iter()
				.enumerate()
				.map(|(column, text)| {
					let width = column_widths.and_then(|widths| widths.get(column).copied());
					Cell::from(fit_to_width(text, width))
				});
			Row::new(cells)
		})
		.collect()
}

fn fit_to_width(text: String, width: Option<u16>) -> String {
	let Some(width) = width.map(usize::from) else {
		return text;
	};
	if text.width() <= width {
		return text;
	}
	if width == 0 {
		return String::new();
	}
	let (kept, _) = text.unicode_truncate(width - 1);
	format!("{kept}{ELLIPSIS}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn long_cells_end_with_an_ellipsis() {
		assert_eq!(fit_to_width("Relativity".into(), Some(6)), "Relat…");
		assert_eq!(fit_to_width("1916".into(), Some(6)), "1916");
		assert_eq!(fit_to_width("anything".into(), None), "anything");
		assert_eq!(fit_to_width("wide".into(), Some(0)), "");
	}

	#[test]
	fn one_row_per_result_in_order() {
		let results = vec![
			ResultItem::new("b", "Second"),
			ResultItem::new("a", "First"),
		];
		let rows = build_result_rows(&results, None);
		assert_eq!(rows.len(), 2);
	}
}
