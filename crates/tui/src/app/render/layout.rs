use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::HighlightSpacing;
use unicode_width::UnicodeWidthStr;

use crate::components::tables::{HIGHLIGHT_SYMBOL, TABLE_COLUMN_SPACING, TABLE_HIGHLIGHT_SPACING};

/// Widths the table will give each column when drawn inside `area`
/// (borders included), so cells can be fitted before rendering.
pub(crate) fn resolve_column_widths(
	area: Rect,
	widths: &[Constraint],
	has_selection: bool,
) -> Vec<u16> {
	let table_width = area.width.saturating_sub(2);
	if widths.is_empty() || table_width == 0 {
		return Vec::new();
	}

	let symbol_width = u16::try_from(HIGHLIGHT_SYMBOL.width()).unwrap_or_default();
	let highlight_width = match TABLE_HIGHLIGHT_SPACING {
		HighlightSpacing::Always => symbol_width,
		HighlightSpacing::WhenSelected if has_selection => symbol_width,
		HighlightSpacing::WhenSelected | HighlightSpacing::Never => 0,
	};

	let [_symbol, columns] =
		Layout::horizontal([Constraint::Length(highlight_width), Constraint::Fill(0)])
			.areas(Rect::new(0, 0, table_width, 1));

	Layout::horizontal(widths.iter().copied())
		.spacing(TABLE_COLUMN_SPACING)
		.split(columns)
		.iter()
		.map(|rect| rect.width)
		.collect()
}
