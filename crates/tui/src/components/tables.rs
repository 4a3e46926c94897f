use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table, TableState,
};

use crate::components::render_scrollbar;
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
pub(crate) const TABLE_HIGHLIGHT_SPACING: HighlightSpacing = HighlightSpacing::WhenSelected;
/// Header row plus separator inside the bordered table.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	pub headers: Vec<String>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'a>>,
	pub title: Option<String>,
}

/// Mutable state threaded through a table render.
pub struct TableViewport<'a> {
	pub table_state: &'a mut TableState,
	pub scrollbar_state: &'a mut ScrollbarState,
}

/// Render a bordered table with a header separator and, when the rows
/// overflow, a scrollbar on the right edge.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	viewport: TableViewport<'_>,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());
	if let Some(title) = spec.title {
		block = block.title(Span::styled(format!(" {title} "), theme.prompt));
	}
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let header = Row::new(spec.headers.into_iter().map(Cell::from))
		.style(theme.border_style())
		.height(1)
		.bottom_margin(1);

	let visible_rows = usize::from(inner.height.saturating_sub(TABLE_HEADER_ROWS));
	let total_rows = spec.rows.len();
	let needs_scrollbar = visible_rows > 0 && total_rows > visible_rows;
	let table_area = if needs_scrollbar {
		Rect {
			width: inner.width.saturating_sub(1),
			..inner
		}
	} else {
		inner
	};

	let table = Table::new(spec.rows, spec.widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(TABLE_HIGHLIGHT_SPACING)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, viewport.table_state);

	if needs_scrollbar {
		let position = viewport.table_state.selected().unwrap_or_default();
		*viewport.scrollbar_state = viewport
			.scrollbar_state
			.content_length(total_rows)
			.viewport_content_length(visible_rows)
			.position(position);
		render_scrollbar(frame, inner, viewport.scrollbar_state, theme);
	}

	render_header_separator(frame, table_area, theme);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 || area.width <= 2 {
		return;
	}
	let rule = "─".repeat(usize::from(area.width - 2));
	let line = Line::from(vec![
		Span::raw(" "),
		Span::styled(rule, theme.border_style()),
		Span::raw(" "),
	]);
	let separator = Rect {
		y: area.y + 1,
		height: 1,
		..area
	};
	frame.render_widget(Paragraph::new(line), separator);
}
