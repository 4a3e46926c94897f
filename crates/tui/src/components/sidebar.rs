use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::navigation::View;
use crate::style::Theme;

/// Width of the navigation sidebar, borders included.
pub const SIDEBAR_WIDTH: u16 = 16;

/// Render the navigation list with `current` marked.
pub fn render_sidebar(frame: &mut Frame, area: Rect, title: &str, current: View, theme: &Theme) {
	let items = View::ALL.into_iter().map(|view| {
		let active = view == current;
		let marker = if active { "▶ " } else { "  " };
		let style = if active {
			theme.highlight
		} else {
			Style::default()
		};
		ListItem::new(Line::from(vec![
			Span::styled(marker, theme.prompt),
			Span::styled(view.title(), style),
			Span::styled(format!(" F{}", view.hotkey()), theme.empty_style()),
		]))
	});

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(Span::styled(format!(" {title} "), theme.prompt));
	frame.render_widget(List::new(items).block(block), area);
}
