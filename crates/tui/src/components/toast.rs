use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::notification::Toasts;
use crate::style::Theme;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

/// Stack the visible notifications in the top-right corner of `area`,
/// newest on top.
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &Toasts, theme: &Theme) {
	let width = TOAST_WIDTH.min(area.width);
	if width < 4 {
		return;
	}
	let mut y = area.y;
	for notification in toasts.iter().rev() {
		if y.saturating_add(TOAST_HEIGHT) > area.bottom() {
			break;
		}
		let rect = Rect {
			x: area.right().saturating_sub(width),
			y,
			width,
			height: TOAST_HEIGHT,
		};
		let style = theme.notification_style(notification.variant);
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(style)
			.title(Span::styled(format!(" {} ", notification.title), style));
		let body = Paragraph::new(Line::from(notification.description.as_str()))
			.wrap(Wrap { trim: true })
			.block(block);
		frame.render_widget(Clear, rect);
		frame.render_widget(body, rect);
		y += TOAST_HEIGHT;
	}
}
