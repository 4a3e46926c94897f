use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::presenter::DetailView;
use crate::style::Theme;

/// Argument bundle for the detail popup.
pub struct DetailContext<'a> {
	pub view: DetailView<'a>,
	pub button_label: String,
	pub button_enabled: bool,
	pub theme: &'a Theme,
}

/// Centered popup listing the selected item's attributes and the download
/// action.
pub fn render_detail(frame: &mut Frame, area: Rect, ctx: DetailContext<'_>) {
	let DetailContext {
		view,
		button_label,
		button_enabled,
		theme,
	} = ctx;

	let popup = centered(area, 72, 16);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(Span::styled(format!(" {} ", view.title()), theme.title_style()));

	let fields = view.fields();
	let label_width = fields
		.iter()
		.map(|field| field.label.len())
		.max()
		.unwrap_or_default();
	let mut lines: Vec<Line> = fields
		.into_iter()
		.map(|field| {
			Line::from(vec![
				Span::styled(
					format!("{:<label_width$}  ", field.label),
					theme.empty_style(),
				),
				Span::raw(field.value),
			])
		})
		.collect();
	if let Some(cover) = view.cover() {
		lines.push(Line::default());
		lines.push(Line::from(vec![
			Span::styled(format!("{:<label_width$}  ", "Cover"), theme.empty_style()),
			Span::styled(cover.to_owned(), theme.prompt.add_modifier(Modifier::UNDERLINED)),
		]));
	}
	lines.push(Line::default());
	lines.push(Line::from(vec![
		Span::styled(
			format!("[ {button_label} ]"),
			theme.control_style(button_enabled).add_modifier(Modifier::BOLD),
		),
		Span::styled("  d: download  Esc: close", theme.empty_style()),
	]));

	frame.render_widget(Clear, popup);
	frame.render_widget(
		Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
		popup,
	);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
	let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
		.flex(Flex::Center)
		.areas(area);
	let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
		.flex(Flex::Center)
		.areas(row);
	popup
}
