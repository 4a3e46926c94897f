//! Static browse and account views.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::config::UiLabels;
use crate::style::Theme;

pub fn render_browse(frame: &mut Frame, area: Rect, labels: &UiLabels, theme: &Theme) {
	let lines = vec![
		Line::from(Span::styled(labels.browse.title.as_str(), theme.title_style())),
		Line::default(),
		Line::from(Span::styled(
			labels.browse.subtitle.as_str(),
			theme.empty_style(),
		)),
		Line::default(),
		Line::from(Span::styled(
			format!("[ Enter ] {}", labels.start_searching),
			theme.prompt.add_modifier(Modifier::BOLD),
		)),
	];
	let [card] = Layout::vertical([Constraint::Length(9)])
		.flex(Flex::Center)
		.areas(area);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());
	frame.render_widget(
		Paragraph::new(lines)
			.alignment(Alignment::Center)
			.wrap(Wrap { trim: true })
			.block(block),
		card,
	);
}

pub fn render_account(frame: &mut Frame, area: Rect, labels: &UiLabels, theme: &Theme) {
	let [heading, card] = Layout::vertical([Constraint::Length(2), Constraint::Length(5)])
		.areas(area);
	frame.render_widget(
		Paragraph::new(Span::styled(labels.account.title.as_str(), theme.title_style())),
		heading,
	);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(Span::styled(
			format!(" {} ", labels.account_card_title),
			theme.prompt,
		));
	frame.render_widget(
		Paragraph::new(Span::styled(
			labels.account.subtitle.as_str(),
			theme.empty_style(),
		))
		.wrap(Wrap { trim: true })
		.block(block),
		card,
	);
}
