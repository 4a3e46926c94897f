use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::components::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the search box.
pub struct InputContext<'a> {
	pub input: &'a QueryInput<'a>,
	/// Shown dimmed while the input is empty.
	pub placeholder: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Status drawn at the right edge of the search box.
pub enum PromptStatus<'a> {
	/// A search is running.
	Busy {
		label: &'a str,
		throbber_state: &'a ThrobberState,
	},
	/// Idle; shows which key runs the search.
	Hint(&'a str),
}

/// Render the bordered search box with its placeholder and status.
pub fn render_input(frame: &mut Frame, ctx: InputContext<'_>, status: PromptStatus<'_>) {
	let InputContext {
		input,
		placeholder,
		area,
		theme,
	} = ctx;

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(Span::styled(" Search ", theme.prompt));
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.width == 0 || inner.height == 0 {
		return;
	}

	input.render(frame, inner);
	if input.text().is_empty() {
		render_placeholder(frame, inner, placeholder, theme);
	}
	render_status(frame, inner, status, theme);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if text.is_empty() {
		return;
	}
	// Leave the first cell for the cursor.
	let start = area.left().saturating_add(1);
	let width = area.right().saturating_sub(start);
	let display: String = text.chars().take(usize::from(width)).collect();
	frame.buffer_mut().set_line(
		start,
		area.top(),
		&Line::from(Span::styled(display, theme.empty_style())),
		width,
	);
}

fn render_status(frame: &mut Frame, area: Rect, status: PromptStatus<'_>, theme: &Theme) {
	let muted = theme.empty_style();
	let mut line = Line::default();
	match status {
		PromptStatus::Busy {
			label,
			throbber_state,
		} => {
			let spinner = Throbber::default().style(muted).throbber_style(theme.prompt);
			line.spans.push(spinner.to_symbol_span(throbber_state));
			line.spans.push(Span::styled(label.to_owned(), muted));
		}
		PromptStatus::Hint(hint) => line.spans.push(Span::styled(hint.to_owned(), muted)),
	}

	let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
	if line_width == 0 || line_width >= area.width {
		return;
	}

	// Keep clear of typed text: find the last occupied cell on the input row.
	let buffer = frame.buffer_mut();
	let row = area.top();
	let last_used = (area.left()..area.right())
		.rev()
		.find(|&x| buffer.cell((x, row)).is_some_and(|cell| !cell.symbol().trim().is_empty()));
	let start = area.right().saturating_sub(line_width);
	if last_used.is_some_and(|x| x.saturating_add(2) >= start) {
		return;
	}
	buffer.set_line(start, row, &line, line_width);
}
