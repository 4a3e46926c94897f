//! Single-line query input built on `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Text box backing the search field.
///
/// Keys that would split the line (Enter, Ctrl+M, Ctrl+J) are never handed
/// to the textarea, so the query always stays on one line.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
	focused: bool,
}

impl Default for QueryInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

impl QueryInput<'_> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::new(vec![initial.into()]),
			focused: true,
		};
		input.configure();
		input
	}

	fn configure(&mut self) {
		self.textarea.set_cursor_line_style(Style::default());
		self.textarea.move_cursor(CursorMove::End);
		self.apply_cursor_style();
	}

	fn apply_cursor_style(&mut self) {
		let style = if self.focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map_or("", String::as_str)
	}

	/// Replace the contents and move the cursor to the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.textarea = TextArea::new(vec![text.into()]);
		self.configure();
	}

	pub fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
		self.apply_cursor_style();
	}

	/// Feed a key press to the textarea. Returns whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if breaks_line(key) {
			return false;
		}
		let before = self.text().to_owned();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn breaks_line(key: KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
