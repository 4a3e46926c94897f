use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, SessionSummary};
use crate::coordinator::{PageStep, SearchEvent};
use crate::navigation::{Focus, View};

impl App<'_> {
	/// Process a keyboard event and return the session summary if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<SessionSummary> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Some(self.summary());
		}
		if let KeyCode::F(number) = key.code
			&& let Some(view) = View::from_hotkey(number)
		{
			self.switch_view(view);
			return None;
		}

		match self.view {
			View::Browse => match key.code {
				KeyCode::Enter => self.switch_view(View::Search),
				KeyCode::Esc | KeyCode::Char('q') => return Some(self.summary()),
				_ => {}
			},
			View::Account => {
				if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
					return Some(self.summary());
				}
			}
			View::Search => return self.handle_search_key(key, Instant::now()),
		}
		None
	}

	fn handle_search_key(&mut self, key: KeyEvent, now: Instant) -> Option<SessionSummary> {
		if self.coordinator.selected_item().is_some() {
			self.handle_detail_key(key, now);
			return None;
		}
		match self.focus {
			Focus::Input => self.handle_input_key(key, now),
			Focus::Results => self.handle_results_key(key, now),
		}
	}

	fn handle_detail_key(&mut self, key: KeyEvent, now: Instant) {
		match key.code {
			KeyCode::Esc | KeyCode::Backspace => self.apply(SearchEvent::ClearSelection, now),
			KeyCode::Enter | KeyCode::Char('d') => self.start_download(now),
			_ => {}
		}
	}

	fn handle_input_key(&mut self, key: KeyEvent, now: Instant) -> Option<SessionSummary> {
		match key.code {
			KeyCode::Esc => return Some(self.summary()),
			KeyCode::Enter => self.apply(SearchEvent::Submit, now),
			KeyCode::Down | KeyCode::Tab => {
				if !self.coordinator.results().is_empty() {
					self.set_focus(Focus::Results);
				}
			}
			KeyCode::PageUp => self.apply(SearchEvent::ChangePage(PageStep::Previous), now),
			KeyCode::PageDown => self.apply(SearchEvent::ChangePage(PageStep::Next), now),
			_ => {
				if self.search_input.input(key) {
					let text = self.search_input.text().to_owned();
					self.apply(SearchEvent::EditText(text), now);
				}
			}
		}
		None
	}

	fn handle_results_key(&mut self, key: KeyEvent, now: Instant) -> Option<SessionSummary> {
		let len = self.coordinator.results().len();
		let selected = self.table_state.selected().unwrap_or_default();
		match key.code {
			KeyCode::Char('q') => return Some(self.summary()),
			KeyCode::Esc | KeyCode::Tab | KeyCode::Char('/') => self.set_focus(Focus::Input),
			KeyCode::Up | KeyCode::Char('k') => {
				if selected == 0 {
					self.set_focus(Focus::Input);
				} else {
					self.table_state.select(Some(selected - 1));
				}
			}
			KeyCode::Down | KeyCode::Char('j') => {
				if selected + 1 < len {
					self.table_state.select(Some(selected + 1));
				}
			}
			KeyCode::Home => self.table_state.select(Some(0)),
			KeyCode::End => self.table_state.select(Some(len.saturating_sub(1))),
			KeyCode::Enter => self.apply(SearchEvent::Select(selected), now),
			KeyCode::Left | KeyCode::PageUp | KeyCode::Char('p') => {
				self.apply(SearchEvent::ChangePage(PageStep::Previous), now);
			}
			KeyCode::Right | KeyCode::PageDown | KeyCode::Char('n') => {
				self.apply(SearchEvent::ChangePage(PageStep::Next), now);
			}
			_ => {}
		}
		None
	}
}
