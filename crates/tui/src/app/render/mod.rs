pub(crate) mod layout;

use layout::resolve_column_widths;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::Throbber;

use super::App;
use crate::components::tables::TABLE_HEADER_ROWS;
use crate::components::{
	DetailContext, InputContext, PromptStatus, SIDEBAR_WIDTH, TableSpec, TableViewport,
	render_account, render_browse, render_detail, render_input, render_sidebar, render_table,
	render_toasts,
};
use crate::navigation::{Focus, View};
use crate::presenter::{
	COLUMN_HEADERS, DetailView, PaginationView, build_result_rows, column_constraints,
	results_summary,
};

const SEARCH_HINT: &str = "[Enter] Search";

impl App<'_> {
	/// Draw the whole UI for the current state.
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let [sidebar, main] = Layout::horizontal([
			Constraint::Length(SIDEBAR_WIDTH),
			Constraint::Min(1),
		])
		.areas(area);
		render_sidebar(
			frame,
			sidebar,
			&self.labels.navigation_title,
			self.view,
			&self.style.theme,
		);

		let main = main.inner(Margin {
			horizontal: 1,
			vertical: 0,
		});
		let [content, footer] =
			Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(main);

		match self.view {
			View::Browse => render_browse(frame, content, &self.labels, &self.style.theme),
			View::Search => self.render_search(frame, content),
			View::Account => render_account(frame, content, &self.labels, &self.style.theme),
		}
		frame.render_widget(
			Paragraph::new(Span::styled(self.key_hints(), self.style.theme.empty_style())),
			footer,
		);
		render_toasts(frame, main, &self.toasts, &self.style.theme);
	}

	fn render_search(&mut self, frame: &mut Frame, area: Rect) {
		let [heading, input, summary, results, pagination] = Layout::vertical([
			Constraint::Length(3),
			Constraint::Length(3),
			Constraint::Length(1),
			Constraint::Min(TABLE_HEADER_ROWS + 3),
			Constraint::Length(1),
		])
		.areas(area);

		let theme = &self.style.theme;
		frame.render_widget(
			Paragraph::new(vec![
				Line::from(Span::styled(self.labels.search.title.as_str(), theme.title_style())),
				Line::from(Span::styled(
					self.labels.search.subtitle.as_str(),
					theme.empty_style(),
				)),
			]),
			heading,
		);

		let loading = self.coordinator.is_loading();
		let status = if loading {
			PromptStatus::Busy {
				label: &self.labels.searching,
				throbber_state: &self.throbber_state,
			}
		} else {
			PromptStatus::Hint(SEARCH_HINT)
		};
		render_input(
			frame,
			InputContext {
				input: &self.search_input,
				placeholder: &self.labels.input_placeholder,
				area: input,
				theme,
			},
			status,
		);

		if loading {
			self.render_loading(frame, results);
		} else {
			if let Some(text) = results_summary(self.coordinator.query().total_results) {
				frame.render_widget(
					Paragraph::new(Span::styled(text, self.style.theme.empty_style())),
					summary,
				);
			}
			self.render_results(frame, results);
			self.render_pagination(frame, pagination);
		}

		if let Some(item) = self.coordinator.selected_item() {
			render_detail(
				frame,
				area,
				DetailContext {
					view: DetailView::new(item),
					button_label: self.download.label(item),
					button_enabled: self.download.is_enabled_for(item),
					theme: &self.style.theme,
				},
			);
		}
	}

	fn render_loading(&mut self, frame: &mut Frame, area: Rect) {
		let [row] = Layout::vertical([Constraint::Length(1)])
			.flex(Flex::Center)
			.areas(area);
		let label = self.labels.searching.clone();
		let [spinner] = Layout::horizontal([Constraint::Length(
			u16::try_from(label.len() + 2).unwrap_or(u16::MAX),
		)])
		.flex(Flex::Center)
		.areas(row);
		let throbber = Throbber::default()
			.label(label)
			.style(self.style.theme.empty_style())
			.throbber_style(self.style.theme.prompt);
		frame.render_stateful_widget(throbber, spinner, &mut self.throbber_state);
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let widths = column_constraints();
		let has_selection = self.table_state.selected().is_some();
		let column_widths = resolve_column_widths(area, &widths, has_selection);
		let rows = build_result_rows(self.coordinator.results(), Some(&column_widths));
		let empty = rows.is_empty();

		let spec = TableSpec {
			headers: COLUMN_HEADERS.iter().map(ToString::to_string).collect(),
			widths,
			rows,
			title: Some("Results".to_string()),
		};
		render_table(
			frame,
			area,
			TableViewport {
				table_state: &mut self.table_state,
				scrollbar_state: &mut self.scrollbar_state,
			},
			spec,
			&self.style.theme,
		);

		// Inside the border, below the header and separator.
		let body_top = area.y + 1 + TABLE_HEADER_ROWS;
		if empty && self.coordinator.query().is_committed() && body_top < area.bottom().saturating_sub(1) {
			let message_area = Rect::new(area.x + 1, body_top, area.width.saturating_sub(2), 1);
			frame.render_widget(
				Paragraph::new(Span::styled(
					self.labels.no_results.as_str(),
					self.style.theme.empty_style(),
				))
				.alignment(Alignment::Center),
				message_area,
			);
		}
	}

	fn render_pagination(&self, frame: &mut Frame, area: Rect) {
		let Some(pagination) = PaginationView::from_query(self.coordinator.query()) else {
			return;
		};
		let theme = &self.style.theme;
		let [previous, label, next] = Layout::horizontal([
			Constraint::Length(10),
			Constraint::Fill(1),
			Constraint::Length(6),
		])
		.areas(area);
		frame.render_widget(
			Paragraph::new(Span::styled(
				"◀ Previous",
				theme.control_style(pagination.previous_enabled),
			)),
			previous,
		);
		frame.render_widget(
			Paragraph::new(pagination.label()).alignment(Alignment::Center),
			label,
		);
		frame.render_widget(
			Paragraph::new(Span::styled(
				"Next ▶",
				theme.control_style(pagination.next_enabled),
			))
			.alignment(Alignment::Right),
			next,
		);
	}

	fn key_hints(&self) -> &'static str {
		match self.view {
			View::Browse => "Enter start searching  F1-F3 switch view  Esc quit",
			View::Account => "F1-F3 switch view  Esc quit",
			View::Search if self.coordinator.selected_item().is_some() => {
				"d download  Esc close details"
			}
			View::Search => match self.focus {
				Focus::Input => "Enter search  Down results  PgUp/PgDn page  Esc quit",
				Focus::Results => "Up/Down move  Enter details  Left/Right page  Esc back",
			},
		}
	}
}
