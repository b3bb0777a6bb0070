//! # Internship Table
//!
//! Filterable list of internships, shown on the dashboard and the
//! internships screen.
//!
//! Keys: `/` search, `c` company filter, `l` location filter, `f` cycle
//! status, `x` clear filters, ↑/↓ move, Enter open, `a` applicants.
//! While a filter field is being edited, keys go to that field; Enter or
//! Esc stops editing.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `InternshipTableState` lives in `TuiState`
//! - `InternshipTable` is created each frame with borrowed state and data

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, TableState};

use crate::core::filter::InternshipFilter;
use crate::core::models::{Internship, InternshipStatus};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::fit;
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum InternshipTableEvent {
    Open(String),
    Applicants(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Editing {
    Search,
    Company,
    Location,
}

#[derive(Debug, Default)]
pub struct InternshipTableState {
    pub filter: InternshipFilter,
    editing: Option<Editing>,
    pub selected: usize,
    table_state: TableState,
    /// Ids of the currently visible rows, in display order. Refreshed on render.
    visible_ids: Vec<String>,
}

impl InternshipTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Recomputes visible rows for `internships` and clamps the selection.
    pub fn sync(&mut self, internships: &[Internship]) {
        self.visible_ids = self
            .filter
            .apply(internships)
            .into_iter()
            .map(|i| i.id.clone())
            .collect();
        if self.visible_ids.is_empty() {
            self.selected = 0;
            self.table_state.select(None);
        } else {
            self.selected = self.selected.min(self.visible_ids.len() - 1);
            self.table_state.select(Some(self.selected));
        }
    }

    fn selected_id(&self) -> Option<String> {
        self.visible_ids.get(self.selected).cloned()
    }

    fn field_mut(&mut self, editing: Editing) -> &mut String {
        match editing {
            Editing::Search => &mut self.filter.search,
            Editing::Company => &mut self.filter.company,
            Editing::Location => &mut self.filter.location,
        }
    }

    fn edit(&mut self, editing: Editing, event: &TuiEvent) {
        let mut field = TextField::new("").with_value(self.field_mut(editing));
        match field.handle_event(event) {
            Some(FieldEvent::Submit) => self.editing = None,
            Some(FieldEvent::Changed) => {
                *self.field_mut(editing) = field.value;
                self.selected = 0;
            }
            None => {}
        }
    }
}

impl EventHandler for InternshipTableState {
    type Event = InternshipTableEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if let Some(editing) = self.editing {
            match event {
                TuiEvent::Escape => self.editing = None,
                TuiEvent::FocusNext => {
                    self.editing = Some(match editing {
                        Editing::Search => Editing::Company,
                        Editing::Company => Editing::Location,
                        Editing::Location => Editing::Search,
                    })
                }
                other => self.edit(editing, other),
            }
            return None;
        }

        match event {
            TuiEvent::InputChar('/') => self.editing = Some(Editing::Search),
            TuiEvent::InputChar('c') => self.editing = Some(Editing::Company),
            TuiEvent::InputChar('l') => self.editing = Some(Editing::Location),
            TuiEvent::InputChar('f') => {
                self.filter.status = self.filter.status.next();
                self.selected = 0;
            }
            TuiEvent::InputChar('x') => {
                self.filter = InternshipFilter::default();
                self.selected = 0;
            }
            TuiEvent::CursorUp => self.selected = self.selected.saturating_sub(1),
            TuiEvent::CursorDown => {
                if self.selected + 1 < self.visible_ids.len() {
                    self.selected += 1;
                }
            }
            TuiEvent::PageUp => self.selected = self.selected.saturating_sub(10),
            TuiEvent::PageDown => {
                self.selected = (self.selected + 10).min(self.visible_ids.len().saturating_sub(1))
            }
            TuiEvent::Submit => return self.selected_id().map(InternshipTableEvent::Open),
            TuiEvent::InputChar('a') => {
                return self.selected_id().map(InternshipTableEvent::Applicants);
            }
            _ => {}
        }
        None
    }
}

/// Transient render wrapper.
pub struct InternshipTable<'a> {
    state: &'a mut InternshipTableState,
    internships: &'a [Internship],
    loading: bool,
    title: &'a str,
}

impl<'a> InternshipTable<'a> {
    pub fn new(
        state: &'a mut InternshipTableState,
        internships: &'a [Internship],
        loading: bool,
        title: &'a str,
    ) -> Self {
        Self {
            state,
            internships,
            loading,
            title,
        }
    }

    fn filter_line(&self) -> Line<'static> {
        let f = &self.state.filter;
        let part = |label: &str, value: &str, editing: bool| {
            let style = if editing {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            let shown = if value.is_empty() && !editing { "-" } else { value };
            vec![
                Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{shown} "), style),
                Span::raw("  "),
            ]
        };
        let mut spans = Vec::new();
        spans.extend(part("/ Search", &f.search, self.state.editing == Some(Editing::Search)));
        spans.extend(part("c Company", &f.company, self.state.editing == Some(Editing::Company)));
        spans.extend(part("l Location", &f.location, self.state.editing == Some(Editing::Location)));
        spans.push(Span::styled("f Status: ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(f.status.label(), Style::default().fg(Color::Yellow)));
        Line::from(spans)
    }
}

impl Component for InternshipTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.internships);
        let [filter_area, table_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        frame.render_widget(Paragraph::new(self.filter_line()), filter_area);

        let block = Block::bordered().title(format!(
            " {} ({} of {}) ",
            self.title,
            self.state.visible_ids.len(),
            self.internships.len()
        ));

        if self.state.visible_ids.is_empty() {
            let message = if self.loading {
                "Loading internships..."
            } else if self.internships.is_empty() || self.state.filter.is_empty() {
                "No internships available."
            } else {
                "No internships match your filters. Press x to clear."
            };
            frame.render_widget(
                Paragraph::new(message)
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block),
                table_area,
            );
            return;
        }

        let title_width = usize::from(table_area.width.saturating_sub(2)) * 35 / 100;
        let rows: Vec<Row> = self
            .state
            .filter
            .apply(self.internships)
            .into_iter()
            .map(|i| {
                let status_style = match i.status {
                    InternshipStatus::Open => Style::default().fg(Color::Green),
                    InternshipStatus::Closed => Style::default().fg(Color::Yellow),
                    InternshipStatus::Unknown => Style::default().fg(Color::DarkGray),
                };
                Row::new(vec![
                    Cell::from(fit(&i.title, title_width)),
                    Cell::from(i.company.clone()),
                    Cell::from(i.location.clone()),
                    Cell::from(i.applicants.to_string()),
                    Cell::from(i.status.label()).style(status_style),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(35),
                Constraint::Percentage(25),
                Constraint::Percentage(18),
                Constraint::Length(10),
                Constraint::Length(8),
            ],
        )
        .header(
            Row::new(vec!["Title", "Company", "Location", "Applicants", "Status"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(table, table_area, &mut self.state.table_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::StatusFilter;
    use crate::test_support::sample_internships;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn synced() -> InternshipTableState {
        let mut state = InternshipTableState::new();
        state.sync(&sample_internships());
        state
    }

    #[test]
    fn test_enter_opens_selected_and_a_views_applicants() {
        let mut state = synced();
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(InternshipTableEvent::Open("2".to_string()))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('a')),
            Some(InternshipTableEvent::Applicants("2".to_string()))
        );
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = synced();
        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, 1);
        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorUp);
        }
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_search_editing_captures_keys() {
        let mut state = synced();
        state.handle_event(&TuiEvent::InputChar('/'));
        assert!(state.is_editing());
        for c in "mark".chars() {
            assert_eq!(state.handle_event(&TuiEvent::InputChar(c)), None);
        }
        state.handle_event(&TuiEvent::Submit);
        assert!(!state.is_editing());
        assert_eq!(state.filter.search, "mark");

        state.sync(&sample_internships());
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(InternshipTableEvent::Open("2".to_string()))
        );
    }

    #[test]
    fn test_status_cycle_and_clear() {
        let mut state = synced();
        state.handle_event(&TuiEvent::InputChar('f'));
        assert_eq!(state.filter.status, StatusFilter::Open);
        state.handle_event(&TuiEvent::InputChar('x'));
        assert!(state.filter.is_empty());
    }

    #[test]
    fn test_empty_table_emits_nothing() {
        let mut state = InternshipTableState::new();
        state.sync(&[]);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_render_lists_rows_and_loading_placeholder() {
        let backend = TestBackend::new(100, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let data = sample_internships();
        let mut state = InternshipTableState::new();

        terminal
            .draw(|f| InternshipTable::new(&mut state, &data, false, "Internships").render(f, f.area()))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Unilever India"));
        assert!(text.contains("(2 of 2)"));

        terminal
            .draw(|f| InternshipTable::new(&mut state, &[], true, "Internships").render(f, f.area()))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Loading internships..."));
    }

    #[test]
    fn test_render_no_match_placeholder_only_when_filtered() {
        let backend = TestBackend::new(100, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let data = sample_internships();
        let mut state = InternshipTableState::new();
        state.filter.search = "kotlin".to_string();
        assert!(!state.filter.is_empty());

        terminal
            .draw(|f| InternshipTable::new(&mut state, &data, false, "Internships").render(f, f.area()))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("No internships match your filters"));

        state.handle_event(&TuiEvent::InputChar('x'));
        terminal
            .draw(|f| InternshipTable::new(&mut state, &[], false, "Internships").render(f, f.area()))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("No internships available."));
    }
}
