//! # Candidate Table
//!
//! Searchable, multi-select list of candidates. Used for the global
//! directory and for one internship's applicants.
//!
//! Keys: `/` search, Space toggle row, `*` toggle all visible, `s`
//! shortlist the selection, ↑/↓ move.

use std::collections::BTreeSet;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, TableState};

use crate::core::filter::filter_candidates;
use crate::core::models::Candidate;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::fit;
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum CandidateTableEvent {
    /// `s` pressed with this many candidates selected.
    Shortlisted(usize),
    /// `s` pressed with nothing selected.
    NothingSelected,
}

#[derive(Debug, Default)]
pub struct CandidateTableState {
    pub search: String,
    editing: bool,
    pub selected: usize,
    /// Ids ticked for shortlisting. Survives search changes.
    pub checked: BTreeSet<String>,
    table_state: TableState,
    visible_ids: Vec<String>,
}

impl CandidateTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn sync(&mut self, candidates: &[Candidate]) {
        self.visible_ids = filter_candidates(candidates, &self.search)
            .into_iter()
            .map(|c| c.id.clone())
            .collect();
        if self.visible_ids.is_empty() {
            self.selected = 0;
            self.table_state.select(None);
        } else {
            self.selected = self.selected.min(self.visible_ids.len() - 1);
            self.table_state.select(Some(self.selected));
        }
    }

    fn toggle_current(&mut self) {
        if let Some(id) = self.visible_ids.get(self.selected)
            && !self.checked.remove(id)
        {
            self.checked.insert(id.clone());
        }
    }

    fn toggle_all(&mut self) {
        let all_checked = self.visible_ids.iter().all(|id| self.checked.contains(id));
        if all_checked {
            for id in &self.visible_ids {
                self.checked.remove(id);
            }
        } else {
            self.checked.extend(self.visible_ids.iter().cloned());
        }
    }
}

impl EventHandler for CandidateTableState {
    type Event = CandidateTableEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.editing {
            match event {
                TuiEvent::Escape => self.editing = false,
                other => {
                    let mut field = TextField::new("").with_value(&self.search);
                    match field.handle_event(other) {
                        Some(FieldEvent::Submit) => self.editing = false,
                        Some(FieldEvent::Changed) => {
                            self.search = field.value;
                            self.selected = 0;
                        }
                        None => {}
                    }
                }
            }
            return None;
        }

        match event {
            TuiEvent::InputChar('/') => self.editing = true,
            TuiEvent::InputChar(' ') => self.toggle_current(),
            TuiEvent::InputChar('*') => self.toggle_all(),
            TuiEvent::InputChar('s') => {
                return Some(if self.checked.is_empty() {
                    CandidateTableEvent::NothingSelected
                } else {
                    CandidateTableEvent::Shortlisted(self.checked.len())
                });
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
            _ => {}
        }
        None
    }
}

pub struct CandidateTable<'a> {
    state: &'a mut CandidateTableState,
    candidates: &'a [Candidate],
    loading: bool,
    title: &'a str,
}

impl<'a> CandidateTable<'a> {
    pub fn new(
        state: &'a mut CandidateTableState,
        candidates: &'a [Candidate],
        loading: bool,
        title: &'a str,
    ) -> Self {
        Self {
            state,
            candidates,
            loading,
            title,
        }
    }
}

impl Component for CandidateTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.candidates);
        let [search_area, table_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let search_style = if self.state.editing {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        let search_line = Line::from(vec![
            Span::styled("/ Search: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{} ", self.state.search), search_style),
            Span::styled(
                format!("   {} selected  (space toggle, * all, s shortlist)", self.state.checked.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(search_line), search_area);

        let block = Block::bordered().title(format!(
            " {} ({} of {}) ",
            self.title,
            self.state.visible_ids.len(),
            self.candidates.len()
        ));

        if self.state.visible_ids.is_empty() {
            let message = if self.loading {
                "Loading candidates..."
            } else if self.candidates.is_empty() {
                "No candidates found."
            } else {
                "No candidates match your search."
            };
            frame.render_widget(
                Paragraph::new(message)
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block),
                table_area,
            );
            return;
        }

        let skills_width = usize::from(table_area.width.saturating_sub(2)) * 30 / 100;
        let rows: Vec<Row> = filter_candidates(self.candidates, &self.state.search)
            .into_iter()
            .map(|c| {
                let mark = if self.state.checked.contains(&c.id) { "[x]" } else { "[ ]" };
                let skills = c.skills.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
                Row::new(vec![
                    Cell::from(mark),
                    Cell::from(c.name.clone()),
                    Cell::from(c.education.clone()),
                    Cell::from(c.location.clone()),
                    Cell::from(fit(&skills, skills_width)),
                    Cell::from(c.applications.to_string()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Percentage(20),
                Constraint::Percentage(22),
                Constraint::Percentage(14),
                Constraint::Percentage(30),
                Constraint::Length(5),
            ],
        )
        .header(
            Row::new(vec!["", "Name", "Education", "Location", "Skills", "Apps"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(table, table_area, &mut self.state.table_state);
    }
}
