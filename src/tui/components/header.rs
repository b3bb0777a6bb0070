//! # Header
//!
//! Stateless top bar: who is signed in, which API we talk to, and the
//! F1-F5 section tabs with the current one highlighted.

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};

use crate::core::shell::Screen;
use crate::tui::component::Component;

pub struct Header<'a> {
    pub username: &'a str,
    pub signed_in_at: Option<DateTime<Local>>,
    pub api_base: &'a str,
    pub screen: Screen,
}

impl Header<'_> {
    fn tab_index(&self) -> usize {
        let section = self.screen.section();
        Screen::TOP_LEVEL
            .iter()
            .position(|s| *s == section)
            .unwrap_or(0)
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [top, tabs_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let mut spans = vec![
            Span::styled(
                " PM Internship Console ",
                Style::default().fg(Color::Black).bg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(self.username.to_string(), Style::default().fg(Color::Cyan)),
        ];
        if let Some(at) = self.signed_in_at {
            spans.push(Span::styled(
                format!(" (since {})", at.format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if !self.api_base.is_empty() {
            spans.push(Span::styled(
                format!("  {}", self.api_base),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), top);

        let titles = Screen::TOP_LEVEL
            .iter()
            .enumerate()
            .map(|(i, s)| Line::from(format!("F{} {}", i + 1, s.title())));
        let tabs = Tabs::new(titles)
            .select(self.tab_index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .divider("|");
        frame.render_widget(tabs, tabs_area);
    }
}
