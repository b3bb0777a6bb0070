//! # TextField
//!
//! Single-line editable text. Used by the login form and by the search
//! boxes above each table. Editing always happens at the end of the line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    Changed,
    Submit,
}

#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub label: String,
    pub value: String,
    /// Render as bullets (passwords).
    pub masked: bool,
    /// Prop: whether this field has keyboard focus.
    pub focused: bool,
}

impl TextField {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ..Default::default()
        }
    }

    pub fn masked(label: &str) -> Self {
        Self {
            masked: true,
            ..Self::new(label)
        }
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Text as it should appear on screen.
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let shown = self.display();
        let paragraph = Paragraph::new(shown.as_str())
            .block(Block::bordered().title(self.label.as_str()).border_style(border));
        frame.render_widget(paragraph, area);

        if self.focused && area.width > 2 && area.height > 2 {
            let max_x = area.x + area.width - 2;
            let x = (area.x + 1 + shown.width() as u16).min(max_x);
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.value.push(*c);
                Some(FieldEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                let line: String = text.chars().filter(|c| !c.is_control()).collect();
                if line.is_empty() {
                    return None;
                }
                self.value.push_str(&line);
                Some(FieldEvent::Changed)
            }
            TuiEvent::Backspace => self.value.pop().map(|_| FieldEvent::Changed),
            TuiEvent::Submit => Some(FieldEvent::Submit),
            _ => None,
        }
    }
}
