//! # Login Form
//!
//! Username and password fields. Tab switches fields, Enter on the username
//! moves to the password, Enter on the password submits.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum LoginEvent {
    Submit { username: String, password: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Username,
    Password,
}

pub struct LoginForm {
    username: TextField,
    password: TextField,
    focus: Focus,
    /// Prop: credential check in flight.
    pub pending: bool,
    /// Prop: message from the last failed attempt.
    pub error: Option<String>,
}

impl LoginForm {
    pub fn new(default_username: Option<&str>) -> Self {
        let username = TextField::new("Username").with_value(default_username.unwrap_or(""));
        let focus = if username.value.is_empty() {
            Focus::Username
        } else {
            Focus::Password
        };
        Self {
            username,
            password: TextField::masked("Password"),
            focus,
            pending: false,
            error: None,
        }
    }

    /// Clears the password, keeping the username for the next attempt.
    pub fn reset_password(&mut self) {
        self.password.clear();
        self.focus = Focus::Password;
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Username => Focus::Password,
            Focus::Password => Focus::Username,
        };
    }

    fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            Focus::Username => &mut self.username,
            Focus::Password => &mut self.password,
        }
    }
}

impl Component for LoginForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [card] = Layout::horizontal([Constraint::Length(52)])
            .flex(Flex::Center)
            .areas(area);
        let [card] = Layout::vertical([Constraint::Length(16)])
            .flex(Flex::Center)
            .areas(card);

        frame.render_widget(Clear, card);
        let block = Block::bordered()
            .title(" Secure Login ")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(Color::Blue));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let [heading, user_area, pass_area, button_area, message_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        let heading_text = vec![
            Line::from(Span::styled(
                "Admin Portal",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "PM Internship Scheme Management System",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(
            Paragraph::new(heading_text).alignment(Alignment::Center),
            heading,
        );

        self.username.focused = self.focus == Focus::Username && !self.pending;
        self.password.focused = self.focus == Focus::Password && !self.pending;
        self.username.render(frame, user_area);
        self.password.render(frame, pass_area);

        let button = if self.pending {
            Span::styled("Signing In...", Style::default().fg(Color::Yellow))
        } else {
            Span::styled(
                "[ Login ]  Enter",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        };
        frame.render_widget(
            Paragraph::new(Line::from(button)).alignment(Alignment::Center),
            button_area,
        );

        if let Some(error) = &self.error {
            frame.render_widget(
                Paragraph::new(error.as_str())
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center),
                message_area,
            );
        }
    }
}

impl EventHandler for LoginForm {
    type Event = LoginEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.pending {
            return None;
        }
        match event {
            TuiEvent::FocusNext | TuiEvent::FocusPrev | TuiEvent::CursorUp | TuiEvent::CursorDown => {
                self.toggle_focus();
                None
            }
            _ => match self.focused_field().handle_event(event)? {
                FieldEvent::Changed => None,
                FieldEvent::Submit if self.focus == Focus::Username => {
                    self.focus = Focus::Password;
                    None
                }
                FieldEvent::Submit => Some(LoginEvent::Submit {
                    username: self.username.value.clone(),
                    password: self.password.value.clone(),
                }),
            },
        }
    }
}
