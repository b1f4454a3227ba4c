//! Registration screen.
//!
//! Validates locally before anything goes over the wire; a successful
//! registration is followed by an automatic sign-in, so the action carries
//! the credentials onward.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::validate::{self, Field};

use super::form::{TextField, button_line};

const FIRST_NAME: usize = 0;
const LAST_NAME: usize = 1;
const EMAIL: usize = 2;
const PASSWORD: usize = 3;
const CONFIRM: usize = 4;
const CREATE: usize = 5;
const BACK: usize = 6;
const ROWS: usize = 7;

pub enum RegisterAction {
    Submit {
        first_name: String,
        last_name: String,
        email: String,
        password: String,
    },
    GoLogin,
}

pub struct RegisterScreen {
    fields: [TextField; 5],
    focused: usize,
    api_error: Option<String>,
}

impl RegisterScreen {
    pub fn new() -> Self {
        Self {
            fields: [
                TextField::new("First name"),
                TextField::new("Last name"),
                TextField::new("Email"),
                TextField::masked("Password"),
                TextField::masked("Confirm password"),
            ],
            focused: FIRST_NAME,
            api_error: None,
        }
    }

    pub fn move_up(&mut self) {
        if self.focused > 0 {
            self.focused -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.focused + 1 < ROWS {
            self.focused += 1;
        }
    }

    pub fn on_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.push(c);
        }
    }

    pub fn on_backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.pop();
        }
    }

    pub fn on_enter(&mut self) -> Option<RegisterAction> {
        match self.focused {
            FIRST_NAME..=CONFIRM => {
                self.focused += 1;
                None
            }
            CREATE => self.submit(),
            BACK => Some(RegisterAction::GoLogin),
            _ => None,
        }
    }

    pub fn set_api_error(&mut self, message: String) {
        self.api_error = Some(message);
    }

    fn submit(&mut self) -> Option<RegisterAction> {
        let errors = validate::registration(
            &self.fields[FIRST_NAME].value,
            &self.fields[LAST_NAME].value,
            &self.fields[EMAIL].value,
            &self.fields[PASSWORD].value,
            &self.fields[CONFIRM].value,
        );
        let by_field = [
            Field::FirstName,
            Field::LastName,
            Field::Email,
            Field::Password,
            Field::ConfirmPassword,
        ];
        for (field, kind) in self.fields.iter_mut().zip(by_field) {
            field.error = validate::message_for(&errors, kind);
        }
        if errors.is_empty() {
            self.api_error = None;
            Some(RegisterAction::Submit {
                first_name: self.fields[FIRST_NAME].value.clone(),
                last_name: self.fields[LAST_NAME].value.clone(),
                email: self.fields[EMAIL].value.clone(),
                password: self.fields[PASSWORD].value.clone(),
            })
        } else {
            None
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let title = Paragraph::new(Line::from(Span::styled(
            "Create an account",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(title, chunks[0]);

        let mut lines = Vec::new();
        for (i, field) in self.fields.iter().enumerate() {
            lines.extend(field.lines(self.focused == i));
        }
        lines.push(button_line("Create account", self.focused == CREATE));
        lines.push(Line::default());
        lines.push(button_line("Back to sign in", self.focused == BACK));
        if let Some(error) = &self.api_error {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("  {error}"),
                Style::default().fg(Color::Red),
            )));
        }
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().padding(Padding::new(2, 2, 0, 0))),
            chunks[1],
        );

        let help = Paragraph::new(Line::from(Span::styled(
            " ↑↓ move  ⏎ select  Esc back",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(help, chunks[2]);
    }
}
