//! Forgot-password screen: a lone email field.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::validate::{self, Field};

use super::form::{TextField, button_line};

const EMAIL: usize = 0;
const SEND: usize = 1;
const BACK: usize = 2;
const ROWS: usize = 3;

pub enum ForgotPasswordAction {
    Submit { email: String },
    GoLogin,
}

pub struct ForgotPasswordScreen {
    email: TextField,
    focused: usize,
    notice: Option<String>,
    api_error: Option<String>,
}

impl ForgotPasswordScreen {
    pub fn new() -> Self {
        Self {
            email: TextField::new("Email"),
            focused: EMAIL,
            notice: None,
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
        if self.focused == EMAIL {
            self.email.value.push(c);
        }
    }

    pub fn on_backspace(&mut self) {
        if self.focused == EMAIL {
            self.email.value.pop();
        }
    }

    pub fn on_enter(&mut self) -> Option<ForgotPasswordAction> {
        match self.focused {
            EMAIL => {
                self.focused = SEND;
                None
            }
            SEND => self.submit(),
            BACK => Some(ForgotPasswordAction::GoLogin),
            _ => None,
        }
    }

    pub fn set_notice(&mut self, message: String) {
        self.notice = Some(message);
        self.api_error = None;
    }

    pub fn set_api_error(&mut self, message: String) {
        self.api_error = Some(message);
        self.notice = None;
    }

    fn submit(&mut self) -> Option<ForgotPasswordAction> {
        let errors = validate::email_field(&self.email.value);
        self.email.error = validate::message_for(&errors, Field::Email);
        if errors.is_empty() {
            Some(ForgotPasswordAction::Submit {
                email: self.email.value.clone(),
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
            "Reset your password",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(title, chunks[0]);

        let mut lines = Vec::new();
        lines.extend(self.email.lines(self.focused == EMAIL));
        lines.push(button_line("Send reset email", self.focused == SEND));
        lines.push(Line::default());
        lines.push(button_line("Back to sign in", self.focused == BACK));
        if let Some(notice) = &self.notice {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("  {notice}"),
                Style::default().fg(Color::Green),
            )));
        }
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
