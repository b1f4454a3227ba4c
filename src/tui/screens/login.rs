//! Login screen: email and password against the remote API.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::validate::{self, Field};

use super::form::{TextField, button_line};

/// Rows on the login form, top to bottom.
const EMAIL: usize = 0;
const PASSWORD: usize = 1;
const SIGN_IN: usize = 2;
const CREATE_ACCOUNT: usize = 3;
const FORGOT: usize = 4;
const ROWS: usize = 5;

/// Completed interactions the app loop carries out.
pub enum LoginAction {
    Submit { email: String, password: String },
    GoRegister,
    GoForgotPassword,
}

pub struct LoginScreen {
    email: TextField,
    password: TextField,
    focused: usize,
    api_error: Option<String>,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            email: TextField::new("Email"),
            password: TextField::masked("Password"),
            focused: EMAIL,
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
        match self.focused {
            EMAIL => self.email.value.push(c),
            PASSWORD => self.password.value.push(c),
            _ => {}
        }
    }

    pub fn on_backspace(&mut self) {
        match self.focused {
            EMAIL => {
                self.email.value.pop();
            }
            PASSWORD => {
                self.password.value.pop();
            }
            _ => {}
        }
    }

    /// Handle Enter: advance past a field, or activate the focused button.
    pub fn on_enter(&mut self) -> Option<LoginAction> {
        match self.focused {
            EMAIL | PASSWORD => {
                self.focused += 1;
                None
            }
            SIGN_IN => self.submit(),
            CREATE_ACCOUNT => Some(LoginAction::GoRegister),
            FORGOT => Some(LoginAction::GoForgotPassword),
            _ => None,
        }
    }

    /// Shows a failure from the API under the form.
    pub fn set_api_error(&mut self, message: String) {
        self.api_error = Some(message);
    }

    fn submit(&mut self) -> Option<LoginAction> {
        let errors = validate::login(&self.email.value, &self.password.value);
        self.email.error = validate::message_for(&errors, Field::Email);
        self.password.error = validate::message_for(&errors, Field::Password);
        if errors.is_empty() {
            self.api_error = None;
            Some(LoginAction::Submit {
                email: self.email.value.clone(),
                password: self.password.value.clone(),
            })
        } else {
            None
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // title
            Constraint::Min(0),    // form
            Constraint::Length(1), // help
        ])
        .split(frame.area());

        let title = Paragraph::new(Line::from(Span::styled(
            "Sign in",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(title, chunks[0]);

        let mut lines = Vec::new();
        lines.extend(self.email.lines(self.focused == EMAIL));
        lines.extend(self.password.lines(self.focused == PASSWORD));
        lines.push(button_line("Sign in", self.focused == SIGN_IN));
        lines.push(Line::default());
        lines.push(button_line("Create an account", self.focused == CREATE_ACCOUNT));
        lines.push(button_line("Forgot password?", self.focused == FORGOT));
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
            " ↑↓ move  ⏎ select  Esc quit",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(help, chunks[2]);
    }
}
