//! Form rows shared by the auth screens.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// A labelled text input, optionally masked.
pub struct TextField {
    pub label: &'static str,
    pub value: String,
    pub masked: bool,
    pub error: Option<&'static str>,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            masked: false,
            error: None,
        }
    }

    pub fn masked(label: &'static str) -> Self {
        Self {
            masked: true,
            ..Self::new(label)
        }
    }

    /// What the field shows: bullets for masked input.
    fn shown(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// The label, input, and error rows for this field.
    pub fn lines(&self, focused: bool) -> Vec<Line<'static>> {
        let pointer = if focused { "› " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut value = self.shown();
        if focused {
            value.push('▏');
        }

        let mut lines = vec![
            Line::from(Span::styled(format!("{pointer}{}", self.label), label_style)),
            Line::from(Span::styled(
                format!("  {value}"),
                Style::default().fg(Color::White),
            )),
        ];
        if let Some(error) = self.error {
            lines.push(Line::from(Span::styled(
                format!("  {error}"),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::default());
        lines
    }
}

/// A focusable action row, e.g. `[ Sign in ]`.
pub fn button_line(label: &str, focused: bool) -> Line<'static> {
    let pointer = if focused { "› " } else { "  " };
    let style = if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(Span::styled(format!("{pointer}[ {label} ]"), style))
}
