//! Home page: the signed-in user's profile card.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::model::Session;

pub struct HomeScreen {
    session: Session,
}

impl HomeScreen {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let muted = Style::default().fg(Color::DarkGray);
        let label = Style::default().fg(Color::Gray);
        let value = Style::default().fg(Color::White);
        let bold = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let lines = vec![
            Line::from(Span::styled("Dashboard", bold)),
            Line::default(),
            Line::from(Span::styled(format!("({})", self.session.initials()), muted)),
            Line::default(),
            Line::from(Span::styled("Name", label)),
            Line::from(Span::styled(self.session.display_name(), value)),
            Line::default(),
            Line::from(Span::styled("Email", label)),
            Line::from(Span::styled(self.session.email.clone(), value)),
            Line::default(),
            Line::from(Span::styled("Signed in", label)),
            Line::from(Span::styled(
                self.session.saved_at.strftime("%Y-%m-%d %H:%M").to_string(),
                value,
            )),
        ];

        let card = Paragraph::new(lines).block(
            Block::bordered()
                .title("User Profile")
                .padding(Padding::new(2, 2, 1, 1)),
        );
        frame.render_widget(card, area);
    }
}
