//! Photo feed page: endless scroll over paged fetches.
//!
//! Reaching the tail of the loaded list is the load-more signal, standing
//! in for the browser's intersection observer.

use crossterm::event::KeyCode;
use log::warn;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::api::Api;
use crate::feed::Feed;

pub struct FeedScreen {
    feed: Feed,
    selected: usize,
    error: Option<String>,
}

impl FeedScreen {
    /// Creates the page and loads the first batch.
    pub fn new(api: &Api, page_size: usize) -> Self {
        let mut screen = Self {
            feed: Feed::new(),
            selected: 0,
            error: None,
        };
        screen.fetch(api, page_size);
        screen
    }

    pub fn on_key(&mut self, code: KeyCode, api: &Api, page_size: usize) {
        match code {
            KeyCode::Up | KeyCode::Char('k') if self.selected > 0 => self.selected -= 1,
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.feed.photos().len() {
                    self.selected += 1;
                }
                // The tail is the load-more signal.
                if self.selected + 1 == self.feed.photos().len() {
                    self.fetch(api, page_size);
                }
            }
            _ => {}
        }
    }

    fn fetch(&mut self, api: &Api, page_size: usize) {
        if self.feed.is_fetching_next_page() || !self.feed.has_next_page() {
            return;
        }
        match self.feed.fetch_next_page(|_page| api.fetch_photos(page_size)) {
            Ok(_) => self.error = None,
            Err(e) => {
                warn!("photo fetch failed: {e}");
                self.error = Some("Error loading images. Please try again later.".to_string());
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // title
            Constraint::Min(0),    // cards
            Constraint::Length(1), // footer
        ])
        .split(area);

        let bold = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(Color::DarkGray);

        let title = vec![
            Line::from(Span::styled("Photo Feed", bold)),
            Line::from(Span::styled("Scroll down to load more photos", muted)),
        ];
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let photos = self.feed.photos();
        let visible = chunks[1].height.saturating_sub(2) as usize;
        let first = self.selected.saturating_sub(visible.saturating_sub(1));
        let lines: Vec<Line> = photos
            .iter()
            .enumerate()
            .skip(first)
            .take(visible.max(1))
            .map(|(i, photo)| {
                let style = if i == self.selected {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let pointer = if i == self.selected { "› " } else { "  " };
                Line::from(vec![
                    Span::styled(format!("{pointer}{:>4}  ", i + 1), muted),
                    Span::styled(photo.url.clone(), style),
                ])
            })
            .collect();
        let body = if photos.is_empty() && self.error.is_none() {
            Paragraph::new(Line::from(Span::styled("  Loading…", muted)))
        } else {
            Paragraph::new(lines)
        };
        frame.render_widget(
            body.block(Block::bordered().padding(Padding::new(1, 1, 0, 0))),
            chunks[1],
        );

        let footer = if let Some(error) = &self.error {
            Line::from(Span::styled(
                format!(" {error}"),
                Style::default().fg(Color::Red),
            ))
        } else if self.feed.is_fetching_next_page() {
            Line::from(Span::styled(" Loading more…", muted))
        } else {
            Line::from(Span::styled(
                format!(
                    " {} photos loaded  ·  ↑↓ scroll, more loads at the bottom",
                    photos.len()
                ),
                muted,
            ))
        };
        frame.render_widget(Paragraph::new(footer), chunks[2]);
    }
}
