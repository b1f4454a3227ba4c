//! Collapsible sidebar: routes, user footer, and logout.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Padding, Paragraph};

use crate::model::Session;

/// A dashboard page reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Board,
    Feed,
}

/// What activating a sidebar entry resolves to.
pub enum NavAction {
    Go(Page),
    Logout,
}

/// Sidebar routes, in display order.
const ROUTES: [(Page, &str); 3] = [
    (Page::Home, "Home"),
    (Page::Board, "Board"),
    (Page::Feed, "Photo Feed"),
];

/// Sidebar state: collapse toggle, cursor, and the active route.
pub struct Nav {
    collapsed: bool,
    selected: usize,
    active: Page,
}

impl Nav {
    pub fn new() -> Self {
        Self {
            collapsed: false,
            selected: 0,
            active: Page::Home,
        }
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn set_active(&mut self, page: Page) {
        self.active = page;
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        // Routes plus the logout row.
        if self.selected < ROUTES.len() {
            self.selected += 1;
        }
    }

    pub fn select(&self) -> Option<NavAction> {
        if let Some((page, _)) = ROUTES.get(self.selected) {
            Some(NavAction::Go(*page))
        } else if self.selected == ROUTES.len() {
            Some(NavAction::Logout)
        } else {
            None
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, session: &Session, focused: bool) {
        let chunks = Layout::vertical([
            Constraint::Length(2), // header
            Constraint::Min(0),    // routes
            Constraint::Length(3), // user footer
        ])
        .split(area);

        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let header = if self.collapsed { "≡" } else { "≡ Dashboard" };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(header, highlight)))
                .block(Block::default().padding(Padding::new(1, 0, 0, 0))),
            chunks[0],
        );

        let mut items: Vec<ListItem> = ROUTES
            .iter()
            .enumerate()
            .map(|(i, (page, title))| {
                let style = if focused && i == self.selected {
                    highlight
                } else if *page == self.active {
                    Style::default().fg(Color::White)
                } else {
                    normal
                };
                let pointer = if focused && i == self.selected { "› " } else { "  " };
                let label = if self.collapsed {
                    title.chars().take(1).collect::<String>()
                } else {
                    (*title).to_string()
                };
                ListItem::new(Line::from(Span::styled(format!("{pointer}{label}"), style)))
            })
            .collect();

        let logout_focused = focused && self.selected == ROUTES.len();
        let logout_style = if logout_focused { highlight } else { muted };
        let logout_pointer = if logout_focused { "› " } else { "  " };
        let logout_label = if self.collapsed { "⏻" } else { "Log out" };
        items.push(ListItem::new(Line::from(Span::styled(
            format!("{logout_pointer}{logout_label}"),
            logout_style,
        ))));

        frame.render_widget(
            List::new(items).block(Block::default().padding(Padding::new(1, 1, 1, 0))),
            chunks[1],
        );

        let footer = if self.collapsed {
            vec![Line::from(Span::styled(session.initials(), normal))]
        } else {
            vec![
                Line::from(Span::styled(session.display_name(), normal)),
                Line::from(Span::styled(session.email.clone(), muted)),
            ]
        };
        frame.render_widget(
            Paragraph::new(footer).block(Block::default().padding(Padding::new(1, 1, 0, 0))),
            chunks[2],
        );
    }
}
