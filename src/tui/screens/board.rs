//! Assignment board page: keyboard drag between the bench and projects.
//!
//! Enter picks up the member under the cursor, ←→ choose the destination
//! container, Enter drops, Esc cancels. All membership changes go through
//! the board core; this screen only translates keys and renders snapshots.

use crossterm::event::KeyCode;
use log::warn;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use uuid::Uuid;

use crate::board::{Board, DropTarget};
use crate::model::{Member, Project};

/// An in-flight drag: the member snapshot and the hovered container.
struct Drag {
    member: Member,
    hover: usize,
}

pub struct BoardScreen {
    board: Board,
    /// Container under the cursor: 0 is the bench, 1.. are projects.
    cursor_container: usize,
    cursor_row: usize,
    drag: Option<Drag>,
    status: Option<String>,
}

impl BoardScreen {
    pub fn new() -> Self {
        Self {
            board: demo_board(),
            cursor_container: 0,
            cursor_row: 0,
            drag: None,
            status: None,
        }
    }

    fn container_count(&self) -> usize {
        1 + self.board.projects().len()
    }

    fn members_in(&self, container: usize) -> &[Member] {
        if container == 0 {
            self.board.bench()
        } else {
            &self.board.projects()[container - 1].members
        }
    }

    /// Resolves a container index to a drop target for the core.
    fn target_at(&self, container: usize) -> DropTarget {
        if container == 0 {
            DropTarget::Bench
        } else {
            DropTarget::Project(self.board.projects()[container - 1].id)
        }
    }

    pub fn on_key(&mut self, code: KeyCode) {
        if self.drag.is_some() {
            self.on_key_dragging(code);
        } else {
            self.on_key_browsing(code);
        }
    }

    fn on_key_browsing(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left if self.cursor_container > 0 => {
                self.cursor_container -= 1;
                self.clamp_cursor();
            }
            KeyCode::Right if self.cursor_container + 1 < self.container_count() => {
                self.cursor_container += 1;
                self.clamp_cursor();
            }
            KeyCode::Up if self.cursor_row > 0 => self.cursor_row -= 1,
            KeyCode::Down => {
                if self.cursor_row + 1 < self.members_in(self.cursor_container).len() {
                    self.cursor_row += 1;
                }
            }
            KeyCode::Enter => self.pick_up(),
            _ => {}
        }
    }

    fn on_key_dragging(&mut self, code: KeyCode) {
        let containers = self.container_count();
        let (member_id, hover) = match &self.drag {
            Some(drag) => (drag.member.id, drag.hover),
            None => return,
        };
        match code {
            KeyCode::Left if hover > 0 => {
                if let Some(drag) = &mut self.drag {
                    drag.hover -= 1;
                }
            }
            KeyCode::Right if hover + 1 < containers => {
                if let Some(drag) = &mut self.drag {
                    drag.hover += 1;
                }
            }
            KeyCode::Esc => {
                self.drag = None;
                self.complete_drop(member_id, None);
            }
            KeyCode::Enter => {
                let target = self.target_at(hover);
                self.drag = None;
                self.complete_drop(member_id, Some(target));
            }
            _ => {}
        }
    }

    /// Pick up the member under the cursor.
    fn pick_up(&mut self) {
        let Some(member_id) = self
            .members_in(self.cursor_container)
            .get(self.cursor_row)
            .map(|m| m.id)
        else {
            return;
        };
        if let Some(snapshot) = self.board.begin_drag(member_id) {
            self.drag = Some(Drag {
                member: snapshot,
                hover: self.cursor_container,
            });
        }
    }

    /// Completes the gesture through the core and surfaces any rejection.
    fn complete_drop(&mut self, member_id: Uuid, target: Option<DropTarget>) {
        match self.board.end_drag(member_id, target) {
            Ok(()) => self.status = None,
            Err(e) => {
                warn!("drop rejected: {e}");
                self.status = Some(e.to_string());
            }
        }
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let len = self.members_in(self.cursor_container).len();
        self.cursor_row = self.cursor_row.min(len.saturating_sub(1));
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let bench_height = self.board.bench().len().max(1) as u16 + 2;
        let chunks = Layout::vertical([
            Constraint::Length(2),            // title + status
            Constraint::Length(bench_height), // bench
            Constraint::Min(0),               // project columns
            Constraint::Length(1),            // help
        ])
        .split(area);

        let bold = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(Color::DarkGray);

        let mut header = vec![Line::from(Span::styled("Team Organization", bold))];
        if let Some(drag) = &self.drag {
            header.push(Line::from(Span::styled(
                format!("Moving {} — ←→ choose, ⏎ drop, Esc cancel", drag.member.name),
                Style::default().fg(Color::Cyan),
            )));
        } else if let Some(status) = &self.status {
            header.push(Line::from(Span::styled(
                status.clone(),
                Style::default().fg(Color::Red),
            )));
        } else if let Some(member) = self.members_in(self.cursor_container).get(self.cursor_row) {
            let mut detail = format!("{} · {}", member.headline, member.skills.join(", "));
            if let Some(assignment) = &member.assignment {
                detail.push_str(&format!("  [{assignment}]"));
            }
            header.push(Line::from(Span::styled(detail, muted)));
        }
        frame.render_widget(Paragraph::new(header), chunks[0]);

        self.render_container(frame, chunks[1], 0, "Available Teammates", self.board.bench());

        let columns = Layout::horizontal(vec![
            Constraint::Ratio(1, self.board.projects().len().max(1) as u32);
            self.board.projects().len()
        ])
        .split(chunks[2]);
        for (i, project) in self.board.projects().iter().enumerate() {
            self.render_container(frame, columns[i], i + 1, &project.title, &project.members);
        }

        let help = Paragraph::new(Line::from(Span::styled(
            " ↑↓←→ move  ⏎ pick up / drop  Esc cancel",
            muted,
        )));
        frame.render_widget(help, chunks[3]);
    }

    fn render_container(
        &self,
        frame: &mut Frame,
        area: Rect,
        container: usize,
        title: &str,
        members: &[Member],
    ) {
        let hovered = self.drag.as_ref().is_some_and(|d| d.hover == container);
        let border_style = if hovered {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let lines: Vec<Line> = if members.is_empty() {
            vec![Line::from(Span::styled(
                "  (empty)",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            members
                .iter()
                .enumerate()
                .map(|(row, member)| {
                    let under_cursor = self.drag.is_none()
                        && container == self.cursor_container
                        && row == self.cursor_row;
                    let style = if under_cursor {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    let pointer = if under_cursor { "› " } else { "  " };
                    Line::from(vec![
                        Span::styled(format!("{pointer}{}", member.name), style),
                        Span::styled(
                            format!("  {}", member.headline),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ])
                })
                .collect()
        };

        let block = Block::bordered()
            .title(title.to_string())
            .border_style(border_style);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// The demo roster: six teammates on the bench, three empty projects.
fn demo_board() -> Board {
    let member = |name: &str, headline: &str, skills: &[&str]| Member {
        id: Uuid::new_v4(),
        name: name.to_string(),
        headline: headline.to_string(),
        avatar_url: format!("https://ui-avatars.com/api/?name={}", name.replace(' ', "+")),
        skills: skills.iter().map(|s| (*s).to_string()).collect(),
        assignment: None,
    };
    let project = |title: &str| Project {
        id: Uuid::new_v4(),
        title: title.to_string(),
        members: Vec::new(),
    };
    Board::new(
        vec![
            member("Alex Johnson", "Frontend Developer", &["React", "TypeScript", "CSS"]),
            member("Sarah Chen", "Full Stack Developer", &["Node.js", "React", "MongoDB"]),
            member("Miguel Rodriguez", "Backend Developer", &["Java", "Spring", "AWS"]),
            member("Priya Patel", "Mobile Developer", &["Flutter", "Dart", "Firebase"]),
            member("David Kim", "DevOps Engineer", &["Docker", "Kubernetes", "CI/CD"]),
            member("Emma Wilson", "UI/UX Designer", &["Figma", "React", "CSS"]),
        ],
        vec![project("Project 1"), project("Project 2"), project("Project 3")],
    )
}
