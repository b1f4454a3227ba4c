//! Assignment board: the state machine behind the drag-and-drop page.
//!
//! A board owns a bench of unassigned members and a fixed set of projects.
//! Every member known to the board lives in exactly one container at all
//! times, and a member's `assignment` always mirrors the title of the
//! project holding it (`None` on the bench). Operations either fully apply
//! or leave the board untouched — there is no I/O and no partial failure.

use log::warn;
use uuid::Uuid;

use crate::model::{Member, Project};

/// Errors from board operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("no such project: {0}")]
    UnknownProject(Uuid),
}

pub type Result<T> = core::result::Result<T, BoardError>;

/// A container a member can be dropped on.
///
/// Resolved from the UI's hover target once, at the interaction boundary;
/// the board never inspects container ids textually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// The bench of unassigned members.
    Bench,

    /// A project column.
    Project(Uuid),
}

/// The assignment board: a bench plus a fixed, ordered set of projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    bench: Vec<Member>,
    projects: Vec<Project>,
}

impl Board {
    /// Creates a board from seed data.
    ///
    /// Members and projects are supplied by the caller; the board only
    /// relocates members between containers, never creates or deletes them.
    pub fn new(bench: Vec<Member>, projects: Vec<Project>) -> Self {
        Self { bench, projects }
    }

    /// Unassigned members, in arrival order.
    pub fn bench(&self) -> &[Member] {
        &self.bench
    }

    /// The project columns, in display order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// The container currently holding the given member, if known.
    pub fn locate(&self, member_id: Uuid) -> Option<DropTarget> {
        if self.bench.iter().any(|m| m.id == member_id) {
            return Some(DropTarget::Bench);
        }
        self.projects
            .iter()
            .find(|p| p.members.iter().any(|m| m.id == member_id))
            .map(|p| DropTarget::Project(p.id))
    }

    /// Snapshot of the member about to be dragged, for overlay display.
    ///
    /// Does not mutate the board.
    pub fn begin_drag(&self, member_id: Uuid) -> Option<Member> {
        self.bench
            .iter()
            .chain(self.projects.iter().flat_map(|p| p.members.iter()))
            .find(|m| m.id == member_id)
            .cloned()
    }

    /// Completes a drag gesture.
    ///
    /// `None` means the drag was cancelled or dropped outside any
    /// container: the board stays untouched. Dropping a member on the
    /// container it already occupies is an early exit that skips the
    /// remove/reinsert round-trip.
    pub fn end_drag(&mut self, member_id: Uuid, target: Option<DropTarget>) -> Result<()> {
        let Some(target) = target else {
            return Ok(());
        };
        if self.locate(member_id) == Some(target) {
            return Ok(());
        }
        match target {
            DropTarget::Bench => {
                self.unassign(member_id);
                Ok(())
            }
            DropTarget::Project(project_id) => self.assign(member_id, project_id),
        }
    }

    /// Moves a member into a project, from the bench or another project.
    ///
    /// The member lands at the end of the project's list and its
    /// `assignment` becomes the project's title. Moving a member onto the
    /// project it already occupies reinserts it at the end. An unknown
    /// project is rejected with the member left where it was; an unknown
    /// member is ignored.
    pub fn assign(&mut self, member_id: Uuid, project_id: Uuid) -> Result<()> {
        // Validate the target before removing anything, so a bad target
        // cannot strand a half-removed member.
        let target = self
            .projects
            .iter()
            .position(|p| p.id == project_id)
            .ok_or(BoardError::UnknownProject(project_id))?;

        let Some(mut member) = self.take(member_id) else {
            warn!("assign: unknown member {member_id}");
            return Ok(());
        };

        member.assignment = Some(self.projects[target].title.clone());
        self.projects[target].members.push(member);
        Ok(())
    }

    /// Returns a member to the bench, clearing its assignment.
    ///
    /// The member lands at the end of the bench. Already-benched and
    /// unknown members are ignored.
    pub fn unassign(&mut self, member_id: Uuid) {
        for project in &mut self.projects {
            if let Some(pos) = project.members.iter().position(|m| m.id == member_id) {
                let mut member = project.members.remove(pos);
                member.assignment = None;
                self.bench.push(member);
                return;
            }
        }
    }

    /// Removes the member from whichever container holds it.
    ///
    /// Bench first, then projects in order; the uniqueness invariant makes
    /// first-match safe.
    fn take(&mut self, member_id: Uuid) -> Option<Member> {
        if let Some(pos) = self.bench.iter().position(|m| m.id == member_id) {
            return Some(self.bench.remove(pos));
        }
        for project in &mut self.projects {
            if let Some(pos) = project.members.iter().position(|m| m.id == member_id) {
                return Some(project.members.remove(pos));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    fn member(name: &str) -> Member {
        Member {
            id: Uuid::new_v4(),
            name: name.into(),
            headline: format!("{name}'s headline"),
            avatar_url: String::new(),
            skills: vec!["Rust".into()],
            assignment: None,
        }
    }

    fn project(title: &str) -> Project {
        Project {
            id: Uuid::new_v4(),
            title: title.into(),
            members: Vec::new(),
        }
    }

    /// Bench [Alex, Sarah], two empty projects.
    fn sample_board() -> Board {
        Board::new(
            vec![member("Alex"), member("Sarah")],
            vec![project("Project 1"), project("Project 2")],
        )
    }

    /// Every member appears in exactly one container.
    fn assert_unique(board: &Board) {
        let mut seen = HashSet::new();
        for m in board.bench() {
            assert!(seen.insert(m.id), "{} appears twice", m.name);
        }
        for p in board.projects() {
            for m in &p.members {
                assert!(seen.insert(m.id), "{} appears twice", m.name);
            }
        }
    }

    /// `assignment` mirrors actual membership everywhere.
    fn assert_assignments(board: &Board) {
        for m in board.bench() {
            assert_eq!(m.assignment, None, "{} benched with an assignment", m.name);
        }
        for p in board.projects() {
            for m in &p.members {
                assert_eq!(m.assignment.as_deref(), Some(p.title.as_str()));
            }
        }
    }

    #[test]
    fn assign_moves_bench_member_into_project() {
        let mut board = sample_board();
        let alex = board.bench()[0].id;
        let p1 = board.projects()[0].id;

        board.assign(alex, p1).unwrap();

        assert_eq!(board.bench().len(), 1);
        assert_eq!(board.bench()[0].name, "Sarah");
        assert_eq!(board.projects()[0].members[0].name, "Alex");
        assert_eq!(
            board.projects()[0].members[0].assignment.as_deref(),
            Some("Project 1")
        );
        assert_unique(&board);
        assert_assignments(&board);
    }

    #[test]
    fn worked_example_sequence() {
        // Bench [Alex, Sarah]: assign Alex to P1, then P2, then back to the
        // bench. After the round trip Alex is benched behind Sarah with no
        // assignment and both projects are empty.
        let mut board = sample_board();
        let alex = board.bench()[0].id;
        let p1 = board.projects()[0].id;
        let p2 = board.projects()[1].id;

        board.assign(alex, p1).unwrap();
        assert_eq!(board.projects()[0].members.len(), 1);
        assert_unique(&board);
        assert_assignments(&board);

        board.assign(alex, p2).unwrap();
        assert!(board.projects()[0].members.is_empty());
        assert_eq!(
            board.projects()[1].members[0].assignment.as_deref(),
            Some("Project 2")
        );
        assert_unique(&board);
        assert_assignments(&board);

        board.unassign(alex);
        assert!(board.projects()[1].members.is_empty());
        assert_eq!(board.bench()[0].name, "Sarah");
        assert_eq!(board.bench()[1].name, "Alex");
        assert_eq!(board.bench()[1].assignment, None);
        assert_unique(&board);
        assert_assignments(&board);
    }

    #[test]
    fn assign_unknown_project_is_rejected_and_leaves_board_unchanged() {
        let mut board = sample_board();
        let alex = board.bench()[0].id;
        let before = board.clone();

        let missing = Uuid::new_v4();
        let err = board.assign(alex, missing).unwrap_err();

        assert_eq!(err, BoardError::UnknownProject(missing));
        assert_eq!(board, before);
    }

    #[test]
    fn assign_unknown_member_is_a_silent_noop() {
        let mut board = sample_board();
        let p1 = board.projects()[0].id;
        let before = board.clone();

        board.assign(Uuid::new_v4(), p1).unwrap();

        assert_eq!(board, before);
    }

    #[test]
    fn assign_to_current_project_moves_member_to_end() {
        let mut board = sample_board();
        let alex = board.bench()[0].id;
        let sarah = board.bench()[1].id;
        let p1 = board.projects()[0].id;
        board.assign(alex, p1).unwrap();
        board.assign(sarah, p1).unwrap();

        board.assign(alex, p1).unwrap();

        let names: Vec<_> = board.projects()[0]
            .members
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, ["Sarah", "Alex"]);
        assert_eq!(
            board.projects()[0].members[1].assignment.as_deref(),
            Some("Project 1")
        );
        assert_unique(&board);
    }

    #[test]
    fn unassign_appends_at_end_of_bench() {
        let mut board = sample_board();
        let alex = board.bench()[0].id;
        let p1 = board.projects()[0].id;
        board.assign(alex, p1).unwrap();

        board.unassign(alex);

        let names: Vec<_> = board.bench().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Sarah", "Alex"]);
    }

    #[test]
    fn unassign_benched_member_is_a_noop() {
        let mut board = sample_board();
        let alex = board.bench()[0].id;
        let before = board.clone();

        board.unassign(alex);

        assert_eq!(board, before);
    }

    #[test]
    fn begin_drag_returns_a_snapshot_without_mutating() {
        let board = sample_board();
        let alex = board.bench()[0].id;
        let before = board.clone();

        let snapshot = board.begin_drag(alex).unwrap();

        assert_eq!(snapshot.name, "Alex");
        assert_eq!(board, before);
        assert_eq!(board.begin_drag(Uuid::new_v4()), None);
    }

    #[test]
    fn cancelled_drag_leaves_the_board_identical() {
        let mut board = sample_board();
        let alex = board.bench()[0].id;
        let before = board.clone();

        let _overlay = board.begin_drag(alex);
        board.end_drag(alex, None).unwrap();

        assert_eq!(board, before);
    }

    #[test]
    fn drop_on_current_container_is_an_early_exit() {
        // Unlike a raw assign, end_drag skips the remove/reinsert, so the
        // member keeps its position in the list.
        let mut board = sample_board();
        let alex = board.bench()[0].id;
        let sarah = board.bench()[1].id;
        let p1 = board.projects()[0].id;
        board.assign(alex, p1).unwrap();
        board.assign(sarah, p1).unwrap();

        board.end_drag(alex, Some(DropTarget::Project(p1))).unwrap();

        let names: Vec<_> = board.projects()[0]
            .members
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, ["Alex", "Sarah"]);
    }

    #[test]
    fn end_drag_dispatches_to_the_right_container() {
        let mut board = sample_board();
        let alex = board.bench()[0].id;
        let p1 = board.projects()[0].id;

        board.end_drag(alex, Some(DropTarget::Project(p1))).unwrap();
        assert_eq!(board.locate(alex), Some(DropTarget::Project(p1)));

        board.end_drag(alex, Some(DropTarget::Bench)).unwrap();
        assert_eq!(board.locate(alex), Some(DropTarget::Bench));
        assert_unique(&board);
        assert_assignments(&board);
    }

    #[test]
    fn end_drag_on_unknown_project_keeps_member_in_place() {
        let mut board = sample_board();
        let alex = board.bench()[0].id;
        let p1 = board.projects()[0].id;
        board.assign(alex, p1).unwrap();
        let before = board.clone();

        let missing = Uuid::new_v4();
        let err = board
            .end_drag(alex, Some(DropTarget::Project(missing)))
            .unwrap_err();

        assert_eq!(err, BoardError::UnknownProject(missing));
        assert_eq!(board, before);
    }

    #[test]
    fn invariants_hold_across_a_long_operation_sequence() {
        let mut board = sample_board();
        let alex = board.bench()[0].id;
        let sarah = board.bench()[1].id;
        let p1 = board.projects()[0].id;
        let p2 = board.projects()[1].id;

        let moves = [
            (alex, Some(DropTarget::Project(p1))),
            (sarah, Some(DropTarget::Project(p1))),
            (alex, Some(DropTarget::Project(p2))),
            (sarah, None),
            (alex, Some(DropTarget::Bench)),
            (sarah, Some(DropTarget::Project(p2))),
            (alex, Some(DropTarget::Project(p2))),
            (sarah, Some(DropTarget::Bench)),
        ];
        for (who, target) in moves {
            board.end_drag(who, target).unwrap();
            assert_unique(&board);
            assert_assignments(&board);
        }
    }
}
