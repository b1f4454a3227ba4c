//! Project: a named destination column on the assignment board.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Member;

/// A project column. The set of projects is fixed at board construction;
/// only membership changes at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,

    /// Human-readable label; becomes a member's `assignment` on arrival.
    pub title: String,

    /// Members currently staffed here, in arrival order.
    pub members: Vec<Member>,
}
