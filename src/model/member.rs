//! Member: a teammate that moves around the assignment board.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A teammate on the assignment board.
///
/// Display fields are carried through moves unchanged. `assignment` is
/// derived from board membership — the title of the project holding the
/// member, or `None` on the bench — and is never set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub headline: String,
    pub avatar_url: String,
    pub skills: Vec<String>,
    pub assignment: Option<String>,
}
