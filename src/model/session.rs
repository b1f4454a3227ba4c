//! Session: who is signed in, and with what credential.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A signed-in user and their bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub token: String,

    /// When the session was established.
    pub saved_at: Timestamp,
}

impl Session {
    /// Full display name, e.g. `Alex Johnson`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Initials for the avatar fallback, e.g. `AJ`.
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Session {
        Session {
            first_name: "Alex".into(),
            last_name: "Johnson".into(),
            email: "alex@example.com".into(),
            token: "tok".into(),
            saved_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn display_name_joins_parts() {
        assert_eq!(sample().display_name(), "Alex Johnson");
    }

    #[test]
    fn display_name_handles_missing_last_name() {
        let mut session = sample();
        session.last_name = String::new();
        assert_eq!(session.display_name(), "Alex");
    }

    #[test]
    fn initials_take_first_letters() {
        assert_eq!(sample().initials(), "AJ");
    }
}
