//! Photo: one entry in the endless feed.

use serde::{Deserialize, Serialize};

/// A photo in the feed, referenced by URL only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub url: String,
}
