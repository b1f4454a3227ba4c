//! Photo feed pagination.
//!
//! The pager accumulates pages of photos and exposes the three signals the
//! rendering layer drives from: `fetch_next_page`, `has_next_page`, and
//! `is_fetching_next_page`. Fetching goes through a caller-supplied
//! callback, which keeps the pager free of HTTP concerns.

use crate::api;
use crate::model::Photo;

/// Pager state for the endless photo feed.
pub struct Feed {
    photos: Vec<Photo>,
    next_page: u32,
    is_fetching: bool,
}

impl Feed {
    pub fn new() -> Self {
        Self {
            photos: Vec::new(),
            next_page: 1,
            is_fetching: false,
        }
    }

    /// All photos loaded so far, in arrival order.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// The feed serves random batches and never runs out.
    pub fn has_next_page(&self) -> bool {
        true
    }

    /// Whether a fetch is currently in flight.
    pub fn is_fetching_next_page(&self) -> bool {
        self.is_fetching
    }

    /// Fetches and appends the next page, returning how many photos arrived.
    ///
    /// A call while a fetch is already in flight, or past the end of the
    /// feed, is ignored. A failed fetch leaves the pager where it was:
    /// flag cleared, page counter unchanged, no photos appended.
    pub fn fetch_next_page<F>(&mut self, fetch: F) -> api::Result<usize>
    where
        F: FnOnce(u32) -> api::Result<Vec<Photo>>,
    {
        if self.is_fetching || !self.has_next_page() {
            return Ok(0);
        }
        self.is_fetching = true;
        let result = fetch(self.next_page);
        self.is_fetching = false;

        let photos = result?;
        let count = photos.len();
        self.photos.extend(photos);
        self.next_page += 1;
        Ok(count)
    }
}

impl Default for Feed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::api::ApiError;

    fn page(urls: &[&str]) -> Vec<Photo> {
        urls.iter()
            .map(|url| Photo {
                url: (*url).to_string(),
            })
            .collect()
    }

    #[test]
    fn pages_accumulate_in_arrival_order() {
        let mut feed = Feed::new();

        let count = feed.fetch_next_page(|_| Ok(page(&["a", "b"]))).unwrap();
        assert_eq!(count, 2);
        feed.fetch_next_page(|_| Ok(page(&["c"]))).unwrap();

        let urls: Vec<_> = feed.photos().iter().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, ["a", "b", "c"]);
    }

    #[test]
    fn callback_receives_the_page_number() {
        let mut feed = Feed::new();

        feed.fetch_next_page(|n| {
            assert_eq!(n, 1);
            Ok(Vec::new())
        })
        .unwrap();
        feed.fetch_next_page(|n| {
            assert_eq!(n, 2);
            Ok(Vec::new())
        })
        .unwrap();
    }

    #[test]
    fn failed_fetch_leaves_the_pager_unchanged() {
        let mut feed = Feed::new();
        feed.fetch_next_page(|_| Ok(page(&["a"]))).unwrap();

        let err = feed
            .fetch_next_page(|_| Err(ApiError::Rejected("down".to_string())))
            .unwrap_err();

        assert_eq!(err.to_string(), "down");
        assert_eq!(feed.photos().len(), 1);
        assert!(!feed.is_fetching_next_page());

        // The failed page is retried, not skipped.
        feed.fetch_next_page(|n| {
            assert_eq!(n, 2);
            Ok(Vec::new())
        })
        .unwrap();
    }

    #[test]
    fn the_feed_never_runs_out() {
        let feed = Feed::new();
        assert!(feed.has_next_page());
    }
}
