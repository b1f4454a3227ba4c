//! Photo feed endpoint.

use serde::Deserialize;

use crate::model::Photo;

use super::{Api, Result, check};

/// Feed response shape: `{"message": [url, ...], "status": "success"}`.
#[derive(Debug, Deserialize)]
struct PhotoPage {
    message: Vec<String>,
}

impl Api {
    /// Fetches one page of `count` random photos.
    ///
    /// The feed serves a fresh random batch per request, so no cursor
    /// appears on the wire and no credential is needed.
    pub fn fetch_photos(&self, count: usize) -> Result<Vec<Photo>> {
        let response = self
            .client
            .get(format!("{}/{count}", self.feed_url))
            .send()?;
        let page: PhotoPage = check(response, "Error loading images")?.json()?;
        Ok(page.message.into_iter().map(|url| Photo { url }).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_page_parses_urls() {
        let page: PhotoPage = serde_json::from_str(
            r#"{"message": ["https://images.example/a.jpg",
                            "https://images.example/b.jpg"],
                "status": "success"}"#,
        )
        .unwrap();

        assert_eq!(page.message.len(), 2);
        assert_eq!(page.message[0], "https://images.example/a.jpg");
    }
}
