//! HTTP client for the remote dashboard API and the photo feed.
//!
//! One blocking client holds the API base URL and, after login, the bearer
//! token attached to every subsequent API request. Failures are reduced to
//! a human-readable message: the server's `message` field when it sent one,
//! a transport description otherwise. No retries, no caching.

mod auth;
mod photos;

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Errors surfaced to the user from API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a failure status.
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = core::result::Result<T, ApiError>;

/// Blocking client for the dashboard API and the photo feed.
pub struct Api {
    base_url: String,
    feed_url: String,
    client: reqwest::blocking::Client,
    token: Option<String>,
}

impl Api {
    /// Creates a client from configuration, with no credential attached.
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            feed_url: config.photo_feed_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
            token: None,
        }
    }

    /// Attaches a bearer token to all subsequent API requests.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drops the attached credential (logout).
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// POSTs a JSON body to an API path and checks the response status.
    ///
    /// `fallback` is the message used when the server's failure body
    /// carries no `message` field.
    fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<reqwest::blocking::Response> {
        let mut request = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        check(request.send()?, fallback)
    }
}

/// Failure body shape: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Turns a failure status into [`ApiError::Rejected`], preferring the
/// server's own message.
fn check(
    response: reqwest::blocking::Response,
    fallback: &str,
) -> Result<reqwest::blocking::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| fallback.to_string());
    Err(ApiError::Rejected(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_message_is_optional() {
        let body: ErrorBody = serde_json::from_str(r#"{"message": "Invalid credentials"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Invalid credentials"));

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message, None);
    }

    #[test]
    fn rejected_error_displays_bare_message() {
        let err = ApiError::Rejected("Login failed".to_string());
        assert_eq!(err.to_string(), "Login failed");
    }
}
