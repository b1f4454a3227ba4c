//! Auth endpoints: register, login, forgot password.

use jiff::Timestamp;
use log::info;
use serde::{Deserialize, Serialize};

use crate::model::Session;

use super::{Api, ApiError, Result};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterBody<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ForgotPasswordBody<'a> {
    email: &'a str,
}

/// Login response. The server sometimes nests the profile under `user`;
/// both shapes are accepted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    token: Option<String>,
    user: Option<LoginProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginProfile {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
}

impl Api {
    /// Creates an account. The caller signs in separately.
    pub fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<()> {
        let body = RegisterBody {
            first_name,
            last_name,
            email,
            password,
        };
        self.post_json("/auth/register", &body, "Registration failed")?;
        info!("registered account for {email}");
        Ok(())
    }

    /// Signs in, attaches the bearer token to this client, and returns the
    /// established session.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session> {
        let body = LoginBody { email, password };
        let response = self.post_json("/auth/login", &body, "Login failed")?;
        let parsed: LoginResponse = response.json()?;
        let session = session_from_response(parsed, email)?;
        self.set_token(session.token.clone());
        info!("signed in as {}", session.email);
        Ok(session)
    }

    /// Requests a password reset email.
    pub fn forgot_password(&self, email: &str) -> Result<()> {
        let body = ForgotPasswordBody { email };
        self.post_json("/auth/forgot-password", &body, "Failed to reset password")?;
        Ok(())
    }
}

/// Builds a session from the login response, tolerating both the flat and
/// the nested profile shapes. A response without a token is a failed login.
fn session_from_response(response: LoginResponse, fallback_email: &str) -> Result<Session> {
    let Some(token) = response.token else {
        return Err(ApiError::Rejected("Login failed".to_string()));
    };
    let (nested_first, nested_last, nested_email) = match response.user {
        Some(profile) => (profile.first_name, profile.last_name, profile.email),
        None => (None, None, None),
    };
    Ok(Session {
        first_name: response
            .first_name
            .or(nested_first)
            .unwrap_or_else(|| "User".to_string()),
        last_name: response.last_name.or(nested_last).unwrap_or_default(),
        email: response
            .email
            .or(nested_email)
            .unwrap_or_else(|| fallback_email.to_string()),
        token,
        saved_at: Timestamp::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_login_response_maps_directly() {
        let parsed: LoginResponse = serde_json::from_str(
            r#"{"firstName": "Alex", "lastName": "Johnson",
                "email": "alex@example.com", "token": "t0k"}"#,
        )
        .unwrap();

        let session = session_from_response(parsed, "fallback@example.com").unwrap();
        assert_eq!(session.first_name, "Alex");
        assert_eq!(session.last_name, "Johnson");
        assert_eq!(session.email, "alex@example.com");
        assert_eq!(session.token, "t0k");
    }

    #[test]
    fn nested_profile_fills_missing_fields() {
        let parsed: LoginResponse = serde_json::from_str(
            r#"{"token": "t0k",
                "user": {"firstName": "Sarah", "lastName": "Chen",
                         "email": "sarah@example.com"}}"#,
        )
        .unwrap();

        let session = session_from_response(parsed, "fallback@example.com").unwrap();
        assert_eq!(session.first_name, "Sarah");
        assert_eq!(session.email, "sarah@example.com");
    }

    #[test]
    fn bare_token_falls_back_to_placeholders() {
        let parsed: LoginResponse = serde_json::from_str(r#"{"token": "t0k"}"#).unwrap();

        let session = session_from_response(parsed, "typed@example.com").unwrap();
        assert_eq!(session.first_name, "User");
        assert_eq!(session.last_name, "");
        assert_eq!(session.email, "typed@example.com");
    }

    #[test]
    fn missing_token_is_a_failed_login() {
        let parsed: LoginResponse =
            serde_json::from_str(r#"{"firstName": "Alex"}"#).unwrap();

        let err = session_from_response(parsed, "alex@example.com").unwrap_err();
        assert_eq!(err.to_string(), "Login failed");
    }
}
