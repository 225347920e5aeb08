//! Auth facade over `POST /auth/login`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (network, non-2xx, malformed body) collapses into one
//! `AuthError`. The cause is kept for logs; the login page shows a single
//! generic message regardless.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::client::{ApiClient, ApiError, Transport};
use super::types::{LoginRequest, LoginResponse};
use crate::state::session::Session;

pub const LOGIN_PATH: &str = "/auth/login";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("login failed: {cause}")]
pub struct AuthError {
    #[from]
    cause: ApiError,
}

impl AuthError {
    pub fn cause(&self) -> &ApiError {
        &self.cause
    }
}

#[derive(Clone)]
pub struct AuthApi<T> {
    client: ApiClient<T>,
}

impl<T: Transport> AuthApi<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    /// Exchange credentials for a session. Persisting it is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] on any transport failure, non-2xx response, or
    /// undecodable body.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let response = self
            .client
            .post_json(LOGIN_PATH, &LoginRequest { username, password })
            .await?
            .error_for_status()?;
        let body: LoginResponse = response.json()?;
        if body.access_token.is_empty() {
            return Err(ApiError::Decode("empty access_token".to_owned()).into());
        }
        Ok(Session { access_token: body.access_token, user_type: body.user_type })
    }
}
