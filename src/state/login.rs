//! Login form state machine.
//!
//! `Idle -> Submitting -> {Succeeded, Idle + error}`. The page owns one
//! `LoginForm` in a signal and drives it through `begin_submit` / `finish`;
//! all rules (required fields, no double submit, generic error text) live
//! here.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::auth::AuthError;
use crate::state::session::Session;
use crate::util::text;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    InFlight,
    MissingFields,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub phase: LoginPhase,
    pub error: Option<&'static str>,
}

impl LoginForm {
    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    /// Validate and enter `Submitting`.
    ///
    /// # Errors
    ///
    /// Rejected while a submission is already in flight, when the username
    /// is blank, or when the password is empty.
    pub fn begin_submit(&mut self) -> Result<Credentials, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            self.error = Some(text::FIELDS_REQUIRED);
            return Err(SubmitRejected::MissingFields);
        }
        let credentials = Credentials { username: username.to_owned(), password: self.password.clone() };
        self.phase = LoginPhase::Submitting;
        self.error = None;
        Ok(credentials)
    }

    /// Apply the facade result. Returns the session to persist on success.
    pub fn finish(&mut self, result: Result<Session, AuthError>) -> Option<Session> {
        match result {
            Ok(session) => {
                self.phase = LoginPhase::Succeeded;
                self.error = None;
                Some(session)
            }
            Err(e) => {
                log::warn!("login failed: {e}");
                self.fail();
                None
            }
        }
    }

    /// Return to `Idle` with the generic login error.
    pub fn fail(&mut self) {
        self.phase = LoginPhase::Idle;
        self.error = Some(text::LOGIN_FAILED);
    }
}
