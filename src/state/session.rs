//! Persisted session and the auth gate derived from it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionManager` is the only code that reads or writes the persisted
//! session. The HTTP client asks it for the bearer token on every request,
//! the login page writes through it, and the router reads the `AuthGate`
//! it produces. `SessionContext` wraps the manager with a reactive gate so
//! Leptos views re-render when the user signs in or out.
//!
//! INVARIANTS
//! ==========
//! A non-empty `token` entry is the sole signal of being authenticated.
//! Nothing on the client checks expiry; logout clears the store wholesale.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use leptos::prelude::{Get, GetUntracked, RwSignal, Set};

pub const TOKEN_KEY: &str = "token";
pub const USER_TYPE_KEY: &str = "userType";

/// Proof of authentication held by the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub user_type: String,
}

impl Session {
    pub fn user_type(&self) -> UserType {
        UserType::parse(&self.user_type)
    }
}

/// Role tag returned at login. Displayed, never used for authorization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserType {
    Headquarters,
    Restaurant,
    Other(String),
}

impl UserType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "hq" | "headquarters" => Self::Headquarters,
            "restaurant" => Self::Restaurant,
            _ => Self::Other(raw.trim().to_owned()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Headquarters => crate::util::text::USER_TYPE_HQ,
            Self::Restaurant => crate::util::text::USER_TYPE_RESTAURANT,
            Self::Other(raw) => raw,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("session storage unavailable")]
    Unavailable,
    #[error("session storage write failed: {0}")]
    Write(String),
}

/// Key-value backend the session is persisted in.
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove every entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Process-local storage used by tests and as a fallback when the browser
/// store is missing.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|e| StorageError::Write(e.to_string()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|e| StorageError::Write(e.to_string()))?;
        entries.clear();
        Ok(())
    }
}

/// `window.localStorage`, looked up on every call.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "csr")]
impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }

    fn clear(&self) -> Result<(), StorageError> {
        Self::storage()?
            .clear()
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

/// Single owner of session reads and writes.
#[derive(Clone)]
pub struct SessionManager {
    storage: Arc<dyn SessionStorage>,
}

impl SessionManager {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self { storage: Arc::new(storage) }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::default())
    }

    #[cfg(feature = "csr")]
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    /// Current bearer token, read fresh from storage.
    pub fn token(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn load(&self) -> Option<Session> {
        let access_token = self.token()?;
        let user_type = self.storage.get_item(USER_TYPE_KEY).unwrap_or_default();
        Some(Session { access_token, user_type })
    }

    /// Write the session. The token goes last so a partial write never
    /// leaves a loadable session behind.
    ///
    /// # Errors
    ///
    /// Returns an error if either key cannot be written.
    pub fn persist(&self, session: &Session) -> Result<(), StorageError> {
        self.storage.set_item(USER_TYPE_KEY, &session.user_type)?;
        self.storage.set_item(TOKEN_KEY, &session.access_token)
    }

    /// # Errors
    ///
    /// Returns an error if the backing store cannot be cleared.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.clear()
    }

    pub fn gate(&self) -> AuthGate {
        self.load().map_or(AuthGate::Unauthenticated, AuthGate::Authenticated)
    }
}

/// Top-level authentication state handed to the router and pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthGate {
    Authenticated(Session),
    Unauthenticated,
}

impl AuthGate {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Unauthenticated => None,
        }
    }
}

/// Reactive wrapper provided to views through Leptos context.
#[derive(Clone)]
pub struct SessionContext {
    manager: SessionManager,
    gate: RwSignal<AuthGate>,
}

impl SessionContext {
    pub fn new(manager: SessionManager) -> Self {
        let gate = RwSignal::new(manager.gate());
        Self { manager, gate }
    }

    pub fn manager(&self) -> &SessionManager {
        &self.manager
    }

    /// Tracked read of the gate.
    pub fn gate(&self) -> AuthGate {
        self.gate.get()
    }

    /// Re-derive the gate from storage. Called once per navigation.
    pub fn refresh(&self) {
        let next = self.manager.gate();
        if self.gate.get_untracked() != next {
            self.gate.set(next);
        }
    }

    /// Persist `session` and mark the gate authenticated.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be persisted; the gate is left
    /// unauthenticated in that case.
    pub fn sign_in(&self, session: Session) -> Result<(), StorageError> {
        if let Err(e) = self.manager.persist(&session) {
            if let Err(clear_err) = self.manager.clear() {
                log::warn!("failed to roll back partial session write: {clear_err}");
            }
            return Err(e);
        }
        log::info!("signed in (user type: {})", session.user_type);
        self.gate.set(AuthGate::Authenticated(session));
        Ok(())
    }

    /// Clear persisted state and mark the gate unauthenticated.
    pub fn sign_out(&self) {
        if let Err(e) = self.manager.clear() {
            log::warn!("failed to clear session storage: {e}");
        }
        log::info!("signed out");
        self.gate.set(AuthGate::Unauthenticated);
    }
}
