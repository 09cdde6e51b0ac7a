//! Client-held session persistence.
//!
//! A session is three string entries in a durable key/value store:
//! `authToken`, `userName` and `userEmail`. Stores write all three in one
//! operation so a reader never observes a partial session.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use crate::app::AppError;
use secrecy::{ExposeSecret, SecretString};
use std::collections::BTreeMap;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USER_NAME_KEY: &str = "userName";
pub const USER_EMAIL_KEY: &str = "userEmail";

pub const SESSION_KEYS: [&str; 3] = [AUTH_TOKEN_KEY, USER_NAME_KEY, USER_EMAIL_KEY];

#[derive(Clone, Debug)]
pub struct Session {
    pub auth_token: SecretString,
    pub user_name: String,
    pub user_email: String,
}

impl Session {
    /// Key/value entries as they are persisted.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, String); 3] {
        [
            (AUTH_TOKEN_KEY, self.auth_token.expose_secret().to_string()),
            (USER_NAME_KEY, self.user_name.clone()),
            (USER_EMAIL_KEY, self.user_email.clone()),
        ]
    }

    /// Rebuilds a session from stored entries; any missing key means no session.
    #[must_use]
    pub fn from_entries(entries: &BTreeMap<String, String>) -> Option<Self> {
        let auth_token = entries.get(AUTH_TOKEN_KEY)?;
        let user_name = entries.get(USER_NAME_KEY)?;
        let user_email = entries.get(USER_EMAIL_KEY)?;

        Some(Self {
            auth_token: SecretString::from(auth_token.clone()),
            user_name: user_name.clone(),
            user_email: user_email.clone(),
        })
    }
}

/// Durable storage for the session entries.
pub trait SessionStore: Send + Sync {
    /// Writes all three session entries or none of them.
    ///
    /// # Errors
    /// Returns `AppError::Store` if the store cannot be written.
    fn save(&self, session: &Session) -> Result<(), AppError>;

    /// Reads the current session, if all entries are present.
    ///
    /// # Errors
    /// Returns `AppError::Store` if the store cannot be read.
    fn load(&self) -> Result<Option<Session>, AppError>;

    /// Removes the session entries.
    ///
    /// # Errors
    /// Returns `AppError::Store` if the store cannot be written.
    fn clear(&self) -> Result<(), AppError>;

    /// Whether a complete session is stored.
    ///
    /// # Errors
    /// Returns `AppError::Store` if the store cannot be read.
    fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.load()?.is_some())
    }
}
