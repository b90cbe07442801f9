//! Session store: persists the `SessionRecord` in key-value storage.
//!
//! ERROR HANDLING
//! ==============
//! `load` never fails: a missing, unreadable, or malformed record is reported
//! as "no session" so guards downgrade to the login redirect instead of
//! crashing. Only `save` surfaces errors, because the login flow must know
//! whether the session actually persisted.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use super::storage::{BrowserStorage, KeyValueStorage};
use crate::state::session::{SessionError, SessionRecord};

pub const SESSION_KEY: &str = "cinema_admin_session";
pub const REMEMBER_ME_KEY: &str = "cinema_admin_remember_me";

/// Session store over browser `localStorage`.
pub type BrowserSessionStore = SessionStore<BrowserStorage>;

#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Persist `record`, replacing any existing session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the record cannot be serialized or the
    /// storage backend rejects the write.
    pub fn save(&self, record: &SessionRecord) -> Result<(), SessionError> {
        let raw = serde_json::to_string(record)?;
        self.storage.set_item(SESSION_KEY, &raw).map_err(SessionError::Storage)?;
        log::debug!("session saved (role={})", record.role.as_str());
        Ok(())
    }

    /// Current session, or `None` when absent or unparseable.
    pub fn load(&self) -> Option<SessionRecord> {
        let raw = self.storage.get_item(SESSION_KEY)?;
        match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                log::debug!("stored session unreadable, treating as signed out: {e}");
                None
            }
        }
    }

    /// Remove the session and its ancillary flags.
    pub fn clear(&self) {
        self.storage.remove_item(SESSION_KEY);
        self.storage.remove_item(REMEMBER_ME_KEY);
        log::debug!("session cleared");
    }

    /// Record the "remember me" choice made at login.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the flag cannot be written.
    pub fn set_remember_me(&self, remember: bool) -> Result<(), SessionError> {
        if remember {
            self.storage.set_item(REMEMBER_ME_KEY, "true").map_err(SessionError::Storage)
        } else {
            self.storage.remove_item(REMEMBER_ME_KEY);
            Ok(())
        }
    }

    pub fn remember_me(&self) -> bool {
        self.storage.get_item(REMEMBER_ME_KEY).is_some_and(|v| v == "true")
    }
}
