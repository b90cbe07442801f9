//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards decide from the session store; this signal mirrors the last record
//! they saw so headers and pages can show who is signed in without reading
//! storage themselves.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::{Role, SessionRecord};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<SessionRecord>,
}

impl AuthState {
    #[must_use]
    pub fn from_session(session: Option<SessionRecord>) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.display_name().to_owned())
    }
}
