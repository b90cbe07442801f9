//! Route guard decision procedure.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` and `PublicRoute` both drive a `RouteGuard`. Every change
//! of the current location starts a fresh evaluation:
//!
//! ```text
//!   begin(location) ──► Pending ──resolve(session present?)──► Authenticated
//!                                                      └──────► Unauthenticated
//!   Authenticated ──refine(ticket, false)──► Unauthenticated   (protected only)
//! ```
//!
//! The synchronous decision rests on session presence alone. Slower checks
//! (token expiry, backend verification) arrive through `refine`, tagged with
//! the `NavigationTicket` of the navigation that started them. A ticket from an
//! earlier navigation is stale and its result is dropped, so the latest
//! navigation always wins.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use percent_encoding::{NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use super::session_store::SessionStore;
use super::storage::KeyValueStorage;
use super::token::is_expired_at;
use crate::config::{AdminConfig, GuardPolicy};
use crate::state::session::SessionRecord;

pub const RETURN_PARAM: &str = "from";

/// Which side of the login wall a guard protects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardKind {
    /// Signed-in users only; others go to login.
    Protected,
    /// Signed-out users only (login page); others go home.
    Public,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Pending,
    Authenticated,
    Unauthenticated,
}

/// What the guarded view should do right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render nothing; a decision is not ready yet.
    Wait,
    /// Render the wrapped content.
    Render,
    /// Replace the current location with this one.
    Redirect(String),
}

/// Identifies one navigation's evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationTicket(u64);

/// Result of applying a refinement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refinement {
    /// The ticket belongs to an older navigation; nothing changed.
    Stale,
    /// The decision stands.
    Kept,
    /// The session was rejected; the guard is now `Unauthenticated`.
    Revoked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardRoutes {
    pub login_path: String,
    pub home_path: String,
}

impl GuardRoutes {
    #[must_use]
    pub fn from_config(config: &AdminConfig) -> Self {
        Self { login_path: config.login_path.clone(), home_path: config.home_path.clone() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    kind: GuardKind,
    routes: GuardRoutes,
    generation: u64,
    location: String,
    state: GuardState,
}

impl RouteGuard {
    #[must_use]
    pub fn new(kind: GuardKind, routes: GuardRoutes) -> Self {
        Self { kind, routes, generation: 0, location: String::new(), state: GuardState::Pending }
    }

    #[must_use]
    pub fn from_config(kind: GuardKind, config: &AdminConfig) -> Self {
        Self::new(kind, GuardRoutes::from_config(config))
    }

    /// Start evaluating a navigation to `location` (path plus query).
    pub fn begin(&mut self, location: &str) -> NavigationTicket {
        self.generation += 1;
        location.clone_into(&mut self.location);
        self.state = GuardState::Pending;
        NavigationTicket(self.generation)
    }

    /// Apply the synchronous presence-based decision.
    ///
    /// Returns `false` (and changes nothing) when `ticket` is stale or the
    /// navigation was already resolved.
    pub fn resolve(&mut self, ticket: NavigationTicket, session_present: bool) -> bool {
        if !self.is_current(ticket) || self.state != GuardState::Pending {
            return false;
        }
        self.state = if session_present { GuardState::Authenticated } else { GuardState::Unauthenticated };
        log::debug!("{:?} guard at {} resolved {:?}", self.kind, self.location, self.state);
        true
    }

    /// `begin` followed by `resolve`.
    pub fn navigate(&mut self, location: &str, session_present: bool) -> NavigationTicket {
        let ticket = self.begin(location);
        self.resolve(ticket, session_present);
        ticket
    }

    /// Whether a protected decision for `ticket` still awaits refinement.
    #[must_use]
    pub fn needs_refinement(&self, ticket: NavigationTicket) -> bool {
        self.kind == GuardKind::Protected && self.is_current(ticket) && self.state == GuardState::Authenticated
    }

    /// Apply a slower check's verdict on the session.
    pub fn refine(&mut self, ticket: NavigationTicket, session_valid: bool) -> Refinement {
        if !self.is_current(ticket) {
            log::debug!("discarding stale guard result for {ticket:?} (current {})", self.generation);
            return Refinement::Stale;
        }
        if session_valid || !self.needs_refinement(ticket) {
            return Refinement::Kept;
        }
        log::info!("session rejected at {}", self.location);
        self.state = GuardState::Unauthenticated;
        Refinement::Revoked
    }

    #[must_use]
    pub fn is_current(&self, ticket: NavigationTicket) -> bool {
        ticket.0 == self.generation
    }

    #[must_use]
    pub fn state(&self) -> GuardState {
        self.state
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Render contract for the current state.
    #[must_use]
    pub fn outcome(&self) -> GuardOutcome {
        match (self.kind, self.state) {
            (_, GuardState::Pending) => GuardOutcome::Wait,
            (GuardKind::Protected, GuardState::Authenticated) | (GuardKind::Public, GuardState::Unauthenticated) => {
                GuardOutcome::Render
            }
            (GuardKind::Protected, GuardState::Unauthenticated) => {
                GuardOutcome::Redirect(login_redirect(&self.routes.login_path, &self.location))
            }
            (GuardKind::Public, GuardState::Authenticated) => GuardOutcome::Redirect(self.routes.home_path.clone()),
        }
    }
}

/// Next step after a protected guard resolves `Authenticated`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefinementStep {
    /// No further checks; the decision stands.
    Done,
    /// A local check already failed; revoke without asking the server.
    Reject,
    /// Ask the backend (`verify_remote`, then `require_authorization`).
    Remote,
}

/// Order the refinement checks: local expiry first, then remote checks.
#[must_use]
pub fn plan_refinement(policy: GuardPolicy, session: Option<&SessionRecord>, now_secs: i64) -> RefinementStep {
    if policy.check_expiry && session.is_none_or(|s| is_expired_at(&s.access_token, now_secs)) {
        return RefinementStep::Reject;
    }
    if policy.needs_remote() { RefinementStep::Remote } else { RefinementStep::Done }
}

/// Apply a refinement verdict and clear the session store when it revokes.
///
/// A stale ticket changes neither the guard nor the store.
pub fn refine_session<S: KeyValueStorage>(
    guard: &mut RouteGuard,
    ticket: NavigationTicket,
    session_valid: bool,
    store: &SessionStore<S>,
) -> Refinement {
    let result = guard.refine(ticket, session_valid);
    if result == Refinement::Revoked {
        store.clear();
    }
    result
}

/// Join a pathname and query string into the location a guard evaluates.
#[must_use]
pub fn location_with_query(pathname: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() { pathname.to_owned() } else { format!("{pathname}?{query}") }
}

/// Login URL carrying `location` so the login flow can send the user back.
#[must_use]
pub fn login_redirect(login_path: &str, location: &str) -> String {
    if location.is_empty() || location == login_path {
        return login_path.to_owned();
    }
    format!("{login_path}?{RETURN_PARAM}={}", utf8_percent_encode(location, NON_ALPHANUMERIC))
}

/// Where to go after a successful login, given the login page's query string.
///
/// Only same-origin absolute paths other than the login page itself are
/// honored; anything else lands on `home_path`.
#[must_use]
pub fn login_return_target(search: &str, login_path: &str, home_path: &str) -> String {
    let from = search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix(RETURN_PARAM)?.strip_prefix('='))
        .and_then(|raw| percent_decode_str(raw).decode_utf8().ok())
        .map(|decoded| decoded.into_owned());

    match from {
        Some(target) if is_safe_return_target(&target, login_path) => target,
        _ => home_path.to_owned(),
    }
}

fn is_safe_return_target(target: &str, login_path: &str) -> bool {
    let path = target.split(['?', '#']).next().unwrap_or_default();
    target.starts_with('/') && !target.starts_with("//") && !target.contains('\\') && path != login_path
}

/// Navigate whenever the guard's outcome becomes a redirect.
pub fn install_guard_redirect<F>(guard: RwSignal<RouteGuard>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardOutcome::Redirect(target) = guard.with(RouteGuard::outcome) {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
