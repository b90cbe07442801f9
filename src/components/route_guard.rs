//! Route-level guards wrapping protected and public screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each guard owns a `RouteGuard` signal and re-runs it whenever the router
//! location changes. Content renders only once a decision exists; redirects go
//! through `install_guard_redirect`. Optional refinement (expiry, backend
//! verification) runs after the first decision and can only affect the
//! navigation that started it.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::AdminConfig;
use crate::state::auth::AuthState;
use crate::util::auth::{
    GuardKind, GuardOutcome, NavigationTicket, Refinement, RefinementStep, RouteGuard, install_guard_redirect,
    location_with_query, plan_refinement, refine_session,
};
use crate::util::session_store::BrowserSessionStore;
use crate::util::token::now_unix_secs;

/// Renders `children` only for a signed-in session; otherwise redirects to
/// login carrying the current location.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    guarded_view(GuardKind::Protected, children)
}

/// Renders `children` only when signed out; otherwise redirects home.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    guarded_view(GuardKind::Public, children)
}

fn guarded_view(kind: GuardKind, children: ChildrenFn) -> impl IntoView {
    let config = expect_context::<AdminConfig>();
    let store = expect_context::<BrowserSessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let guard = RwSignal::new(RouteGuard::from_config(kind, &config));

    install_guard_redirect(guard, use_navigate());

    Effect::new(move || {
        let target = location_with_query(&location.pathname.get(), &location.search.get());
        let session = store.load();
        let Some(ticket) = guard.try_update(|g| g.navigate(&target, session.is_some())) else {
            return;
        };
        auth.set(AuthState::from_session(session.clone()));

        if !guard.with_untracked(|g| g.needs_refinement(ticket)) {
            return;
        }
        match plan_refinement(config.policy, session.as_ref(), now_unix_secs()) {
            RefinementStep::Done => {}
            RefinementStep::Reject => apply_refinement(guard, ticket, false, &store, auth),
            RefinementStep::Remote => spawn_remote_refinement(guard, ticket, &config, &store, auth),
        }
    });

    move || match guard.with(RouteGuard::outcome) {
        GuardOutcome::Render => children().into_any(),
        GuardOutcome::Wait | GuardOutcome::Redirect(_) => ().into_any(),
    }
}

/// Confirm the session with the backend and apply the verdict to `ticket`.
fn spawn_remote_refinement(
    guard: RwSignal<RouteGuard>,
    ticket: NavigationTicket,
    config: &AdminConfig,
    store: &BrowserSessionStore,
    auth: RwSignal<AuthState>,
) {
    #[cfg(feature = "hydrate")]
    {
        let policy = config.policy;
        let verifier = crate::net::verifier::RemoteVerifier::new(
            crate::net::api::HttpTransport::from_config(config),
            store.clone(),
            config,
        );
        leptos::task::spawn_local(async move {
            let valid = verifier.confirm(policy).await;
            apply_refinement(guard, ticket, valid, verifier.store(), auth);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (guard, ticket, config, store, auth);
    }
}

fn apply_refinement(
    guard: RwSignal<RouteGuard>,
    ticket: NavigationTicket,
    valid: bool,
    store: &BrowserSessionStore,
    auth: RwSignal<AuthState>,
) {
    if guard.try_update(|g| refine_session(g, ticket, valid, store)) == Some(Refinement::Revoked) {
        auth.set(AuthState::default());
    }
}
