//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind `ProtectedRoute`, so it never runs its body without a
//! session. Catalogue screens (movies, genres, bookings) mount beside it.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::admin_header::AdminHeader;
use crate::state::auth::AuthState;
use crate::state::session::Role;

fn greeting(auth: &AuthState) -> String {
    match auth.display_name() {
        Some(name) => format!("Welcome back, {name}"),
        None => "Welcome back".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let is_admin = move || auth.with(|a| a.role() == Some(Role::Admin));

    view! {
        <div class="dashboard-page">
            <AdminHeader title="Dashboard"/>
            <section class="dashboard-page__welcome">
                <h2>{move || greeting(&auth.get())}</h2>
                <Show
                    when=is_admin
                    fallback=|| view! { <p class="dashboard-page__notice">"Read-only access."</p> }
                >
                    <p class="dashboard-page__notice">"Full administrative access."</p>
                </Show>
            </section>
            <section class="dashboard-page__cards">
                <a class="dashboard-card" href="/users">
                    <h3>"Users"</h3>
                    <p>"Search, filter, and page through registered customers."</p>
                </a>
            </section>
        </div>
    }
}
