//! Top bar shown on every protected screen: section links, signed-in
//! identity, and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::AdminConfig;
use crate::state::auth::AuthState;
use crate::util::session_store::BrowserSessionStore;

#[cfg(test)]
#[path = "admin_header_test.rs"]
mod admin_header_test;

/// Section links in display order; the dashboard follows the configured home.
fn nav_links(config: &AdminConfig) -> [(&'static str, String); 2] {
    [("Dashboard", config.home_path.clone()), ("Users", "/users".to_owned())]
}

#[component]
pub fn AdminHeader(#[prop(into)] title: String) -> impl IntoView {
    let config = expect_context::<AdminConfig>();
    let store = expect_context::<BrowserSessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let links = nav_links(&config);

    let on_logout = move |_| {
        store.clear();
        auth.set(AuthState::default());
        log::info!("signed out");
        navigate(&config.login_path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    let identity = move || {
        auth.with(|a| match (a.display_name(), a.role()) {
            (Some(name), Some(role)) => format!("{name} ({})", role.as_str()),
            _ => String::new(),
        })
    };

    view! {
        <header class="admin-header">
            <h1 class="admin-header__title">{title}</h1>
            <nav class="admin-header__nav">
                {links
                    .into_iter()
                    .map(|(label, href)| view! { <a href=href>{label}</a> })
                    .collect_view()}
            </nav>
            <Show when=move || auth.with(AuthState::is_signed_in)>
                <span class="admin-header__identity">{identity}</span>
            </Show>
            <button class="btn admin-header__logout" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
