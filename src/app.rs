//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::{ProtectedRoute, PublicRoute};
use crate::config::AdminConfig;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, users::UsersPage};
use crate::state::auth::AuthState;
use crate::util::session_store::BrowserSessionStore;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, the session store, and auth state to every route, and
/// wraps each route in the guard matching its side of the login wall.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AdminConfig::from_env();
    let store = BrowserSessionStore::new(BrowserStorage);
    let auth = RwSignal::new(AuthState::from_session(store.load()));

    provide_context(config);
    provide_context(store);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/cinema-admin.css"/>
        <Title text="Cinema Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("users")
                    view=|| view! { <ProtectedRoute><UsersPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
