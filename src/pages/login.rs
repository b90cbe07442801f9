//! Login page: email + password exchange for a bearer session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::config::AdminConfig;
use crate::state::auth::AuthState;
use crate::util::session_store::BrowserSessionStore;

/// Trim and check the login form fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<AdminConfig>();
    let store = expect_context::<BrowserSessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = leptos_router::hooks::use_location();
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(store.remember_me());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let return_to = crate::util::auth::login_return_target(
            &location.search.get_untracked(),
            &config.login_path,
            &config.home_path,
        );

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let store = store.clone();
            let navigate = navigate.clone();
            let remember_value = remember.get_untracked();
            leptos::task::spawn_local(async move {
                let transport = crate::net::api::HttpTransport::from_config(&config);
                let result = crate::net::api::login(&transport, &config, &email_value, &password_value).await;
                let record = match result {
                    Ok(record) => record,
                    Err(e) => {
                        info.set(format!("Sign-in failed: {e}"));
                        busy.set(false);
                        return;
                    }
                };
                if let Err(e) = store.save(&record) {
                    log::warn!("could not persist session: {e}");
                    info.set("Sign-in succeeded but the session could not be stored.".to_owned());
                    busy.set(false);
                    return;
                }
                if let Err(e) = store.set_remember_me(remember_value) {
                    log::debug!("remember-me flag not stored: {e}");
                }
                log::info!("signed in as {}", record.role.as_str());
                auth.set(AuthState::from_session(Some(record)));
                navigate(&return_to, leptos_router::NavigateOptions { replace: true, ..Default::default() });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, return_to, &navigate, &store, auth);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Cinema Admin"</h1>
                <p class="login-card__subtitle">"Sign in to manage movies, users, and bookings"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="login-remember">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
