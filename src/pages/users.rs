//! User-management page: searchable, role-filtered, paged user table.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::admin_header::AdminHeader;
use crate::config::AdminConfig;
use crate::state::session::Role;
use crate::state::users::UsersState;
use crate::util::session_store::BrowserSessionStore;

/// Map the role `<select>` value to a filter.
fn parse_role_filter(value: &str) -> Option<Role> {
    match value {
        "ADMIN" => Some(Role::Admin),
        "USER" => Some(Role::User),
        _ => None,
    }
}

fn page_label(page: usize, total_pages: usize, total_items: usize) -> String {
    let noun = if total_items == 1 { "user" } else { "users" };
    format!("Page {page} of {total_pages} · {total_items} {noun}")
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let config = expect_context::<AdminConfig>();
    let store = expect_context::<BrowserSessionStore>();
    let users = RwSignal::new(UsersState { loading: true, ..UsersState::default() });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(session) = store.load() else {
            users.update(|s| s.loading = false);
            return;
        };
        let transport = crate::net::api::HttpTransport::from_config(&config);
        let result = crate::net::api::fetch_users(&transport, &config, &session).await;
        users.update(|s| {
            s.loading = false;
            match result {
                Ok(list) => {
                    s.users = list;
                    s.error = None;
                }
                Err(e) => s.error = Some(format!("Could not load users: {e}")),
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&config, &store);
    }

    let visible = Memo::new(move |_| users.with(UsersState::visible));

    view! {
        <div class="users-page">
            <AdminHeader title="Users"/>
            <div class="users-page__filters">
                <input
                    class="users-page__search"
                    type="search"
                    placeholder="Search name or email"
                    prop:value=move || users.with(|s| s.query.clone())
                    on:input=move |ev| users.update(|s| s.set_query(event_target_value(&ev)))
                />
                <select
                    class="users-page__role"
                    on:change=move |ev| users.update(|s| s.set_role_filter(parse_role_filter(&event_target_value(&ev))))
                >
                    <option value="">"All roles"</option>
                    <option value="ADMIN">"Admins"</option>
                    <option value="USER">"Users"</option>
                </select>
            </div>
            <Show when=move || users.with(|s| s.error.is_some())>
                <p class="users-page__error">{move || users.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !users.with(|s| s.loading)
                fallback=|| view! { <p>"Loading users..."</p> }
            >
                <table class="users-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Bookings"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get().items
                            key=|user| user.id.clone()
                            children=|user| {
                                view! {
                                    <tr>
                                        <td>{user.name}</td>
                                        <td>{user.email}</td>
                                        <td>{user.role.as_str()}</td>
                                        <td>{user.bookings.map(|n| n.to_string()).unwrap_or_else(|| "-".to_owned())}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <div class="users-page__pager">
                    <button
                        class="btn"
                        disabled=move || !visible.get().has_prev()
                        on:click=move |_| users.update(UsersState::prev_page)
                    >
                        "Previous"
                    </button>
                    <span>
                        {move || {
                            let page = visible.get();
                            page_label(page.page, page.total_pages, page.total_items)
                        }}
                    </span>
                    <button
                        class="btn"
                        disabled=move || !visible.get().has_next()
                        on:click=move |_| users.update(UsersState::next_page)
                    >
                        "Next"
                    </button>
                </div>
            </Show>
        </div>
    }
}
