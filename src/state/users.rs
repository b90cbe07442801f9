//! User-management table state.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::types::UserSummary;
use crate::state::session::Role;
use crate::util::pagination::{DEFAULT_PER_PAGE, Page, filter_users, paginate};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsersState {
    pub users: Vec<UserSummary>,
    pub loading: bool,
    pub error: Option<String>,
    pub query: String,
    pub role_filter: Option<Role>,
    pub page: usize,
    pub per_page: usize,
}

impl Default for UsersState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            loading: false,
            error: None,
            query: String::new(),
            role_filter: None,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl UsersState {
    /// Rows to show for the current filter and page.
    #[must_use]
    pub fn visible(&self) -> Page<UserSummary> {
        let matching: Vec<UserSummary> =
            filter_users(&self.users, &self.query, self.role_filter).into_iter().cloned().collect();
        paginate(&matching, self.page, self.per_page)
    }

    /// Changing the filter returns to the first page.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.page = 1;
    }

    pub fn set_role_filter(&mut self, role: Option<Role>) {
        self.role_filter = role;
        self.page = 1;
    }

    pub fn next_page(&mut self) {
        let current = self.visible();
        if current.has_next() {
            self.page = current.page + 1;
        }
    }

    pub fn prev_page(&mut self) {
        let current = self.visible();
        if current.has_prev() {
            self.page = current.page - 1;
        }
    }
}
