//! Filtering and paging for the user-management table.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use crate::net::types::UserSummary;
use crate::state::session::Role;

pub const DEFAULT_PER_PAGE: usize = 10;

/// One page of a filtered listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually shown (after clamping).
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Users whose name or email contains `query` (case-insensitive), limited to
/// `role` when given. A blank query matches everyone.
#[must_use]
pub fn filter_users<'a>(users: &'a [UserSummary], query: &str, role: Option<Role>) -> Vec<&'a UserSummary> {
    let needle = query.trim().to_lowercase();
    users
        .iter()
        .filter(|u| role.is_none_or(|r| u.role == r))
        .filter(|u| {
            needle.is_empty() || u.name.to_lowercase().contains(&needle) || u.email.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Slice `items` into the requested 1-based page.
///
/// `page` is clamped into `1..=total_pages`; an empty listing still has one
/// (empty) page. A `per_page` of zero is treated as one.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_items);
    Page { items: items[start..end].to_vec(), page, total_pages, total_items }
}
