//! Reusable UI components shared by admin pages.

pub mod admin_header;
pub mod route_guard;
