//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `auth`, `users`) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod session;
pub mod users;
