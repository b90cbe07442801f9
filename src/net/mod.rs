//! Networking modules for the admin REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP transport and page-level calls, `verifier` wraps the
//! session trust checks used by route guards, and `types` defines the wire
//! schema.

pub mod api;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;
pub mod verifier;
