//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! token decoding) and pure decision logic from page and component code to
//! improve reuse and testability.

pub mod auth;
pub mod pagination;
pub mod session_store;
pub mod storage;
pub mod token;
