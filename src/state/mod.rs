//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `login`, `fetch`) so pages depend on
//! small focused models, and every transition is a plain method that can be
//! unit-tested without a browser.

pub mod fetch;
pub mod login;
pub mod session;
