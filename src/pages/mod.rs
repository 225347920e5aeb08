//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (one fetch or one submission per
//! mount) and delegates rules to `state` and rendering details to
//! `components`.

pub mod dashboard;
pub mod login;
pub mod restaurant;
