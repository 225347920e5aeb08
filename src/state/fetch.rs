//! Load state for page-scoped fetches.
//!
//! Pages start in `Loading`, fire one request, and apply its result. Failures
//! become a visible `Failed` state instead of an empty list; cancelled
//! results are dropped so an unmounted page never changes state.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use crate::net::restaurants::FetchError;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Apply a fetch result. Returns `false` when the result was discarded.
    pub fn apply(&mut self, result: Result<T, FetchError>) -> bool {
        match result {
            Ok(value) => *self = Self::Loaded(value),
            Err(FetchError::Cancelled) => return false,
            Err(e) => {
                log::warn!("fetch failed: {e}");
                *self = Self::Failed(e.to_string());
            }
        }
        true
    }
}
