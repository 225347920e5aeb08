//! View-lifetime cancellation for async fetches.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages create one token per mount and cancel it from `on_cleanup`. Facade
//! calls take the token and resolve to a cancelled error once the page is
//! gone, so late responses never touch disposed view state.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag flipped once when the owning view unmounts.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Create a token that is cancelled when the current reactive owner is
    /// cleaned up (i.e. when the page unmounts).
    pub fn scoped_to_view() -> Self {
        let token = Self::new();
        let on_drop = token.clone();
        leptos::prelude::on_cleanup(move || on_drop.cancel());
        token
    }
}
