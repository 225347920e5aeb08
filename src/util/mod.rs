//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate cross-cutting concerns (view-lifetime
//! cancellation, localized copy) from page and component logic.

pub mod cancel;
pub mod text;
