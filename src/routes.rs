//! Client route table and the auth gate decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` wraps every Leptos route in a guard that calls [`resolve`]. Keeping
//! the decision a pure function of `(route, gate)` makes it trivially
//! idempotent and testable without a router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::RestaurantId;
use crate::state::session::AuthGate;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Dashboard,
    Restaurant(RestaurantId),
    /// Any path not in the table, including `/`.
    Other(String),
}

impl AppRoute {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["login"] => Self::Login,
            ["dashboard"] => Self::Dashboard,
            ["restaurant", id] => Self::Restaurant(RestaurantId::new(*id)),
            _ => Self::Other(path.to_owned()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_owned(),
            Self::Dashboard => "/dashboard".to_owned(),
            Self::Restaurant(id) => format!("/restaurant/{id}"),
            Self::Other(path) => path.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    Redirect(AppRoute),
}

/// Decide whether `route` may render under `gate`.
pub fn resolve(route: &AppRoute, gate: &AuthGate) -> RouteDecision {
    match (gate.is_authenticated(), route) {
        (false, AppRoute::Login) | (true, AppRoute::Dashboard | AppRoute::Restaurant(_)) => RouteDecision::Render,
        (false, _) => RouteDecision::Redirect(AppRoute::Login),
        (true, AppRoute::Login | AppRoute::Other(_)) => RouteDecision::Redirect(AppRoute::Dashboard),
    }
}

/// Where the router fallback sends `route`. The fallback has nothing to
/// render, so a renderable route is redirected to its canonical path.
pub fn fallback_target(route: &AppRoute, gate: &AuthGate) -> AppRoute {
    match resolve(route, gate) {
        RouteDecision::Redirect(target) => target,
        RouteDecision::Render => route.clone(),
    }
}
