//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the session context and API client once, then wraps every
//! route in a `Guard` that asks `routes::resolve` whether to render or
//! redirect. `GateRefresh` re-derives the auth gate from storage on each
//! navigation so the decision always reflects what is persisted.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::hooks::{use_location, use_params_map};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::types::RestaurantId;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, restaurant::RestaurantPage};
use crate::routes::{AppRoute, RouteDecision, fallback_target, resolve};
use crate::state::session::{SessionContext, SessionManager};

/// Root application component.
///
/// Provides the session context and API client, and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    log::info!("kitchen api origin: {}", config.api_base_url);

    #[cfg(feature = "csr")]
    let manager = SessionManager::browser();
    #[cfg(not(feature = "csr"))]
    let manager = SessionManager::in_memory();

    #[cfg(feature = "csr")]
    provide_context(crate::net::client::ApiClient::new(
        &config,
        manager.clone(),
        crate::net::client::FetchTransport,
    ));

    provide_context(config);
    provide_context(SessionContext::new(manager));

    view! {
        <Title text="Giraffe Kitchen"/>

        <Router>
            <GateRefresh/>
            <main class="app" dir="rtl">
                <Routes fallback=|| view! { <UnknownRoute/> }>
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <Guard route=AppRoute::Login><LoginPage/></Guard> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <Guard route=AppRoute::Dashboard><DashboardPage/></Guard> }
                    />
                    <Route path=(StaticSegment("restaurant"), ParamSegment("id")) view=RestaurantRoute/>
                </Routes>
            </main>
        </Router>
    }
}

/// Re-read the persisted session whenever the path changes.
#[component]
fn GateRefresh() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        log::debug!("navigated to {path}");
        session.refresh();
    });
}

/// Render `children` only if the gate allows `route`, otherwise redirect.
#[component]
fn Guard(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    move || match resolve(&route, &session.gate()) {
        RouteDecision::Render => children().into_any(),
        RouteDecision::Redirect(target) => view! { <Redirect path=target.path()/> }.into_any(),
    }
}

#[component]
fn RestaurantRoute() -> impl IntoView {
    let params = use_params_map();
    move || {
        let id = RestaurantId::new(params.with(|p| p.get("id")).unwrap_or_default());
        let route = AppRoute::Restaurant(id.clone());
        view! {
            <Guard route=route>
                <RestaurantPage id=id.clone()/>
            </Guard>
        }
    }
}

/// Catch-all: never renders, always redirects per the gate.
#[component]
fn UnknownRoute() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let route = AppRoute::parse(&use_location().pathname.get_untracked());
    move || {
        let target = fallback_target(&route, &session.gate());
        view! { <Redirect path=target.path()/> }
    }
}
