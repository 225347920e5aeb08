//! Dashboard page listing restaurants.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the restaurant list
//! once per mount, renders it as a card grid, and owns the logout action.
//! A failed fetch is shown as an error with a retry button rather than an
//! empty grid.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::restaurant_card::RestaurantCard;
use crate::net::types::Restaurant;
use crate::routes::AppRoute;
use crate::state::fetch::FetchState;
use crate::state::session::SessionContext;
use crate::util::cancel::CancelToken;
use crate::util::text;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let alive = CancelToken::scoped_to_view();
    let restaurants = RwSignal::new(FetchState::<Vec<Restaurant>>::Loading);

    #[cfg(feature = "csr")]
    let restaurants_api =
        crate::net::restaurants::RestaurantsApi::new(expect_context::<crate::net::client::BrowserClient>());

    let load = move || {
        restaurants.set(FetchState::Loading);
        #[cfg(feature = "csr")]
        {
            let restaurants_api = restaurants_api.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = restaurants_api.list_all(&alive).await;
                if let Ok(items) = &result {
                    log::info!("loaded {} restaurants", items.len());
                }
                restaurants.update(|s| {
                    s.apply(result);
                });
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &alive;
        }
    };

    load();

    let user_label = {
        let session = session.clone();
        move || {
            session
                .gate()
                .session()
                .map(|s| s.user_type().label().to_owned())
                .unwrap_or_default()
        }
    };

    let on_logout = move |_| {
        session.sign_out();
        navigate(&AppRoute::Login.path(), NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{text::DASHBOARD_TITLE}</h1>
                <span class="dashboard-page__user-type">{user_label}</span>
                <button class="btn dashboard-page__logout" on:click=on_logout>
                    {text::LOGOUT}
                </button>
            </header>

            {move || match restaurants.get() {
                FetchState::Loading => {
                    view! { <p class="dashboard-page__loading">{text::LOADING}</p> }.into_any()
                }
                FetchState::Failed(_) => {
                    let load = load.clone();
                    view! {
                        <div class="dashboard-page__error" role="alert">
                            <p>{text::RESTAURANTS_FAILED}</p>
                            <button class="btn" on:click=move |_| load()>
                                {text::RETRY}
                            </button>
                        </div>
                    }
                        .into_any()
                }
                FetchState::Loaded(items) if items.is_empty() => {
                    view! { <p class="dashboard-page__empty">{text::NO_RESTAURANTS}</p> }.into_any()
                }
                FetchState::Loaded(items) => {
                    view! {
                        <div class="dashboard-page__grid">
                            {items
                                .into_iter()
                                .map(|restaurant| view! { <RestaurantCard restaurant=restaurant/> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
