//! Restaurant detail page for `/restaurant/{id}`.

use leptos::prelude::*;

use crate::net::types::{Restaurant, RestaurantId};
use crate::routes::AppRoute;
use crate::state::fetch::FetchState;
use crate::util::cancel::CancelToken;
use crate::util::text;

/// Fetches one restaurant per mount and renders its details, or a
/// not-found message when the backend returns an error.
#[component]
pub fn RestaurantPage(id: RestaurantId) -> impl IntoView {
    let alive = CancelToken::scoped_to_view();
    let detail = RwSignal::new(FetchState::<Restaurant>::Loading);

    #[cfg(feature = "csr")]
    {
        let restaurants_api =
            crate::net::restaurants::RestaurantsApi::new(expect_context::<crate::net::client::BrowserClient>());
        let id = id.clone();
        leptos::task::spawn_local(async move {
            let result = restaurants_api.get_by_id(&id, &alive).await;
            detail.update(|s| {
                s.apply(result);
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (&id, &alive);
    }

    view! {
        <div class="restaurant-page">
            <a class="restaurant-page__back" href=AppRoute::Dashboard.path()>
                {text::BACK_TO_DASHBOARD}
            </a>
            {move || match detail.get() {
                FetchState::Loading => view! { <p>{text::LOADING}</p> }.into_any(),
                FetchState::Failed(_) => {
                    view! { <p class="restaurant-page__error" role="alert">{text::RESTAURANT_NOT_FOUND}</p> }
                        .into_any()
                }
                FetchState::Loaded(restaurant) => {
                    let Restaurant { id, name, is_active, location } = restaurant;
                    view! {
                        <article class="restaurant-page__details">
                            <h2>{name}</h2>
                            <p>{text::id_line(id.as_str())}</p>
                            <p>{text::status_line(is_active)}</p>
                            {location
                                .map(|location| {
                                    view! {
                                        <p>
                                            {text::LOCATION_LABEL}
                                            " "
                                            {location}
                                        </p>
                                    }
                                })}
                        </article>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
