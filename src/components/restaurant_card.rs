//! Clickable card for one restaurant in the dashboard grid.
//!
//! The card is a plain link to `/restaurant/{id}` so the router handles
//! navigation and middle-click / open-in-tab keep working.

use leptos::prelude::*;

use crate::net::types::Restaurant;
use crate::routes::AppRoute;
use crate::util::text;

#[component]
pub fn RestaurantCard(restaurant: Restaurant) -> impl IntoView {
    let Restaurant { id, name, is_active, .. } = restaurant;
    let href = AppRoute::Restaurant(id.clone()).path();

    view! {
        <a class="restaurant-card" class:restaurant-card--inactive=!is_active href=href>
            <h3 class="restaurant-card__name">{name}</h3>
            <p class="restaurant-card__id">{text::id_line(id.as_str())}</p>
            <p class="restaurant-card__status">{text::status_line(is_active)}</p>
            <span class="restaurant-card__hint">{text::DETAILS_HINT}</span>
        </a>
    }
}
