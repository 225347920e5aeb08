//! Read-only facade over the restaurants collection.
//!
//! Results are passed through exactly as the backend returns them: no
//! filtering, paging or sorting happens on the client. Calls take the
//! caller's `CancelToken` and resolve to `FetchError::Cancelled` once the
//! owning view is gone.

#[cfg(test)]
#[path = "restaurants_test.rs"]
mod restaurants_test;

use super::client::{ApiClient, ApiError, Transport};
use super::types::{Restaurant, RestaurantId};
use crate::util::cancel::CancelToken;

pub const RESTAURANTS_PATH: &str = "/restaurants";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Transport failure or error status (including "not found").
    #[error("restaurant request failed: {0}")]
    Request(#[from] ApiError),
    #[error("request cancelled")]
    Cancelled,
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

fn restaurant_path(id: &RestaurantId) -> String {
    format!("{RESTAURANTS_PATH}/{id}")
}

#[derive(Clone)]
pub struct RestaurantsApi<T> {
    client: ApiClient<T>,
}

impl<T: Transport> RestaurantsApi<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    /// Fetch every restaurant.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] on transport failure, error status or
    /// undecodable body, and [`FetchError::Cancelled`] if `cancel` fired.
    pub async fn list_all(&self, cancel: &CancelToken) -> Result<Vec<Restaurant>, FetchError> {
        self.fetch(RESTAURANTS_PATH, cancel).await
    }

    /// Fetch one restaurant by id.
    ///
    /// # Errors
    ///
    /// Same as [`Self::list_all`]; a missing restaurant surfaces as
    /// [`FetchError::Request`] with the backend's status.
    pub async fn get_by_id(&self, id: &RestaurantId, cancel: &CancelToken) -> Result<Restaurant, FetchError> {
        self.fetch(&restaurant_path(id), cancel).await
    }

    async fn fetch<R: serde::de::DeserializeOwned>(&self, path: &str, cancel: &CancelToken) -> Result<R, FetchError> {
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }
        let result = self.client.get(path).await;
        if cancel.is_cancelled() {
            log::debug!("discarding response for {path}: view gone");
            return Err(FetchError::Cancelled);
        }
        Ok(result?.error_for_status()?.json()?)
    }
}
