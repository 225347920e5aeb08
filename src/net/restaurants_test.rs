use futures::executor::block_on;

use super::*;
use crate::net::test_support::{FakeTransport, TEST_ORIGIN, test_client};
use crate::state::session::{Session, SessionManager};

fn restaurants_api(transport: &FakeTransport) -> RestaurantsApi<FakeTransport> {
    RestaurantsApi::new(test_client(transport, &SessionManager::in_memory()))
}

#[test]
fn restaurant_path_formats_id() {
    assert_eq!(restaurant_path(&RestaurantId::new("12")), "/restaurants/12");
}

#[test]
fn list_all_returns_backend_order_verbatim() {
    let transport = FakeTransport::default();
    transport.respond(
        200,
        serde_json::json!([
            { "id": 2, "name": "Tel Aviv", "is_active": false },
            { "id": 1, "name": "Haifa", "is_active": true },
        ]),
    );

    let restaurants = block_on(restaurants_api(&transport).list_all(&CancelToken::new())).unwrap();

    let names: Vec<_> = restaurants.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Tel Aviv", "Haifa"]);
    assert_eq!(transport.requests()[0].url, format!("{TEST_ORIGIN}/restaurants"));
}

#[test]
fn list_all_sends_bearer_token_when_signed_in() {
    let transport = FakeTransport::default();
    transport.respond(200, serde_json::json!([]));
    let session = SessionManager::in_memory();
    session
        .persist(&Session { access_token: "abc".to_owned(), user_type: "hq".to_owned() })
        .unwrap();
    let api = RestaurantsApi::new(test_client(&transport, &session));

    block_on(api.list_all(&CancelToken::new())).unwrap();

    assert_eq!(transport.requests()[0].header("Authorization"), Some("Bearer abc"));
}

#[test]
fn list_all_error_status_is_request_error() {
    let transport = FakeTransport::default();
    transport.respond(500, serde_json::json!({ "detail": "boom" }));

    let err = block_on(restaurants_api(&transport).list_all(&CancelToken::new())).unwrap_err();

    assert_eq!(err, FetchError::Request(ApiError::Status { status: 500 }));
}

#[test]
fn get_by_id_returns_single_restaurant() {
    let transport = FakeTransport::default();
    transport.respond(200, serde_json::json!({ "id": 1, "name": "Haifa", "location": "Haifa port" }));

    let restaurant =
        block_on(restaurants_api(&transport).get_by_id(&RestaurantId::new("1"), &CancelToken::new())).unwrap();

    assert_eq!(restaurant.name, "Haifa");
    assert_eq!(restaurant.location.as_deref(), Some("Haifa port"));
    assert_eq!(transport.requests()[0].url, format!("{TEST_ORIGIN}/restaurants/1"));
}

#[test]
fn get_by_id_not_found_is_request_error() {
    let transport = FakeTransport::default();
    transport.respond(404, serde_json::json!({ "detail": "מסעדה לא נמצאה" }));

    let err = block_on(restaurants_api(&transport).get_by_id(&RestaurantId::new("99"), &CancelToken::new()))
        .unwrap_err();

    assert_eq!(err, FetchError::Request(ApiError::Status { status: 404 }));
}

#[test]
fn cancelled_token_skips_request() {
    let transport = FakeTransport::default();
    let token = CancelToken::new();
    token.cancel();

    let err = block_on(restaurants_api(&transport).list_all(&token)).unwrap_err();

    assert!(err.is_cancelled());
    assert!(transport.requests().is_empty());
}

#[test]
fn cancel_during_flight_discards_response() {
    let transport = FakeTransport::default();
    transport.respond(200, serde_json::json!([{ "id": 1, "name": "Haifa", "is_active": true }]));
    let token = CancelToken::new();
    transport.cancel_on_send(token.clone());

    let err = block_on(restaurants_api(&transport).list_all(&token)).unwrap_err();

    assert_eq!(err, FetchError::Cancelled);
    assert_eq!(transport.requests().len(), 1);
}
