use futures::executor::block_on;

use super::*;
use crate::net::client::Method;
use crate::net::test_support::{FakeTransport, test_client};
use crate::state::session::SessionManager;

fn auth_api(transport: &FakeTransport, session: &SessionManager) -> AuthApi<FakeTransport> {
    AuthApi::new(test_client(transport, session))
}

#[test]
fn login_success_returns_session() {
    let transport = FakeTransport::default();
    transport.respond(200, serde_json::json!({ "access_token": "abc", "user_type": "hq" }));
    let session = SessionManager::in_memory();

    let result = block_on(auth_api(&transport, &session).login("headquarters", "admin123"));

    assert_eq!(result, Ok(Session { access_token: "abc".to_owned(), user_type: "hq".to_owned() }));
    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert!(requests[0].url.ends_with("/auth/login"));
    let body: serde_json::Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "username": "headquarters", "password": "admin123" }));
}

#[test]
fn login_does_not_persist_anything() {
    let transport = FakeTransport::default();
    transport.respond(200, serde_json::json!({ "access_token": "abc", "user_type": "hq" }));
    let session = SessionManager::in_memory();

    let _ = block_on(auth_api(&transport, &session).login("headquarters", "admin123"));

    assert_eq!(session.load(), None);
}

#[test]
fn login_rejected_status_is_auth_error() {
    let transport = FakeTransport::default();
    transport.respond(401, serde_json::json!({ "detail": "bad credentials" }));

    let err = block_on(auth_api(&transport, &SessionManager::in_memory()).login("x", "y")).unwrap_err();

    assert_eq!(err.cause(), &ApiError::Status { status: 401 });
}

#[test]
fn login_network_failure_is_auth_error() {
    let transport = FakeTransport::default();
    transport.fail("offline");

    let err = block_on(auth_api(&transport, &SessionManager::in_memory()).login("x", "y")).unwrap_err();

    assert!(matches!(err.cause(), ApiError::Transport(_)));
}

#[test]
fn login_malformed_body_is_auth_error() {
    let transport = FakeTransport::default();
    transport.respond(200, serde_json::json!({ "token": "wrong-field" }));

    let err = block_on(auth_api(&transport, &SessionManager::in_memory()).login("x", "y")).unwrap_err();

    assert!(matches!(err.cause(), ApiError::Decode(_)));
}

#[test]
fn login_empty_token_is_auth_error() {
    let transport = FakeTransport::default();
    transport.respond(200, serde_json::json!({ "access_token": "", "user_type": "hq" }));

    assert!(block_on(auth_api(&transport, &SessionManager::in_memory()).login("x", "y")).is_err());
}
