use super::*;

#[test]
fn new_token_is_live() {
    assert!(!CancelToken::new().is_cancelled());
}

#[test]
fn cancel_is_visible_through_clones() {
    let token = CancelToken::new();
    let observer = token.clone();
    token.cancel();
    assert!(observer.is_cancelled());
}

#[test]
fn cancel_is_idempotent() {
    let token = CancelToken::new();
    token.cancel();
    token.cancel();
    assert!(token.is_cancelled());
}
