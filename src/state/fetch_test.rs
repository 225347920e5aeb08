use super::*;
use crate::net::client::ApiError;

#[test]
fn starts_loading() {
    assert!(FetchState::<Vec<u8>>::default().is_loading());
}

#[test]
fn success_becomes_loaded() {
    let mut state = FetchState::default();
    assert!(state.apply(Ok(vec![1, 2])));
    assert_eq!(state, FetchState::Loaded(vec![1, 2]));
}

#[test]
fn failure_is_visible_not_empty() {
    let mut state = FetchState::<Vec<u8>>::default();
    assert!(state.apply(Err(FetchError::Request(ApiError::Transport("offline".to_owned())))));
    assert!(matches!(state, FetchState::Failed(_)));
}

#[test]
fn cancelled_result_is_discarded() {
    let mut state = FetchState::<Vec<u8>>::default();
    assert!(!state.apply(Err(FetchError::Cancelled)));
    assert!(state.is_loading());
}
