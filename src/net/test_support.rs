//! Scripted transport shared by the networking tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::client::{ApiClient, ApiError, ApiRequest, ApiResponse, Transport};
use crate::config::ClientConfig;
use crate::state::session::SessionManager;
use crate::util::cancel::CancelToken;

pub(crate) const TEST_ORIGIN: &str = "https://api.test";

#[derive(Default)]
struct Script {
    responses: VecDeque<Result<ApiResponse, ApiError>>,
    requests: Vec<ApiRequest>,
    cancel_on_send: Option<CancelToken>,
}

/// Records every request and replays queued responses in order.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    script: Arc<Mutex<Script>>,
}

impl FakeTransport {
    pub(crate) fn respond(&self, status: u16, body: serde_json::Value) {
        self.script
            .lock()
            .unwrap()
            .responses
            .push_back(Ok(ApiResponse { status, body: body.to_string() }));
    }

    pub(crate) fn respond_raw(&self, status: u16, body: &str) {
        self.script
            .lock()
            .unwrap()
            .responses
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
    }

    pub(crate) fn fail(&self, message: &str) {
        self.script
            .lock()
            .unwrap()
            .responses
            .push_back(Err(ApiError::Transport(message.to_owned())));
    }

    /// Cancel `token` while the next request is in flight.
    pub(crate) fn cancel_on_send(&self, token: CancelToken) {
        self.script.lock().unwrap().cancel_on_send = Some(token);
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.script.lock().unwrap().requests.clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut script = self.script.lock().unwrap();
        script.requests.push(request);
        if let Some(token) = script.cancel_on_send.take() {
            token.cancel();
        }
        script
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_owned())))
    }
}

pub(crate) fn test_client(transport: &FakeTransport, session: &SessionManager) -> ApiClient<FakeTransport> {
    ApiClient::new(&ClientConfig::with_base_url(TEST_ORIGIN), session.clone(), transport.clone())
}
