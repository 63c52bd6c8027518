//! Test doubles shared by unit tests across modules.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::AuthError;
use crate::net::transport::{ApiRequest, ApiResponse, Transport};
use crate::util::token_storage::TokenStorage;

pub(crate) use futures::executor::block_on;

/// Transport that replays scripted responses in order and records every
/// request it receives.
#[derive(Default)]
pub(crate) struct FakeTransport {
    script: RefCell<VecDeque<Result<ApiResponse, AuthError>>>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        self.script.borrow_mut().push_back(Ok(ApiResponse { status, body: body.to_owned() }));
        self
    }

    /// Queue a network-level failure.
    pub(crate) fn fail(self, reason: &str) -> Self {
        self.script.borrow_mut().push_back(Err(AuthError::Transport(reason.to_owned())));
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AuthError> {
        self.sent.borrow_mut().push(request);
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AuthError::Transport("no scripted response".to_owned())))
    }
}

/// In-memory stand-in for `localStorage`.
#[derive(Default)]
pub(crate) struct MemoryTokenStorage {
    value: RefCell<Option<String>>,
}

impl MemoryTokenStorage {
    pub(crate) fn with_token(token: &str) -> Self {
        Self { value: RefCell::new(Some(token.to_owned())) }
    }

    pub(crate) fn stored(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.value.borrow_mut() = Some(token.to_owned());
    }

    fn remove(&self) {
        *self.value.borrow_mut() = None;
    }
}

/// Records every path passed to a navigate callback.
#[derive(Default)]
pub(crate) struct NavLog {
    paths: RefCell<Vec<String>>,
}

impl NavLog {
    pub(crate) fn navigate(&self) -> impl Fn(&str, leptos_router::NavigateOptions) + '_ {
        move |path: &str, _: leptos_router::NavigateOptions| self.paths.borrow_mut().push(path.to_owned())
    }

    pub(crate) fn paths(&self) -> Vec<String> {
        self.paths.borrow().clone()
    }
}
