//! Test doubles shared by the unit tests of the API and feature clients.

use super::{
    api::{ApiClient, HttpRequest, HttpResponse, Transport},
    config::AppConfig,
    errors::AppError,
    session::Session,
};
use std::{cell::RefCell, collections::VecDeque, rc::Rc};

pub(crate) const TEST_BASE_URL: &str = "https://api.test/api";

#[derive(Default)]
struct Recorded {
    requests: RefCell<Vec<HttpRequest>>,
    responses: RefCell<VecDeque<Result<HttpResponse, AppError>>>,
}

/// Transport that records every request and replays queued responses.
/// Once the queue is empty it answers `200 {}`.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    inner: Rc<Recorded>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        self.inner.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub(crate) fn fail(self, err: AppError) -> Self {
        self.inner.responses.borrow_mut().push_back(Err(err));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.inner.requests.borrow().clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.inner.requests.borrow().len()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest, _timeout_ms: u32) -> Result<HttpResponse, AppError> {
        self.inner.requests.borrow_mut().push(request);
        self.inner
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(HttpResponse {
                    status: 200,
                    body: "{}".to_string(),
                })
            })
    }
}

/// Client pointed at `TEST_BASE_URL` with an in-memory session.
pub(crate) fn client(transport: FakeTransport, token: Option<&str>) -> ApiClient<FakeTransport> {
    let session = Session::in_memory();
    if let Some(token) = token {
        session.set_token(token);
    }
    let config = AppConfig {
        api_base_url: TEST_BASE_URL.to_string(),
        ..AppConfig::default()
    };
    ApiClient::new(&config, session, transport)
}
