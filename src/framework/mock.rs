//! # Mock Transport
//!
//! Utilities for testing clients without a network.
//!
//! [`MockTransport`] is an [`HttpTransport`] that answers from a queue of
//! scripted expectations and records every request it receives. Script it
//! with [`MockTransport::expect_get`] / [`MockTransport::expect_post`], hand a
//! clone to the client under test, then assert on [`MockTransport::requests`]
//! and call [`MockTransport::verify`].
//!
//! # Example
//! ```ignore
//! let mock = MockTransport::new();
//! mock.expect_get("/users/1").respond(StatusCode::OK, r#"{"id":1,"name":"Leanne"}"#);
//! mock.expect_post("/posts").respond(StatusCode::INTERNAL_SERVER_ERROR, "");
//!
//! let system = ApiSystem::with_transport(base_url, Arc::new(mock.clone()), Schemas::default());
//! // Use system.post_client in tests...
//! mock.verify(); // Ensures all expectations were met
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use reqwest::{Method, StatusCode};

use crate::framework::{HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Represents an expected request and the scripted outcome.
struct Expectation {
    method: Method,
    path: String,
    response: Result<HttpResponse, TransportError>,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    requests: Vec<HttpRequest>,
}

/// A scripted transport with expectation tracking for fluent testing.
///
/// Clones share the same script and request log.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Creates a new mock transport with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Expects a `GET` whose URL path equals `path`.
    pub fn expect_get(&self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::GET, path)
    }

    /// Expects a `POST` whose URL path equals `path`.
    pub fn expect_post(&self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::POST, path)
    }

    fn expect(&self, method: Method, path: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path: path.into(),
            state: self.state.clone(),
        }
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state().requests.len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.state().expectations.len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut state = self.state();
        state.requests.push(request.clone());
        let expectation = state.expectations.pop_front();
        drop(state);

        match expectation {
            Some(exp) if exp.method == request.method && exp.path == request.url.path() => {
                exp.response
            }
            Some(exp) => panic!(
                "Unexpected request {} {}, expected {} {}",
                request.method,
                request.url.path(),
                exp.method,
                exp.path
            ),
            None => panic!(
                "Unexpected request {} {}: no expectations left",
                request.method,
                request.url.path()
            ),
        }
    }
}

/// Builder that completes an expectation with its outcome.
#[must_use = "an expectation is only registered once `respond` or `fail` is called"]
pub struct ExpectationBuilder {
    method: Method,
    path: String,
    state: Arc<Mutex<MockState>>,
}

impl ExpectationBuilder {
    /// Answers the request with `status` and `body`.
    pub fn respond(self, status: StatusCode, body: impl Into<String>) {
        self.push(Ok(HttpResponse::new(status, body)));
    }

    /// Fails the request at the transport level.
    pub fn fail(self, error: TransportError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<HttpResponse, TransportError>) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.expectations.push_back(Expectation {
            method: self.method,
            path: self.path,
            response,
        });
    }
}
