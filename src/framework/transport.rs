//! # HTTP Transport Port
//!
//! The clients never talk to `reqwest` directly. They build an [`HttpRequest`],
//! hand it to an [`HttpTransport`], and classify the [`HttpResponse`] that comes
//! back. Swapping the transport is how tests run without a network (see
//! [`crate::framework::mock`]).

use async_trait::async_trait;
use reqwest::{Method, StatusCode, Url};

use crate::framework::TransportError;

/// Header value sent with every JSON request body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// A fully-resolved outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// A `GET` request with no headers and no body.
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    /// A `POST` request carrying a JSON body and the matching content type.
    pub fn post_json(url: Url, body: String) -> Self {
        Self {
            method: Method::POST,
            url,
            headers: vec![("Content-Type".to_owned(), JSON_CONTENT_TYPE.to_owned())],
            body: Some(body),
        }
    }

    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status line and raw body text of a response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Sends one request and returns the response, whatever its status.
///
/// Implementations must not treat non-2xx statuses as errors; status
/// classification belongs to the caller. Only failures that prevent a
/// response from being read are reported as [`TransportError`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
