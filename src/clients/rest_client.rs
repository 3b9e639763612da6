//! # REST Client Plumbing
//!
//! Shared by every resource client: endpoint resolution against the base URL,
//! sending through the injected [`HttpTransport`], and the three-stage
//! response classification (status, JSON, schema).
//!
//! The classification is generic over the caller's error enum. Any enum that
//! can be built from [`StatusError`], [`JsonError`] and [`ParseError`] can use
//! [`RestClient::decode`], so each operation keeps its own closed error set
//! while the ordering rules live in one place.

use std::sync::Arc;

use reqwest::Url;
use tracing::warn;

use crate::error::{JsonError, NetworkError, ParseError, StatusError};
use crate::framework::{HttpRequest, HttpResponse, HttpTransport, Schema, TransportError};

/// Messages attached to the failures of one operation.
#[derive(Debug, Clone, Copy)]
pub struct FailureMessages {
    pub network: &'static str,
    pub status: &'static str,
    pub json: &'static str,
    pub parse: &'static str,
}

/// Generic client that resource clients wrap.
#[derive(Clone)]
pub struct RestClient {
    transport: Arc<dyn HttpTransport>,
    base_url: Url,
}

impl RestClient {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: Url) -> Self {
        Self {
            transport,
            base_url,
        }
    }

    /// Appends `segments` to the base URL's path.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, TransportError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| TransportError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends `request`, reporting transport failures as [`NetworkError`].
    pub async fn send(
        &self,
        request: HttpRequest,
        messages: &FailureMessages,
    ) -> Result<HttpResponse, NetworkError> {
        self.transport.send(request).await.map_err(|cause| {
            warn!(error = %cause, "Transport failure");
            NetworkError::new(messages.network, cause)
        })
    }

    /// Classifies a response in priority order: status, then JSON, then schema.
    pub fn decode<T, E>(
        response: &HttpResponse,
        schema: &dyn Schema<T>,
        messages: &FailureMessages,
    ) -> Result<T, E>
    where
        E: From<StatusError> + From<JsonError> + From<ParseError>,
    {
        if !response.is_success() {
            warn!(status = response.status.as_u16(), "Non-success status");
            return Err(StatusError::new(messages.status, response.status).into());
        }

        let json: serde_json::Value = serde_json::from_str(&response.body).map_err(|cause| {
            warn!(error = %cause, "Response body is not JSON");
            JsonError::new(messages.json, cause)
        })?;

        schema.validate(&json).map_err(|diagnostics| {
            warn!(%diagnostics, "Response failed schema validation");
            ParseError::new(messages.parse, diagnostics).into()
        })
    }
}
