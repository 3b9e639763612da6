//! # Top-level Handler
//!
//! The only place that decides what a failure means to the end user.
//!
//! [`Handler::run`] creates a post and then:
//! - reports every failure to the [`ErrorSink`];
//! - returns `Err` for [`NetworkError`], the one failure treated as fatal;
//! - maps every other kind to a fixed, generic message. Diagnostics, causes
//!   and status codes stay in telemetry and never reach the message.

use std::error::Error as StdError;
use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::clients::PostClient;
use crate::domain::{CreatePostInput, Post};
use crate::error::NetworkError;
use crate::post_api::CreatePostError;
use crate::result::Classified;

pub const MSG_USER_DOES_NOT_EXIST: &str = "User does not exist";
pub const MSG_STATUS: &str = "Failed to create post";
pub const MSG_JSON: &str = "Failed to parse response";
pub const MSG_VALIDATION: &str = "Invalid post input";
pub const MSG_PARSE: &str = "Failed to validate response";

/// Receives every failure the handler sees.
///
/// Implement this to forward errors to a telemetry backend.
pub trait ErrorSink: Send + Sync {
    fn capture(&self, error: &dyn Classified);
}

/// Emits each captured error as a `tracing` error event, causes included.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn capture(&self, err: &dyn Classified) {
        error!(kind = %err.kind(), error = %err, causes = %cause_chain(err), "Request failed");
    }
}

fn cause_chain(err: &dyn Classified) -> String {
    let mut causes = Vec::new();
    let mut current: Option<&(dyn StdError + 'static)> = err.source();
    while let Some(cause) = current {
        causes.push(cause.to_string());
        current = cause.source();
    }
    causes.join(" <- ")
}

/// What the caller submitted: an author and the post content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInput {
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

/// What the caller gets back when the run did not crash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// `None` on success; a generic, user-facing message otherwise.
    pub error_message: Option<&'static str>,
}

/// Runs post creation on behalf of an end user.
#[derive(Clone)]
pub struct Handler {
    post_client: PostClient,
    sink: Arc<dyn ErrorSink>,
}

impl Handler {
    pub fn new(post_client: PostClient, sink: Arc<dyn ErrorSink>) -> Self {
        Self { post_client, sink }
    }

    /// Creates the post and translates the outcome for the end user.
    ///
    /// # Errors
    ///
    /// Returns the [`NetworkError`] when the service could not be reached.
    #[instrument(skip(self, input), fields(user_id = input.user_id))]
    pub async fn run(&self, input: RunInput) -> Result<RunOutcome, NetworkError> {
        let request = CreatePostInput {
            post: Post::new(input.user_id, input.title, input.body),
        };

        let err = match self.post_client.create_post(request).await {
            Ok(()) => {
                info!("Post creation succeeded");
                return Ok(RunOutcome::default());
            }
            Err(err) => err,
        };

        self.sink.capture(&err);

        let message = match err {
            CreatePostError::Network(network) => return Err(network),
            CreatePostError::UserDoesNotExist(_) => MSG_USER_DOES_NOT_EXIST,
            CreatePostError::Status(_) => MSG_STATUS,
            CreatePostError::Json(_) => MSG_JSON,
            CreatePostError::Validation(_) => MSG_VALIDATION,
            CreatePostError::Parse(_) => MSG_PARSE,
        };
        Ok(RunOutcome {
            error_message: Some(message),
        })
    }
}
