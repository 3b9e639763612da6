//! The failure categories shared by all client operations.
//!
//! Each type here is one [`ErrorKind`]. Operation error enums
//! ([`FetchPostError`](crate::post_api::FetchPostError),
//! [`CreatePostError`](crate::post_api::CreatePostError),
//! [`FetchUserError`](crate::user_api::FetchUserError)) are closed unions of
//! these types.

use reqwest::StatusCode;
use thiserror::Error;

use crate::framework::{Diagnostics, TransportError};
use crate::result::{Classified, ErrorKind};

/// The service answered with a non-2xx status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message} (status {status})")]
pub struct StatusError {
    pub message: String,
    pub status: StatusCode,
}

impl StatusError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

/// The response body was not valid JSON.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct JsonError {
    pub message: String,
    #[source]
    pub cause: serde_json::Error,
}

impl JsonError {
    pub fn new(message: impl Into<String>, cause: serde_json::Error) -> Self {
        Self {
            message: message.into(),
            cause,
        }
    }
}

/// The response JSON did not match the expected schema.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    #[source]
    pub diagnostics: Diagnostics,
}

impl ParseError {
    pub fn new(message: impl Into<String>, diagnostics: Diagnostics) -> Self {
        Self {
            message: message.into(),
            diagnostics,
        }
    }
}

/// The request never produced a readable response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct NetworkError {
    pub message: String,
    #[source]
    pub cause: TransportError,
}

impl NetworkError {
    pub fn new(message: impl Into<String>, cause: TransportError) -> Self {
        Self {
            message: message.into(),
            cause,
        }
    }
}

/// Caller-supplied input failed its schema.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    #[source]
    pub diagnostics: Diagnostics,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, diagnostics: Diagnostics) -> Self {
        Self {
            message: message.into(),
            diagnostics,
        }
    }
}

/// The user referenced by a post has no record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("UserId: {user_id} does not exist")]
pub struct UserDoesNotExistError {
    pub user_id: i64,
}

impl UserDoesNotExistError {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

macro_rules! classified {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Classified for $ty {
                fn kind(&self) -> ErrorKind {
                    ErrorKind::$kind
                }
            }
        )*
    };
}

classified! {
    StatusError => Status,
    JsonError => Json,
    ParseError => Parse,
    NetworkError => Network,
    ValidationError => Validation,
    UserDoesNotExistError => UserDoesNotExist,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn user_does_not_exist_message_names_the_id() {
        assert_eq!(
            UserDoesNotExistError::new(999).to_string(),
            "UserId: 999 does not exist"
        );
    }

    #[test]
    fn json_error_keeps_parse_failure_as_source() {
        let cause = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = JsonError::new("Failed to parse Posts JSON", cause);

        assert_eq!(error.to_string(), "Failed to parse Posts JSON");
        assert!(error.source().is_some());
    }

    #[test]
    fn parse_error_display_hides_diagnostics() {
        let error = ParseError::new(
            "Failed to validate Posts JSON",
            Diagnostics::single("id", "missing field `id`"),
        );

        assert_eq!(error.to_string(), "Failed to validate Posts JSON");
        let source = error.source().expect("diagnostics are the source");
        assert_eq!(source.to_string(), "id: missing field `id`");
    }
}
