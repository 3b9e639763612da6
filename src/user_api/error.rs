//! Error types for user lookups.

use thiserror::Error;

use crate::error::{JsonError, NetworkError, ParseError, StatusError};
use crate::result::{Classified, ErrorKind};

/// Errors that can occur while fetching a user.
///
/// An unknown id is *not* an error: the lookup succeeds with `None`.
#[derive(Debug, Error)]
pub enum FetchUserError {
    #[error(transparent)]
    Status(#[from] StatusError),

    #[error(transparent)]
    Json(#[from] JsonError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl Classified for FetchUserError {
    fn kind(&self) -> ErrorKind {
        match self {
            FetchUserError::Status(e) => e.kind(),
            FetchUserError::Json(e) => e.kind(),
            FetchUserError::Parse(e) => e.kind(),
            FetchUserError::Network(e) => e.kind(),
        }
    }
}
