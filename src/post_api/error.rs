//! Error types for post operations.

use thiserror::Error;

use crate::error::{
    JsonError, NetworkError, ParseError, StatusError, UserDoesNotExistError, ValidationError,
};
use crate::result::{Classified, ErrorKind};
use crate::user_api::FetchUserError;

/// Errors that can occur while fetching a post.
#[derive(Debug, Error)]
pub enum FetchPostError {
    #[error(transparent)]
    Status(#[from] StatusError),

    #[error(transparent)]
    Json(#[from] JsonError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl Classified for FetchPostError {
    fn kind(&self) -> ErrorKind {
        match self {
            FetchPostError::Status(e) => e.kind(),
            FetchPostError::Json(e) => e.kind(),
            FetchPostError::Parse(e) => e.kind(),
            FetchPostError::Network(e) => e.kind(),
        }
    }
}

/// Errors that can occur while creating a post.
#[derive(Debug, Error)]
pub enum CreatePostError {
    /// The post's author does not exist.
    #[error(transparent)]
    UserDoesNotExist(#[from] UserDoesNotExistError),

    #[error(transparent)]
    Status(#[from] StatusError),

    #[error(transparent)]
    Json(#[from] JsonError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The submitted post failed its constraints; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Classified for CreatePostError {
    fn kind(&self) -> ErrorKind {
        match self {
            CreatePostError::UserDoesNotExist(e) => e.kind(),
            CreatePostError::Status(e) => e.kind(),
            CreatePostError::Json(e) => e.kind(),
            CreatePostError::Network(e) => e.kind(),
            CreatePostError::Validation(e) => e.kind(),
            CreatePostError::Parse(e) => e.kind(),
        }
    }
}

/// A failed user lookup is reported as-is: same kind, same inner error value.
impl From<FetchUserError> for CreatePostError {
    fn from(error: FetchUserError) -> Self {
        match error {
            FetchUserError::Status(e) => CreatePostError::Status(e),
            FetchUserError::Json(e) => CreatePostError::Json(e),
            FetchUserError::Parse(e) => CreatePostError::Parse(e),
            FetchUserError::Network(e) => CreatePostError::Network(e),
        }
    }
}
