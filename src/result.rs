//! # Results and Error Kinds
//!
//! Every operation in this crate returns an [`ApiResult`]: `Ok` carries the
//! value, `Err` carries one variant of a *closed* error enum declared for that
//! operation. There is no catch-all error type and no panicking path, so the
//! full set of failures is visible in each signature and a `match` over it is
//! checked for exhaustiveness by the compiler.
//!
//! ## Composition
//!
//! Each failure category is a standalone type in [`crate::error`]. Operation
//! enums wrap those types, and an operation that calls another converts the
//! callee's enum into its own with `From`, moving the inner value across
//! untouched. An error therefore keeps its identity as it propagates:
//!
//! ```rust,ignore
//! let user = self.users.fetch_user_by_id(post.user_id).await?; // FetchUserError -> CreatePostError
//! ```
//!
//! ## Discriminator
//!
//! [`Classified::kind`] names the category of any error without matching on
//! the concrete enum. The top-level handler uses it to decide what to tell the
//! user, and telemetry uses it as a stable label.

use std::fmt;

/// Success/failure container returned by every client operation.
pub type ApiResult<T, E> = Result<T, E>;

/// The failure categories a client operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Non-2xx HTTP response.
    Status,
    /// Response body was not valid JSON.
    Json,
    /// JSON did not match the expected schema.
    Parse,
    /// The request never produced a readable response.
    Network,
    /// Caller-supplied input failed its schema.
    Validation,
    /// The referenced user has no record.
    UserDoesNotExist,
}

impl ErrorKind {
    /// Stable name used in logs and telemetry.
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::Status => "StatusError",
            ErrorKind::Json => "JsonError",
            ErrorKind::Parse => "ParseError",
            ErrorKind::Network => "NetworkError",
            ErrorKind::Validation => "ValidationError",
            ErrorKind::UserDoesNotExist => "UserDoesNotExistError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An error that belongs to exactly one [`ErrorKind`].
pub trait Classified: std::error::Error + Send + Sync + 'static {
    fn kind(&self) -> ErrorKind;
}
