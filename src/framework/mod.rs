//! Collaborator interfaces the clients are built on.
//!
//! # Main Components
//!
//! - [`HttpTransport`] - Sends one request, returns status and body text
//! - [`ReqwestTransport`] - The production transport
//! - [`Schema`] / [`Schemas`] - Validation of untyped JSON into domain values
//! - [`TransportError`] - Failures below the HTTP status line
//!
//! # Testing
//!
//! See [`mock`] module for a scripted transport that needs no network.

pub mod error;
pub mod http;
pub mod mock;
pub mod schema;
pub mod transport;

pub use error::*;
pub use http::*;
pub use schema::*;
pub use transport::*;
