//! # Posts API
//!
//! > **A typed client for the JSONPlaceholder posts API where every failure is a value.**
//!
//! Each operation returns a `Result` whose error is a *closed* enum declared for
//! that operation. Callers see every way a call can fail in its signature, and
//! the compiler checks that they handled all of them.
//!
//! ## 🏗️ Design
//!
//! ### Closed Error Sets
//! The failure categories ([`StatusError`](error::StatusError),
//! [`JsonError`](error::JsonError), [`ParseError`](error::ParseError),
//! [`NetworkError`](error::NetworkError), [`ValidationError`](error::ValidationError),
//! [`UserDoesNotExistError`](error::UserDoesNotExistError)) are standalone types.
//! Each operation's error enum is a union of the ones it can produce, and a
//! callee's error converts into its caller's without being rewrapped. See
//! [`result`] for the full story.
//!
//! ### Three-stage Classification
//! Every response is checked in the same order: HTTP status, then JSON
//! syntax, then schema. Transport failures come first of all and surface as
//! `NetworkError`. The ordering lives in [`RestClient::decode`](clients::RestClient::decode).
//!
//! ### Injected Collaborators
//! The HTTP transport and the schemas are trait objects, so clients can be
//! driven by a scripted [`MockTransport`](framework::mock::MockTransport) or
//! custom [`Schema`](framework::Schema) implementations in tests.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Plumbing ([`framework`])
//! - **Role**: Transport port and reqwest adapter, schema validation, mock transport.
//! - **Key items**: [`HttpTransport`](framework::HttpTransport), [`Schema`](framework::Schema), [`Diagnostics`](framework::Diagnostics).
//!
//! ### 2. The Interface ([`clients`])
//! - **Role**: One client per resource, each operation returning its own error enum.
//! - **Key items**: [`PostClient`](clients::PostClient), [`UserClient`](clients::UserClient).
//!
//! ### 3. The Errors ([`result`], [`error`], [`post_api`], [`user_api`])
//! - **Role**: The taxonomy and the per-operation unions built from it.
//!
//! ### 4. The Entry Point ([`lifecycle`])
//! - **Role**: Wiring ([`ApiSystem`](lifecycle::ApiSystem)) and the top-level
//!   [`Handler`](lifecycle::Handler) that turns failures into user-facing messages.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -- --user-id 1 --title "Hello!" --body "World! World!"
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod post_api;
pub mod result;
pub mod user_api;
