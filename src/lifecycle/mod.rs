//! Runtime wiring and the top-level entry point.
//!
//! # Main Components
//!
//! - [`ApiSystem`] - Builds the transport and wires the resource clients
//! - [`Handler`] - Runs post creation for an end user and decides what each failure means
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod api_system;
pub mod handler;
pub mod tracing;

pub use api_system::*;
pub use handler::*;
pub use self::tracing::*;
