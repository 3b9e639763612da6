//! Type-safe wrappers around [`RestClient`](rest_client::RestClient).

pub mod post_client;
pub mod rest_client;
pub mod user_client;

pub use post_client::*;
pub use rest_client::*;
pub use user_client::*;
