//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate. Every client operation runs inside a span named after it,
//! so a post creation reads as one nested flow.
//!
//! ## Configuration
//!
//! Output uses the compact format without the module prefix
//! (`with_target(false)`). Verbosity comes from `RUST_LOG`:
//!
//! ```bash
//! # Outcomes only
//! RUST_LOG=info cargo run -- --user-id 1 --title "Hello!" --body "World! World!"
//!
//! # Full request payloads and each classification step
//! RUST_LOG=debug cargo run -- --user-id 1 --title "Hello!" --body "World! World!"
//!
//! # Only this crate
//! RUST_LOG=posts_api=debug cargo run -- --user-id 1 --title "Hello!" --body "World! World!"
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! DEBUG run:create_post: create_post called input=CreatePostInput { post: Post { user_id: 1, .. } } user_id=1
//! DEBUG run:create_post:fetch_user_by_id: Sending request id=1
//! DEBUG run:create_post:fetch_user_by_id:send: Response received status=200 bytes=509
//!  INFO run:create_post:fetch_user_by_id: User lookup complete found=true
//! DEBUG run:create_post: Sending request
//! DEBUG run:create_post:send: Response received status=201 bytes=65
//!  INFO run:create_post: Post created post_id=101
//!  INFO run: Post creation succeeded
//! ```
//!
//! Classified failures add a `WARN` at the step that failed, and the handler's
//! error sink adds one `ERROR` event with the kind and cause chain.

/// Initializes the tracing/logging infrastructure for the application.
///
/// Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
