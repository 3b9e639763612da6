//! # Posts API CLI
//!
//! Creates one post through the [`Handler`](posts_api::lifecycle::Handler):
//! 1. Reads configuration from flags and environment.
//! 2. Builds the [`ApiSystem`](posts_api::lifecycle::ApiSystem).
//! 3. Runs post creation and prints the outcome.
//!
//! A network failure ends the process with an error; every other failure is
//! reported with a short message.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use posts_api::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use posts_api::lifecycle::{setup_tracing, ApiSystem, Handler, RunInput, TracingErrorSink};
use tracing::{info, Instrument};

#[derive(Debug, Parser)]
#[command(name = "posts-api", version, about = "Create a post on a JSONPlaceholder-style API")]
struct Args {
    /// Base URL of the remote service.
    #[arg(long, env = "POSTS_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout, in seconds.
    #[arg(long, env = "POSTS_API_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// `User-Agent` header sent with every request.
    #[arg(long, env = "POSTS_API_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Author of the post.
    #[arg(long)]
    user_id: i64,

    #[arg(long)]
    title: String,

    #[arg(long)]
    body: String,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let args = Args::parse();

    let config = ClientConfig::parse(&args.base_url)
        .and_then(|config| config.with_timeout(Duration::from_secs(args.timeout_secs)))
        .map(|config| config.with_user_agent(args.user_agent))
        .map_err(|e| e.to_string())?;
    let system = ApiSystem::new(&config).map_err(|e| e.to_string())?;
    let handler = Handler::new(system.post_client, Arc::new(TracingErrorSink));

    let input = RunInput {
        user_id: args.user_id,
        title: args.title,
        body: args.body,
    };

    let span = tracing::info_span!("post_creation");
    let outcome = async {
        info!("Creating post");
        handler.run(input).await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    match outcome.error_message {
        None => println!("Post created"),
        Some(message) => println!("{message}"),
    }
    Ok(())
}
