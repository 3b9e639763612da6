use std::sync::Arc;

use reqwest::Url;
use tracing::info;

use crate::clients::{PostClient, RestClient, UserClient};
use crate::config::{ClientConfig, ConfigError};
use crate::framework::{HttpTransport, ReqwestTransport, Schemas};
use crate::{post_api, user_api};

/// Wires the transport, schemas and resource clients together.
///
/// `ApiSystem` is responsible for:
/// - **Transport**: building the reqwest-backed transport from [`ClientConfig`],
///   or accepting an injected one
/// - **Dependency Wiring**: handing the [`UserClient`] to the [`PostClient`],
///   which resolves post authors through it
///
/// # Example
///
/// ```ignore
/// let system = ApiSystem::new(&ClientConfig::parse(DEFAULT_BASE_URL)?)?;
///
/// let post = system.post_client.fetch_post(1).await?;
/// system.post_client.create_post(input).await?;
/// ```
#[derive(Clone)]
pub struct ApiSystem {
    /// Client for the `posts` resource
    pub post_client: PostClient,

    /// Client for the `users` resource
    pub user_client: UserClient,
}

impl ApiSystem {
    /// Builds a system that talks HTTP through `reqwest`, with default schemas.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] when the reqwest client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::new(config.timeout(), config.user_agent())?;
        info!(
            base_url = %config.base_url(),
            timeout_ms = u64::try_from(config.timeout().as_millis()).unwrap_or(u64::MAX),
            "HTTP transport ready"
        );
        Ok(Self::with_transport(
            config.base_url().clone(),
            Arc::new(transport),
            Schemas::default(),
        ))
    }

    /// Builds a system over any transport and schema set.
    pub fn with_transport(
        base_url: Url,
        transport: Arc<dyn HttpTransport>,
        schemas: Schemas,
    ) -> Self {
        let rest = RestClient::new(transport, base_url);
        let user_client = user_api::new(rest.clone(), &schemas);
        let post_client = post_api::new(rest, user_client.clone(), &schemas);

        Self {
            post_client,
            user_client,
        }
    }
}
