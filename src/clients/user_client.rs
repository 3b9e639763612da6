use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::clients::rest_client::{FailureMessages, RestClient};
use crate::domain::UserDto;
use crate::error::NetworkError;
use crate::framework::{HttpRequest, Schema};
use crate::result::ApiResult;
use crate::user_api::FetchUserError;

const FETCH_USER: FailureMessages = FailureMessages {
    network: "Failed to reach users endpoint",
    status: "Failed to fetch User",
    json: "Failed to parse User JSON",
    parse: "Failed to validate User JSON",
};

/// Client for the `users` resource.
#[derive(Clone)]
pub struct UserClient {
    inner: RestClient,
    schema: Arc<dyn Schema<Option<UserDto>>>,
}

impl UserClient {
    pub fn new(inner: RestClient, schema: Arc<dyn Schema<Option<UserDto>>>) -> Self {
        Self { inner, schema }
    }

    /// Fetch a user by id.
    ///
    /// Returns `Ok(None)` when the service answers JSON `null`: the id has no
    /// record, which is a valid outcome and not a failure.
    #[instrument(skip(self))]
    pub async fn fetch_user_by_id(&self, id: i64) -> ApiResult<Option<UserDto>, FetchUserError> {
        let id_segment = id.to_string();
        let url = self
            .inner
            .endpoint(&["users", id_segment.as_str()])
            .map_err(|cause| NetworkError::new(FETCH_USER.network, cause))?;

        debug!("Sending request");
        let response = self.inner.send(HttpRequest::get(url), &FETCH_USER).await?;
        let user =
            RestClient::decode::<_, FetchUserError>(&response, self.schema.as_ref(), &FETCH_USER)?;

        info!(found = user.is_some(), "User lookup complete");
        Ok(user)
    }
}
