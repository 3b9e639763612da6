//! # Post Client
//!
//! Provides a high-level API for the `posts` resource. It wraps a
//! [`RestClient`] and depends on a [`UserClient`]: a post can only be created
//! for a user the service knows about.
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::clients::rest_client::{FailureMessages, RestClient};
use crate::clients::UserClient;
use crate::domain::{CreatePostInput, Post, PostDto};
use crate::error::{NetworkError, UserDoesNotExistError, ValidationError};
use crate::framework::{Diagnostics, HttpRequest, Schema};
use crate::post_api::{CreatePostError, FetchPostError};
use crate::result::ApiResult;

const FETCH_POST: FailureMessages = FailureMessages {
    network: "Failed to reach posts endpoint",
    status: "Failed to fetch Posts",
    json: "Failed to parse Posts JSON",
    parse: "Failed to validate Posts JSON",
};

const CREATE_POST: FailureMessages = FailureMessages {
    network: "Failed to reach posts endpoint",
    status: "Failed to create Post",
    json: "Failed to parse Post JSON",
    parse: "Failed to validate Post response schema",
};

const INVALID_POST_INPUT: &str = "Failed to validate Post input";

/// Client for the `posts` resource.
#[derive(Clone)]
pub struct PostClient {
    inner: RestClient,
    users: UserClient,
    post_schema: Arc<dyn Schema<Post>>,
    post_dto_schema: Arc<dyn Schema<PostDto>>,
}

impl PostClient {
    pub fn new(
        inner: RestClient,
        users: UserClient,
        post_schema: Arc<dyn Schema<Post>>,
        post_dto_schema: Arc<dyn Schema<PostDto>>,
    ) -> Self {
        Self {
            inner,
            users,
            post_schema,
            post_dto_schema,
        }
    }

    /// Fetch the post at `/posts/{user_id}`.
    ///
    /// The path segment addresses a single post by its id even though the
    /// argument is named for a user; callers relying on this should pass a
    /// post id.
    #[instrument(skip(self))]
    pub async fn fetch_post(&self, user_id: i64) -> ApiResult<PostDto, FetchPostError> {
        let id_segment = user_id.to_string();
        let url = self
            .inner
            .endpoint(&["posts", id_segment.as_str()])
            .map_err(|cause| NetworkError::new(FETCH_POST.network, cause))?;

        debug!("Sending request");
        let response = self.inner.send(HttpRequest::get(url), &FETCH_POST).await?;
        let post = RestClient::decode::<_, FetchPostError>(
            &response,
            self.post_dto_schema.as_ref(),
            &FETCH_POST,
        )?;

        info!(post_id = post.id, "Post fetched");
        Ok(post)
    }

    /// Validate a post, confirm its author exists, then create it.
    ///
    /// Steps run strictly in order and the first failure is returned:
    /// 1. input constraints ([`CreatePostError::Validation`], nothing is sent);
    /// 2. author lookup (its failure is returned unchanged);
    /// 3. unknown author ([`CreatePostError::UserDoesNotExist`], no POST is sent);
    /// 4. the POST itself, classified by status, JSON and response schema.
    #[instrument(skip(self, input), fields(user_id = input.post.user_id))]
    pub async fn create_post(&self, input: CreatePostInput) -> ApiResult<(), CreatePostError> {
        debug!(?input, "create_post called");
        let post = self.validate_input(&input.post)?;

        let user = self.users.fetch_user_by_id(post.user_id).await?;
        if user.is_none() {
            return Err(UserDoesNotExistError::new(post.user_id).into());
        }

        let body = serde_json::to_string(&post).map_err(|error| {
            ValidationError::new(INVALID_POST_INPUT, Diagnostics::single("", error.to_string()))
        })?;
        let url = self
            .inner
            .endpoint(&["posts"])
            .map_err(|cause| NetworkError::new(CREATE_POST.network, cause))?;

        debug!("Sending request");
        let response = self
            .inner
            .send(HttpRequest::post_json(url, body), &CREATE_POST)
            .await?;
        let created = RestClient::decode::<_, CreatePostError>(
            &response,
            self.post_dto_schema.as_ref(),
            &CREATE_POST,
        )?;

        info!(post_id = created.id, "Post created");
        Ok(())
    }

    fn validate_input(&self, post: &Post) -> Result<Post, ValidationError> {
        let value = serde_json::to_value(post).map_err(|error| {
            ValidationError::new(INVALID_POST_INPUT, Diagnostics::single("", error.to_string()))
        })?;
        self.post_schema
            .validate(&value)
            .map_err(|diagnostics| ValidationError::new(INVALID_POST_INPUT, diagnostics))
    }
}
