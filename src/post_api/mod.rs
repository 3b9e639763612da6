//! Post reads and validated post creation.

pub mod error;

pub use error::*;

use crate::clients::{PostClient, RestClient, UserClient};
use crate::framework::Schemas;

/// Creates a post client over `rest`.
///
/// `user_client` resolves the author of every post before it is created.
pub fn new(rest: RestClient, user_client: UserClient, schemas: &Schemas) -> PostClient {
    PostClient::new(
        rest,
        user_client,
        schemas.post.clone(),
        schemas.post_dto.clone(),
    )
}
