//! User lookups: the dependency every post creation resolves first.

pub mod error;

pub use error::*;

use crate::clients::{RestClient, UserClient};
use crate::framework::Schemas;

/// Creates a user client over `rest` using the nullable user schema.
pub fn new(rest: RestClient, schemas: &Schemas) -> UserClient {
    UserClient::new(rest, schemas.user_dto.clone())
}
