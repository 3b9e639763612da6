use serde::{Deserialize, Serialize};

use super::number::integral;
use crate::framework::Validate;

/// A user as returned by the remote service.
///
/// Lookups yield `Option<UserDto>`: the service answers JSON `null` for ids it
/// does not know, and that is a valid outcome rather than a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(deserialize_with = "integral")]
    pub id: i64,
    pub name: String,
}

impl UserDto {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Validate for UserDto {}
