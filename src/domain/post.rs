use serde::{Deserialize, Serialize};

use super::number::integral;
use crate::framework::{Diagnostics, Validate};

/// Minimum accepted `userId`.
pub const MIN_USER_ID: i64 = 1;
/// Minimum title length, in UTF-16 code units.
///
/// The service's own clients measure strings this way, so a character outside
/// the Basic Multilingual Plane (most emoji) counts twice.
pub const MIN_TITLE_LEN: usize = 5;
/// Minimum body length, in UTF-16 code units.
pub const MIN_BODY_LEN: usize = 10;

/// A post as submitted by a caller.
///
/// Only values that passed the [`Validate`] constraints are ever sent to the
/// remote service; see [`PostClient::create_post`](crate::clients::PostClient::create_post).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(deserialize_with = "integral")]
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(user_id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }
}

impl Validate for Post {
    fn validate(&self) -> Result<(), Diagnostics> {
        let mut diagnostics = Diagnostics::new();
        if self.user_id < MIN_USER_ID {
            diagnostics.push(
                "userId",
                format!("must be greater than or equal to {MIN_USER_ID}"),
            );
        }
        if utf16_len(&self.title) < MIN_TITLE_LEN {
            diagnostics.push(
                "title",
                format!("must contain at least {MIN_TITLE_LEN} characters"),
            );
        }
        if utf16_len(&self.body) < MIN_BODY_LEN {
            diagnostics.push(
                "body",
                format!("must contain at least {MIN_BODY_LEN} characters"),
            );
        }
        diagnostics.into_result()
    }
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Payload for [`PostClient::create_post`](crate::clients::PostClient::create_post).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePostInput {
    pub post: Post,
}

/// A post as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    #[serde(deserialize_with = "integral")]
    pub user_id: i64,
    #[serde(deserialize_with = "integral")]
    pub id: i64,
    pub title: String,
}

impl Validate for PostDto {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn accepts_minimal_valid_post() {
        let post = Post::new(1, "Hello", "0123456789");
        assert_eq!(post.validate(), Ok(()));
    }

    #[rstest]
    #[case::user_id_zero(Post::new(0, "Hello!", "World! World!"), "userId")]
    #[case::user_id_negative(Post::new(-4, "Hello!", "World! World!"), "userId")]
    #[case::title_too_short(Post::new(1, "Hey!", "World! World!"), "title")]
    #[case::body_too_short(Post::new(1, "Hello!", "World!"), "body")]
    fn rejects_single_constraint_violation(#[case] post: Post, #[case] field: &str) {
        let diagnostics = post.validate().expect_err("constraint should fail");
        assert_eq!(diagnostics.issues().len(), 1);
        assert_eq!(diagnostics.issues()[0].path, field);
    }

    #[test]
    fn lengths_count_utf16_units_not_bytes() {
        // Five units, ten bytes.
        let post = Post::new(1, "héllö", "ñññññññññ");
        let diagnostics = post.validate().expect_err("body has nine units");
        assert_eq!(diagnostics.issues().len(), 1);
        assert_eq!(diagnostics.issues()[0].path, "body");
    }

    #[test]
    fn characters_outside_the_bmp_count_as_two_units() {
        // Three emoji are six units: long enough for a title.
        let post = Post::new(1, "👋👋👋", "👋👋👋👋👋");
        assert_eq!(post.validate(), Ok(()));

        let post = Post::new(1, "👋👋", "👋👋👋👋");
        let diagnostics = post
            .validate()
            .expect_err("four and eight units are too short");
        let paths: Vec<&str> = diagnostics
            .issues()
            .iter()
            .map(|issue| issue.path.as_str())
            .collect();
        assert_eq!(paths, vec!["title", "body"]);
    }

    #[test]
    fn post_dto_accepts_integral_floats() {
        let dto: PostDto =
            serde_json::from_str(r#"{"userId":1.0,"id":101.0,"title":"Hello!"}"#).unwrap();
        assert_eq!(dto, PostDto { user_id: 1, id: 101, title: "Hello!".to_owned() });
        assert!(serde_json::from_str::<PostDto>(r#"{"userId":1,"id":101.5,"title":"x"}"#).is_err());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(Post::new(1, "Hello!", "World! World!")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "userId": 1, "title": "Hello!", "body": "World! World!" })
        );
    }
}
