use std::sync::Arc;

use posts_api::domain::{CreatePostInput, Post, UserDto};
use posts_api::framework::mock::MockTransport;
use posts_api::framework::{Schemas, TransportError};
use posts_api::lifecycle::ApiSystem;
use posts_api::post_api::CreatePostError;
use posts_api::result::{Classified, ErrorKind};
use reqwest::{StatusCode, Url};

const LEANNE: &str = r#"{
    "id": 1,
    "name": "Leanne Graham",
    "username": "Bret",
    "email": "Sincere@april.biz"
}"#;

fn system(mock: &MockTransport) -> ApiSystem {
    ApiSystem::with_transport(
        Url::parse("https://jsonplaceholder.test").unwrap(),
        Arc::new(mock.clone()),
        Schemas::default(),
    )
}

fn hello_world(user_id: i64) -> CreatePostInput {
    CreatePostInput {
        post: Post::new(user_id, "Hello!", "World! World!"),
    }
}

/// Existing user, POST answers 201 with a valid post: creation succeeds.
#[tokio::test]
async fn test_create_post_end_to_end() {
    let mock = MockTransport::new();
    mock.expect_get("/users/1").respond(StatusCode::OK, LEANNE);
    mock.expect_post("/posts").respond(
        StatusCode::CREATED,
        r#"{"userId":1,"id":101,"title":"Hello!"}"#,
    );

    let result = system(&mock).post_client.create_post(hello_world(1)).await;

    assert!(result.is_ok(), "create_post failed: {:?}", result.err());
    mock.verify();
}

/// The lookup answers `null`: the post is rejected before any POST.
#[tokio::test]
async fn test_create_post_for_unknown_user() {
    let mock = MockTransport::new();
    mock.expect_get("/users/999").respond(StatusCode::OK, "null");

    let error = system(&mock)
        .post_client
        .create_post(hello_world(999))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::UserDoesNotExist);
    assert_eq!(error.to_string(), "UserId: 999 does not exist");
    assert_eq!(mock.request_count(), 1);
    mock.verify();
}

#[tokio::test]
async fn test_create_post_server_error() {
    let mock = MockTransport::new();
    mock.expect_get("/users/1").respond(StatusCode::OK, LEANNE);
    mock.expect_post("/posts")
        .respond(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");

    let error = system(&mock)
        .post_client
        .create_post(hello_world(1))
        .await
        .unwrap_err();

    match error {
        CreatePostError::Status(inner) => {
            assert_eq!(inner.message, "Failed to create Post");
            assert_eq!(inner.status, StatusCode::INTERNAL_SERVER_ERROR);
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

/// Each single constraint violation fails validation without touching the network.
#[tokio::test]
async fn test_invalid_posts_never_reach_the_network() {
    let invalid = [
        Post::new(0, "Hello!", "World! World!"),
        Post::new(1, "Hell", "World! World!"),
        Post::new(1, "Hello!", "World!!!!"),
    ];

    for post in invalid {
        let mock = MockTransport::new();
        let error = system(&mock)
            .post_client
            .create_post(CreatePostInput { post: post.clone() })
            .await
            .unwrap_err();

        assert!(
            matches!(error, CreatePostError::Validation(_)),
            "{post:?} should fail validation, got {error:?}"
        );
        assert_eq!(mock.request_count(), 0, "{post:?} must not be sent");
    }
}

/// A failed lookup is returned as the lookup reported it.
#[tokio::test]
async fn test_user_lookup_errors_propagate_unchanged() {
    let mock = MockTransport::new();
    mock.expect_get("/users/1").respond(StatusCode::OK, "<!doctype html>");
    let lookup_error = system(&mock)
        .user_client
        .fetch_user_by_id(1)
        .await
        .unwrap_err();

    let mock = MockTransport::new();
    mock.expect_get("/users/1").respond(StatusCode::OK, "<!doctype html>");
    let create_error = system(&mock)
        .post_client
        .create_post(hello_world(1))
        .await
        .unwrap_err();

    assert_eq!(create_error.kind(), lookup_error.kind());
    assert_eq!(create_error.to_string(), lookup_error.to_string());
    assert_eq!(create_error.to_string(), "Failed to parse User JSON");
}

#[tokio::test]
async fn test_user_lookup_transport_failure_is_network_error() {
    let mock = MockTransport::new();
    mock.expect_get("/users/1")
        .fail(TransportError::Connect("connection refused".to_owned()));

    let error = system(&mock)
        .post_client
        .create_post(hello_world(1))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Network);
}

#[tokio::test]
async fn test_fetch_user_and_post() {
    let mock = MockTransport::new();
    mock.expect_get("/users/1").respond(StatusCode::OK, LEANNE);
    mock.expect_get("/posts/1").respond(
        StatusCode::OK,
        r#"{"userId":1,"id":1,"title":"sunt aut facere","body":"quia et suscipit"}"#,
    );
    let system = system(&mock);

    let user = system.user_client.fetch_user_by_id(1).await.unwrap();
    let post = system.post_client.fetch_post(1).await.unwrap();

    assert_eq!(user, Some(UserDto::new(1, "Leanne Graham")));
    assert_eq!(post.title, "sunt aut facere");
    mock.verify();
}

/// Positional arrays never stand in for objects, on either leg of creation.
#[tokio::test]
async fn test_array_bodies_are_parse_errors() {
    let mock = MockTransport::new();
    mock.expect_get("/users/1").respond(StatusCode::OK, r#"[1, "Leanne"]"#);

    let error = system(&mock)
        .post_client
        .create_post(hello_world(1))
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Parse);
    assert_eq!(error.to_string(), "Failed to validate User JSON");

    let mock = MockTransport::new();
    mock.expect_get("/users/1").respond(StatusCode::OK, LEANNE);
    mock.expect_post("/posts")
        .respond(StatusCode::CREATED, r#"[1, 101, "Hello!"]"#);

    let error = system(&mock)
        .post_client
        .create_post(hello_world(1))
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Parse);
    assert_eq!(error.to_string(), "Failed to validate Post response schema");
    mock.verify();
}

/// Emoji count as two units each, so three of them make a valid title.
#[tokio::test]
async fn test_emoji_title_is_long_enough() {
    let mock = MockTransport::new();
    mock.expect_get("/users/1").respond(StatusCode::OK, LEANNE);
    mock.expect_post("/posts").respond(
        StatusCode::CREATED,
        r#"{"userId":1.0,"id":101.0,"title":"👋👋👋"}"#,
    );

    let result = system(&mock)
        .post_client
        .create_post(CreatePostInput {
            post: Post::new(1, "👋👋👋", "World! World!"),
        })
        .await;

    assert!(result.is_ok(), "create_post failed: {:?}", result.err());
    mock.verify();
}
