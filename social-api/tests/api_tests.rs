mod common;

use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_healthcheck() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/healthcheck")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "message": "OK" }));
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app.register("alice", "s3cret").await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "message": "User registered successfully" }));
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::spawn().await;
    app.register("alice", "s3cret").await;

    let response = app.register("alice", "another").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "error": "Username already exist" }));
}

#[tokio::test]
async fn test_usernames_are_case_sensitive() {
    let app = TestApp::spawn().await;
    app.register("alice", "s3cret").await;

    let response = app.register("Alice", "s3cret").await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_register_rejects_empty_fields() {
    let app = TestApp::spawn().await;

    let response = app.register("", "s3cret").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.register("alice", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_rejects_malformed_body() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/register")
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .post("/register")
        .json(&json!({ "username": "alice" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_returns_token_for_registered_user() {
    let app = TestApp::spawn().await;
    app.register("alice", "s3cret").await;

    let response = app.login("alice", "s3cret").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["token"].as_str().expect("token must be a string");
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user_look_the_same() {
    let app = TestApp::spawn().await;
    app.register("alice", "s3cret").await;

    let wrong_password = app.login("alice", "wrong").await;
    let unknown_user = app.login("bob", "s3cret").await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let wrong_password: serde_json::Value = wrong_password.json().await.unwrap();
    let unknown_user: serde_json::Value = unknown_user.json().await.unwrap();
    assert_eq!(wrong_password, json!({ "error": "Invalid username or password" }));
    assert_eq!(wrong_password, unknown_user);
}

#[tokio::test]
async fn test_posts_require_authorization_header() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/posts")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Authorization token not provided" }));
}

#[tokio::test]
async fn test_posts_reject_unparsable_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/posts", "garbage")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Error while parsing token" }));
}

#[tokio::test]
async fn test_posts_reject_expired_token() {
    let app = TestApp::spawn().await;
    let token = app
        .token_issuer
        .issue_at("alice", Utc::now() - Duration::hours(24) - Duration::seconds(5))
        .unwrap();

    let response = app
        .get_authenticated("/posts", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Invalid or expired token" }));
}

#[tokio::test]
async fn test_posts_reject_tampered_token() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "s3cret").await;

    // The first signature character carries six full bits, so swapping it
    // keeps the segment decodable and only breaks the MAC.
    let signature_start = token.rfind('.').unwrap() + 1;
    let replacement = if token[signature_start..].starts_with('A') { "B" } else { "A" };
    let mut tampered = token.clone();
    tampered.replace_range(signature_start..signature_start + 1, replacement);

    let response = app
        .get_authenticated("/posts", &tampered)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Invalid or expired token" }));
}

#[tokio::test]
async fn test_posts_reject_token_without_bearer_prefix() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "s3cret").await;

    let response = app
        .get("/posts")
        .header("authorization", token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Error while parsing token" }));
}

#[tokio::test]
async fn test_post_crud_flow() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "s3cret").await;

    // Create
    let response = app
        .post_authenticated("/posts", &token)
        .json(&json!({ "title": "Hello", "content": "First post" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: serde_json::Value = response.json().await.unwrap();
    assert_eq!(created["title"], "Hello");
    assert_eq!(created["content"], "First post");
    assert_eq!(created["author"], "alice");
    assert!(created["created_at"].is_string());
    let id = created["id"].as_str().unwrap().to_string();

    // Get
    let response = app
        .get_authenticated(&format!("/posts/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: serde_json::Value = response.json().await.unwrap();
    assert_eq!(fetched, created);

    // Update
    let response = app
        .put_authenticated(&format!("/posts/{}", id), &token)
        .json(&json!({ "title": "Hello again", "content": "Edited" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Post updated successfully" }));

    let fetched: serde_json::Value = app
        .get_authenticated(&format!("/posts/{}", id), &token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["title"], "Hello again");
    assert_eq!(fetched["content"], "Edited");
    assert_eq!(fetched["author"], "alice");

    // Delete
    let response = app
        .delete_authenticated(&format!("/posts/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Post deleted successfully" }));

    let response = app
        .get_authenticated(&format!("/posts/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Post not found" }));
}

#[tokio::test]
async fn test_list_posts_newest_first() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "s3cret").await;

    for title in ["first", "second", "third"] {
        app.post_authenticated("/posts", &token)
            .json(&json!({ "title": title, "content": "body" }))
            .send()
            .await
            .expect("Failed to execute request");
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let response = app
        .get_authenticated("/posts", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let posts: Vec<serde_json::Value> = response.json().await.unwrap();
    let titles: Vec<&str> = posts.iter().map(|p| p["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_post_with_explicit_author() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "s3cret").await;

    let response = app
        .post_authenticated("/posts", &token)
        .json(&json!({ "title": "Guest", "content": "c", "author": "bob" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let created: serde_json::Value = response.json().await.unwrap();
    assert_eq!(created["author"], "bob");
}

#[tokio::test]
async fn test_post_invalid_id_and_missing_post() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice", "s3cret").await;

    let response = app
        .get_authenticated("/posts/not-an-id", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let missing = uuid::Uuid::now_v7();
    let response = app
        .delete_authenticated(&format!("/posts/{}", missing), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .put_authenticated(&format!("/posts/{}", missing), &token)
        .json(&json!({ "title": "t", "content": "c" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
