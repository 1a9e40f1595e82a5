//! End-to-end tests for /api/users against PostgreSQL

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{content_type, json_body, TestApp};

const FIELDS: [&str; 5] = ["firstname", "lastname", "email", "city", "language"];

fn unique_user(firstname: &str) -> Value {
    json!({
        "firstname": firstname,
        "lastname": "Martin",
        "email": format!("{}@wild.co", uuid::Uuid::new_v4()),
        "city": "Paris",
        "language": "French",
    })
}

fn assert_fields_match(stored: &Value, expected: &Value) {
    for field in FIELDS {
        assert_eq!(stored[field], expected[field], "field {field} differs");
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn list_returns_all_users() {
    let app = TestApp::spawn().await;
    app.insert_user(&unique_user("Listed")).await;

    let response = app.send("GET", "/api/users", None).await;
    assert!(content_type(&response).contains("json"));
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert!(!body.as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn get_returns_one_user() {
    let app = TestApp::spawn().await;
    let id = app.insert_user(&unique_user("Single")).await;

    let response = app.send("GET", &format!("/api/users/{id}"), None).await;
    assert!(content_type(&response).contains("json"));
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["id"], id);
}

#[tokio::test]
#[ignore = "requires database"]
async fn get_missing_user_is_404() {
    let app = TestApp::spawn().await;

    let response = app.send("GET", "/api/users/0", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn post_creates_user() {
    let app = TestApp::spawn().await;
    let new_user = unique_user("Marie");

    let response = app.send("POST", "/api/users", Some(new_user.clone())).await;
    assert!(content_type(&response).contains("json"));
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    let id = body["id"].as_i64().expect("id must be a number");

    let stored = app.stored_user(id).await.expect("row must exist");
    assert_fields_match(&stored, &new_user);
}

#[tokio::test]
#[ignore = "requires database"]
async fn post_with_missing_props_is_500() {
    let app = TestApp::spawn().await;

    let response = app
        .send("POST", "/api/users", Some(json!({"firstname": "Marie"})))
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
#[ignore = "requires database"]
async fn put_edits_user() {
    let app = TestApp::spawn().await;
    let id = app.insert_user(&unique_user("Renaud")).await;
    let updated = json!({
        "firstname": "Gabin",
        "lastname": "Chameroy",
        "email": "gabin.chameroy@example.com",
        "city": "Barcelone",
        "language": "Francais",
    });

    let uri = format!("/api/users/{id}");
    let response = app.send("PUT", &uri, Some(updated.clone())).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let stored = app.stored_user(id).await.expect("row must exist");
    assert_fields_match(&stored, &updated);

    // Same request again: still 204, same row
    let response = app.send("PUT", &uri, Some(updated.clone())).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.stored_user(id).await, Some(stored));
}

#[tokio::test]
#[ignore = "requires database"]
async fn put_with_missing_props_is_500() {
    let app = TestApp::spawn().await;
    let original = unique_user("Renaud");
    let id = app.insert_user(&original).await;

    let response = app
        .send("PUT", &format!("/api/users/{id}"), Some(json!({"firstname": "Renaud"})))
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let stored = app.stored_user(id).await.expect("row must exist");
    assert_fields_match(&stored, &original);
}

#[tokio::test]
#[ignore = "requires database"]
async fn put_missing_user_is_404() {
    let app = TestApp::spawn().await;

    let response = app
        .send("PUT", "/api/users/0", Some(unique_user("Renaud")))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.stored_user(0).await, None);
}

#[tokio::test]
#[ignore = "requires database"]
async fn health_reports_database() {
    let app = TestApp::spawn().await;

    let response = app.send("GET", "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["database"], "ok");
}
