//! Shared harness for database-backed tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p usersvc-server -- --ignored

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, Response};
use axum::Router;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use usersvc_server::db::DEFAULT_MAX_CONNECTIONS;
use usersvc_server::{build_router, AppState, PgUserStore, ServerConfig};

const SCHEMA: &str = include_str!("../../schema.sql");

pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let store = PgUserStore::connect(&url, DEFAULT_MAX_CONNECTIONS)
            .await
            .expect("connect failed");
        sqlx::raw_sql(SCHEMA)
            .execute(store.pool())
            .await
            .expect("schema apply failed");

        let pool = store.pool().clone();
        let state = AppState::new(store);
        let router = build_router(state, &ServerConfig::default());

        Self { router, pool }
    }

    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Insert directly, bypassing the HTTP layer.
    pub async fn insert_user(&self, user: &Value) -> i64 {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO users (firstname, lastname, email, city, language) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(user["firstname"].as_str())
        .bind(user["lastname"].as_str())
        .bind(user["email"].as_str())
        .bind(user["city"].as_str())
        .bind(user["language"].as_str())
        .fetch_one(&self.pool)
        .await
        .expect("insert failed");
        id
    }

    /// Read the stored row as JSON, bypassing the HTTP layer.
    pub async fn stored_user(&self, id: i64) -> Option<Value> {
        let row: Option<(i64, String, String, String, String, String)> = sqlx::query_as(
            "SELECT id, firstname, lastname, email, city, language FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .expect("select failed");

        row.map(|(id, firstname, lastname, email, city, language)| {
            serde_json::json!({
                "id": id,
                "firstname": firstname,
                "lastname": lastname,
                "email": email,
                "city": city,
                "language": language,
            })
        })
    }
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn content_type(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
