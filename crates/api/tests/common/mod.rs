#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use catalog_core::memory::InMemoryCatalogStore;
use catalog_core::models::{NewProfile, Profile, Title};
use http_body_util::BodyExt;
use tower::ServiceExt;

use catalog_api::auth::jwt::{issue_token, JwtConfig};
use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults and no webhook secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            token_expiry_mins: 15,
        },
        webhook_secret: None,
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<InMemoryCatalogStore>) -> Router {
    build_test_app_with_config(store, test_config())
}

pub fn build_test_app_with_config(
    store: Arc<InMemoryCatalogStore>,
    config: ServerConfig,
) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Seeded catalog: titles Engineer and Designer, profiles Ann Lee
/// (Engineer) and Bob Ray (Designer).
pub struct Seed {
    pub store: Arc<InMemoryCatalogStore>,
    pub engineer: Title,
    pub designer: Title,
    pub ann: Profile,
    pub bob: Profile,
}

pub async fn seed() -> Seed {
    let store = Arc::new(InMemoryCatalogStore::new());
    let engineer = store
        .insert_title("Engineer", Some("Builds things"), Some("#2563eb"))
        .await;
    let designer = store.insert_title("Designer", None, None).await;
    let ann = store
        .insert_profile(NewProfile::new("Ann", "Lee", "ann@x.com", "ann").with_title(engineer.id))
        .await
        .unwrap();
    let bob = store
        .insert_profile(NewProfile::new("Bob", "Ray", "bob@y.com", "bob").with_title(designer.id))
        .await
        .unwrap();
    Seed {
        store,
        engineer,
        designer,
        ann,
        bob,
    }
}

/// A valid Bearer token for the given email.
pub fn token_for(email: &str) -> String {
    issue_token("user_test", email, &test_config().jwt).unwrap()
}

/// Send a GET request to the given URI.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send an authenticated GET request.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send an authenticated PUT with a JSON body.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send an unauthenticated PUT with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST with raw bytes and optional extra headers.
pub async fn post_raw(
    app: Router,
    uri: &str,
    body: Vec<u8>,
    headers: &[(&str, &str)],
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
