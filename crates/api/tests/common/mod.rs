//! Shared helpers for HTTP-level integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use campusnest_api::auth::jwt::JwtConfig;
use campusnest_api::auth::password::hash_password;
use campusnest_api::config::{OllamaConfig, ServerConfig};
use campusnest_api::router::build_app_router;
use campusnest_api::state::AppState;
use campusnest_db::models::user::{CreateUser, ServicePreference, StudyStream, User, UserRole};
use campusnest_db::repositories::UserRepo;
use campusnest_ollama::OllamaClient;

/// Build a test `ServerConfig` with safe defaults.
///
/// The Ollama URL points at an unroutable local port so chat tests
/// exercise the failure path deterministically, and uploads go to a
/// per-process temp directory.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: test_upload_dir(),
        jwt: JwtConfig {
            secret: "integration-test-secret-do-not-use".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        ollama: OllamaConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            model: "llama3".to_string(),
            timeout_secs: 1,
        },
    }
}

/// Per-process upload directory under the OS temp dir.
pub fn test_upload_dir() -> PathBuf {
    std::env::temp_dir().join(format!("campusnest-test-uploads-{}", std::process::id()))
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub async fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .expect("upload dir should be creatable");

    let ollama = Arc::new(OllamaClient::new(
        config.ollama.base_url.clone(),
        config.ollama.model.clone(),
        config.ollama.timeout_secs,
    ));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ollama,
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Multipart helpers (signup endpoint)
// ---------------------------------------------------------------------------

pub const MULTIPART_BOUNDARY: &str = "----campusnest-test-boundary";

/// Encode text fields as a multipart/form-data body.
pub fn multipart_body(fields: &[(&str, &str)]) -> Vec<u8> {
    multipart_body_with_files(fields, &[])
}

/// Encode text fields plus `images` file parts as a multipart/form-data
/// body. Each file is `(file_name, bytes)`.
pub fn multipart_body_with_files(fields: &[(&str, &str)], files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    for (file_name, bytes) in files {
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"images\"; filename=\"{file_name}\"\r\n\
                 Content-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(app: Router, uri: &str, body: Vec<u8>) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub const TEST_PASSWORD: &str = "test_password_123!";

/// Create a student directly in the database.
pub async fn create_student(pool: &PgPool, email: &str) -> User {
    let input = CreateUser {
        name: "Test Student".to_string(),
        email: email.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        phone: "9876543210".to_string(),
        role: UserRole::Student,
        university: Some("iit_bombay".to_string()),
        stream: Some(StudyStream::Engineering),
        service_preference: Some(ServicePreference::Both),
        business_type: None,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Create a property owner directly in the database.
pub async fn create_owner(pool: &PgPool, email: &str) -> User {
    let input = CreateUser {
        name: "Test Owner".to_string(),
        email: email.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        phone: "9876540001".to_string(),
        role: UserRole::PropertyOwner,
        university: None,
        stream: None,
        service_preference: None,
        business_type: None,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Log in via the API and return the parsed JSON response.
pub async fn login(app: Router, email: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

/// Log in and return just the access token.
pub async fn login_token(app: Router, email: &str) -> String {
    let json = login(app, email, TEST_PASSWORD).await;
    json["access_token"].as_str().unwrap().to_string()
}

/// Create an accommodation listing via the API as the given owner token.
pub async fn create_test_accommodation(
    app: Router,
    token: &str,
    name: &str,
    rent: i64,
) -> serde_json::Value {
    let body = serde_json::json!({
        "propertyName": name,
        "monthlyRent": rent,
        "roomType": "SINGLE",
        "accommodationType": "PG",
        "address": "Test Street 1",
        "contactInfo": "9876540001",
        "nearbyUniversities": ["IIT Bombay"],
        "amenities": ["wifi", "ac"],
    });
    let response = post_json_auth(app, "/api/v1/listings/accommodation", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
