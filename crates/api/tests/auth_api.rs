//! HTTP-level integration tests for signup, login, token refresh, logout,
//! and the current-user endpoint.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_owner, create_student, get_auth, login, multipart_body,
    multipart_body_with_files, post_json, post_json_auth, post_multipart, test_upload_dir,
    TEST_PASSWORD,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

/// Student signup with all required fields returns 201 and the user record.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_student_success(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;

    let body = multipart_body(&[
        ("name", "New Student"),
        ("email", "new.student@test.com"),
        ("password", "a-strong-password"),
        ("phone", "9000000001"),
        ("userType", "STUDENT"),
        ("university", "iit_bombay"),
        ("stream", "ENGINEERING"),
        ("serviceType", "BOTH"),
    ]);
    let response = post_multipart(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "User created successfully");
    assert_eq!(json["user"]["email"], "new.student@test.com");
    assert_eq!(json["user"]["role"], "STUDENT");
    // Password hash must never leak.
    assert!(json["user"].get("password_hash").is_none());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

/// Missing required fields are rejected with 400 before any write.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_missing_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;

    let body = multipart_body(&[("name", "Incomplete"), ("email", "incomplete@test.com")]);
    let response = post_multipart(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required fields");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

/// Re-using an email returns 400 and leaves a single row behind.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_duplicate_email(pool: PgPool) {
    create_student(&pool, "taken@test.com").await;
    let app = common::build_test_app(pool.clone()).await;

    let body = multipart_body(&[
        ("name", "Second User"),
        ("email", "taken@test.com"),
        ("password", "whatever-password"),
        ("phone", "9000000002"),
        ("userType", "STUDENT"),
    ]);
    let response = post_multipart(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "User already exists with this email");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = 'taken@test.com'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

/// Owner signup with listing fields creates the user and a starter
/// listing atomically.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_owner_with_starter_listing(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;

    let body = multipart_body(&[
        ("name", "New Owner"),
        ("email", "new.owner@test.com"),
        ("password", "a-strong-password"),
        ("phone", "9000000003"),
        ("userType", "PROPERTY_OWNER"),
        ("businessType", "INDIVIDUAL"),
        ("propertyType", "PG"),
        ("location", "Powai, Mumbai"),
        ("price", "450"),
        ("minStay", "3"),
        ("roomType", "SINGLE"),
        ("nearbyUniversity", "IIT Bombay"),
    ]);
    let response = post_multipart(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let (daily_rate, min_stay): (i64, i32) = sqlx::query_as(
        "SELECT daily_rate, min_stay FROM accommodation_listings WHERE property_name = 'New Owner'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(daily_rate, 450);
    assert_eq!(min_stay, 3);
}

/// Image parts on an owner signup are written to the upload directory and
/// their public URLs land in the starter listing's photos.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_owner_images_saved_into_photos(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;

    let fields = [
        ("name", "Photo Owner"),
        ("email", "photo.owner@test.com"),
        ("password", "a-strong-password"),
        ("phone", "9000000005"),
        ("userType", "PROPERTY_OWNER"),
        ("propertyType", "PG"),
        ("location", "Powai, Mumbai"),
        ("price", "400"),
        ("roomType", "SINGLE"),
        ("nearbyUniversity", "IIT Bombay"),
    ];
    let files: [(&str, &[u8]); 2] = [
        ("front.jpg", b"front-of-house-bytes"),
        ("room.jpg", b"room-bytes"),
    ];
    let body = multipart_body_with_files(&fields, &files);
    let response = post_multipart(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let (photos,): (Vec<String>,) = sqlx::query_as(
        "SELECT photos FROM accommodation_listings WHERE property_name = 'Photo Owner'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(photos.len(), 2);
    for url in &photos {
        assert!(
            url.starts_with("/uploads/"),
            "photo URL should be public: {url}"
        );
        // The file behind the URL must exist on disk.
        let filename = url.strip_prefix("/uploads/").unwrap();
        let path = test_upload_dir().join(filename);
        assert!(
            tokio::fs::try_exists(&path).await.unwrap(),
            "uploaded file missing: {}",
            path.display()
        );
    }
    assert!(photos[0].ends_with("-front.jpg"));
    assert!(photos[1].ends_with("-room.jpg"));
}

/// An invalid daily rate rejects the whole signup; no user row survives.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_owner_invalid_price_creates_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;

    let body = multipart_body(&[
        ("name", "Bad Price Owner"),
        ("email", "bad.price@test.com"),
        ("password", "a-strong-password"),
        ("phone", "9000000004"),
        ("userType", "PROPERTY_OWNER"),
        ("propertyType", "PG"),
        ("location", "Powai, Mumbai"),
        ("price", "-20"),
    ]);
    let response = post_multipart(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid daily rate. Please enter a valid amount.");

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(users, 0);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns tokens and user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let user = create_student(&pool, "login@test.com").await;
    let app = common::build_test_app(pool).await;

    let json = login(app, "login@test.com", TEST_PASSWORD).await;

    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["email"], "login@test.com");
    assert_eq!(json["user"]["role"], "STUDENT");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    create_student(&pool, "wrongpw@test.com").await;
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({ "email": "wrongpw@test.com", "password": "incorrect" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid email or password");
}

/// Login with a nonexistent email returns 401 with the same message as a
/// wrong password, so account existence is not revealed.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({ "email": "ghost@test.com", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid email or password");
}

// ---------------------------------------------------------------------------
// Refresh / logout / me
// ---------------------------------------------------------------------------

/// A valid refresh token returns new tokens; the old one is revoked.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_token_refresh_rotates(pool: PgPool) {
    create_student(&pool, "refresher@test.com").await;
    let app = common::build_test_app(pool).await;

    let login_json = login(app.clone(), "refresher@test.com", TEST_PASSWORD).await;
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app.clone(), "/api/v1/auth/refresh", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = body_json(response).await;
    assert!(refreshed["access_token"].is_string());
    assert_ne!(refreshed["refresh_token"], login_json["refresh_token"]);

    // The old token no longer works.
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// An unknown refresh token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_invalid_token(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({ "refresh_token": "not-a-real-token" });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout revokes every session for the user.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_sessions(pool: PgPool) {
    create_student(&pool, "logout@test.com").await;
    let app = common::build_test_app(pool).await;

    let login_json = login(app.clone(), "logout@test.com", TEST_PASSWORD).await;
    let access_token = login_json["access_token"].as_str().unwrap();
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/auth/logout",
        access_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// GET /auth/me returns the caller's user record without the hash.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_current_user(pool: PgPool) {
    let user = create_student(&pool, "me@test.com").await;
    let app = common::build_test_app(pool).await;

    let login_json = login(app.clone(), "me@test.com", TEST_PASSWORD).await;
    let token = login_json["access_token"].as_str().unwrap();

    let response = get_auth(app, "/api/v1/auth/me", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], user.id);
    assert_eq!(json["email"], "me@test.com");
    assert!(json.get("password_hash").is_none());
}

/// GET /auth/me without a token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = common::get(app, "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Owners can log in too; the role claim carries through.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_owner_role(pool: PgPool) {
    create_owner(&pool, "owner.login@test.com").await;
    let app = common::build_test_app(pool).await;

    let json = login(app, "owner.login@test.com", TEST_PASSWORD).await;
    assert_eq!(json["user"]["role"], "PROPERTY_OWNER");
}
