//! HTTP-level integration tests for reviews.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_owner, create_student, create_test_accommodation, get, login_token,
    post_json, post_json_auth,
};
use sqlx::PgPool;

async fn setup(pool: &PgPool) -> (axum::Router, String, i64) {
    create_student(pool, "reviewer@test.com").await;
    create_owner(pool, "owner@test.com").await;
    let app = common::build_test_app(pool.clone()).await;

    let owner_token = login_token(app.clone(), "owner@test.com").await;
    let listing = create_test_accommodation(app.clone(), &owner_token, "Reviewed PG", 9000).await;
    let listing_id = listing["accommodation"]["id"].as_i64().unwrap();

    let student_token = login_token(app.clone(), "reviewer@test.com").await;
    (app, student_token, listing_id)
}

/// A review is created and then surfaces on the listing with the
/// author's name.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_review_and_embed(pool: PgPool) {
    let (app, token, listing_id) = setup(&pool).await;

    let body = serde_json::json!({
        "rating": 4,
        "comment": "Clean rooms, decent wifi.",
        "accommodationListingId": listing_id,
    });
    let response = post_json_auth(app.clone(), "/api/v1/reviews", &token, body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["review"]["rating"], 4);
    assert_eq!(json["message"], "Review submitted successfully");

    let response = get(app, "/api/v1/listings/accommodation").await;
    let json = body_json(response).await;
    let reviews = json["accommodations"][0]["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["comment"], "Clean rooms, decent wifi.");
    assert_eq!(reviews[0]["userName"], "Test Student");
}

/// Ratings outside 1..=5 are rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_review_rating_bounds(pool: PgPool) {
    let (app, token, listing_id) = setup(&pool).await;

    for rating in [0, 6, -1] {
        let body = serde_json::json!({
            "rating": rating,
            "accommodationListingId": listing_id,
        });
        let response = post_json_auth(app.clone(), "/api/v1/reviews", &token, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

/// A review must reference exactly one listing.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_review_exactly_one_listing(pool: PgPool) {
    let (app, token, listing_id) = setup(&pool).await;

    let body = serde_json::json!({
        "rating": 5,
        "accommodationListingId": listing_id,
        "foodServiceListingId": 42,
    });
    let response = post_json_auth(app.clone(), "/api/v1/reviews", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = serde_json::json!({ "rating": 5 });
    let response = post_json_auth(app, "/api/v1/reviews", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Anonymous review attempts are rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_review_requires_auth(pool: PgPool) {
    let (app, _, listing_id) = setup(&pool).await;

    let body = serde_json::json!({
        "rating": 5,
        "accommodationListingId": listing_id,
    });
    let response = post_json(app, "/api/v1/reviews", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
