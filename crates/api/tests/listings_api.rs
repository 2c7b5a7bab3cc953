//! HTTP-level integration tests for listing search and creation.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_owner, create_student, create_test_accommodation, get, login_token,
    post_json, post_json_auth,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Accommodation: creation and RBAC
// ---------------------------------------------------------------------------

/// An owner can create a listing; the response carries the record.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_accommodation(pool: PgPool) {
    create_owner(&pool, "owner@test.com").await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), "owner@test.com").await;

    let json = create_test_accommodation(app, &token, "Sunrise PG", 9000).await;

    assert_eq!(json["message"], "Accommodation listing created successfully");
    assert_eq!(json["accommodation"]["propertyName"], "Sunrise PG");
    assert_eq!(json["accommodation"]["monthlyRent"], 9000);
    assert_eq!(json["accommodation"]["availability"], true);
}

/// Creating a listing without a token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_accommodation_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({
        "propertyName": "No Auth PG",
        "monthlyRent": 5000,
        "roomType": "SINGLE",
        "accommodationType": "PG",
        "address": "Somewhere",
        "contactInfo": "9876540001",
    });
    let response = post_json(app, "/api/v1/listings/accommodation", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A student cannot create a listing (403).
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_accommodation_rejects_students(pool: PgPool) {
    create_student(&pool, "student@test.com").await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), "student@test.com").await;

    let body = serde_json::json!({
        "propertyName": "Student PG",
        "monthlyRent": 5000,
        "roomType": "SINGLE",
        "accommodationType": "PG",
        "address": "Somewhere",
        "contactInfo": "9876540001",
    });
    let response = post_json_auth(app, "/api/v1/listings/accommodation", &token, body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Only property owners can create listings");
}

/// A listing with neither monthly rent nor daily rate is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_accommodation_requires_some_rate(pool: PgPool) {
    create_owner(&pool, "owner@test.com").await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), "owner@test.com").await;

    let body = serde_json::json!({
        "propertyName": "Rateless PG",
        "roomType": "SINGLE",
        "accommodationType": "PG",
        "address": "Somewhere",
        "contactInfo": "9876540001",
    });
    let response = post_json_auth(app, "/api/v1/listings/accommodation", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Accommodation: search
// ---------------------------------------------------------------------------

/// Results come back cheapest first with owner contact and reviews embedded.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_sorted_by_rent_with_relations(pool: PgPool) {
    let owner = create_owner(&pool, "owner@test.com").await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), "owner@test.com").await;

    create_test_accommodation(app.clone(), &token, "Pricey PG", 20000).await;
    create_test_accommodation(app.clone(), &token, "Cheap PG", 6000).await;
    create_test_accommodation(app.clone(), &token, "Mid PG", 11000).await;

    let response = get(app, "/api/v1/listings/accommodation").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let listings = json["accommodations"].as_array().unwrap();
    assert_eq!(listings.len(), 3);
    assert_eq!(listings[0]["propertyName"], "Cheap PG");
    assert_eq!(listings[1]["propertyName"], "Mid PG");
    assert_eq!(listings[2]["propertyName"], "Pricey PG");

    // Owner contact is embedded; reviews default to an empty array.
    assert_eq!(listings[0]["owner"]["id"], owner.id);
    assert_eq!(listings[0]["owner"]["email"], "owner@test.com");
    assert!(listings[0]["reviews"].as_array().unwrap().is_empty());
}

/// maxRent excludes listings above the ceiling.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_max_rent_filter(pool: PgPool) {
    create_owner(&pool, "owner@test.com").await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), "owner@test.com").await;

    create_test_accommodation(app.clone(), &token, "Affordable", 7000).await;
    create_test_accommodation(app.clone(), &token, "Expensive", 30000).await;

    let response = get(app, "/api/v1/listings/accommodation?maxRent=10000").await;
    let json = body_json(response).await;

    let listings = json["accommodations"].as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["propertyName"], "Affordable");
}

/// The rent floor excludes cheaper monthly listings.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_min_rent_filter(pool: PgPool) {
    create_owner(&pool, "owner@test.com").await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), "owner@test.com").await;

    create_test_accommodation(app.clone(), &token, "Affordable", 7000).await;
    create_test_accommodation(app.clone(), &token, "Expensive", 30000).await;

    let response = get(app, "/api/v1/listings/accommodation?minRent=10000").await;
    let json = body_json(response).await;

    let listings = json["accommodations"].as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["propertyName"], "Expensive");
}

/// Rent bounds also match daily-rate-only listings, comparing the rate
/// against bound / 30.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_rent_bounds_cover_daily_rate_listings(pool: PgPool) {
    create_owner(&pool, "owner@test.com").await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), "owner@test.com").await;

    // 300/day sits between the 5000 and 10000 monthly bounds (166.7 and
    // 333.3 per day).
    let body = serde_json::json!({
        "propertyName": "Daily Rate PG",
        "dailyRate": 300,
        "roomType": "SINGLE",
        "accommodationType": "PG",
        "address": "Test Street 2",
        "contactInfo": "9876540001",
        "nearbyUniversities": ["IIT Bombay"],
        "amenities": [],
    });
    let response =
        post_json_auth(app.clone(), "/api/v1/listings/accommodation", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(app.clone(), "/api/v1/listings/accommodation?maxRent=10000").await;
    let json = body_json(response).await;
    let listings = json["accommodations"].as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["propertyName"], "Daily Rate PG");

    let response = get(app.clone(), "/api/v1/listings/accommodation?maxRent=5000").await;
    let json = body_json(response).await;
    assert!(json["accommodations"].as_array().unwrap().is_empty());

    let response = get(app.clone(), "/api/v1/listings/accommodation?minRent=8000").await;
    let json = body_json(response).await;
    assert_eq!(json["accommodations"].as_array().unwrap().len(), 1);

    let response = get(app, "/api/v1/listings/accommodation?minRent=12000").await;
    let json = body_json(response).await;
    assert!(json["accommodations"].as_array().unwrap().is_empty());
}

/// University filter matches against nearby_universities entries.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_university_filter(pool: PgPool) {
    create_owner(&pool, "owner@test.com").await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), "owner@test.com").await;

    // Helper pins nearbyUniversities to ["IIT Bombay"].
    create_test_accommodation(app.clone(), &token, "Near IIT", 9000).await;

    let response = get(app.clone(), "/api/v1/listings/accommodation?university=IIT%20Bombay").await;
    let json = body_json(response).await;
    assert_eq!(json["accommodations"].as_array().unwrap().len(), 1);

    let response = get(app, "/api/v1/listings/accommodation?university=NIT%20Trichy").await;
    let json = body_json(response).await;
    assert!(json["accommodations"].as_array().unwrap().is_empty());
}

/// The `all` placeholder from dropdowns is treated as no filter, and an
/// unknown enum value is a 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_sentinel_and_invalid_enum(pool: PgPool) {
    create_owner(&pool, "owner@test.com").await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), "owner@test.com").await;
    create_test_accommodation(app.clone(), &token, "Any PG", 9000).await;

    let response = get(app.clone(), "/api/v1/listings/accommodation?roomType=all").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["accommodations"].as_array().unwrap().len(), 1);

    let response = get(app, "/api/v1/listings/accommodation?roomType=PENTHOUSE").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Amenity filtering requires every named amenity.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_amenities_filter(pool: PgPool) {
    create_owner(&pool, "owner@test.com").await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), "owner@test.com").await;

    // Helper pins amenities to ["wifi", "ac"].
    create_test_accommodation(app.clone(), &token, "Wifi AC PG", 9000).await;

    let response = get(app.clone(), "/api/v1/listings/accommodation?amenities=wifi,ac").await;
    let json = body_json(response).await;
    assert_eq!(json["accommodations"].as_array().unwrap().len(), 1);

    let response = get(app, "/api/v1/listings/accommodation?amenities=wifi,parking").await;
    let json = body_json(response).await;
    assert!(json["accommodations"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Food services
// ---------------------------------------------------------------------------

async fn create_test_food_service(
    app: axum::Router,
    token: &str,
    name: &str,
    price_range: &str,
) -> serde_json::Value {
    let body = serde_json::json!({
        "serviceName": name,
        "serviceType": "MESS",
        "priceRange": price_range,
        "address": "Canteen Road 5",
        "contactInfo": "9876540002",
        "cuisineTypes": ["North Indian"],
        "vegOptions": true,
        "deliveryAvailable": true,
    });
    let response = post_json_auth(app, "/api/v1/listings/food", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Owners can create food listings; students cannot.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_food_service(pool: PgPool) {
    create_owner(&pool, "owner@test.com").await;
    create_student(&pool, "student@test.com").await;
    let app = common::build_test_app(pool).await;

    let owner_token = login_token(app.clone(), "owner@test.com").await;
    let json = create_test_food_service(app.clone(), &owner_token, "Veg Mess", "BUDGET").await;
    assert_eq!(json["foodService"]["serviceName"], "Veg Mess");
    assert_eq!(json["message"], "Food service listing created successfully");

    let student_token = login_token(app.clone(), "student@test.com").await;
    let body = serde_json::json!({
        "serviceName": "Student Mess",
        "serviceType": "MESS",
        "priceRange": "BUDGET",
        "address": "Somewhere",
        "contactInfo": "9876540002",
    });
    let response = post_json_auth(app, "/api/v1/listings/food", &student_token, body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Food search sorts budget listings first and honors boolean flags.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_food_search_sorted_and_filtered(pool: PgPool) {
    create_owner(&pool, "owner@test.com").await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), "owner@test.com").await;

    create_test_food_service(app.clone(), &token, "Fancy Mess", "PREMIUM").await;
    create_test_food_service(app.clone(), &token, "Frugal Mess", "BUDGET").await;

    let response = get(app.clone(), "/api/v1/listings/food").await;
    let json = body_json(response).await;
    let listings = json["foodServices"].as_array().unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0]["serviceName"], "Frugal Mess");

    // priceRange filter narrows to one.
    let response = get(app.clone(), "/api/v1/listings/food?priceRange=PREMIUM").await;
    let json = body_json(response).await;
    assert_eq!(json["foodServices"].as_array().unwrap().len(), 1);

    // Only the literal "true" activates boolean filters.
    let response = get(app, "/api/v1/listings/food?deliveryAvailable=true").await;
    let json = body_json(response).await;
    assert_eq!(json["foodServices"].as_array().unwrap().len(), 2);
}
