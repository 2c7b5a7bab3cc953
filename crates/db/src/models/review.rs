//! Review models. A review belongs to one user and exactly one listing
//! (accommodation or food service, never both) — enforced by a CHECK
//! constraint and re-validated in the handler.

use serde::Serialize;
use sqlx::FromRow;

use campusnest_core::types::{DbId, Timestamp};

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: DbId,
    pub rating: i32,
    pub comment: Option<String>,
    pub user_id: DbId,
    pub accommodation_listing_id: Option<DbId>,
    pub food_service_listing_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A review joined with its author's display name, as embedded in
/// listing responses.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWithAuthor {
    pub id: DbId,
    pub rating: i32,
    pub comment: Option<String>,
    pub user_id: DbId,
    pub user_name: String,
    pub accommodation_listing_id: Option<DbId>,
    pub food_service_listing_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for creating a new review.
#[derive(Debug, Clone)]
pub struct CreateReview {
    pub rating: i32,
    pub comment: Option<String>,
    pub user_id: DbId,
    pub accommodation_listing_id: Option<DbId>,
    pub food_service_listing_id: Option<DbId>,
}
