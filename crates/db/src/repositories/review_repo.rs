//! Repository for the `reviews` table.

use sqlx::PgPool;

use campusnest_core::types::DbId;

use crate::models::review::{CreateReview, Review, ReviewWithAuthor};

const COLUMNS: &str = "id, rating, comment, user_id, accommodation_listing_id, \
     food_service_listing_id, created_at, updated_at";

/// Column list for the author-joined projection.
const JOINED_COLUMNS: &str = "r.id, r.rating, r.comment, r.user_id, u.name AS user_name, \
     r.accommodation_listing_id, r.food_service_listing_id, r.created_at";

/// Provides create/list operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review, returning the created row.
    ///
    /// The exactly-one-listing invariant is validated by the handler and
    /// backstopped by a CHECK constraint.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (rating, comment, user_id, accommodation_listing_id,
                                  food_service_listing_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.rating)
            .bind(&input.comment)
            .bind(input.user_id)
            .bind(input.accommodation_listing_id)
            .bind(input.food_service_listing_id)
            .fetch_one(pool)
            .await
    }

    /// Reviews for a set of accommodation listings, with author names.
    pub async fn list_for_accommodations(
        pool: &PgPool,
        listing_ids: &[DbId],
    ) -> Result<Vec<ReviewWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM reviews r
             JOIN users u ON u.id = r.user_id
             WHERE r.accommodation_listing_id = ANY($1)
             ORDER BY r.created_at DESC"
        );
        sqlx::query_as::<_, ReviewWithAuthor>(&query)
            .bind(listing_ids)
            .fetch_all(pool)
            .await
    }

    /// Reviews for a set of food-service listings, with author names.
    pub async fn list_for_food_services(
        pool: &PgPool,
        listing_ids: &[DbId],
    ) -> Result<Vec<ReviewWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM reviews r
             JOIN users u ON u.id = r.user_id
             WHERE r.food_service_listing_id = ANY($1)
             ORDER BY r.created_at DESC"
        );
        sqlx::query_as::<_, ReviewWithAuthor>(&query)
            .bind(listing_ids)
            .fetch_all(pool)
            .await
    }
}
