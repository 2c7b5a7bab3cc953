//! Review handlers. Any authenticated user may leave a review against
//! exactly one listing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use campusnest_core::error::CoreError;
use campusnest_core::types::DbId;
use campusnest_db::models::review::{CreateReview, Review};
use campusnest_db::repositories::{AccommodationRepo, FoodServiceRepo, ReviewRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub rating: i32,
    pub comment: Option<String>,
    pub accommodation_listing_id: Option<DbId>,
    pub food_service_listing_id: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct CreateReviewResponse {
    pub review: Review,
    pub message: String,
}

/// POST /api/v1/reviews
pub async fn create_review(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<CreateReviewResponse>)> {
    if !(1..=5).contains(&payload.rating) {
        return Err(AppError::Core(CoreError::Validation(
            "Rating must be between 1 and 5".into(),
        )));
    }

    // Exactly one listing reference, mirroring the table's CHECK.
    match (
        payload.accommodation_listing_id,
        payload.food_service_listing_id,
    ) {
        (Some(id), None) => {
            AccommodationRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "accommodation listing",
                    id,
                }))?;
        }
        (None, Some(id)) => {
            FoodServiceRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "food service listing",
                    id,
                }))?;
        }
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "A review must reference exactly one listing".into(),
            )))
        }
    }

    let input = CreateReview {
        rating: payload.rating,
        comment: payload.comment,
        user_id: user.user_id,
        accommodation_listing_id: payload.accommodation_listing_id,
        food_service_listing_id: payload.food_service_listing_id,
    };

    let review = ReviewRepo::create(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateReviewResponse {
            review,
            message: "Review submitted successfully".to_string(),
        }),
    ))
}
