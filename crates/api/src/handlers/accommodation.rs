//! Accommodation listing handlers: public search and owner-only create.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use campusnest_core::error::CoreError;
use campusnest_core::types::DbId;
use campusnest_db::models::accommodation::{
    AccommodationFilter, AccommodationListing, AccommodationType, CreateAccommodationListing,
    FoodPreference, RoomType,
};
use campusnest_db::models::review::ReviewWithAuthor;
use campusnest_db::models::user::OwnerContact;
use campusnest_db::repositories::{AccommodationRepo, ReviewRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireOwner;
use crate::state::AppState;

/// Query parameters accepted by `GET /listings/accommodation`.
///
/// The frontend sends `all` for dropdowns left at their default; that
/// sentinel means "no filter" for every dimension.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationQuery {
    pub university: Option<String>,
    pub min_rent: Option<i64>,
    pub max_rent: Option<i64>,
    pub room_type: Option<String>,
    pub accommodation_type: Option<String>,
    /// Comma-separated; listing must have every one.
    pub amenities: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// A listing with its owner contact and reviews embedded.
#[derive(Debug, Serialize)]
pub struct AccommodationWithRelations {
    #[serde(flatten)]
    pub listing: AccommodationListing,
    pub owner: Option<OwnerContact>,
    pub reviews: Vec<ReviewWithAuthor>,
}

#[derive(Debug, Serialize)]
pub struct ListAccommodationsResponse {
    pub accommodations: Vec<AccommodationWithRelations>,
}

/// GET /api/v1/listings/accommodation
pub async fn list_accommodations(
    State(state): State<AppState>,
    Query(params): Query<AccommodationQuery>,
) -> AppResult<Json<ListAccommodationsResponse>> {
    let filter = build_filter(params)?;
    let listings = AccommodationRepo::search(&state.pool, &filter).await?;

    let ids: Vec<DbId> = listings.iter().map(|l| l.id).collect();
    let owner_ids: Vec<DbId> = listings.iter().map(|l| l.owner_id).collect();

    let mut owners: HashMap<DbId, OwnerContact> = UserRepo::owner_contacts(&state.pool, &owner_ids)
        .await?
        .into_iter()
        .map(|o| (o.id, o))
        .collect();

    let mut reviews: HashMap<DbId, Vec<ReviewWithAuthor>> = HashMap::new();
    for review in ReviewRepo::list_for_accommodations(&state.pool, &ids).await? {
        if let Some(listing_id) = review.accommodation_listing_id {
            reviews.entry(listing_id).or_default().push(review);
        }
    }

    let accommodations = listings
        .into_iter()
        .map(|listing| AccommodationWithRelations {
            owner: owners.remove(&listing.owner_id),
            reviews: reviews.remove(&listing.id).unwrap_or_default(),
            listing,
        })
        .collect();

    Ok(Json(ListAccommodationsResponse { accommodations }))
}

fn build_filter(params: AccommodationQuery) -> AppResult<AccommodationFilter> {
    let room_type = match non_sentinel(params.room_type) {
        Some(value) => Some(RoomType::parse(&value).ok_or_else(|| {
            AppError::Core(CoreError::Validation("Invalid room type".into()))
        })?),
        None => None,
    };
    let accommodation_type = match non_sentinel(params.accommodation_type) {
        Some(value) => Some(AccommodationType::parse(&value).ok_or_else(|| {
            AppError::Core(CoreError::Validation("Invalid accommodation type".into()))
        })?),
        None => None,
    };

    Ok(AccommodationFilter {
        university: non_sentinel(params.university),
        min_rent: params.min_rent,
        max_rent: params.max_rent,
        room_type,
        accommodation_type,
        amenities: split_csv(params.amenities),
        limit: params.limit,
        offset: params.offset,
    })
}

/// Drop empty values and the frontend's `all` placeholder.
pub(crate) fn non_sentinel(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

pub(crate) fn split_csv(value: Option<String>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Request body for creating a listing.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccommodationRequest {
    #[validate(length(min = 1, message = "Property name is required"))]
    pub property_name: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[validate(range(min = 1, message = "Monthly rent must be positive"))]
    pub monthly_rent: Option<i64>,
    #[validate(range(min = 1, message = "Daily rate must be positive"))]
    pub daily_rate: Option<i64>,
    #[validate(range(min = 1, message = "Minimum stay must be at least 1 day"))]
    pub min_stay: Option<i32>,
    pub deposit: Option<i64>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub room_type: RoomType,
    pub accommodation_type: AccommodationType,
    #[serde(default)]
    pub living_preferences: Vec<String>,
    pub food_preference: Option<FoodPreference>,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub contact_info: String,
    pub description: Option<String>,
    #[serde(default)]
    pub nearby_universities: Vec<String>,
    pub distance_from_uni: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CreateAccommodationResponse {
    pub accommodation: AccommodationListing,
    pub message: String,
}

/// POST /api/v1/listings/accommodation (property owners only)
pub async fn create_accommodation(
    State(state): State<AppState>,
    RequireOwner(owner): RequireOwner,
    Json(payload): Json<CreateAccommodationRequest>,
) -> AppResult<(StatusCode, Json<CreateAccommodationResponse>)> {
    payload
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    if payload.monthly_rent.is_none() && payload.daily_rate.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "Either monthly rent or daily rate is required".into(),
        )));
    }

    let input = CreateAccommodationListing {
        property_name: payload.property_name,
        photos: payload.photos,
        monthly_rent: payload.monthly_rent,
        daily_rate: payload.daily_rate,
        min_stay: payload.min_stay,
        deposit: payload.deposit,
        amenities: payload.amenities,
        room_type: payload.room_type,
        accommodation_type: payload.accommodation_type,
        living_preferences: payload.living_preferences,
        food_preference: payload.food_preference.unwrap_or(FoodPreference::Both),
        address: payload.address,
        latitude: payload.latitude,
        longitude: payload.longitude,
        contact_info: payload.contact_info,
        description: payload.description,
        nearby_universities: payload.nearby_universities,
        distance_from_uni: payload.distance_from_uni,
        owner_id: owner.user_id,
    };

    let accommodation = AccommodationRepo::create(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAccommodationResponse {
            accommodation,
            message: "Accommodation listing created successfully".to_string(),
        }),
    ))
}
