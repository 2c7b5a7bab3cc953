//! Food-service listing handlers: public search and owner-only create.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use campusnest_core::error::CoreError;
use campusnest_core::types::DbId;
use campusnest_db::models::food_service::{
    CreateFoodServiceListing, FoodServiceFilter, FoodServiceListing, FoodServiceType, PriceRange,
};
use campusnest_db::models::review::ReviewWithAuthor;
use campusnest_db::models::user::OwnerContact;
use campusnest_db::repositories::{FoodServiceRepo, ReviewRepo, UserRepo};

use super::accommodation::{non_sentinel, split_csv};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireOwner;
use crate::state::AppState;

/// Query parameters accepted by `GET /listings/food`.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FoodServiceQuery {
    pub service_type: Option<String>,
    pub price_range: Option<String>,
    /// Comma-separated; listing must offer every one.
    pub cuisine_type: Option<String>,
    /// The literal string `true` filters to veg-friendly listings.
    pub veg_options: Option<String>,
    pub delivery_available: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// A listing with its owner contact and reviews embedded.
#[derive(Debug, Serialize)]
pub struct FoodServiceWithRelations {
    #[serde(flatten)]
    pub listing: FoodServiceListing,
    pub owner: Option<OwnerContact>,
    pub reviews: Vec<ReviewWithAuthor>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFoodServicesResponse {
    pub food_services: Vec<FoodServiceWithRelations>,
}

/// GET /api/v1/listings/food
pub async fn list_food_services(
    State(state): State<AppState>,
    Query(params): Query<FoodServiceQuery>,
) -> AppResult<Json<ListFoodServicesResponse>> {
    let filter = build_filter(params)?;
    let listings = FoodServiceRepo::search(&state.pool, &filter).await?;

    let ids: Vec<DbId> = listings.iter().map(|l| l.id).collect();
    let owner_ids: Vec<DbId> = listings.iter().map(|l| l.owner_id).collect();

    let mut owners: HashMap<DbId, OwnerContact> = UserRepo::owner_contacts(&state.pool, &owner_ids)
        .await?
        .into_iter()
        .map(|o| (o.id, o))
        .collect();

    let mut reviews: HashMap<DbId, Vec<ReviewWithAuthor>> = HashMap::new();
    for review in ReviewRepo::list_for_food_services(&state.pool, &ids).await? {
        if let Some(listing_id) = review.food_service_listing_id {
            reviews.entry(listing_id).or_default().push(review);
        }
    }

    let food_services = listings
        .into_iter()
        .map(|listing| FoodServiceWithRelations {
            owner: owners.remove(&listing.owner_id),
            reviews: reviews.remove(&listing.id).unwrap_or_default(),
            listing,
        })
        .collect();

    Ok(Json(ListFoodServicesResponse { food_services }))
}

fn build_filter(params: FoodServiceQuery) -> AppResult<FoodServiceFilter> {
    let service_type = match non_sentinel(params.service_type) {
        Some(value) => Some(FoodServiceType::parse(&value).ok_or_else(|| {
            AppError::Core(CoreError::Validation("Invalid service type".into()))
        })?),
        None => None,
    };
    let price_range = match non_sentinel(params.price_range) {
        Some(value) => Some(PriceRange::parse(&value).ok_or_else(|| {
            AppError::Core(CoreError::Validation("Invalid price range".into()))
        })?),
        None => None,
    };

    Ok(FoodServiceFilter {
        service_type,
        price_range,
        cuisine_types: split_csv(params.cuisine_type),
        veg_options: flag(params.veg_options),
        delivery_available: flag(params.delivery_available),
        limit: params.limit,
        offset: params.offset,
    })
}

/// Only the literal `true` activates a boolean filter; anything else
/// (including `false`) leaves the dimension unfiltered, matching the
/// frontend's checkbox behavior.
fn flag(value: Option<String>) -> Option<bool> {
    match value.as_deref() {
        Some("true") => Some(true),
        _ => None,
    }
}

/// Request body for creating a food-service listing.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodServiceRequest {
    #[validate(length(min = 1, message = "Service name is required"))]
    pub service_name: String,
    #[serde(default)]
    pub photos: Vec<String>,
    pub service_type: FoodServiceType,
    pub price_range: PriceRange,
    pub menu_details: Option<String>,
    #[serde(default)]
    pub cuisine_types: Vec<String>,
    #[serde(default)]
    pub veg_options: bool,
    #[serde(default)]
    pub non_veg_options: bool,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub contact_info: String,
    pub description: Option<String>,
    pub operating_hours: Option<String>,
    #[serde(default)]
    pub delivery_available: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodServiceResponse {
    pub food_service: FoodServiceListing,
    pub message: String,
}

/// POST /api/v1/listings/food (property owners only)
pub async fn create_food_service(
    State(state): State<AppState>,
    RequireOwner(owner): RequireOwner,
    Json(payload): Json<CreateFoodServiceRequest>,
) -> AppResult<(StatusCode, Json<CreateFoodServiceResponse>)> {
    payload
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let input = CreateFoodServiceListing {
        service_name: payload.service_name,
        photos: payload.photos,
        service_type: payload.service_type,
        price_range: payload.price_range,
        menu_details: payload.menu_details,
        cuisine_types: payload.cuisine_types,
        veg_options: payload.veg_options,
        non_veg_options: payload.non_veg_options,
        address: payload.address,
        latitude: payload.latitude,
        longitude: payload.longitude,
        contact_info: payload.contact_info,
        description: payload.description,
        operating_hours: payload.operating_hours,
        delivery_available: payload.delivery_available,
        owner_id: owner.user_id,
    };

    let food_service = FoodServiceRepo::create(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateFoodServiceResponse {
            food_service,
            message: "Food service listing created successfully".to_string(),
        }),
    ))
}
