//! Food-service listing models, DTOs, and the search filter.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use campusnest_core::types::{DbId, Timestamp};

/// Kind of food vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "food_service_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoodServiceType {
    Mess,
    Canteen,
    TiffinService,
    Restaurant,
    Cafe,
}

impl FoodServiceType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "MESS" => Some(FoodServiceType::Mess),
            "CANTEEN" => Some(FoodServiceType::Canteen),
            "TIFFIN_SERVICE" => Some(FoodServiceType::TiffinService),
            "RESTAURANT" => Some(FoodServiceType::Restaurant),
            "CAFE" => Some(FoodServiceType::Cafe),
            _ => None,
        }
    }
}

/// Categorical price band. Declaration order doubles as sort order
/// (budget first) since Postgres orders enums by declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "price_range", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceRange {
    Budget,
    Moderate,
    Premium,
}

impl PriceRange {
    /// Band name as shown in assistant replies.
    pub fn as_str(self) -> &'static str {
        match self {
            PriceRange::Budget => "BUDGET",
            PriceRange::Moderate => "MODERATE",
            PriceRange::Premium => "PREMIUM",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "BUDGET" => Some(PriceRange::Budget),
            "MODERATE" => Some(PriceRange::Moderate),
            "PREMIUM" => Some(PriceRange::Premium),
            _ => None,
        }
    }
}

/// A row from the `food_service_listings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodServiceListing {
    pub id: DbId,
    pub service_name: String,
    pub photos: Vec<String>,
    pub service_type: FoodServiceType,
    pub price_range: PriceRange,
    pub menu_details: Option<String>,
    pub cuisine_types: Vec<String>,
    pub veg_options: bool,
    pub non_veg_options: bool,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub contact_info: String,
    pub description: Option<String>,
    pub operating_hours: Option<String>,
    pub delivery_available: bool,
    pub owner_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new food-service listing.
#[derive(Debug, Clone)]
pub struct CreateFoodServiceListing {
    pub service_name: String,
    pub photos: Vec<String>,
    pub service_type: FoodServiceType,
    pub price_range: PriceRange,
    pub menu_details: Option<String>,
    pub cuisine_types: Vec<String>,
    pub veg_options: bool,
    pub non_veg_options: bool,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub contact_info: String,
    pub description: Option<String>,
    pub operating_hours: Option<String>,
    pub delivery_available: bool,
    pub owner_id: DbId,
}

/// Filter dimensions for food-service search.
#[derive(Debug, Clone, Default)]
pub struct FoodServiceFilter {
    pub service_type: Option<FoodServiceType>,
    pub price_range: Option<PriceRange>,
    /// Listing must offer every cuisine named here.
    pub cuisine_types: Vec<String>,
    /// `Some(true)` filters to veg-friendly listings; `None` ignores.
    pub veg_options: Option<bool>,
    pub delivery_available: Option<bool>,
    /// Clamped to 1..=100 by the repository; defaults to 50.
    pub limit: Option<i64>,
    /// Clamped to >= 0 by the repository.
    pub offset: Option<i64>,
}
