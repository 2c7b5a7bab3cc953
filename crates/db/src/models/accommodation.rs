//! Accommodation listing models, DTOs, and the search filter.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use campusnest_core::types::{DbId, Timestamp};

/// Room layout offered by a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "room_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Single,
    Double,
    Sharing,
    Studio,
    Apartment,
}

impl RoomType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "SINGLE" => Some(RoomType::Single),
            "DOUBLE" => Some(RoomType::Double),
            "SHARING" => Some(RoomType::Sharing),
            "STUDIO" => Some(RoomType::Studio),
            "APARTMENT" => Some(RoomType::Apartment),
            _ => None,
        }
    }
}

/// Category of the property itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "accommodation_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccommodationType {
    Pg,
    Hostel,
    Flat,
    Room,
    Apartment,
}

impl AccommodationType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "PG" => Some(AccommodationType::Pg),
            "HOSTEL" => Some(AccommodationType::Hostel),
            "FLAT" => Some(AccommodationType::Flat),
            "ROOM" => Some(AccommodationType::Room),
            "APARTMENT" => Some(AccommodationType::Apartment),
            _ => None,
        }
    }
}

/// Food arrangement offered with the accommodation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "food_preference", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoodPreference {
    Veg,
    NonVeg,
    Both,
}

impl FoodPreference {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "VEG" => Some(FoodPreference::Veg),
            "NON_VEG" => Some(FoodPreference::NonVeg),
            "BOTH" => Some(FoodPreference::Both),
            _ => None,
        }
    }
}

/// A row from the `accommodation_listings` table.
///
/// A listing carries either a `monthly_rent` or a `daily_rate` (with
/// `min_stay`); both columns are nullable and rent filters check each
/// against its own scale.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationListing {
    pub id: DbId,
    pub property_name: String,
    pub photos: Vec<String>,
    pub monthly_rent: Option<i64>,
    pub daily_rate: Option<i64>,
    pub min_stay: Option<i32>,
    pub deposit: Option<i64>,
    pub availability: bool,
    pub amenities: Vec<String>,
    pub room_type: RoomType,
    pub accommodation_type: AccommodationType,
    pub living_preferences: Vec<String>,
    pub food_preference: FoodPreference,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub contact_info: String,
    pub description: Option<String>,
    pub nearby_universities: Vec<String>,
    pub distance_from_uni: Option<f64>,
    pub owner_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new accommodation listing.
#[derive(Debug, Clone)]
pub struct CreateAccommodationListing {
    pub property_name: String,
    pub photos: Vec<String>,
    pub monthly_rent: Option<i64>,
    pub daily_rate: Option<i64>,
    pub min_stay: Option<i32>,
    pub deposit: Option<i64>,
    pub amenities: Vec<String>,
    pub room_type: RoomType,
    pub accommodation_type: AccommodationType,
    pub living_preferences: Vec<String>,
    pub food_preference: FoodPreference,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub contact_info: String,
    pub description: Option<String>,
    pub nearby_universities: Vec<String>,
    pub distance_from_uni: Option<f64>,
    pub owner_id: DbId,
}

/// Filter dimensions for accommodation search.
///
/// Every field is optional; an empty filter returns all available
/// listings. Rent bounds test `monthly_rent` directly and `daily_rate`
/// against the bound divided by 30.
#[derive(Debug, Clone, Default)]
pub struct AccommodationFilter {
    /// Must appear in `nearby_universities`.
    pub university: Option<String>,
    pub min_rent: Option<i64>,
    pub max_rent: Option<i64>,
    pub room_type: Option<RoomType>,
    pub accommodation_type: Option<AccommodationType>,
    /// Listing must contain every amenity named here.
    pub amenities: Vec<String>,
    /// Clamped to 1..=100 by the repository; defaults to 50.
    pub limit: Option<i64>,
    /// Clamped to >= 0 by the repository.
    pub offset: Option<i64>,
}
