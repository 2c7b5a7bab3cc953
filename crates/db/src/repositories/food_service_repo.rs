//! Repository for the `food_service_listings` table.

use sqlx::{PgPool, Postgres, QueryBuilder};

use campusnest_core::types::DbId;

use crate::models::food_service::{
    CreateFoodServiceListing, FoodServiceFilter, FoodServiceListing,
};
use crate::repositories::{clamp_limit, clamp_offset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, service_name, photos, service_type, price_range, menu_details, \
     cuisine_types, veg_options, non_veg_options, address, latitude, longitude, contact_info, \
     description, operating_hours, delivery_available, owner_id, created_at, updated_at";

/// Provides create/search operations for food-service listings.
pub struct FoodServiceRepo;

impl FoodServiceRepo {
    /// Insert a new listing, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFoodServiceListing,
    ) -> Result<FoodServiceListing, sqlx::Error> {
        let query = format!(
            "INSERT INTO food_service_listings
                (service_name, photos, service_type, price_range, menu_details, cuisine_types,
                 veg_options, non_veg_options, address, latitude, longitude, contact_info,
                 description, operating_hours, delivery_available, owner_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FoodServiceListing>(&query)
            .bind(&input.service_name)
            .bind(&input.photos)
            .bind(input.service_type)
            .bind(input.price_range)
            .bind(&input.menu_details)
            .bind(&input.cuisine_types)
            .bind(input.veg_options)
            .bind(input.non_veg_options)
            .bind(&input.address)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.contact_info)
            .bind(&input.description)
            .bind(&input.operating_hours)
            .bind(input.delivery_available)
            .bind(input.owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a listing by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FoodServiceListing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM food_service_listings WHERE id = $1");
        sqlx::query_as::<_, FoodServiceListing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Search listings with the given filter, budget-first.
    pub async fn search(
        pool: &PgPool,
        filter: &FoodServiceFilter,
    ) -> Result<Vec<FoodServiceListing>, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT {COLUMNS} FROM food_service_listings WHERE TRUE"
        ));

        if let Some(service_type) = filter.service_type {
            qb.push(" AND service_type = ");
            qb.push_bind(service_type);
        }

        if let Some(price_range) = filter.price_range {
            qb.push(" AND price_range = ");
            qb.push_bind(price_range);
        }

        if !filter.cuisine_types.is_empty() {
            qb.push(" AND cuisine_types @> ");
            qb.push_bind(&filter.cuisine_types);
        }

        if filter.veg_options == Some(true) {
            qb.push(" AND veg_options = TRUE");
        }

        if filter.delivery_available == Some(true) {
            qb.push(" AND delivery_available = TRUE");
        }

        // Enum declaration order puts BUDGET before PREMIUM.
        qb.push(" ORDER BY price_range ASC, created_at DESC");
        qb.push(" LIMIT ");
        qb.push_bind(clamp_limit(filter.limit));
        qb.push(" OFFSET ");
        qb.push_bind(clamp_offset(filter.offset));

        qb.build_query_as::<FoodServiceListing>()
            .fetch_all(pool)
            .await
    }
}
