//! Repository for the `accommodation_listings` table.

use sqlx::{PgExecutor, PgPool, Postgres, QueryBuilder};

use campusnest_core::types::DbId;

use crate::models::accommodation::{
    AccommodationFilter, AccommodationListing, CreateAccommodationListing,
};
use crate::repositories::{clamp_limit, clamp_offset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, property_name, photos, monthly_rent, daily_rate, min_stay, deposit, \
     availability, amenities, room_type, accommodation_type, living_preferences, \
     food_preference, address, latitude, longitude, contact_info, description, \
     nearby_universities, distance_from_uni, owner_id, created_at, updated_at";

/// Provides create/search operations for accommodation listings.
pub struct AccommodationRepo;

impl AccommodationRepo {
    /// Insert a new listing, returning the created row.
    ///
    /// Takes any executor so the signup starter listing can share the
    /// user-creation transaction.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateAccommodationListing,
    ) -> Result<AccommodationListing, sqlx::Error> {
        let query = format!(
            "INSERT INTO accommodation_listings
                (property_name, photos, monthly_rent, daily_rate, min_stay, deposit, amenities,
                 room_type, accommodation_type, living_preferences, food_preference, address,
                 latitude, longitude, contact_info, description, nearby_universities,
                 distance_from_uni, owner_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17,
                     $18, $19)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AccommodationListing>(&query)
            .bind(&input.property_name)
            .bind(&input.photos)
            .bind(input.monthly_rent)
            .bind(input.daily_rate)
            .bind(input.min_stay)
            .bind(input.deposit)
            .bind(&input.amenities)
            .bind(input.room_type)
            .bind(input.accommodation_type)
            .bind(&input.living_preferences)
            .bind(input.food_preference)
            .bind(&input.address)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.contact_info)
            .bind(&input.description)
            .bind(&input.nearby_universities)
            .bind(input.distance_from_uni)
            .bind(input.owner_id)
            .fetch_one(executor)
            .await
    }

    /// Find a listing by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AccommodationListing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accommodation_listings WHERE id = $1");
        sqlx::query_as::<_, AccommodationListing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Search available listings with the given filter.
    ///
    /// Rent bounds match either scale a listing uses: `daily_rate` is
    /// tested against the bound divided by 30, `monthly_rent` against the
    /// bound directly. Results are sorted ascending by monthly rent
    /// (nulls last), newest first among equals.
    pub async fn search(
        pool: &PgPool,
        filter: &AccommodationFilter,
    ) -> Result<Vec<AccommodationListing>, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT {COLUMNS} FROM accommodation_listings WHERE availability = TRUE"
        ));

        if let Some(university) = &filter.university {
            qb.push(" AND ");
            qb.push_bind(university);
            qb.push(" = ANY(nearby_universities)");
        }

        if filter.min_rent.is_some() || filter.max_rent.is_some() {
            qb.push(" AND ((daily_rate IS NOT NULL");
            if let Some(min) = filter.min_rent {
                qb.push(" AND daily_rate >= ");
                qb.push_bind(min as f64 / 30.0);
            }
            if let Some(max) = filter.max_rent {
                qb.push(" AND daily_rate <= ");
                qb.push_bind(max as f64 / 30.0);
            }
            qb.push(") OR (monthly_rent IS NOT NULL");
            if let Some(min) = filter.min_rent {
                qb.push(" AND monthly_rent >= ");
                qb.push_bind(min);
            }
            if let Some(max) = filter.max_rent {
                qb.push(" AND monthly_rent <= ");
                qb.push_bind(max);
            }
            qb.push("))");
        }

        if let Some(room_type) = filter.room_type {
            qb.push(" AND room_type = ");
            qb.push_bind(room_type);
        }

        if let Some(accommodation_type) = filter.accommodation_type {
            qb.push(" AND accommodation_type = ");
            qb.push_bind(accommodation_type);
        }

        if !filter.amenities.is_empty() {
            qb.push(" AND amenities @> ");
            qb.push_bind(&filter.amenities);
        }

        qb.push(" ORDER BY monthly_rent ASC NULLS LAST, created_at DESC");
        qb.push(" LIMIT ");
        qb.push_bind(clamp_limit(filter.limit));
        qb.push(" OFFSET ");
        qb.push_bind(clamp_offset(filter.offset));

        qb.build_query_as::<AccommodationListing>()
            .fetch_all(pool)
            .await
    }
}
