//! Repository for the `users` table.

use sqlx::{PgExecutor, PgPool};

use campusnest_core::types::DbId;

use crate::models::user::{CreateUser, OwnerContact, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, password_hash, phone, role, university, stream, \
     service_preference, business_type, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Takes any executor so signup can run inside the same transaction
    /// as the starter listing insert.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateUser,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash, phone, role, university, stream, \
                                service_preference, business_type)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.phone)
            .bind(input.role)
            .bind(&input.university)
            .bind(input.stream)
            .bind(input.service_preference)
            .bind(input.business_type)
            .fetch_one(executor)
            .await
    }

    /// Find a user by email (unique).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the contact fields for a set of owners, for embedding in
    /// listing responses.
    pub async fn owner_contacts(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<OwnerContact>, sqlx::Error> {
        sqlx::query_as::<_, OwnerContact>(
            "SELECT id, name, email, phone FROM users WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }
}
