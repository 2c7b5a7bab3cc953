//! Repository for the `inquiries` table.
//!
//! Status transitions are guarded in SQL: an UPDATE that would move a
//! status backwards matches zero rows, which the handler maps to 409.

use sqlx::PgPool;

use campusnest_core::types::DbId;

use crate::models::inquiry::{CreateInquiry, Inquiry};

const COLUMNS: &str = "id, message, student_name, student_email, student_phone, status, \
     response, student_id, accommodation_listing_id, food_service_listing_id, created_at, \
     updated_at";

/// Provides create/list/transition operations for inquiries.
pub struct InquiryRepo;

impl InquiryRepo {
    /// Insert a new inquiry in `PENDING` state.
    pub async fn create(pool: &PgPool, input: &CreateInquiry) -> Result<Inquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO inquiries (message, student_name, student_email, student_phone,
                                    student_id, accommodation_listing_id, food_service_listing_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(&input.message)
            .bind(&input.student_name)
            .bind(&input.student_email)
            .bind(&input.student_phone)
            .bind(input.student_id)
            .bind(input.accommodation_listing_id)
            .bind(input.food_service_listing_id)
            .fetch_one(pool)
            .await
    }

    /// Find an inquiry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Inquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inquiries WHERE id = $1");
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All inquiries opened by a student, newest first.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<Inquiry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inquiries WHERE student_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// All inquiries against listings owned by the given owner, newest first.
    pub async fn list_for_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<Inquiry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inquiries i
             WHERE EXISTS (
                 SELECT 1 FROM accommodation_listings a
                 WHERE a.id = i.accommodation_listing_id AND a.owner_id = $1
             ) OR EXISTS (
                 SELECT 1 FROM food_service_listings f
                 WHERE f.id = i.food_service_listing_id AND f.owner_id = $1
             )
             ORDER BY i.created_at DESC"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Attach a response: `PENDING -> RESPONDED` only.
    ///
    /// Returns `None` when the inquiry is not in `PENDING` state.
    pub async fn respond(
        pool: &PgPool,
        id: DbId,
        response: &str,
    ) -> Result<Option<Inquiry>, sqlx::Error> {
        let query = format!(
            "UPDATE inquiries
             SET response = $2, status = 'RESPONDED', updated_at = NOW()
             WHERE id = $1 AND status = 'PENDING'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .bind(response)
            .fetch_optional(pool)
            .await
    }

    /// Close an inquiry from `PENDING` or `RESPONDED`.
    ///
    /// Returns `None` when the inquiry was already closed.
    pub async fn close(pool: &PgPool, id: DbId) -> Result<Option<Inquiry>, sqlx::Error> {
        let query = format!(
            "UPDATE inquiries
             SET status = 'CLOSED', updated_at = NOW()
             WHERE id = $1 AND status <> 'CLOSED'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
