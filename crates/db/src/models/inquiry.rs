//! Inquiry models. An inquiry is a message thread seed from a student to
//! exactly one listing. Status moves forward only:
//! `PENDING -> RESPONDED -> CLOSED`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use campusnest_core::types::{DbId, Timestamp};

/// `inquiries.status` lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "inquiry_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InquiryStatus {
    Pending,
    Responded,
    Closed,
}

/// A row from the `inquiries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: DbId,
    pub message: String,
    pub student_name: String,
    pub student_email: String,
    pub student_phone: String,
    pub status: InquiryStatus,
    pub response: Option<String>,
    pub student_id: DbId,
    pub accommodation_listing_id: Option<DbId>,
    pub food_service_listing_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new inquiry.
#[derive(Debug, Clone)]
pub struct CreateInquiry {
    pub message: String,
    pub student_name: String,
    pub student_email: String,
    pub student_phone: String,
    pub student_id: DbId,
    pub accommodation_listing_id: Option<DbId>,
    pub food_service_listing_id: Option<DbId>,
}
