//! User entity models and DTOs.
//!
//! Users are created at signup (or by the seed binary) and are immutable
//! afterwards; there is no update endpoint. Role-conditional fields are
//! `NULL` for the role they do not apply to.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use campusnest_core::types::{DbId, Timestamp};

/// `users.role` — determines which operations a user may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Student,
    PropertyOwner,
}

impl UserRole {
    /// Role name as stored in JWT claims.
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Student => campusnest_core::roles::ROLE_STUDENT,
            UserRole::PropertyOwner => campusnest_core::roles::ROLE_PROPERTY_OWNER,
        }
    }

    /// Parse a (case-insensitive) form value.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "STUDENT" => Some(UserRole::Student),
            "PROPERTY_OWNER" => Some(UserRole::PropertyOwner),
            _ => None,
        }
    }
}

/// Study stream for students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "study_stream", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudyStream {
    Engineering,
    Medical,
}

impl StudyStream {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "ENGINEERING" => Some(StudyStream::Engineering),
            "MEDICAL" => Some(StudyStream::Medical),
            _ => None,
        }
    }
}

/// What kind of listings a student is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "service_preference", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServicePreference {
    Accommodation,
    Food,
    Both,
}

impl ServicePreference {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "ACCOMMODATION" => Some(ServicePreference::Accommodation),
            "FOOD" => Some(ServicePreference::Food),
            "BOTH" => Some(ServicePreference::Both),
            _ => None,
        }
    }
}

/// Business structure of a property owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "business_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessType {
    Individual,
    Company,
    Institution,
}

impl BusinessType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "INDIVIDUAL" => Some(BusinessType::Individual),
            "COMPANY" => Some(BusinessType::Company),
            "INSTITUTION" => Some(BusinessType::Institution),
            _ => None,
        }
    }
}

/// A row from the `users` table.
///
/// `password_hash` is deliberately not serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone: String,
    pub role: UserRole,
    pub university: Option<String>,
    pub stream: Option<StudyStream>,
    pub service_preference: Option<ServicePreference>,
    pub business_type: Option<BusinessType>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub role: UserRole,
    pub university: Option<String>,
    pub stream: Option<StudyStream>,
    pub service_preference: Option<ServicePreference>,
    pub business_type: Option<BusinessType>,
}

/// Owner contact fields embedded in listing responses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OwnerContact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
}
