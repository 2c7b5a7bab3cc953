//! Refresh-token session models.

use sqlx::FromRow;

use campusnest_core::types::{DbId, Timestamp};

/// A row from the `sessions` table.
///
/// Only the SHA-256 hash of the refresh token is stored; the plaintext is
/// returned to the client once and never persisted.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a new session.
#[derive(Debug, Clone)]
pub struct CreateSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
