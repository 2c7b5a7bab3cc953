//! Role-based access control extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does
//! not match. Listing creation and inquiry responses are owner-only;
//! opening an inquiry is student-only.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use campusnest_core::error::CoreError;
use campusnest_core::roles::{ROLE_PROPERTY_OWNER, ROLE_STUDENT};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `PROPERTY_OWNER` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn owner_only(RequireOwner(user): RequireOwner) -> AppResult<Json<()>> {
///     // user is guaranteed to be a property owner here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireOwner(pub AuthUser);

impl FromRequestParts<AppState> for RequireOwner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_PROPERTY_OWNER {
            return Err(AppError::Core(CoreError::Forbidden(
                "Only property owners can create listings".into(),
            )));
        }
        Ok(RequireOwner(user))
    }
}

/// Requires the `STUDENT` role. Rejects with 403 Forbidden otherwise.
pub struct RequireStudent(pub AuthUser);

impl FromRequestParts<AppState> for RequireStudent {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_STUDENT {
            return Err(AppError::Core(CoreError::Forbidden(
                "Student role required".into(),
            )));
        }
        Ok(RequireStudent(user))
    }
}
