//! Route definitions for the `/inquiries` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::inquiry;
use crate::state::AppState;

/// Routes mounted at `/inquiries`.
///
/// ```text
/// GET  /               -> role-dependent inbox (requires auth)
/// POST /               -> open inquiry (student)
/// POST /{id}/respond   -> attach response (listing owner)
/// POST /{id}/close     -> close (either party)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(inquiry::list_inquiries).post(inquiry::create_inquiry),
        )
        .route("/{id}/respond", post(inquiry::respond_to_inquiry))
        .route("/{id}/close", post(inquiry::close_inquiry))
}
