//! Route definitions for the `/listings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{accommodation, food_service};
use crate::state::AppState;

/// Routes mounted at `/listings`.
///
/// ```text
/// GET  /accommodation  -> filtered search (public)
/// POST /accommodation  -> create listing (property owner)
/// GET  /food           -> filtered search (public)
/// POST /food           -> create listing (property owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/accommodation",
            get(accommodation::list_accommodations).post(accommodation::create_accommodation),
        )
        .route(
            "/food",
            get(food_service::list_food_services).post(food_service::create_food_service),
        )
}
