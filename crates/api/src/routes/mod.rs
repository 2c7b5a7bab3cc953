pub mod auth;
pub mod health;
pub mod inquiries;
pub mod listings;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                        register (multipart, public)
/// /auth/login                         login (public)
/// /auth/refresh                       refresh (public)
/// /auth/logout                        logout (requires auth)
/// /auth/me                            current user (requires auth)
///
/// /listings/accommodation             search (public), create (owner)
/// /listings/food                      search (public), create (owner)
///
/// /inquiries                          list (auth), create (student)
/// /inquiries/{id}/respond             respond (listing owner)
/// /inquiries/{id}/close               close (either party)
///
/// /reviews                            create (requires auth)
/// /universities                       reference list (public)
/// /chat                               model relay (public)
/// /assistant                          planner search (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/listings", listings::router())
        .nest("/inquiries", inquiries::router())
        .route("/reviews", post(handlers::review::create_review))
        .route(
            "/universities",
            get(handlers::university::list_universities),
        )
        .route("/chat", post(handlers::chat::chat))
        .route("/assistant", post(handlers::assistant::assistant))
}
