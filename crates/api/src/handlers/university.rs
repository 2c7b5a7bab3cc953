//! University reference-list handler.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use campusnest_core::error::CoreError;
use campusnest_db::models::university::University;
use campusnest_db::models::user::StudyStream;
use campusnest_db::repositories::UniversityRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct UniversityQuery {
    pub stream: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListUniversitiesResponse {
    pub universities: Vec<University>,
}

/// GET /api/v1/universities
pub async fn list_universities(
    State(state): State<AppState>,
    Query(params): Query<UniversityQuery>,
) -> AppResult<Json<ListUniversitiesResponse>> {
    let stream = match params.stream.filter(|s| !s.is_empty()) {
        Some(value) => Some(StudyStream::parse(&value).ok_or_else(|| {
            AppError::Core(CoreError::Validation("Invalid stream".into()))
        })?),
        None => None,
    };

    let universities = UniversityRepo::list(&state.pool, stream).await?;
    Ok(Json(ListUniversitiesResponse { universities }))
}
