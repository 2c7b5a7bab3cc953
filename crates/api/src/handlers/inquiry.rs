//! Inquiry handlers: students open inquiries against a listing, owners
//! respond, and either party closes. Status only moves forward
//! (`PENDING -> RESPONDED -> CLOSED`); backwards transitions are 409s.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use campusnest_core::error::CoreError;
use campusnest_core::roles::ROLE_STUDENT;
use campusnest_core::types::DbId;
use campusnest_db::models::inquiry::{CreateInquiry, Inquiry};
use campusnest_db::repositories::{AccommodationRepo, FoodServiceRepo, InquiryRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireOwner, RequireStudent};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiryRequest {
    pub message: String,
    pub accommodation_listing_id: Option<DbId>,
    pub food_service_listing_id: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct InquiryResponse {
    pub inquiry: Inquiry,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ListInquiriesResponse {
    pub inquiries: Vec<Inquiry>,
}

/// POST /api/v1/inquiries (students only)
pub async fn create_inquiry(
    State(state): State<AppState>,
    RequireStudent(student): RequireStudent,
    Json(payload): Json<CreateInquiryRequest>,
) -> AppResult<(StatusCode, Json<InquiryResponse>)> {
    if payload.message.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Message is required".into(),
        )));
    }

    match (
        payload.accommodation_listing_id,
        payload.food_service_listing_id,
    ) {
        (Some(id), None) => {
            AccommodationRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "accommodation listing",
                    id,
                }))?;
        }
        (None, Some(id)) => {
            FoodServiceRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "food service listing",
                    id,
                }))?;
        }
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "An inquiry must reference exactly one listing".into(),
            )))
        }
    }

    // Contact fields are denormalized onto the inquiry so owners see them
    // without a join.
    let user = UserRepo::find_by_id(&state.pool, student.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "user",
            id: student.user_id,
        }))?;

    let input = CreateInquiry {
        message: payload.message,
        student_name: user.name,
        student_email: user.email,
        student_phone: user.phone,
        student_id: user.id,
        accommodation_listing_id: payload.accommodation_listing_id,
        food_service_listing_id: payload.food_service_listing_id,
    };

    let inquiry = InquiryRepo::create(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(InquiryResponse {
            inquiry,
            message: "Inquiry sent successfully".to_string(),
        }),
    ))
}

/// GET /api/v1/inquiries
///
/// Students see the inquiries they opened; owners see inquiries against
/// their listings.
pub async fn list_inquiries(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ListInquiriesResponse>> {
    let inquiries = if user.role == ROLE_STUDENT {
        InquiryRepo::list_for_student(&state.pool, user.user_id).await?
    } else {
        InquiryRepo::list_for_owner(&state.pool, user.user_id).await?
    };
    Ok(Json(ListInquiriesResponse { inquiries }))
}

#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    pub response: String,
}

/// POST /api/v1/inquiries/{id}/respond (owner of the listing only)
pub async fn respond_to_inquiry(
    State(state): State<AppState>,
    RequireOwner(owner): RequireOwner,
    Path(id): Path<DbId>,
    Json(payload): Json<RespondRequest>,
) -> AppResult<Json<InquiryResponse>> {
    if payload.response.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Response is required".into(),
        )));
    }

    let inquiry = InquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "inquiry",
            id,
        }))?;

    if listing_owner_id(&state, &inquiry).await? != Some(owner.user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only respond to inquiries on your own listings".into(),
        )));
    }

    // None means the conditional UPDATE matched no PENDING row.
    let inquiry = InquiryRepo::respond(&state.pool, id, &payload.response)
        .await?
        .ok_or(AppError::Core(CoreError::Conflict(
            "Inquiry has already been responded to".into(),
        )))?;

    Ok(Json(InquiryResponse {
        inquiry,
        message: "Response sent successfully".to_string(),
    }))
}

/// POST /api/v1/inquiries/{id}/close
///
/// The inquiring student or the listing owner may close.
pub async fn close_inquiry(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<InquiryResponse>> {
    let inquiry = InquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "inquiry",
            id,
        }))?;

    let is_student_party = inquiry.student_id == user.user_id;
    let is_owner_party = listing_owner_id(&state, &inquiry).await? == Some(user.user_id);
    if !is_student_party && !is_owner_party {
        return Err(AppError::Core(CoreError::Forbidden(
            "You are not a party to this inquiry".into(),
        )));
    }

    let inquiry = InquiryRepo::close(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::Conflict(
            "Inquiry is already closed".into(),
        )))?;

    Ok(Json(InquiryResponse {
        inquiry,
        message: "Inquiry closed".to_string(),
    }))
}

/// Owner of whichever listing the inquiry references.
async fn listing_owner_id(state: &AppState, inquiry: &Inquiry) -> AppResult<Option<DbId>> {
    if let Some(listing_id) = inquiry.accommodation_listing_id {
        let listing = AccommodationRepo::find_by_id(&state.pool, listing_id).await?;
        return Ok(listing.map(|l| l.owner_id));
    }
    if let Some(listing_id) = inquiry.food_service_listing_id {
        let listing = FoodServiceRepo::find_by_id(&state.pool, listing_id).await?;
        return Ok(listing.map(|l| l.owner_id));
    }
    Ok(None)
}
