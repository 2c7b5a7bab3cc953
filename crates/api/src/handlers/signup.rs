//! Handler for `POST /auth/signup` (multipart form).
//!
//! Creates the user and — for property owners that supplied listing
//! fields — a starter accommodation listing in the same database
//! transaction, so a validation failure halfway through never leaves a
//! half-registered account behind. Image files are written before the
//! transaction starts and removed best-effort if it fails.

use std::collections::HashMap;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use campusnest_core::error::CoreError;
use campusnest_db::models::accommodation::{
    AccommodationListing, AccommodationType, CreateAccommodationListing, FoodPreference, RoomType,
};
use campusnest_db::models::user::{
    BusinessType, CreateUser, ServicePreference, StudyStream, User, UserRole,
};
use campusnest_db::repositories::{AccommodationRepo, UserRepo};

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::uploads::{self, UploadedImage};

/// Response body for a successful signup.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub user: User,
    pub message: String,
}

/// The multipart form, decoded into text fields and image parts.
#[derive(Debug, Default)]
struct SignupForm {
    fields: HashMap<String, String>,
    images: Vec<UploadedImage>,
}

impl SignupForm {
    fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str).filter(|s| !s.is_empty())
    }
}

/// POST /api/v1/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    let form = read_form(multipart).await?;

    // Required identity fields.
    let (name, email, password, phone, user_type) = match (
        form.get("name"),
        form.get("email"),
        form.get("password"),
        form.get("phone"),
        form.get("userType"),
    ) {
        (Some(n), Some(e), Some(p), Some(ph), Some(ut)) => (n, e, p, ph, ut),
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Missing required fields".into(),
            )))
        }
    };

    let role = UserRole::parse(user_type)
        .ok_or_else(|| AppError::Core(CoreError::Validation("Invalid user type".into())))?;

    // Duplicate email is rejected up front so the client gets a 400; the
    // unique constraint backstops the race.
    if UserRepo::find_by_email(&state.pool, email).await?.is_some() {
        return Err(AppError::Core(CoreError::Validation(
            "User already exists with this email".into(),
        )));
    }

    // Student-only attributes are dropped for owners.
    let create_user = CreateUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: hash_password(password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?,
        phone: phone.to_string(),
        role,
        university: matches!(role, UserRole::Student)
            .then(|| form.get("university").map(str::to_string))
            .flatten(),
        stream: matches!(role, UserRole::Student)
            .then(|| form.get("stream").and_then(StudyStream::parse))
            .flatten(),
        service_preference: matches!(role, UserRole::Student)
            .then(|| form.get("serviceType").and_then(ServicePreference::parse))
            .flatten(),
        business_type: matches!(role, UserRole::PropertyOwner)
            .then(|| form.get("businessType").and_then(BusinessType::parse))
            .flatten(),
    };

    // Owners that supplied listing fields get a starter listing in the
    // same request. Validate everything before touching disk or database.
    let starter = if role == UserRole::PropertyOwner
        && form.get("propertyType").is_some()
        && form.get("location").is_some()
    {
        Some(validate_starter_listing(&form)?)
    } else {
        None
    };

    let photo_urls = match &starter {
        Some(_) => uploads::save_images(&state.config.upload_dir, &form.images).await?,
        None => Vec::new(),
    };

    let mut tx = state.pool.begin().await?;

    let user = match UserRepo::create(&mut *tx, &create_user).await {
        Ok(user) => user,
        Err(e) => {
            cleanup_uploads(&state, &photo_urls).await;
            return Err(e.into());
        }
    };

    if let Some(starter) = starter {
        let listing = CreateAccommodationListing {
            property_name: name.to_string(),
            photos: photo_urls.clone(),
            monthly_rent: None,
            daily_rate: Some(starter.daily_rate),
            min_stay: Some(starter.min_stay),
            deposit: None,
            amenities: Vec::new(),
            room_type: starter.room_type,
            accommodation_type: starter.accommodation_type,
            living_preferences: Vec::new(),
            food_preference: FoodPreference::Both,
            address: starter.address,
            latitude: None,
            longitude: None,
            contact_info: phone.to_string(),
            description: form.get("description").map(str::to_string),
            nearby_universities: starter.nearby_universities,
            distance_from_uni: None,
            owner_id: user.id,
        };
        if let Err(e) = AccommodationRepo::create(&mut *tx, &listing).await {
            cleanup_uploads(&state, &photo_urls).await;
            return Err(e.into());
        }
    }

    if let Err(e) = tx.commit().await {
        cleanup_uploads(&state, &photo_urls).await;
        return Err(e.into());
    }

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            user,
            message: "User created successfully".to_string(),
        }),
    ))
}

/// Validated fields for the owner's starter listing.
struct StarterListing {
    daily_rate: i64,
    min_stay: i32,
    room_type: RoomType,
    accommodation_type: AccommodationType,
    address: String,
    nearby_universities: Vec<String>,
}

fn validate_starter_listing(form: &SignupForm) -> AppResult<StarterListing> {
    let daily_rate = form
        .get("price")
        .and_then(|p| p.parse::<i64>().ok())
        .filter(|rate| *rate > 0)
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Invalid daily rate. Please enter a valid amount.".into(),
            ))
        })?;

    let min_stay = form
        .get("minStay")
        .unwrap_or("1")
        .parse::<i32>()
        .ok()
        .filter(|stay| *stay >= 1)
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Minimum stay must be at least 1 day.".into(),
            ))
        })?;

    let property_type = form.get("propertyType").unwrap_or_default();
    let accommodation_type = AccommodationType::parse(property_type).ok_or_else(|| {
        AppError::Core(CoreError::Validation("Invalid property type".into()))
    })?;

    // The form's explicit roomType wins; otherwise fall back to the
    // property type where the two enumerations overlap (e.g. APARTMENT).
    let room_type = form
        .get("roomType")
        .and_then(RoomType::parse)
        .or_else(|| RoomType::parse(property_type))
        .ok_or_else(|| AppError::Core(CoreError::Validation("Invalid room type".into())))?;

    let address = form
        .get("location")
        .unwrap_or_default()
        .to_string();

    let nearby_universities = form
        .get("nearbyUniversity")
        .map(|u| vec![u.to_string()])
        .unwrap_or_default();

    Ok(StarterListing {
        daily_rate,
        min_stay,
        room_type,
        accommodation_type,
        address,
        nearby_universities,
    })
}

/// Decode the multipart stream into text fields and image parts.
async fn read_form(mut multipart: Multipart) -> AppResult<SignupForm> {
    let mut form = SignupForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "images" {
            let file_name = field.file_name().unwrap_or("image").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            if !bytes.is_empty() {
                form.images.push(UploadedImage {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}

/// Remove files written for a signup whose transaction did not commit.
async fn cleanup_uploads(state: &AppState, photo_urls: &[String]) {
    let filenames: Vec<String> = photo_urls
        .iter()
        .filter_map(|url| uploads::url_to_filename(url))
        .map(str::to_string)
        .collect();
    uploads::remove_files(&state.config.upload_dir, &filenames).await;
}
