pub mod accommodation_repo;
pub mod food_service_repo;
pub mod inquiry_repo;
pub mod review_repo;
pub mod session_repo;
pub mod university_repo;
pub mod user_repo;

pub use accommodation_repo::AccommodationRepo;
pub use food_service_repo::FoodServiceRepo;
pub use inquiry_repo::InquiryRepo;
pub use review_repo::ReviewRepo;
pub use session_repo::SessionRepo;
pub use university_repo::UniversityRepo;
pub use user_repo::UserRepo;

/// Default page size for list queries.
const DEFAULT_LIMIT: i64 = 50;
/// Hard ceiling on page size.
const MAX_LIMIT: i64 = 100;

/// Clamp a client-supplied limit to `1..=100`, defaulting to 50.
pub(crate) fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp a client-supplied offset to be non-negative.
pub(crate) fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
