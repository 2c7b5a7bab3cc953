//! Role name constants as stored in `users.role` and in JWT claims.

/// Students can search listings, open inquiries, and leave reviews.
pub const ROLE_STUDENT: &str = "STUDENT";

/// Property owners can create listings and respond to inquiries.
pub const ROLE_PROPERTY_OWNER: &str = "PROPERTY_OWNER";
