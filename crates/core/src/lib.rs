//! Shared domain types for the campusnest platform.
//!
//! Keeps the pieces every other crate needs: ID/timestamp aliases, the
//! domain error enum, role name constants, and the text-to-filter planner.

pub mod error;
pub mod planner;
pub mod roles;
pub mod types;
