pub mod accommodation;
pub mod food_service;
pub mod inquiry;
pub mod review;
pub mod session;
pub mod university;
pub mod user;
