pub mod accommodation;
pub mod assistant;
pub mod auth;
pub mod chat;
pub mod food_service;
pub mod inquiry;
pub mod review;
pub mod signup;
pub mod university;
