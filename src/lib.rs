//! Extracurricular activity signup service for Mergington High School.

pub mod config;
pub mod database;
pub mod errors;
pub mod models;
pub mod services;
pub mod web;

pub use config::Config;
pub use database::ActivityStore;
pub use web::{build_router, AppState};
