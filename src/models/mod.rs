//! Data models for the budget estimator
//!
//! This module contains the core domain models organized by concern:
//! - Plan: The travel plan handed to the estimator
//! - Budget: The per-category cost breakdown it produces

pub mod budget;
pub mod plan;

// Re-export all public types for convenient access
pub use budget::BudgetBreakdown;
pub use plan::{AccommodationDetails, ActivityDetails, TransportationDetails, TravelPlan};
