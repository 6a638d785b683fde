//! Budget estimation module
//!
//! This module provides the estimation pipeline:
//! - Static rate tables with two-level fallback
//! - Pure per-category cost estimators
//! - Aggregation into a breakdown and best-effort LLM refinement
//! - A placeholder accommodation price lookup

pub mod categories;
pub mod estimator;
pub mod price_lookup;
pub mod rates;
pub mod refinement;

// Re-export commonly used types from submodules
pub use categories::{
    destination_food_factor, estimate_accommodation_cost, estimate_activity_cost,
    estimate_food_cost, estimate_miscellaneous_cost, estimate_transportation_cost,
};
pub use estimator::{BudgetEstimator, estimate};
pub use price_lookup::{PriceSource, StaticPriceSource};
pub use rates::RateTable;
pub use refinement::{RefinementOutcome, refine, refine_with};
