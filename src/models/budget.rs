//! Budget breakdown model
//!
//! The total is derived from the five categories on construction and on
//! deserialization, so it can never drift from their sum.

use serde::{Deserialize, Serialize};

/// Estimated cost per category plus the computed total
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CategoryAmounts")]
pub struct BudgetBreakdown {
    accommodation: f64,
    transportation: f64,
    activities: f64,
    food: f64,
    miscellaneous: f64,
    total: f64,
}

/// Wire shape accepted when reading a breakdown. Any `total` present is ignored.
#[derive(Debug, Deserialize)]
struct CategoryAmounts {
    accommodation: f64,
    transportation: f64,
    activities: f64,
    food: f64,
    miscellaneous: f64,
}

impl TryFrom<CategoryAmounts> for BudgetBreakdown {
    type Error = String;

    fn try_from(amounts: CategoryAmounts) -> Result<Self, Self::Error> {
        let fields = [
            ("accommodation", amounts.accommodation),
            ("transportation", amounts.transportation),
            ("activities", amounts.activities),
            ("food", amounts.food),
            ("miscellaneous", amounts.miscellaneous),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a non-negative amount, got {value}"));
            }
        }

        Ok(Self::new(
            amounts.accommodation,
            amounts.transportation,
            amounts.activities,
            amounts.food,
            amounts.miscellaneous,
        ))
    }
}

impl BudgetBreakdown {
    #[must_use]
    pub fn new(
        accommodation: f64,
        transportation: f64,
        activities: f64,
        food: f64,
        miscellaneous: f64,
    ) -> Self {
        Self {
            accommodation,
            transportation,
            activities,
            food,
            miscellaneous,
            total: accommodation + transportation + activities + food + miscellaneous,
        }
    }

    #[must_use]
    pub fn accommodation(&self) -> f64 {
        self.accommodation
    }

    #[must_use]
    pub fn transportation(&self) -> f64 {
        self.transportation
    }

    #[must_use]
    pub fn activities(&self) -> f64 {
        self.activities
    }

    #[must_use]
    pub fn food(&self) -> f64 {
        self.food
    }

    #[must_use]
    pub fn miscellaneous(&self) -> f64 {
        self.miscellaneous
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Category name and amount pairs, in display order, excluding the total
    #[must_use]
    pub fn categories(&self) -> [(&'static str, f64); 5] {
        [
            ("accommodation", self.accommodation),
            ("transportation", self.transportation),
            ("activities", self.activities),
            ("food", self.food),
            ("miscellaneous", self.miscellaneous),
        ]
    }
}
