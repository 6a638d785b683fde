//! Accommodation price lookup
//!
//! Only a fixed placeholder source exists today. The trait is the seam a
//! live price source would plug into.

use std::collections::BTreeMap;

use tracing::debug;

/// Placeholder nightly prices per quality tier
pub const PLACEHOLDER_PRICES: [(&str, f64); 3] =
    [("budget", 60.0), ("medium", 120.0), ("luxury", 250.0)];

/// Source of current accommodation prices by quality tier
pub trait PriceSource: Send + Sync {
    fn lookup_prices(&self, destination: &str, accommodation_type: &str) -> BTreeMap<String, f64>;
}

/// Returns [`PLACEHOLDER_PRICES`] whatever the destination or type
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticPriceSource;

impl PriceSource for StaticPriceSource {
    fn lookup_prices(&self, destination: &str, accommodation_type: &str) -> BTreeMap<String, f64> {
        debug!(
            "Placeholder prices for {} in {:?}",
            accommodation_type, destination
        );
        PLACEHOLDER_PRICES
            .iter()
            .map(|(tier, price)| ((*tier).to_string(), *price))
            .collect()
    }
}
