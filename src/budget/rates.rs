//! Static rate tables
//!
//! Each table maps a subtype to its quality tiers. Lookups are two-level:
//! an unknown subtype resolves to the table's fallback subtype, and an
//! unknown tier within the resolved subtype resolves to the fallback rate.

/// Quality tier to unit rate
pub type TierRates = &'static [(&'static str, f64)];

/// Nightly rate used when the quality tier is not in the resolved table
pub const DEFAULT_NIGHTLY_RATE: f64 = 100.0;
/// Per-distance-unit rate used when the quality tier is not in the resolved table
pub const DEFAULT_DISTANCE_RATE: f64 = 0.15;
/// Per-activity rate used when the quality tier is not in the resolved table
pub const DEFAULT_ACTIVITY_RATE: f64 = 15.0;

/// Average daily food spend before the destination factor is applied
pub const BASE_DAILY_FOOD_COST: f64 = 40.0;
/// Souvenirs, tips, local transport
pub const DAILY_MISCELLANEOUS_COST: f64 = 20.0;

pub const HIGH_COST_FOOD_FACTOR: f64 = 1.5;
pub const LOW_COST_FOOD_FACTOR: f64 = 0.7;
pub const STANDARD_FOOD_FACTOR: f64 = 1.0;

/// Checked first: a destination matching both groups is high cost
pub const HIGH_COST_KEYWORDS: &[&str] = &["europe", "usa", "canada", "australia"];
pub const LOW_COST_KEYWORDS: &[&str] = &["asia", "south america", "africa"];

/// A subtype → tier → rate table with its fallbacks
#[derive(Debug)]
pub struct RateTable {
    name: &'static str,
    entries: &'static [(&'static str, TierRates)],
    fallback_kind: &'static str,
    fallback_rate: f64,
}

impl RateTable {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn fallback_kind(&self) -> &'static str {
        self.fallback_kind
    }

    #[must_use]
    pub fn fallback_rate(&self) -> f64 {
        self.fallback_rate
    }

    /// Subtypes known to this table
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(kind, _)| *kind)
    }

    /// Tier rates for an exact (already case-folded) subtype
    #[must_use]
    pub fn tiers(&self, kind: &str) -> Option<TierRates> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == kind)
            .map(|(_, tiers)| *tiers)
    }

    /// Unit rate for a subtype and tier, case-insensitive, with fallbacks applied
    #[must_use]
    pub fn rate(&self, kind: &str, quality: &str) -> f64 {
        let kind = kind.to_lowercase();
        let quality = quality.to_lowercase();

        let tiers = self
            .tiers(&kind)
            .or_else(|| self.tiers(self.fallback_kind))
            .unwrap_or_default();

        tiers
            .iter()
            .find(|(tier, _)| *tier == quality)
            .map_or(self.fallback_rate, |(_, rate)| *rate)
    }
}

/// Average nightly rates by accommodation type and quality
pub static ACCOMMODATION_RATES: RateTable = RateTable {
    name: "accommodation",
    entries: &[
        ("hotel", &[("budget", 50.0), ("medium", 100.0), ("luxury", 200.0)]),
        ("hostel", &[("budget", 20.0), ("medium", 30.0), ("luxury", 50.0)]),
        ("apartment", &[("budget", 70.0), ("medium", 120.0), ("luxury", 250.0)]),
        ("vacation_rental", &[("budget", 80.0), ("medium", 150.0), ("luxury", 300.0)]),
        ("resort", &[("budget", 100.0), ("medium", 200.0), ("luxury", 400.0)]),
    ],
    fallback_kind: "hotel",
    fallback_rate: DEFAULT_NIGHTLY_RATE,
};

/// Cost per mile/km by transportation type and class. Car includes rental and fuel.
pub static TRANSPORTATION_RATES: RateTable = RateTable {
    name: "transportation",
    entries: &[
        ("flight", &[("economy", 0.15), ("business", 0.30), ("first", 0.50)]),
        ("train", &[("economy", 0.10), ("business", 0.20), ("first", 0.30)]),
        ("bus", &[("economy", 0.05), ("business", 0.08), ("first", 0.12)]),
        ("car", &[("economy", 0.25), ("business", 0.35), ("first", 0.50)]),
    ],
    fallback_kind: "flight",
    fallback_rate: DEFAULT_DISTANCE_RATE,
};

/// Flat cost per activity by type and quality
pub static ACTIVITY_RATES: RateTable = RateTable {
    name: "activities",
    entries: &[
        ("sightseeing", &[("free", 0.0), ("standard", 15.0), ("premium", 30.0)]),
        ("museum", &[("free", 0.0), ("standard", 20.0), ("premium", 40.0)]),
        ("adventure", &[("standard", 50.0), ("premium", 100.0)]),
        ("cultural", &[("standard", 25.0), ("premium", 50.0)]),
        ("entertainment", &[("standard", 30.0), ("premium", 60.0)]),
        ("shopping", &[("standard", 50.0), ("premium", 100.0)]),
        ("dining", &[("standard", 40.0), ("premium", 80.0)]),
    ],
    fallback_kind: "sightseeing",
    fallback_rate: DEFAULT_ACTIVITY_RATE,
};

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hotel", "luxury", 200.0)]
    #[case("HOSTEL", "Budget", 20.0)]
    #[case("vacation_rental", "medium", 150.0)]
    #[case("igloo", "medium", 100.0)]
    #[case("igloo", "budget", 50.0)]
    #[case("resort", "platinum", DEFAULT_NIGHTLY_RATE)]
    fn test_accommodation_lookup(#[case] kind: &str, #[case] quality: &str, #[case] expected: f64) {
        assert_eq!(ACCOMMODATION_RATES.rate(kind, quality), expected);
    }

    #[rstest]
    #[case("train", "first", 0.30)]
    #[case("Car", "ECONOMY", 0.25)]
    #[case("boat", "business", 0.30)]
    #[case("bus", "premium", DEFAULT_DISTANCE_RATE)]
    fn test_transportation_lookup(
        #[case] kind: &str,
        #[case] quality: &str,
        #[case] expected: f64,
    ) {
        assert_eq!(TRANSPORTATION_RATES.rate(kind, quality), expected);
    }

    #[rstest]
    #[case("museum", "free", 0.0)]
    #[case("dining", "premium", 80.0)]
    #[case("adventure", "free", DEFAULT_ACTIVITY_RATE)]
    #[case("karaoke", "premium", 30.0)]
    fn test_activity_lookup(#[case] kind: &str, #[case] quality: &str, #[case] expected: f64) {
        assert_eq!(ACTIVITY_RATES.rate(kind, quality), expected);
    }

    #[test]
    fn test_fallback_kind_is_a_known_subtype() {
        for table in [&ACCOMMODATION_RATES, &TRANSPORTATION_RATES, &ACTIVITY_RATES] {
            assert!(
                table.tiers(table.fallback_kind()).is_some(),
                "{} fallback missing",
                table.name()
            );
        }
    }

    #[test]
    fn test_kinds_are_lowercase() {
        for table in [&ACCOMMODATION_RATES, &TRANSPORTATION_RATES, &ACTIVITY_RATES] {
            for kind in table.kinds() {
                assert_eq!(kind, kind.to_lowercase());
            }
        }
    }
}
