//! Per-category cost estimators
//!
//! Pure functions of their inputs. Negative durations and distances are
//! clamped to zero so no category can go below zero.

use tracing::{debug, warn};

use crate::budget::rates::{
    ACCOMMODATION_RATES, ACTIVITY_RATES, BASE_DAILY_FOOD_COST, DAILY_MISCELLANEOUS_COST,
    HIGH_COST_FOOD_FACTOR, HIGH_COST_KEYWORDS, LOW_COST_FOOD_FACTOR, LOW_COST_KEYWORDS,
    STANDARD_FOOD_FACTOR, TRANSPORTATION_RATES,
};
use crate::models::{AccommodationDetails, ActivityDetails, TransportationDetails};

fn clamp_non_negative(value: f64, what: &str) -> f64 {
    if value < 0.0 {
        warn!("Negative {} {} treated as 0", what, value);
        0.0
    } else {
        value
    }
}

fn duration_days(duration: i64) -> f64 {
    clamp_non_negative(duration as f64, "duration")
}

/// Nightly rate for the accommodation times the number of nights
#[must_use]
pub fn estimate_accommodation_cost(
    accommodation: Option<&AccommodationDetails>,
    duration: i64,
) -> f64 {
    let Some(accommodation) = accommodation.filter(|a| !a.is_empty()) else {
        return 0.0;
    };

    let rate = ACCOMMODATION_RATES.rate(accommodation.kind(), accommodation.quality());
    let cost = rate * duration_days(duration);
    debug!(
        "Accommodation {}/{}: {} per night, {} total",
        accommodation.kind(),
        accommodation.quality(),
        rate,
        cost
    );
    cost
}

/// Per-distance-unit rate times the distance travelled
#[must_use]
pub fn estimate_transportation_cost(transportation: Option<&TransportationDetails>) -> f64 {
    let Some(transportation) = transportation.filter(|t| !t.is_empty()) else {
        return 0.0;
    };

    let rate = TRANSPORTATION_RATES.rate(transportation.kind(), transportation.quality());
    let distance = clamp_non_negative(transportation.distance(), "distance");
    let cost = rate * distance;
    debug!(
        "Transportation {}/{}: {} per unit over {}, {} total",
        transportation.kind(),
        transportation.quality(),
        rate,
        distance,
        cost
    );
    cost
}

/// Flat rate per activity. The activity's own duration does not change its price.
#[must_use]
pub fn estimate_activity_cost(activities: &[ActivityDetails]) -> f64 {
    let cost: f64 = activities
        .iter()
        .map(|activity| ACTIVITY_RATES.rate(activity.kind(), activity.quality()))
        .sum();
    debug!("{} activities: {} total", activities.len(), cost);
    cost
}

/// Multiplier applied to the base daily food cost for a destination
#[must_use]
pub fn destination_food_factor(destination: &str) -> f64 {
    let destination = destination.to_lowercase();
    let mentions_any = |keywords: &[&str]| keywords.iter().any(|k| destination.contains(k));

    if mentions_any(HIGH_COST_KEYWORDS) {
        HIGH_COST_FOOD_FACTOR
    } else if mentions_any(LOW_COST_KEYWORDS) {
        LOW_COST_FOOD_FACTOR
    } else {
        STANDARD_FOOD_FACTOR
    }
}

#[must_use]
pub fn estimate_food_cost(destination: &str, duration: i64) -> f64 {
    let daily = BASE_DAILY_FOOD_COST * destination_food_factor(destination);
    let cost = daily * duration_days(duration);
    debug!("Food for {:?}: {} per day, {} total", destination, daily, cost);
    cost
}

/// Flat daily allowance, independent of destination
#[must_use]
pub fn estimate_miscellaneous_cost(duration: i64) -> f64 {
    DAILY_MISCELLANEOUS_COST * duration_days(duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_accommodation_cost() {
        let luxury = AccommodationDetails::new("hotel", "luxury");
        assert_eq!(estimate_accommodation_cost(Some(&luxury), 3), 600.0);

        let igloo = AccommodationDetails::new("igloo", "medium");
        assert_eq!(estimate_accommodation_cost(Some(&igloo), 2), 200.0);
    }

    #[test]
    fn test_accommodation_absent_or_empty() {
        assert_eq!(estimate_accommodation_cost(None, 5), 0.0);
        let empty = AccommodationDetails::default();
        assert_eq!(estimate_accommodation_cost(Some(&empty), 5), 0.0);
    }

    #[test]
    fn test_accommodation_missing_quality_defaults_to_medium() {
        let apartment = AccommodationDetails {
            kind: Some("Apartment".to_string()),
            quality: None,
        };
        assert_eq!(estimate_accommodation_cost(Some(&apartment), 2), 240.0);
    }

    #[test]
    fn test_transportation_cost() {
        let flight = TransportationDetails::new("flight", "economy", 3600.0);
        assert!((estimate_transportation_cost(Some(&flight)) - 540.0).abs() < 1e-9);
    }

    #[test]
    fn test_transportation_without_distance_is_free() {
        let train = TransportationDetails {
            kind: Some("train".to_string()),
            ..TransportationDetails::default()
        };
        assert_eq!(estimate_transportation_cost(Some(&train)), 0.0);
        assert_eq!(estimate_transportation_cost(None), 0.0);
    }

    #[test]
    fn test_activity_duration_does_not_change_cost() {
        let short = ActivityDetails::new("adventure", "premium").with_hours(1.0);
        let long = ActivityDetails::new("adventure", "premium").with_hours(9.0);
        assert_eq!(
            estimate_activity_cost(std::slice::from_ref(&short)),
            estimate_activity_cost(std::slice::from_ref(&long))
        );
    }

    #[test]
    fn test_activity_cost_sums_sequence() {
        let activities = vec![
            ActivityDetails::new("museum", "standard"),
            ActivityDetails::new("sightseeing", "standard"),
            ActivityDetails::new("dining", "premium"),
        ];
        assert_eq!(estimate_activity_cost(&activities), 115.0);
        assert_eq!(estimate_activity_cost(&[]), 0.0);
    }

    #[rstest]
    #[case("Paris, France", STANDARD_FOOD_FACTOR)]
    #[case("Tokyo, Asia", LOW_COST_FOOD_FACTOR)]
    #[case("Western EUROPE", HIGH_COST_FOOD_FACTOR)]
    #[case("Lima, South America", LOW_COST_FOOD_FACTOR)]
    #[case("Europe and Asia", HIGH_COST_FOOD_FACTOR)]
    #[case("", STANDARD_FOOD_FACTOR)]
    fn test_destination_food_factor(#[case] destination: &str, #[case] expected: f64) {
        assert_eq!(destination_food_factor(destination), expected);
    }

    #[test]
    fn test_food_cost() {
        assert_eq!(estimate_food_cost("Paris, France", 7), 280.0);
        assert!((estimate_food_cost("Tokyo, Asia", 10) - 280.0).abs() < 1e-9);
        assert_eq!(estimate_food_cost("Sydney, Australia", 2), 120.0);
    }

    #[test]
    fn test_miscellaneous_cost() {
        assert_eq!(estimate_miscellaneous_cost(5), 100.0);
        assert_eq!(estimate_miscellaneous_cost(0), 0.0);
    }

    #[test]
    fn test_negative_inputs_are_clamped() {
        let hotel = AccommodationDetails::new("hotel", "medium");
        assert_eq!(estimate_accommodation_cost(Some(&hotel), -3), 0.0);
        assert_eq!(estimate_food_cost("Canada", -1), 0.0);
        assert_eq!(estimate_miscellaneous_cost(-4), 0.0);

        let bus = TransportationDetails::new("bus", "economy", -100.0);
        assert_eq!(estimate_transportation_cost(Some(&bus)), 0.0);
    }
}
