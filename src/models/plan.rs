//! Travel plan model as supplied by callers
//!
//! Every field is optional on the wire. Missing sub-record fields resolve to
//! the defaults below when the estimators read them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Result, TravelBudgetError};

pub const DEFAULT_ACCOMMODATION_TYPE: &str = "hotel";
pub const DEFAULT_ACCOMMODATION_QUALITY: &str = "medium";
pub const DEFAULT_TRANSPORTATION_TYPE: &str = "flight";
pub const DEFAULT_TRANSPORTATION_QUALITY: &str = "economy";
pub const DEFAULT_ACTIVITY_TYPE: &str = "sightseeing";
pub const DEFAULT_ACTIVITY_QUALITY: &str = "standard";
pub const DEFAULT_ACTIVITY_HOURS: f64 = 2.0;

/// A structured travel plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelPlan {
    /// Free-text destination, e.g. "Paris, France"
    pub destination: String,
    /// Length of the trip in nights/days
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<AccommodationDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transportation: Option<TransportationDetails>,
    pub activities: Vec<ActivityDetails>,
}

/// Where the traveller sleeps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccommodationDetails {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}

/// How the traveller gets there
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportationDetails {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Distance in miles/km, matching the unit of the rate table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}

/// One planned activity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityDetails {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    /// Length in hours. Carried through for callers, not priced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl TravelPlan {
    #[must_use]
    pub fn new(destination: impl Into<String>, duration: i64) -> Self {
        Self {
            destination: destination.into(),
            duration,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_accommodation(mut self, accommodation: AccommodationDetails) -> Self {
        self.accommodation = Some(accommodation);
        self
    }

    #[must_use]
    pub fn with_transportation(mut self, transportation: TransportationDetails) -> Self {
        self.transportation = Some(transportation);
        self
    }

    #[must_use]
    pub fn with_activity(mut self, activity: ActivityDetails) -> Self {
        self.activities.push(activity);
        self
    }

    /// Read a plan from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            TravelBudgetError::parse(format!("Invalid travel plan in {}: {e}", path.display()))
        })
    }

    /// The demo plan: a week in Paris flying in from New York
    #[must_use]
    pub fn paris_example() -> Self {
        Self::new("Paris, France", 7)
            .with_accommodation(AccommodationDetails::new("hotel", "medium"))
            // miles from NYC to Paris
            .with_transportation(TransportationDetails::new("flight", "economy", 3600.0))
            .with_activity(ActivityDetails::new("museum", "standard"))
            .with_activity(ActivityDetails::new("sightseeing", "standard"))
            .with_activity(ActivityDetails::new("dining", "premium"))
    }
}

impl AccommodationDetails {
    #[must_use]
    pub fn new(kind: impl Into<String>, quality: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            quality: Some(quality.into()),
        }
    }

    /// A record with no fields set counts as "no accommodation"
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.quality.is_none()
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or(DEFAULT_ACCOMMODATION_TYPE)
    }

    #[must_use]
    pub fn quality(&self) -> &str {
        self.quality.as_deref().unwrap_or(DEFAULT_ACCOMMODATION_QUALITY)
    }
}

impl TransportationDetails {
    #[must_use]
    pub fn new(kind: impl Into<String>, quality: impl Into<String>, distance: f64) -> Self {
        Self {
            kind: Some(kind.into()),
            distance: Some(distance),
            quality: Some(quality.into()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.distance.is_none() && self.quality.is_none()
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or(DEFAULT_TRANSPORTATION_TYPE)
    }

    #[must_use]
    pub fn quality(&self) -> &str {
        self.quality
            .as_deref()
            .unwrap_or(DEFAULT_TRANSPORTATION_QUALITY)
    }

    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance.unwrap_or(0.0)
    }
}

impl ActivityDetails {
    #[must_use]
    pub fn new(kind: impl Into<String>, quality: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            quality: Some(quality.into()),
            duration: None,
        }
    }

    #[must_use]
    pub fn with_hours(mut self, hours: f64) -> Self {
        self.duration = Some(hours);
        self
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or(DEFAULT_ACTIVITY_TYPE)
    }

    #[must_use]
    pub fn quality(&self) -> &str {
        self.quality.as_deref().unwrap_or(DEFAULT_ACTIVITY_QUALITY)
    }

    #[must_use]
    pub fn hours(&self) -> f64 {
        self.duration.unwrap_or(DEFAULT_ACTIVITY_HOURS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default_plan() {
        let plan: TravelPlan = serde_json::from_str("{}").unwrap();
        assert_eq!(plan, TravelPlan::default());
        assert_eq!(plan.duration, 0);
        assert!(plan.accommodation.is_none());
        assert!(plan.activities.is_empty());
    }

    #[test]
    fn test_type_field_is_renamed() {
        let plan: TravelPlan = serde_json::from_str(
            r#"{
                "destination": "Lisbon",
                "duration": 4,
                "accommodation": {"type": "Hostel"},
                "transportation": {"type": "train", "distance": 250},
                "activities": [{"type": "cultural", "quality": "premium", "duration": 3}]
            }"#,
        )
        .unwrap();

        let accommodation = plan.accommodation.unwrap();
        assert_eq!(accommodation.kind(), "Hostel");
        assert_eq!(accommodation.quality(), DEFAULT_ACCOMMODATION_QUALITY);

        let transportation = plan.transportation.unwrap();
        assert_eq!(transportation.kind(), "train");
        assert_eq!(transportation.distance(), 250.0);
        assert_eq!(transportation.quality(), DEFAULT_TRANSPORTATION_QUALITY);

        assert_eq!(plan.activities[0].hours(), 3.0);
    }

    #[test]
    fn test_empty_sub_records() {
        let plan: TravelPlan =
            serde_json::from_str(r#"{"accommodation": {}, "transportation": {}}"#).unwrap();
        assert!(plan.accommodation.unwrap().is_empty());
        assert!(plan.transportation.unwrap().is_empty());
    }

    #[test]
    fn test_from_json_file_errors() {
        let missing = TravelPlan::from_json_file("/nonexistent/plan.json").unwrap_err();
        assert!(matches!(missing, TravelBudgetError::Io { .. }));

        let path = std::env::temp_dir().join(format!("travelbudget-model-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"duration": "a week"}"#).unwrap();
        let invalid = TravelPlan::from_json_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(invalid, TravelBudgetError::Parse { .. }));
    }

    #[test]
    fn test_activity_defaults() {
        let activity = ActivityDetails::default();
        assert_eq!(activity.kind(), "sightseeing");
        assert_eq!(activity.quality(), "standard");
        assert_eq!(activity.hours(), 2.0);
    }

    #[test]
    fn test_serialization_skips_unset_fields() {
        let plan = TravelPlan::new("Oslo", 2).with_activity(ActivityDetails::new("museum", "free"));
        let json = serde_json::to_value(&plan).unwrap();
        assert!(json.get("accommodation").is_none());
        assert_eq!(json["activities"][0]["type"], "museum");
        assert!(json["activities"][0].get("duration").is_none());
    }
}
