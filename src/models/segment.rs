use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One visited destination in the travel itinerary.
///
/// The arrival date is informational only; incubation-window arithmetic
/// runs on the departure date against the session-level symptom onset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelSegment {
    pub id: Uuid,
    pub country: String,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
}

impl TravelSegment {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            country: country.into(),
            arrival_date: None,
            departure_date: None,
        }
    }
}
