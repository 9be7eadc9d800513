use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, NaiveTime};

/// Descriptive flight record shown alongside every step of the booking flow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flight {
    pub id: String,
    pub flight_number: String,
    pub departure: String,
    pub arrival: String,
    pub departure_time: NaiveTime,
    pub arrival_time: NaiveTime,
    pub date: NaiveDate,
    pub aircraft: String,
    pub duration: String, // Label only, airports may sit in different time zones
}

impl Flight {
    /// Route label, e.g. "New York (JFK) → Los Angeles (LAX)"
    pub fn route(&self) -> String {
        format!("{} → {}", self.departure, self.arrival)
    }

    /// Demo flight served by the mock inventory
    pub fn mock() -> Self {
        Self {
            id: "1".to_string(),
            flight_number: "AA 2847".to_string(),
            departure: "New York (JFK)".to_string(),
            arrival: "Los Angeles (LAX)".to_string(),
            departure_time: NaiveTime::from_hms_opt(14, 30, 0).unwrap_or_default(),
            arrival_time: NaiveTime::from_hms_opt(18, 45, 0).unwrap_or_default(),
            date: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap_or_default(),
            aircraft: "Boeing 737-800".to_string(),
            duration: "6h 15m".to_string(),
        }
    }
}
