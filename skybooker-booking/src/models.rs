use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use skybooker_catalog::{Flight, Seat};
use skybooker_shared::Masked;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(ValidationError::InvalidGender(s.to_string())),
        }
    }
}

/// Traveller details, fixed once submitted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Passenger {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    pub date_of_birth: Masked<String>,
    pub gender: Gender,
}

impl Passenger {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Every text field is present
    pub fn is_complete(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.email.is_blank()
            && !self.phone.is_blank()
            && !self.date_of_birth.is_blank()
    }
}

/// Raw passenger form fields as entered in the UI
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PassengerForm {
    pub first_name: String,
    pub last_name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    pub date_of_birth: Masked<String>,
    pub gender: String,
}

impl PassengerForm {
    /// Presence check on every field; email and phone formats are left to the UI.
    pub fn validate(&self) -> Result<Passenger, ValidationError> {
        let required: [(&'static str, &str); 6] = [
            ("first_name", self.first_name.as_str()),
            ("last_name", self.last_name.as_str()),
            ("email", self.email.expose().as_str()),
            ("phone", self.phone.expose().as_str()),
            ("date_of_birth", self.date_of_birth.expose().as_str()),
            ("gender", self.gender.as_str()),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }

        Ok(Passenger {
            id: Uuid::new_v4(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: Masked(self.email.expose().trim().to_string()),
            phone: Masked(self.phone.expose().trim().to_string()),
            date_of_birth: Masked(self.date_of_birth.expose().trim().to_string()),
            gender: self.gender.parse()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid gender: {0}")]
    InvalidGender(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
            BookingStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// A confirmed seat reservation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: Uuid,
    pub flight: Flight,
    pub passenger: Passenger,
    pub seat: Seat, // Snapshot taken at confirmation, selection flag set
    pub total_price: i32,
    pub booked_at: DateTime<Utc>,
    pub status: BookingStatus,
}

impl Booking {
    pub fn confirm(flight: Flight, passenger: Passenger, seat: Seat, total_price: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            flight,
            passenger,
            seat: Seat { is_selected: true, ..seat },
            total_price,
            booked_at: Utc::now(),
            status: BookingStatus::Confirmed,
        }
    }

    /// First 8 characters of the booking id, upper-cased
    pub fn confirmation_number(&self) -> String {
        self.id.simple().to_string()[..8].to_uppercase()
    }
}
