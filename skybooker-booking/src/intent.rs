use serde::{Deserialize, Serialize};

use crate::models::PassengerForm;

/// A discrete user action coming from the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    SelectSeat { seat_id: String },
    AdvanceToPassengerInfo,
    SubmitPassenger { passenger: PassengerForm },
    ConfirmBooking,
    GoBack,
    StartNewBooking,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::SelectSeat { .. } => "select_seat",
            Intent::AdvanceToPassengerInfo => "advance_to_passenger_info",
            Intent::SubmitPassenger { .. } => "submit_passenger",
            Intent::ConfirmBooking => "confirm_booking",
            Intent::GoBack => "go_back",
            Intent::StartNewBooking => "start_new_booking",
        }
    }
}
