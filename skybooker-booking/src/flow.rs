use serde::{Deserialize, Serialize};
use std::fmt;

use skybooker_catalog::{Flight, PricingEngine, Seat};

use crate::models::{Booking, Passenger, ValidationError};

/// Stage of the booking wizard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStep {
    SeatSelection,
    PassengerInfo,
    BookingSummary,
    Confirmation,
}

impl BookingStep {
    /// Steps shown in the progress indicator; confirmation replaces the wizard
    pub const WIZARD: [BookingStep; 3] = [
        BookingStep::SeatSelection,
        BookingStep::PassengerInfo,
        BookingStep::BookingSummary,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            BookingStep::SeatSelection => "Select Your Seat",
            BookingStep::PassengerInfo => "Passenger Information",
            BookingStep::BookingSummary => "Review & Confirm",
            BookingStep::Confirmation => "Booking Confirmed",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            BookingStep::SeatSelection => 0,
            BookingStep::PassengerInfo => 1,
            BookingStep::BookingSummary => 2,
            BookingStep::Confirmation => 3,
        }
    }

    /// Target of a back navigation, if any
    pub fn previous(&self) -> Option<BookingStep> {
        match self {
            BookingStep::PassengerInfo => Some(BookingStep::SeatSelection),
            BookingStep::BookingSummary => Some(BookingStep::PassengerInfo),
            BookingStep::SeatSelection | BookingStep::Confirmation => None,
        }
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingStep::SeatSelection => "seat-selection",
            BookingStep::PassengerInfo => "passenger-info",
            BookingStep::BookingSummary => "booking-summary",
            BookingStep::Confirmation => "confirmation",
        };
        f.write_str(s)
    }
}

/// One numbered entry of the progress indicator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressStep {
    pub number: usize,
    pub step: BookingStep,
    pub is_active: bool,
    pub is_completed: bool,
}

pub fn progress(current: BookingStep) -> Vec<ProgressStep> {
    BookingStep::WIZARD
        .iter()
        .enumerate()
        .map(|(index, step)| ProgressStep {
            number: index + 1,
            step: *step,
            is_active: *step == current,
            is_completed: index < current.index() && current != BookingStep::Confirmation,
        })
        .collect()
}

/// Complete wizard state; every transition either applies fully or leaves it untouched.
///
/// The selected seat is kept as an id into `seats` so the selection flag in
/// the collection and the selected reference cannot disagree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingState {
    pub step: BookingStep,
    pub seats: Vec<Seat>,
    pub selected_seat_id: Option<String>,
    pub passenger: Option<Passenger>,
    pub booking: Option<Booking>,
}

impl BookingState {
    pub fn new(seats: Vec<Seat>) -> Self {
        Self {
            step: BookingStep::SeatSelection,
            seats,
            selected_seat_id: None,
            passenger: None,
            booking: None,
        }
    }

    pub fn seat(&self, seat_id: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == seat_id)
    }

    pub fn selected_seat(&self) -> Option<&Seat> {
        self.selected_seat_id.as_deref().and_then(|id| self.seat(id))
    }

    pub fn select_seat(&mut self, seat_id: &str) -> Result<(), FlowError> {
        self.expect_step(BookingStep::SeatSelection, "select_seat")?;

        let seat = self.seat(seat_id)
            .ok_or_else(|| FlowError::SeatNotFound(seat_id.to_string()))?;
        if !seat.is_available {
            return Err(FlowError::SeatUnavailable(seat_id.to_string()));
        }

        self.clear_selection();
        for seat in self.seats.iter_mut().filter(|s| s.id == seat_id) {
            seat.is_selected = true;
        }
        self.selected_seat_id = Some(seat_id.to_string());

        Ok(())
    }

    pub fn advance_to_passenger_info(&mut self) -> Result<(), FlowError> {
        self.expect_step(BookingStep::SeatSelection, "advance_to_passenger_info")?;

        if self.selected_seat().is_none() {
            return Err(FlowError::NoSeatSelected);
        }

        self.step = BookingStep::PassengerInfo;
        Ok(())
    }

    pub fn submit_passenger(&mut self, passenger: Passenger) -> Result<(), FlowError> {
        self.expect_step(BookingStep::PassengerInfo, "submit_passenger")?;

        if !passenger.is_complete() {
            return Err(FlowError::IncompletePassenger);
        }

        self.passenger = Some(passenger);
        self.step = BookingStep::BookingSummary;
        Ok(())
    }

    /// Books the selected seat for the stored passenger.
    pub fn confirm_booking(&mut self, flight: &Flight, pricing: &PricingEngine) -> Result<&Booking, FlowError> {
        self.expect_step(BookingStep::BookingSummary, "confirm_booking")?;

        let seat = self.selected_seat().cloned().ok_or(FlowError::NoSeatSelected)?;
        let passenger = self.passenger.clone().ok_or(FlowError::NoPassenger)?;
        if !seat.is_available {
            return Err(FlowError::SeatUnavailable(seat.id));
        }

        let quote = pricing.quote(&seat);
        let booking = Booking::confirm(flight.clone(), passenger, seat, quote.total);

        // Sold seats never come back
        for s in self.seats.iter_mut().filter(|s| s.id == booking.seat.id) {
            s.is_available = false;
            s.is_selected = false;
        }

        self.step = BookingStep::Confirmation;
        Ok(self.booking.insert(booking))
    }

    /// Returns whether the step changed. Seat flags are left alone.
    pub fn go_back(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    pub fn start_new_booking(&mut self) {
        self.clear_selection();
        self.step = BookingStep::SeatSelection;
        self.selected_seat_id = None;
        self.passenger = None;
        self.booking = None;
    }

    fn clear_selection(&mut self) {
        for seat in self.seats.iter_mut() {
            seat.is_selected = false;
        }
    }

    fn expect_step(&self, expected: BookingStep, action: &'static str) -> Result<(), FlowError> {
        if self.step != expected {
            return Err(FlowError::InvalidTransition {
                from: self.step,
                action,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("Seat not found: {0}")]
    SeatNotFound(String),

    #[error("Seat not available: {0}")]
    SeatUnavailable(String),

    #[error("No seat selected")]
    NoSeatSelected,

    #[error("No passenger details submitted")]
    NoPassenger,

    #[error("Passenger details are incomplete")]
    IncompletePassenger,

    #[error("Invalid passenger details: {0}")]
    InvalidPassenger(#[from] ValidationError),

    #[error("Cannot {action} from step {from}")]
    InvalidTransition {
        from: BookingStep,
        action: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingStatus, PassengerForm};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use skybooker_catalog::{MockSeatInventory, SeatInventoryProvider};
    use skybooker_shared::Masked;

    const SEED: u64 = 0x5EA7_B00C;

    fn state() -> BookingState {
        let mut seats = MockSeatInventory::standard(Some(SEED)).unwrap().generate_seats();
        // Fixed availability: row 9 sold out, everything else open
        for seat in seats.iter_mut() {
            seat.is_available = seat.row != 9;
        }
        BookingState::new(seats)
    }

    fn passenger() -> Passenger {
        PassengerForm {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: Masked::from("jane.doe@example.com"),
            phone: Masked::from("+1 555 0100"),
            date_of_birth: Masked::from("1990-04-12"),
            gender: "female".to_string(),
        }
        .validate()
        .unwrap()
    }

    fn selected_count(state: &BookingState) -> usize {
        state.seats.iter().filter(|s| s.is_selected).count()
    }

    #[test]
    fn test_happy_path() {
        let mut state = state();
        let pricing = PricingEngine::default();

        state.select_seat("12A").unwrap();
        state.advance_to_passenger_info().unwrap();
        assert_eq!(state.step, BookingStep::PassengerInfo);

        state.submit_passenger(passenger()).unwrap();
        assert_eq!(state.step, BookingStep::BookingSummary);

        let booking = state.confirm_booking(&Flight::mock(), &pricing).unwrap().clone();
        assert_eq!(state.step, BookingStep::Confirmation);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.seat.id, "12A");
        assert!(booking.seat.is_selected);
        assert_eq!(booking.total_price, 242);

        let seat = state.seat("12A").unwrap();
        assert!(!seat.is_available);
        assert!(!seat.is_selected);

        state.start_new_booking();
        assert_eq!(state.step, BookingStep::SeatSelection);
        assert!(state.selected_seat_id.is_none());
        assert!(state.passenger.is_none());
        assert!(state.booking.is_none());
        assert!(!state.seat("12A").unwrap().is_available);
    }

    #[test]
    fn test_select_replaces_previous_selection() {
        let mut state = state();
        state.select_seat("1A").unwrap();
        state.select_seat("20F").unwrap();

        assert_eq!(selected_count(&state), 1);
        assert!(state.seat("20F").unwrap().is_selected);
        assert_eq!(state.selected_seat().unwrap().id, "20F");

        // Same seat again is a no-op
        let before = state.clone();
        state.select_seat("20F").unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_select_unavailable_seat_changes_nothing() {
        let mut state = state();
        state.select_seat("5C").unwrap();
        let before = state.clone();

        let result = state.select_seat("9B");
        assert_eq!(result, Err(FlowError::SeatUnavailable("9B".to_string())));
        assert_eq!(state, before);
        assert!(!state.seat("9B").unwrap().is_available);
    }

    #[test]
    fn test_select_unknown_seat() {
        let mut state = state();
        assert_eq!(state.select_seat("99Z"), Err(FlowError::SeatNotFound("99Z".to_string())));
        assert_eq!(selected_count(&state), 0);
    }

    #[test]
    fn test_advance_requires_selection() {
        let mut state = state();
        assert_eq!(state.advance_to_passenger_info(), Err(FlowError::NoSeatSelected));
        assert_eq!(state.step, BookingStep::SeatSelection);
    }

    #[test]
    fn test_go_back_edges() {
        let mut state = state();
        assert!(!state.go_back());
        assert_eq!(state.step, BookingStep::SeatSelection);

        state.select_seat("7D").unwrap();
        state.advance_to_passenger_info().unwrap();
        state.submit_passenger(passenger()).unwrap();

        assert!(state.go_back());
        assert_eq!(state.step, BookingStep::PassengerInfo);
        assert!(state.passenger.is_some());

        assert!(state.go_back());
        assert_eq!(state.step, BookingStep::SeatSelection);
        // Back navigation keeps the seat selected
        assert!(state.seat("7D").unwrap().is_selected);
        assert_eq!(state.selected_seat().unwrap().id, "7D");
    }

    #[test]
    fn test_go_back_from_confirmation_is_noop() {
        let mut state = state();
        state.select_seat("2C").unwrap();
        state.advance_to_passenger_info().unwrap();
        state.submit_passenger(passenger()).unwrap();
        state.confirm_booking(&Flight::mock(), &PricingEngine::default()).unwrap();

        let before = state.clone();
        assert!(!state.go_back());
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_order_intents_rejected() {
        let mut state = state();
        let pricing = PricingEngine::default();

        let before = state.clone();
        assert!(matches!(
            state.confirm_booking(&Flight::mock(), &pricing),
            Err(FlowError::InvalidTransition { from: BookingStep::SeatSelection, .. })
        ));
        assert!(matches!(
            state.submit_passenger(passenger()),
            Err(FlowError::InvalidTransition { .. })
        ));
        assert_eq!(state, before);

        state.select_seat("6A").unwrap();
        state.advance_to_passenger_info().unwrap();
        assert!(matches!(
            state.select_seat("6B"),
            Err(FlowError::InvalidTransition { from: BookingStep::PassengerInfo, .. })
        ));
        assert!(state.seat("6A").unwrap().is_selected);
    }

    #[test]
    fn test_incomplete_passenger_rejected() {
        let mut state = state();
        state.select_seat("6A").unwrap();
        state.advance_to_passenger_info().unwrap();

        let mut incomplete = passenger();
        incomplete.email = Masked::from("");
        assert_eq!(state.submit_passenger(incomplete), Err(FlowError::IncompletePassenger));
        assert_eq!(state.step, BookingStep::PassengerInfo);
        assert!(state.passenger.is_none());
    }

    #[test]
    fn test_new_booking_clears_uncommitted_selection() {
        let mut state = state();
        state.select_seat("3F").unwrap();
        state.start_new_booking();

        assert_eq!(selected_count(&state), 0);
        assert!(state.seat("3F").unwrap().is_available);
    }

    #[test]
    fn test_prop_at_most_one_seat_selected() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let pricing = PricingEngine::default();
        let flight = Flight::mock();
        let mut state = BookingState::new(
            MockSeatInventory::standard(Some(SEED)).unwrap().generate_seats(),
        );
        let mut booked: Vec<String> = Vec::new();

        for _ in 0..2000 {
            let seat_id = state.seats[rng.gen_range(0..state.seats.len())].id.clone();
            let was_available = state.seat(&seat_id).unwrap().is_available;
            let before = state.clone();

            match rng.gen_range(0..6) {
                0 | 1 => {
                    let result = state.select_seat(&seat_id);
                    if result.is_err() {
                        assert_eq!(state, before);
                    }
                    if !was_available {
                        assert!(result.is_err());
                    }
                }
                2 => {
                    let _ = state.advance_to_passenger_info();
                }
                3 => {
                    let _ = state.submit_passenger(passenger());
                }
                4 => {
                    if let Ok(booking) = state.confirm_booking(&flight, &pricing) {
                        booked.push(booking.seat.id.clone());
                    }
                }
                _ => {
                    if rng.gen_bool(0.5) {
                        state.go_back();
                    } else {
                        state.start_new_booking();
                    }
                }
            }

            assert!(selected_count(&state) <= 1);
            for id in &booked {
                assert!(!state.seat(id).unwrap().is_available, "seat {} was released", id);
            }
        }
    }

    #[test]
    fn test_step_labels() {
        assert_eq!(BookingStep::BookingSummary.title(), "Review & Confirm");
        assert_eq!(BookingStep::PassengerInfo.to_string(), "passenger-info");
        assert_eq!(
            serde_json::to_string(&BookingStep::SeatSelection).unwrap(),
            "\"seat-selection\""
        );
    }

    #[test]
    fn test_progress_marks_completed_steps() {
        let steps = progress(BookingStep::BookingSummary);
        assert_eq!(steps.len(), 3);
        assert!(steps[0].is_completed && steps[1].is_completed);
        assert!(steps[2].is_active && !steps[2].is_completed);

        let first = progress(BookingStep::SeatSelection);
        assert!(first[0].is_active);
        assert!(first.iter().all(|s| !s.is_completed));
    }
}
