use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use skybooker_catalog::{
    CabinAvailability, Flight, PriceBreakdown, PricingEngine, Seat, SeatInventoryProvider,
};

use crate::flow::{progress, BookingState, BookingStep, FlowError, ProgressStep};
use crate::intent::Intent;
use crate::models::{Booking, Passenger};

/// Read-only view of the session handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingSnapshot {
    pub step: BookingStep,
    pub title: String,
    pub progress: Vec<ProgressStep>,
    pub flight: Flight,
    pub seats: Vec<Seat>,
    pub selected_seat: Option<Seat>,
    pub quote: Option<PriceBreakdown>,
    pub passenger: Option<Passenger>,
    pub booking: Option<Booking>,
    pub availability: Vec<CabinAvailability>,
}

/// Owns the wizard state for one session and applies user intents to it
pub struct BookingFlowController {
    flight: Flight,
    pricing: PricingEngine,
    state: BookingState,
}

impl BookingFlowController {
    /// Pulls the flight and seat collection from the provider once
    pub fn new<P: SeatInventoryProvider>(provider: &mut P, pricing: PricingEngine) -> Self {
        let flight = provider.flight();
        let seats = provider.generate_seats();
        info!("Booking session opened for flight {} with {} seats", flight.flight_number, seats.len());

        Self::from_state(flight, pricing, BookingState::new(seats))
    }

    /// Resume from a previously captured state
    pub fn from_state(flight: Flight, pricing: PricingEngine, state: BookingState) -> Self {
        Self { flight, pricing, state }
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn flight(&self) -> &Flight {
        &self.flight
    }

    pub fn step(&self) -> BookingStep {
        self.state.step
    }

    pub fn selected_seat(&self) -> Option<&Seat> {
        self.state.selected_seat()
    }

    pub fn booking(&self) -> Option<&Booking> {
        self.state.booking.as_ref()
    }

    /// Price of the currently selected seat
    pub fn quote(&self) -> Option<PriceBreakdown> {
        self.state.selected_seat().map(|seat| self.pricing.quote(seat))
    }

    pub fn select_seat(&mut self, seat_id: &str) -> Result<(), FlowError> {
        self.state.select_seat(seat_id)?;
        debug!("Seat {} selected", seat_id);
        Ok(())
    }

    pub fn advance_to_passenger_info(&mut self) -> Result<(), FlowError> {
        self.state.advance_to_passenger_info()?;
        debug!("Advanced to {}", self.state.step);
        Ok(())
    }

    pub fn submit_passenger(&mut self, passenger: Passenger) -> Result<(), FlowError> {
        let passenger_id = passenger.id;
        self.state.submit_passenger(passenger)?;
        debug!("Passenger {} submitted", passenger_id);
        Ok(())
    }

    pub fn confirm_booking(&mut self) -> Result<Booking, FlowError> {
        let booking = self.state.confirm_booking(&self.flight, &self.pricing)?.clone();
        info!(
            "Booking {} confirmed: seat {} on {} for {}",
            booking.confirmation_number(),
            booking.seat.id,
            booking.flight.flight_number,
            booking.total_price
        );
        Ok(booking)
    }

    pub fn go_back(&mut self) -> bool {
        let from = self.state.step;
        let moved = self.state.go_back();
        if moved {
            debug!("Went back from {} to {}", from, self.state.step);
        } else {
            debug!("Back navigation ignored at {}", from);
        }
        moved
    }

    pub fn start_new_booking(&mut self) {
        self.state.start_new_booking();
        info!("New booking started");
    }

    /// Dispatch a user intent; on error the state is unchanged
    pub fn apply(&mut self, intent: Intent) -> Result<(), FlowError> {
        let name = intent.name();
        let result = match intent {
            Intent::SelectSeat { seat_id } => self.select_seat(&seat_id),
            Intent::AdvanceToPassengerInfo => self.advance_to_passenger_info(),
            Intent::SubmitPassenger { passenger } => passenger
                .validate()
                .map_err(FlowError::from)
                .and_then(|passenger| self.submit_passenger(passenger)),
            Intent::ConfirmBooking => self.confirm_booking().map(|_| ()),
            Intent::GoBack => {
                self.go_back();
                Ok(())
            }
            Intent::StartNewBooking => {
                self.start_new_booking();
                Ok(())
            }
        };

        if let Err(e) = &result {
            warn!("Rejected {} at {}: {}", name, self.state.step, e);
        }
        result
    }

    pub fn snapshot(&self) -> BookingSnapshot {
        BookingSnapshot {
            step: self.state.step,
            title: self.state.step.title().to_string(),
            progress: progress(self.state.step),
            flight: self.flight.clone(),
            seats: self.state.seats.clone(),
            selected_seat: self.state.selected_seat().cloned(),
            quote: self.quote(),
            passenger: self.state.passenger.clone(),
            booking: self.state.booking.clone(),
            availability: CabinAvailability::summarize(&self.state.seats),
        }
    }
}
