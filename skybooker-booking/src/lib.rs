pub mod models;
pub mod flow;
pub mod intent;
pub mod controller;
pub mod ticket;

pub use models::{Booking, BookingStatus, Gender, Passenger, PassengerForm, ValidationError};
pub use flow::{BookingState, BookingStep, FlowError, ProgressStep};
pub use intent::Intent;
pub use controller::{BookingFlowController, BookingSnapshot};
pub use ticket::{ETicket, TicketEmail, TicketError, TicketService};
