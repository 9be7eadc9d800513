use serde::Serialize;
use std::io::{BufRead, Write};

use skybooker_booking::{
    BookingFlowController, BookingSnapshot, ETicket, Intent, TicketEmail, TicketService,
};
use skybooker_catalog::SeatMap;
use skybooker_shared::models::events::{BookingConfirmedEvent, TicketChannel, TicketDeliveryEvent};

use crate::error::AppError;
use crate::notify::Notifier;

/// One input line: a booking intent or a presentation-side action
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Flow(Intent),
    DownloadTicket,
    EmailTicket,
    Show,
    SeatMap,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, AppError> {
        let value: serde_json::Value = serde_json::from_str(line)?;
        let intent = match value.get("intent") {
            Some(serde_json::Value::String(intent)) => intent.as_str(),
            Some(_) => return Err(AppError::BadRequest("\"intent\" must be a string".to_string())),
            None => return Err(AppError::BadRequest("missing \"intent\" field".to_string())),
        };

        match intent {
            "download_ticket" => Ok(Command::DownloadTicket),
            "email_ticket" => Ok(Command::EmailTicket),
            "show" => Ok(Command::Show),
            "seat_map" => Ok(Command::SeatMap),
            _ => Ok(Command::Flow(serde_json::from_value(value.clone())?)),
        }
    }
}

/// One output line
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<BookingSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<ETicket>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<TicketEmail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_map: Option<SeatMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    fn empty(ok: bool) -> Self {
        Self {
            ok,
            snapshot: None,
            ticket: None,
            email: None,
            seat_map: None,
            error: None,
        }
    }

    pub fn snapshot(snapshot: BookingSnapshot) -> Self {
        Self { snapshot: Some(snapshot), ..Self::empty(true) }
    }

    pub fn ticket(ticket: ETicket) -> Self {
        Self { ticket: Some(ticket), ..Self::empty(true) }
    }

    pub fn email(email: TicketEmail) -> Self {
        Self { email: Some(email), ..Self::empty(true) }
    }

    pub fn seat_map(seat_map: SeatMap) -> Self {
        Self { seat_map: Some(seat_map), ..Self::empty(true) }
    }

    pub fn error(message: String) -> Self {
        Self { error: Some(message), ..Self::empty(false) }
    }
}

/// Presentation-layer driver: feeds intents to the controller and fires notifications
pub struct Session<N: Notifier> {
    controller: BookingFlowController,
    notifier: N,
}

impl<N: Notifier> Session<N> {
    pub fn new(controller: BookingFlowController, notifier: N) -> Self {
        Self { controller, notifier }
    }

    pub fn controller(&self) -> &BookingFlowController {
        &self.controller
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn handle(&mut self, command: Command) -> Result<Response, AppError> {
        match command {
            Command::Flow(intent) => {
                let confirming = intent == Intent::ConfirmBooking;
                self.controller.apply(intent)?;

                if confirming {
                    if let Some(booking) = self.controller.booking() {
                        self.notifier.booking_confirmed(&BookingConfirmedEvent {
                            booking_id: booking.id,
                            confirmation_number: booking.confirmation_number(),
                            flight_number: booking.flight.flight_number.clone(),
                            seat_id: booking.seat.id.clone(),
                            total_price: booking.total_price,
                            timestamp: booking.booked_at.timestamp(),
                        });
                    }
                }
                Ok(Response::snapshot(self.controller.snapshot()))
            }
            Command::DownloadTicket => {
                let booking = self.controller.booking().ok_or(AppError::NoBooking)?;
                let ticket = TicketService::issue(booking)?;
                self.notifier.ticket_delivered(&TicketDeliveryEvent {
                    booking_id: booking.id,
                    confirmation_number: ticket.confirmation_number.clone(),
                    channel: TicketChannel::Download,
                    recipient: None,
                    timestamp: chrono::Utc::now().timestamp(),
                });
                Ok(Response::ticket(ticket))
            }
            Command::EmailTicket => {
                let booking = self.controller.booking().ok_or(AppError::NoBooking)?;
                let email = TicketService::email(booking)?;
                self.notifier.ticket_delivered(&TicketDeliveryEvent {
                    booking_id: booking.id,
                    confirmation_number: booking.confirmation_number(),
                    channel: TicketChannel::Email,
                    recipient: Some(email.to.clone()),
                    timestamp: chrono::Utc::now().timestamp(),
                });
                Ok(Response::email(email))
            }
            Command::Show => Ok(Response::snapshot(self.controller.snapshot())),
            Command::SeatMap => Ok(Response::seat_map(SeatMap::from_seats(&self.controller.state().seats))),
        }
    }

    /// Process JSON lines until EOF, one response line per non-blank input line.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> anyhow::Result<usize> {
        let mut handled = 0;

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let response = Command::parse(&line)
                .and_then(|command| self.handle(command))
                .unwrap_or_else(AppError::into_response);

            serde_json::to_writer(&mut writer, &response)?;
            writeln!(writer)?;
            writer.flush()?;
            handled += 1;
        }

        tracing::info!("Session ended after {} commands", handled);
        Ok(handled)
    }
}
