use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use skybooker_shared::Masked;

use crate::models::{Booking, BookingStatus};

pub const TRAVEL_REMINDERS: [&str; 4] = [
    "Arrive at the airport at least 2 hours before domestic flights",
    "Check-in online 24 hours before your flight",
    "Ensure your ID matches the name on your ticket",
    "Review baggage policies before arriving at the airport",
];

/// Electronic ticket for a confirmed booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ETicket {
    pub booking_id: Uuid,
    pub confirmation_number: String,
    pub passenger_name: String,
    pub flight_number: String,
    pub route: String,
    pub date: NaiveDate,
    pub departure_time: NaiveTime,
    pub arrival_time: NaiveTime,
    pub seat_id: String,
    pub cabin: String,
    pub seat_type: String,
    pub total_price: i32,
    pub issued_at: DateTime<Utc>,
    pub reminders: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TicketEmail {
    pub to: Masked<String>,
    pub subject: String,
    pub body: String,
}

/// Issues e-tickets and ticket e-mails
pub struct TicketService;

impl TicketService {
    pub fn issue(booking: &Booking) -> Result<ETicket, TicketError> {
        if booking.status != BookingStatus::Confirmed {
            return Err(TicketError::NotConfirmed {
                booking_id: booking.id.to_string(),
                status: booking.status.to_string(),
            });
        }

        Ok(ETicket {
            booking_id: booking.id,
            confirmation_number: booking.confirmation_number(),
            passenger_name: booking.passenger.full_name(),
            flight_number: booking.flight.flight_number.clone(),
            route: booking.flight.route(),
            date: booking.flight.date,
            departure_time: booking.flight.departure_time,
            arrival_time: booking.flight.arrival_time,
            seat_id: booking.seat.id.clone(),
            cabin: booking.seat.cabin_class.display_name().to_string(),
            seat_type: booking.seat.seat_type.to_string(),
            total_price: booking.total_price,
            issued_at: Utc::now(),
            reminders: TRAVEL_REMINDERS.iter().map(|r| r.to_string()).collect(),
        })
    }

    /// E-mail carrying the ticket, addressed to the booking's passenger
    pub fn email(booking: &Booking) -> Result<TicketEmail, TicketError> {
        let ticket = Self::issue(booking)?;

        let body = format!(
            "Dear {},\n\n\
             Your booking {} is confirmed.\n\n\
             Flight: {} ({})\n\
             Date: {} {} - {}\n\
             Seat: {} ({}, {} seat)\n\
             Total paid: ${}\n\n\
             {}\n",
            ticket.passenger_name,
            ticket.confirmation_number,
            ticket.flight_number,
            ticket.route,
            ticket.date,
            ticket.departure_time.format("%H:%M"),
            ticket.arrival_time.format("%H:%M"),
            ticket.seat_id,
            ticket.cabin,
            ticket.seat_type,
            ticket.total_price,
            ticket.reminders.iter().map(|r| format!("- {}", r)).collect::<Vec<_>>().join("\n"),
        );

        Ok(TicketEmail {
            to: booking.passenger.email.clone(),
            subject: format!("Your e-ticket {} for flight {}", ticket.confirmation_number, ticket.flight_number),
            body,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    #[error("Booking {booking_id} is {status}, tickets require a confirmed booking")]
    NotConfirmed {
        booking_id: String,
        status: String,
    },
}
