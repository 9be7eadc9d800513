use skybooker_shared::models::events::{BookingConfirmedEvent, TicketDeliveryEvent};

/// Outlet for user-facing notifications (toasts, alerts)
pub trait Notifier {
    fn booking_confirmed(&self, event: &BookingConfirmedEvent);

    fn ticket_delivered(&self, event: &TicketDeliveryEvent);
}

/// Writes notifications to the log
pub struct TracingNotifier;

impl TracingNotifier {
    // Debug output keeps Masked fields hidden
    fn publish<T: std::fmt::Debug>(&self, event_type: &str, payload: &T) {
        tracing::info!(event = event_type, "{:?}", payload);
    }
}

impl Notifier for TracingNotifier {
    fn booking_confirmed(&self, event: &BookingConfirmedEvent) {
        tracing::info!(
            "Booking Confirmed! Your seat {} has been successfully reserved.",
            event.seat_id
        );
        self.publish("booking_confirmed", event);
    }

    fn ticket_delivered(&self, event: &TicketDeliveryEvent) {
        self.publish("ticket_delivered", event);
    }
}
