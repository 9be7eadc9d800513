use uuid::Uuid;
use crate::pii::Masked;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct BookingConfirmedEvent {
    pub booking_id: Uuid,
    pub confirmation_number: String,
    pub flight_number: String,
    pub seat_id: String,
    pub total_price: i32,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TicketChannel {
    Download,
    Email,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct TicketDeliveryEvent {
    pub booking_id: Uuid,
    pub confirmation_number: String,
    pub channel: TicketChannel,
    pub recipient: Option<Masked<String>>, // Only set for e-mail delivery
    pub timestamp: i64,
}
