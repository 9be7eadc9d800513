use skybooker_booking::{FlowError, TicketError};

use crate::session::Response;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Malformed command: {0}")]
    BadRequest(String),

    #[error("No confirmed booking in this session")]
    NoBooking,

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Ticket(#[from] TicketError),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl AppError {
    /// Error line sent back to the presentation layer
    pub fn into_response(self) -> Response {
        match &self {
            AppError::BadRequest(msg) => tracing::warn!("Bad command: {}", msg),
            AppError::Ticket(err) => tracing::error!("Ticket error: {}", err),
            AppError::NoBooking | AppError::Flow(_) => {}
        }
        Response::error(self.to_string())
    }
}
