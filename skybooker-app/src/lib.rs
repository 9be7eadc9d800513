pub mod app_config;
pub mod error;
pub mod notify;
pub mod session;

pub use app_config::Config;
pub use error::AppError;
pub use notify::{Notifier, TracingNotifier};
pub use session::{Command, Response, Session};

use skybooker_booking::BookingFlowController;
use skybooker_catalog::{Flight, InventoryError, MockSeatInventory, PricingEngine};

/// Build a controller over the mock inventory described by the config
pub fn booking_controller(config: &Config) -> Result<BookingFlowController, InventoryError> {
    let mut inventory = MockSeatInventory::seeded(
        Flight::mock(),
        config.inventory.plans(),
        config.inventory.seed,
    )?;

    Ok(BookingFlowController::new(
        &mut inventory,
        PricingEngine::new(config.pricing.clone()),
    ))
}
