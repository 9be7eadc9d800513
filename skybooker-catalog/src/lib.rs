pub mod flight;
pub mod seat;
pub mod pricing;
pub mod inventory;
pub mod seat_map;

pub use flight::Flight;
pub use seat::{CabinClass, Seat, SeatType};
pub use pricing::{PriceBreakdown, PricingConfig, PricingEngine, PricingError};
pub use inventory::{CabinPlan, InventoryError, MockSeatInventory, SeatInventoryProvider};
pub use seat_map::{CabinAvailability, SeatMap, SeatRow};
