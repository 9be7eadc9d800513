use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::flight::Flight;
use crate::seat::{CabinClass, Seat, SeatType};

/// Supplies the flight and its seat collection once at session start
pub trait SeatInventoryProvider {
    /// The flight being booked
    fn flight(&self) -> Flight;

    /// Seat collection in row order, nothing selected
    fn generate_seats(&mut self) -> Vec<Seat>;
}

/// Highest row number a cabin plan may use
pub const MAX_ROW: u32 = 999;

/// Layout and fare of one cabin section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CabinPlan {
    pub cabin_class: CabinClass,
    pub first_row: u32,
    pub last_row: u32,
    pub columns: Vec<char>,
    pub price: i32,
    /// Probability that a generated seat is still open for sale
    pub availability: f64,
}

impl CabinPlan {
    /// Boeing 737-800: business 2-2 in rows 1-3, premium 3-3 in rows 4-8, economy 3-3 in rows 9-33
    pub fn boeing_737_800() -> Vec<CabinPlan> {
        let six_across = vec!['A', 'B', 'C', 'D', 'E', 'F'];
        vec![
            CabinPlan {
                cabin_class: CabinClass::Business,
                first_row: 1,
                last_row: 3,
                columns: vec!['A', 'C', 'D', 'F'],
                price: 899,
                availability: 0.7,
            },
            CabinPlan {
                cabin_class: CabinClass::Premium,
                first_row: 4,
                last_row: 8,
                columns: six_across.clone(),
                price: 349,
                availability: 0.6,
            },
            CabinPlan {
                cabin_class: CabinClass::Economy,
                first_row: 9,
                last_row: 33,
                columns: six_across,
                price: 189,
                availability: 0.5,
            },
        ]
    }

    pub fn with_availability(mut self, availability: f64) -> Self {
        self.availability = availability;
        self
    }

    pub fn seat_count(&self) -> usize {
        let rows = (u64::from(self.last_row) + 1).saturating_sub(u64::from(self.first_row)) as usize;
        rows * self.columns.len()
    }

    fn validate(&self) -> Result<(), InventoryError> {
        if !(0.0..=1.0).contains(&self.availability) {
            return Err(InventoryError::InvalidAvailability {
                cabin: self.cabin_class.to_string(),
                ratio: self.availability,
            });
        }
        if self.columns.is_empty()
            || self.first_row == 0
            || self.first_row > self.last_row
            || self.last_row > MAX_ROW
        {
            return Err(InventoryError::InvalidLayout(self.cabin_class.to_string()));
        }
        if self.price <= 0 {
            return Err(InventoryError::InvalidPrice {
                cabin: self.cabin_class.to_string(),
                price: self.price,
            });
        }
        Ok(())
    }
}

/// In-memory seat generator with randomized availability
pub struct MockSeatInventory<R: Rng> {
    flight: Flight,
    plans: Vec<CabinPlan>,
    rng: R,
}

impl MockSeatInventory<StdRng> {
    /// Default 737-800 layout, seeded when a seed is given
    pub fn standard(seed: Option<u64>) -> Result<Self, InventoryError> {
        Self::seeded(Flight::mock(), CabinPlan::boeing_737_800(), seed)
    }

    /// Seeded generator for reproducible seat maps, OS entropy otherwise
    pub fn seeded(flight: Flight, plans: Vec<CabinPlan>, seed: Option<u64>) -> Result<Self, InventoryError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(flight, plans, rng)
    }
}

impl<R: Rng> MockSeatInventory<R> {
    pub fn new(flight: Flight, plans: Vec<CabinPlan>, rng: R) -> Result<Self, InventoryError> {
        for plan in &plans {
            plan.validate()?;
        }

        let mut sorted = plans.clone();
        sorted.sort_by_key(|p| p.first_row);
        for pair in sorted.windows(2) {
            if pair[1].first_row <= pair[0].last_row {
                return Err(InventoryError::OverlappingRows {
                    first: pair[0].cabin_class.to_string(),
                    second: pair[1].cabin_class.to_string(),
                });
            }
        }

        Ok(Self { flight, plans: sorted, rng })
    }

    pub fn plans(&self) -> &[CabinPlan] {
        &self.plans
    }
}

impl<R: Rng> SeatInventoryProvider for MockSeatInventory<R> {
    fn flight(&self) -> Flight {
        self.flight.clone()
    }

    fn generate_seats(&mut self) -> Vec<Seat> {
        let capacity = self.plans.iter().map(CabinPlan::seat_count).sum();
        let mut seats = Vec::with_capacity(capacity);

        for plan in &self.plans {
            for row in plan.first_row..=plan.last_row {
                for (index, column) in plan.columns.iter().enumerate() {
                    let seat_type = SeatType::for_position(index, plan.columns.len());
                    let is_available = self.rng.gen_bool(plan.availability);
                    seats.push(Seat::new(row, *column, plan.cabin_class, plan.price, seat_type, is_available));
                }
            }
        }

        tracing::debug!(
            "Generated {} seats for flight {} ({} available)",
            seats.len(),
            self.flight.flight_number,
            seats.iter().filter(|s| s.is_available).count()
        );

        seats
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Availability ratio for {cabin} must be within 0..=1, got {ratio}")]
    InvalidAvailability {
        cabin: String,
        ratio: f64,
    },

    #[error("Invalid row or column layout for {0} cabin")]
    InvalidLayout(String),

    #[error("Invalid price for {cabin} cabin: {price}")]
    InvalidPrice {
        cabin: String,
        price: i32,
    },

    #[error("Rows of {first} and {second} cabins overlap")]
    OverlappingRows {
        first: String,
        second: String,
    },
}
