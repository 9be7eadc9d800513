use serde::{Deserialize, Serialize};
use std::fmt;

/// Fare tier of a seat
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    Business,
    Premium,
    Economy,
}

impl CabinClass {
    pub fn display_name(&self) -> &'static str {
        match self {
            CabinClass::Business => "Business Class",
            CabinClass::Premium => "Premium Economy",
            CabinClass::Economy => "Economy",
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CabinClass::Business => "business",
            CabinClass::Premium => "premium",
            CabinClass::Economy => "economy",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeatType {
    Window,
    Middle,
    Aisle,
}

impl SeatType {
    /// Seat type by column position: outer columns are windows, the two
    /// columns touching the centre aisle are aisles, the rest are middles.
    pub fn for_position(index: usize, columns_in_row: usize) -> Self {
        let half = columns_in_row / 2;
        if index == 0 || index + 1 == columns_in_row {
            SeatType::Window
        } else if index + 1 == half || index == half {
            SeatType::Aisle
        } else {
            SeatType::Middle
        }
    }
}

impl fmt::Display for SeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeatType::Window => "window",
            SeatType::Middle => "middle",
            SeatType::Aisle => "aisle",
        };
        f.write_str(s)
    }
}

/// A single seat on the flight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    pub id: String,
    pub row: u32,
    pub column: char,
    pub cabin_class: CabinClass,
    pub is_available: bool,
    pub is_selected: bool,
    pub price: i32,
    pub seat_type: SeatType,
}

impl Seat {
    pub fn new(
        row: u32,
        column: char,
        cabin_class: CabinClass,
        price: i32,
        seat_type: SeatType,
        is_available: bool,
    ) -> Self {
        Self {
            id: format!("{}{}", row, column),
            row,
            column,
            cabin_class,
            is_available,
            is_selected: false,
            price,
            seat_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_type_six_across() {
        let types: Vec<SeatType> = (0..6).map(|i| SeatType::for_position(i, 6)).collect();
        assert_eq!(
            types,
            vec![
                SeatType::Window,
                SeatType::Middle,
                SeatType::Aisle,
                SeatType::Aisle,
                SeatType::Middle,
                SeatType::Window,
            ]
        );
    }

    #[test]
    fn test_seat_type_four_across_has_no_middle() {
        let types: Vec<SeatType> = (0..4).map(|i| SeatType::for_position(i, 4)).collect();
        assert_eq!(
            types,
            vec![SeatType::Window, SeatType::Aisle, SeatType::Aisle, SeatType::Window]
        );
    }

    #[test]
    fn test_seat_id_and_serialization() {
        let seat = Seat::new(12, 'C', CabinClass::Economy, 189, SeatType::Aisle, true);
        assert_eq!(seat.id, "12C");
        assert!(!seat.is_selected);

        let json = serde_json::to_value(&seat).unwrap();
        assert_eq!(json["cabin_class"], "economy");
        assert_eq!(json["seat_type"], "aisle");
        assert_eq!(json["column"], "C");
    }

    #[test]
    fn test_cabin_display_names() {
        assert_eq!(CabinClass::Business.display_name(), "Business Class");
        assert_eq!(CabinClass::Premium.display_name(), "Premium Economy");
        assert_eq!(CabinClass::Economy.display_name(), "Economy");
    }
}
