use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::seat::{CabinClass, Seat};

/// One row of the cabin, split at the aisle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeatRow {
    pub row: u32,
    pub cabin_class: CabinClass,
    pub left: Vec<Seat>,
    pub right: Vec<Seat>,
}

/// Seats grouped into rows for the seat-selection view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeatMap {
    pub rows: Vec<SeatRow>,
}

impl SeatMap {
    pub fn from_seats(seats: &[Seat]) -> Self {
        let mut grouped: BTreeMap<u32, Vec<Seat>> = BTreeMap::new();
        for seat in seats {
            grouped.entry(seat.row).or_default().push(seat.clone());
        }

        let rows = grouped
            .into_iter()
            .map(|(row, mut row_seats)| {
                row_seats.sort_by_key(|s| s.column);
                let cabin_class = row_seats[0].cabin_class;
                let right = row_seats.split_off(row_seats.len() / 2);
                SeatRow {
                    row,
                    cabin_class,
                    left: row_seats,
                    right,
                }
            })
            .collect();

        Self { rows }
    }

    pub fn row(&self, row: u32) -> Option<&SeatRow> {
        self.rows.iter().find(|r| r.row == row)
    }
}

/// Seat counts for one cabin
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CabinAvailability {
    pub cabin_class: CabinClass,
    pub total: usize,
    pub available: usize,
    pub utilization: f64,
}

impl CabinAvailability {
    /// Per-cabin availability, business first
    pub fn summarize(seats: &[Seat]) -> Vec<CabinAvailability> {
        let mut counts: BTreeMap<CabinClass, (usize, usize)> = BTreeMap::new();
        for seat in seats {
            let entry = counts.entry(seat.cabin_class).or_insert((0, 0));
            entry.0 += 1;
            if seat.is_available {
                entry.1 += 1;
            }
        }

        counts
            .into_iter()
            .map(|(cabin_class, (total, available))| CabinAvailability {
                cabin_class,
                total,
                available,
                utilization: if total == 0 {
                    0.0
                } else {
                    1.0 - (available as f64 / total as f64)
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{MockSeatInventory, SeatInventoryProvider};

    #[test]
    fn test_rows_split_at_aisle() {
        let seats = MockSeatInventory::standard(Some(11)).unwrap().generate_seats();
        let map = SeatMap::from_seats(&seats);

        assert_eq!(map.rows.len(), 33);
        assert_eq!(map.rows[0].row, 1);
        assert_eq!(map.rows[32].row, 33);

        let business = map.row(2).unwrap();
        assert_eq!(business.cabin_class, CabinClass::Business);
        let left: Vec<char> = business.left.iter().map(|s| s.column).collect();
        let right: Vec<char> = business.right.iter().map(|s| s.column).collect();
        assert_eq!(left, vec!['A', 'C']);
        assert_eq!(right, vec!['D', 'F']);

        let economy = map.row(20).unwrap();
        assert_eq!(economy.left.len(), 3);
        assert_eq!(economy.right.len(), 3);
        assert_eq!(economy.right[0].id, "20D");
    }

    #[test]
    fn test_rows_sorted_regardless_of_input_order() {
        let mut seats = MockSeatInventory::standard(Some(5)).unwrap().generate_seats();
        seats.reverse();
        let map = SeatMap::from_seats(&seats);
        assert_eq!(map.rows[0].left[0].id, "1A");
    }

    #[test]
    fn test_availability_summary() {
        let mut seats = MockSeatInventory::standard(Some(9)).unwrap().generate_seats();
        for seat in seats.iter_mut() {
            seat.is_available = seat.column != 'A';
        }

        let summary = CabinAvailability::summarize(&seats);
        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0].cabin_class, CabinClass::Business);
        assert_eq!(summary[0].total, 12);
        assert_eq!(summary[0].available, 9);
        assert!((summary[0].utilization - 0.25).abs() < 1e-9);

        assert_eq!(summary[2].cabin_class, CabinClass::Economy);
        assert_eq!(summary[2].available, 125);
    }
}
