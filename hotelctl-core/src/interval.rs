//! Stay intervals and the overlap predicate.
//!
//! A stay runs from the arrival date to the departure date. Two stays
//! conflict when `a.arrival <= b.departure AND a.departure >= b.arrival`.
//! Both ends are inclusive, so a departure on the same day as another
//! arrival counts as a conflict (no same-day turnover). The availability
//! query in [`crate::queries`] applies the same condition in SQL.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{HotelError, Result};

/// A validated stay: arrival strictly before departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StayInterval {
    arrival: NaiveDate,
    departure: NaiveDate,
}

impl StayInterval {
    /// Build a stay, rejecting `departure <= arrival` with `InvalidDateRange`.
    pub fn new(arrival: NaiveDate, departure: NaiveDate) -> Result<Self> {
        if arrival >= departure {
            return Err(HotelError::invalid_date_range(arrival, departure));
        }
        Ok(Self { arrival, departure })
    }

    pub fn arrival(&self) -> NaiveDate {
        self.arrival
    }

    pub fn departure(&self) -> NaiveDate {
        self.departure
    }

    /// Number of nights between arrival and departure (always >= 1).
    pub fn nights(&self) -> i64 {
        (self.departure - self.arrival).num_days()
    }

    /// Inclusive overlap test, symmetric in its arguments.
    pub fn overlaps(&self, other: &StayInterval) -> bool {
        dates_overlap(self.arrival, self.departure, other.arrival, other.departure)
    }
}

/// Raw form of the overlap predicate for dates that were never validated
/// (stored reservations carry no ordering guarantee).
pub fn dates_overlap(a1: NaiveDate, a2: NaiveDate, b1: NaiveDate, b2: NaiveDate) -> bool {
    a1 <= b2 && a2 >= b1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn stay(a: &str, b: &str) -> StayInterval {
        StayInterval::new(d(a), d(b)).unwrap()
    }

    #[test]
    fn rejects_empty_and_reversed_ranges() {
        let err = StayInterval::new(d("2025-06-15"), d("2025-06-15")).unwrap_err();
        assert!(matches!(err, HotelError::InvalidDateRange { .. }));

        let err = StayInterval::new(d("2025-06-18"), d("2025-06-15")).unwrap_err();
        assert!(matches!(err, HotelError::InvalidDateRange { .. }));
    }

    #[test]
    fn counts_nights() {
        assert_eq!(stay("2025-06-15", "2025-06-18").nights(), 3);
        assert_eq!(stay("2025-12-31", "2026-01-01").nights(), 1);
    }

    #[test]
    fn partial_overlap_conflicts() {
        let booked = stay("2025-06-15", "2025-06-18");
        assert!(booked.overlaps(&stay("2025-06-17", "2025-06-20")));
        assert!(booked.overlaps(&stay("2025-06-10", "2025-06-16")));
    }

    #[test]
    fn containment_conflicts() {
        let booked = stay("2025-06-15", "2025-06-18");
        assert!(booked.overlaps(&stay("2025-06-16", "2025-06-17")));
        assert!(booked.overlaps(&stay("2025-06-01", "2025-06-30")));
    }

    #[test]
    fn same_day_turnover_conflicts() {
        let booked = stay("2025-06-15", "2025-06-18");
        // departure day == new arrival day
        assert!(booked.overlaps(&stay("2025-06-18", "2025-06-20")));
        // new departure day == booked arrival day
        assert!(booked.overlaps(&stay("2025-06-12", "2025-06-15")));
    }

    #[test]
    fn disjoint_stays_do_not_conflict() {
        let booked = stay("2025-06-15", "2025-06-18");
        assert!(!booked.overlaps(&stay("2025-06-19", "2025-06-20")));
        assert!(!booked.overlaps(&stay("2025-06-10", "2025-06-14")));
    }
}
