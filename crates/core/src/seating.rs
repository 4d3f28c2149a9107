//! Seat-map geometry and ticket coordinate validation.
//!
//! An airplane's cabin is modelled as a dense `rows x seats_per_row` grid
//! with 1-based coordinates. Row/seat bounds are validated here; seat
//! *uniqueness* is deliberately not. Occupancy is enforced by the unique
//! index on tickets at insert time, because any check-then-write here
//! would race with concurrent bookings.

use serde::Serialize;

use crate::validation::FieldViolation;

/// Valid seat bounds derived from an airplane's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatMap {
    pub rows: i32,
    pub seats_per_row: i32,
}

impl SeatMap {
    pub fn new(rows: i32, seats_per_row: i32) -> Self {
        Self {
            rows,
            seats_per_row,
        }
    }

    /// Whether the 1-based (row, seat) coordinate exists in this cabin.
    pub fn contains(&self, row: i32, seat: i32) -> bool {
        (1..=self.rows).contains(&row) && (1..=self.seats_per_row).contains(&seat)
    }

    /// Total sellable seats.
    pub fn capacity(&self) -> i64 {
        self.rows as i64 * self.seats_per_row as i64
    }
}

/// Validate a requested seat coordinate against the cabin bounds.
///
/// Both checks always run, so an out-of-range row does not mask an
/// out-of-range seat. Messages name the valid range.
pub fn validate_seat(map: &SeatMap, row: i32, seat: i32) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    if !(1..=map.rows).contains(&row) {
        violations.push(FieldViolation::new(
            "row",
            format!("must be within 1..={}", map.rows),
        ));
    }
    if !(1..=map.seats_per_row).contains(&seat) {
        violations.push(FieldViolation::new(
            "seat",
            format!("must be within 1..={}", map.seats_per_row),
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Validate airplane dimensions at create/update time.
///
/// The tickets path never sees a non-positive dimension because this (and
/// the matching CHECK constraints) reject them at the airplane boundary.
pub fn validate_dimensions(rows: i32, seats_per_row: i32) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    if rows < 1 {
        violations.push(FieldViolation::new("rows", "must be at least 1"));
    }
    if seats_per_row < 1 {
        violations.push(FieldViolation::new("seats_per_row", "must be at least 1"));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
