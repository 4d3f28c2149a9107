//! Flight schedule validation.

use crate::types::Timestamp;
use crate::validation::FieldViolation;

/// Validate that a flight does not land before it takes off.
///
/// Equal timestamps pass: a zero-duration flight is accepted, only a
/// negative duration is rejected. Runs on every flight create and update.
pub fn validate_flight_times(
    departure_time: Timestamp,
    arrival_time: Timestamp,
) -> Result<(), Vec<FieldViolation>> {
    if arrival_time < departure_time {
        return Err(vec![FieldViolation::new(
            "arrival_time",
            "must not be earlier than departure_time",
        )]);
    }
    Ok(())
}
