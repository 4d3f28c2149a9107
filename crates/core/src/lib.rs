//! Pure domain logic for the skybook booking backend.
//!
//! Everything here is I/O-free so it can be used by the repository layer,
//! the HTTP layer, and any future CLI tooling without pulling in a runtime:
//! shared id/timestamp types, the error taxonomy, seat-map geometry, and
//! the booking/schedule validators.

pub mod error;
pub mod pagination;
pub mod roles;
pub mod schedule;
pub mod seating;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult};
