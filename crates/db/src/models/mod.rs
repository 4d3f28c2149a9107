//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! List endpoints that embed related names use dedicated `*Row` structs
//! mapped from JOIN queries.

pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod city;
pub mod country;
pub mod crew;
pub mod flight;
pub mod order;
pub mod route;
pub mod session;
pub mod user;
