//! Airplane entity model and DTOs.
//!
//! The airplane's `rows` and `seats_per_row` are the seat-map dimensions
//! every ticket for its flights is validated against.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use skybook_core::seating::SeatMap;
use skybook_core::types::{DbId, Timestamp};

/// A row from the `airplanes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Airplane {
    pub id: DbId,
    pub name: String,
    pub rows: i32,
    pub seats_per_row: i32,
    pub airplane_type_id: DbId,
    pub created_at: Timestamp,
}

impl Airplane {
    pub fn seat_map(&self) -> SeatMap {
        SeatMap::new(self.rows, self.seats_per_row)
    }

    pub fn into_response(self) -> AirplaneResponse {
        let capacity = self.seat_map().capacity();
        AirplaneResponse {
            id: self.id,
            name: self.name,
            rows: self.rows,
            seats_per_row: self.seats_per_row,
            airplane_type_id: self.airplane_type_id,
            capacity,
        }
    }
}

/// Airplane representation for create/update responses, with derived capacity.
#[derive(Debug, Clone, Serialize)]
pub struct AirplaneResponse {
    pub id: DbId,
    pub name: String,
    pub rows: i32,
    pub seats_per_row: i32,
    pub airplane_type_id: DbId,
    pub capacity: i64,
}

/// Airplane list row with the type name and the ids of its flights.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AirplaneRow {
    pub id: DbId,
    pub name: String,
    pub rows: i32,
    pub seats_per_row: i32,
    pub airplane_type: String,
    pub capacity: i64,
    pub flight_ids: Vec<DbId>,
}

/// DTO for creating a new airplane.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAirplane {
    pub name: String,
    pub rows: i32,
    pub seats_per_row: i32,
    pub airplane_type_id: DbId,
}

/// DTO for updating an existing airplane. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAirplane {
    pub name: Option<String>,
    pub rows: Option<i32>,
    pub seats_per_row: Option<i32>,
    pub airplane_type_id: Option<DbId>,
}
