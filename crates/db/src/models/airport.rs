//! Airport entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use skybook_core::types::{DbId, Timestamp};

/// A row from the `airports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Airport {
    pub id: DbId,
    pub name: String,
    pub city_id: DbId,
    pub created_at: Timestamp,
}

/// Airport list/detail row with the city and country names joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AirportRow {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub country: String,
}

/// DTO for creating a new airport.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAirport {
    pub name: String,
    pub city_id: DbId,
}

/// DTO for updating an existing airport. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAirport {
    pub name: Option<String>,
    pub city_id: Option<DbId>,
}
