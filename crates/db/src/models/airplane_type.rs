//! Airplane type entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use skybook_core::types::{DbId, Timestamp};

/// A row from the `airplane_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AirplaneType {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// Airplane type list row with the names of airplanes of this type.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AirplaneTypeRow {
    pub id: DbId,
    pub name: String,
    pub airplanes: Vec<String>,
}

/// DTO for creating a new airplane type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAirplaneType {
    pub name: String,
}

/// DTO for updating an existing airplane type.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAirplaneType {
    pub name: Option<String>,
}
