//! Country entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use skybook_core::types::{DbId, Timestamp};

/// A row from the `countries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Country {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new country.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCountry {
    pub name: String,
}

/// DTO for updating an existing country.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCountry {
    pub name: Option<String>,
}
