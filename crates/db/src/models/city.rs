//! City entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use skybook_core::types::{DbId, Timestamp};

/// A row from the `cities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct City {
    pub id: DbId,
    pub name: String,
    pub country_id: DbId,
    pub created_at: Timestamp,
}

/// City list/detail row with the country name and airport names joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CityRow {
    pub id: DbId,
    pub name: String,
    pub country: String,
    pub airports: Vec<String>,
}

/// Sort order for city list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CityOrdering {
    #[default]
    Name,
    NameDesc,
    Country,
    CountryDesc,
}

impl CityOrdering {
    /// The ORDER BY expression for this ordering. Always a fixed string,
    /// never user input.
    pub fn sql(self) -> &'static str {
        match self {
            CityOrdering::Name => "c.name ASC",
            CityOrdering::NameDesc => "c.name DESC",
            CityOrdering::Country => "country ASC, c.name ASC",
            CityOrdering::CountryDesc => "country DESC, c.name ASC",
        }
    }
}

/// DTO for creating a new city.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCity {
    pub name: String,
    pub country_id: DbId,
}

/// DTO for updating an existing city. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCity {
    pub name: Option<String>,
    pub country_id: Option<DbId>,
}
