//! Route entity model and DTOs.
//!
//! A route is a directed leg between two airports. List rows collapse the
//! endpoints to their city names (the display the booking UI shows);
//! detail rows embed the full airport rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use skybook_core::types::{DbId, Timestamp};

use super::airport::AirportRow;

/// A row from the `routes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Route {
    pub id: DbId,
    pub source_id: DbId,
    pub destination_id: DbId,
    pub distance: i32,
    pub created_at: Timestamp,
}

/// Route list row: endpoints as city names plus the ids of its flights.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RouteRow {
    pub id: DbId,
    pub source: String,
    pub destination: String,
    pub distance: i32,
    pub flight_ids: Vec<DbId>,
}

/// Route detail: endpoints as full airport rows.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDetail {
    pub id: DbId,
    pub source: AirportRow,
    pub destination: AirportRow,
    pub distance: i32,
}

/// DTO for creating a new route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoute {
    pub source_id: DbId,
    pub destination_id: DbId,
    pub distance: i32,
}

/// DTO for updating an existing route. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRoute {
    pub source_id: Option<DbId>,
    pub destination_id: Option<DbId>,
    pub distance: Option<i32>,
}

/// Filter parameters for route list queries.
#[derive(Debug, Clone, Default)]
pub struct RouteFilter {
    pub source_id: Option<DbId>,
    pub destination_id: Option<DbId>,
    pub has_flights: Option<bool>,
    /// Case-insensitive match on endpoint city or country names.
    pub search: Option<String>,
}
