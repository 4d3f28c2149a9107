//! Flight entity model and DTOs.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use skybook_core::types::{DbId, Timestamp};

use super::crew::CrewMemberResponse;

/// A row from the `flights` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Flight {
    pub id: DbId,
    pub route_id: DbId,
    pub airplane_id: DbId,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
    pub created_at: Timestamp,
}

/// A flight enriched with its assigned crew ids, as returned from
/// create/update.
#[derive(Debug, Clone, Serialize)]
pub struct FlightWithCrew {
    #[serde(flatten)]
    pub flight: Flight,
    pub crew_ids: Vec<DbId>,
}

/// Flight list row: route collapsed to `"Source -> Destination"` city
/// display, airplane by name, crew by full name, plus seat accounting.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FlightRow {
    pub id: DbId,
    pub route: String,
    pub airplane: String,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
    pub ticket_ids: Vec<DbId>,
    pub crew: Vec<String>,
    pub available_tickets: i64,
}

/// A sold seat coordinate on a flight.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TakenSeat {
    pub row: i32,
    pub seat: i32,
}

/// Flight detail: list fields plus full crew rows and the taken seats.
#[derive(Debug, Clone, Serialize)]
pub struct FlightDetail {
    pub id: DbId,
    pub route: String,
    pub airplane: String,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
    pub crew: Vec<CrewMemberResponse>,
    pub taken_seats: Vec<TakenSeat>,
    pub available_tickets: i64,
}

/// DTO for creating a new flight.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFlight {
    pub route_id: DbId,
    pub airplane_id: DbId,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
    /// Crew members to assign. Defaults to none.
    #[serde(default)]
    pub crew_ids: Vec<DbId>,
}

/// DTO for updating an existing flight. All fields are optional;
/// `crew_ids = Some(..)` replaces the whole assignment set.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFlight {
    pub route_id: Option<DbId>,
    pub airplane_id: Option<DbId>,
    pub departure_time: Option<Timestamp>,
    pub arrival_time: Option<Timestamp>,
    pub crew_ids: Option<Vec<DbId>>,
}

/// Filter parameters for flight list queries.
///
/// Date and time-of-day filters compare against `departure_time`
/// interpreted in UTC.
#[derive(Debug, Clone, Default)]
pub struct FlightFilter {
    pub route_id: Option<DbId>,
    pub departure_date: Option<NaiveDate>,
    pub departure_date_after: Option<NaiveDate>,
    pub departure_date_before: Option<NaiveDate>,
    pub departure_time: Option<NaiveTime>,
    pub departure_time_after: Option<NaiveTime>,
    pub departure_time_before: Option<NaiveTime>,
    /// Case-insensitive match on endpoint city names.
    pub search: Option<String>,
}
