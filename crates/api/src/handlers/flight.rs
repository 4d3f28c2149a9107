//! Handlers for the `/flights` resource.
//!
//! Reads are public; writes require the admin role. Every create and
//! update checks that the flight does not land before it takes off,
//! merging the patch with the stored times on partial updates.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use skybook_core::error::CoreError;
use skybook_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use skybook_core::schedule::validate_flight_times;
use skybook_core::types::DbId;
use skybook_db::models::flight::{
    CreateFlight, FlightDetail, FlightFilter, FlightRow, FlightWithCrew, UpdateFlight,
};
use skybook_db::repositories::FlightRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::state::AppState;

/// Query parameters for `GET /flights`.
///
/// Date filters compare the UTC calendar date of departure; time filters
/// compare the UTC time of day, so "all morning departures" works across
/// dates. `search` matches the source or destination city name.
#[derive(Debug, Deserialize)]
pub struct FlightListParams {
    pub route: Option<DbId>,
    pub departure_date: Option<NaiveDate>,
    pub departure_date_after: Option<NaiveDate>,
    pub departure_date_before: Option<NaiveDate>,
    pub departure_time: Option<NaiveTime>,
    pub departure_time_after: Option<NaiveTime>,
    pub departure_time_before: Option<NaiveTime>,
    pub search: Option<String>,
}

/// POST /api/v1/flights
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateFlight>,
) -> AppResult<(StatusCode, Json<FlightWithCrew>)> {
    validate_flight_times(input.departure_time, input.arrival_time)
        .map_err(AppError::Validation)?;
    let flight = FlightRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(flight)))
}

/// GET /api/v1/flights
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FlightListParams>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<Vec<FlightRow>>> {
    let limit = clamp_limit(page.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
    let offset = clamp_offset(page.offset);

    let filter = FlightFilter {
        route_id: params.route,
        departure_date: params.departure_date,
        departure_date_after: params.departure_date_after,
        departure_date_before: params.departure_date_before,
        departure_time: params.departure_time,
        departure_time_after: params.departure_time_after,
        departure_time_before: params.departure_time_before,
        search: params.search,
    };
    let flights = FlightRepo::list_rows(&state.pool, &filter, limit, offset).await?;
    Ok(Json(flights))
}

/// GET /api/v1/flights/{id}
///
/// Returns the detail shape with crew, taken seats, and availability.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FlightDetail>> {
    let flight = FlightRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Flight",
            id,
        }))?;
    Ok(Json(flight))
}

/// PUT /api/v1/flights/{id}
///
/// The time check runs on the effective pair: fields absent from the
/// patch keep their stored values, so a partial update cannot sneak an
/// arrival before the departure it leaves in place.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFlight>,
) -> AppResult<Json<FlightWithCrew>> {
    if input.departure_time.is_some() || input.arrival_time.is_some() {
        let existing = FlightRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Flight",
                id,
            }))?;
        let departure = input.departure_time.unwrap_or(existing.departure_time);
        let arrival = input.arrival_time.unwrap_or(existing.arrival_time);
        validate_flight_times(departure, arrival).map_err(AppError::Validation)?;
    }

    let flight = FlightRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Flight",
            id,
        }))?;
    Ok(Json(flight))
}

/// DELETE /api/v1/flights/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FlightRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Flight",
            id,
        }))
    }
}
