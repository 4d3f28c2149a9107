//! Handlers for the `/airplanes` resource.
//!
//! The whole resource is admin-only, reads included. `rows` and
//! `seats_per_row` define the seat map every ticket on the airplane's
//! flights is checked against, so both must be at least 1; the schema
//! enforces the same bound with a CHECK constraint.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skybook_core::error::CoreError;
use skybook_core::seating::validate_dimensions;
use skybook_core::types::DbId;
use skybook_db::models::airplane::{
    AirplaneResponse, AirplaneRow, CreateAirplane, UpdateAirplane,
};
use skybook_db::repositories::AirplaneRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/v1/airplanes
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateAirplane>,
) -> AppResult<(StatusCode, Json<AirplaneResponse>)> {
    validate_dimensions(input.rows, input.seats_per_row).map_err(AppError::Validation)?;
    let airplane = AirplaneRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(airplane.into_response())))
}

/// GET /api/v1/airplanes
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<AirplaneRow>>> {
    let airplanes = AirplaneRepo::list_rows(&state.pool).await?;
    Ok(Json(airplanes))
}

/// GET /api/v1/airplanes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<AirplaneResponse>> {
    let airplane = AirplaneRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Airplane",
            id,
        }))?;
    Ok(Json(airplane.into_response()))
}

/// PUT /api/v1/airplanes/{id}
///
/// Dimension changes are validated against the same bounds as create.
/// Shrinking an airplane does not touch existing tickets; only future
/// bookings see the new seat map.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAirplane>,
) -> AppResult<Json<AirplaneResponse>> {
    if input.rows.is_some() || input.seats_per_row.is_some() {
        let existing = AirplaneRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Airplane",
                id,
            }))?;
        let rows = input.rows.unwrap_or(existing.rows);
        let seats_per_row = input.seats_per_row.unwrap_or(existing.seats_per_row);
        validate_dimensions(rows, seats_per_row).map_err(AppError::Validation)?;
    }

    let airplane = AirplaneRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Airplane",
            id,
        }))?;
    Ok(Json(airplane.into_response()))
}

/// DELETE /api/v1/airplanes/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AirplaneRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Airplane",
            id,
        }))
    }
}
