//! Handlers for the `/airplane-types` resource.
//!
//! The whole resource is admin-only, reads included. List responses embed
//! the names of airplanes of each type via [`AirplaneTypeRow`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skybook_core::error::CoreError;
use skybook_core::types::DbId;
use skybook_db::models::airplane_type::{
    AirplaneType, AirplaneTypeRow, CreateAirplaneType, UpdateAirplaneType,
};
use skybook_db::repositories::AirplaneTypeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/v1/airplane-types
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateAirplaneType>,
) -> AppResult<(StatusCode, Json<AirplaneType>)> {
    let airplane_type = AirplaneTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(airplane_type)))
}

/// GET /api/v1/airplane-types
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<AirplaneTypeRow>>> {
    let types = AirplaneTypeRepo::list_rows(&state.pool).await?;
    Ok(Json(types))
}

/// GET /api/v1/airplane-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<AirplaneType>> {
    let airplane_type = AirplaneTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AirplaneType",
            id,
        }))?;
    Ok(Json(airplane_type))
}

/// PUT /api/v1/airplane-types/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAirplaneType>,
) -> AppResult<Json<AirplaneType>> {
    let airplane_type = AirplaneTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AirplaneType",
            id,
        }))?;
    Ok(Json(airplane_type))
}

/// DELETE /api/v1/airplane-types/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AirplaneTypeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "AirplaneType",
            id,
        }))
    }
}
