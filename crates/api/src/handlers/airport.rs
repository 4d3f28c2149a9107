//! Handlers for the `/airports` resource.
//!
//! Reads are public; writes require the admin role. List responses embed
//! the city and country names via [`AirportRow`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use skybook_core::error::CoreError;
use skybook_core::types::DbId;
use skybook_db::models::airport::{Airport, AirportRow, CreateAirport, UpdateAirport};
use skybook_db::repositories::AirportRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for `GET /airports`.
///
/// `search` matches airport, city, or country names; `ordering` accepts
/// `name` or `-name`.
#[derive(Debug, Deserialize)]
pub struct AirportListParams {
    pub search: Option<String>,
    pub ordering: Option<String>,
}

/// POST /api/v1/airports
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateAirport>,
) -> AppResult<(StatusCode, Json<Airport>)> {
    let airport = AirportRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(airport)))
}

/// GET /api/v1/airports
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AirportListParams>,
) -> AppResult<Json<Vec<AirportRow>>> {
    let descending = params.ordering.as_deref() == Some("-name");
    let airports =
        AirportRepo::list_rows(&state.pool, params.search.as_deref(), descending).await?;
    Ok(Json(airports))
}

/// GET /api/v1/airports/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AirportRow>> {
    let airport = AirportRepo::find_row_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Airport",
            id,
        }))?;
    Ok(Json(airport))
}

/// PUT /api/v1/airports/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAirport>,
) -> AppResult<Json<Airport>> {
    let airport = AirportRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Airport",
            id,
        }))?;
    Ok(Json(airport))
}

/// DELETE /api/v1/airports/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AirportRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Airport",
            id,
        }))
    }
}
