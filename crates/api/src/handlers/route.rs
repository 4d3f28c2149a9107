//! Handlers for the `/routes` resource.
//!
//! Reads are public; writes require the admin role. A route connects two
//! airports with a distance of at least 1; the same bound is enforced by
//! a CHECK constraint in the schema.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use skybook_core::error::CoreError;
use skybook_core::types::DbId;
use skybook_core::validation::FieldViolation;
use skybook_db::models::route::{
    CreateRoute, Route, RouteDetail, RouteFilter, RouteRow, UpdateRoute,
};
use skybook_db::repositories::RouteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for `GET /routes`.
///
/// `source` and `destination` filter by airport id, `has_flights` keeps
/// only routes with (or without) scheduled flights, and `search` matches
/// the source/destination city and country names.
#[derive(Debug, Deserialize)]
pub struct RouteListParams {
    pub source: Option<DbId>,
    pub destination: Option<DbId>,
    pub has_flights: Option<bool>,
    pub search: Option<String>,
}

fn validate_distance(distance: i32) -> AppResult<()> {
    if distance < 1 {
        return Err(AppError::Validation(vec![FieldViolation::new(
            "distance",
            "must be at least 1",
        )]));
    }
    Ok(())
}

/// POST /api/v1/routes
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateRoute>,
) -> AppResult<(StatusCode, Json<Route>)> {
    validate_distance(input.distance)?;
    let route = RouteRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(route)))
}

/// GET /api/v1/routes
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RouteListParams>,
) -> AppResult<Json<Vec<RouteRow>>> {
    let filter = RouteFilter {
        source_id: params.source,
        destination_id: params.destination,
        has_flights: params.has_flights,
        search: params.search,
    };
    let routes = RouteRepo::list_rows(&state.pool, &filter).await?;
    Ok(Json(routes))
}

/// GET /api/v1/routes/{id}
///
/// Returns the detail shape with full source and destination airports.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<RouteDetail>> {
    let route = RouteRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Route",
            id,
        }))?;
    Ok(Json(route))
}

/// PUT /api/v1/routes/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoute>,
) -> AppResult<Json<Route>> {
    if let Some(distance) = input.distance {
        validate_distance(distance)?;
    }
    let route = RouteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Route",
            id,
        }))?;
    Ok(Json(route))
}

/// DELETE /api/v1/routes/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = RouteRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Route",
            id,
        }))
    }
}
