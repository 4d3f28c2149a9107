//! Handlers for the `/cities` resource.
//!
//! Reads are public; writes require the admin role. List responses embed
//! the country name and airport names via [`CityRow`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use skybook_core::error::CoreError;
use skybook_core::types::DbId;
use skybook_db::models::city::{City, CityOrdering, CityRow, CreateCity, UpdateCity};
use skybook_db::repositories::CityRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for `GET /cities`.
///
/// `search` matches city or country names; `ordering` accepts `name`,
/// `-name`, `country`, or `-country`. Unknown values fall back to the
/// default name ordering.
#[derive(Debug, Deserialize)]
pub struct CityListParams {
    pub search: Option<String>,
    pub ordering: Option<String>,
}

fn parse_ordering(ordering: Option<&str>) -> CityOrdering {
    match ordering {
        Some("-name") => CityOrdering::NameDesc,
        Some("country") => CityOrdering::Country,
        Some("-country") => CityOrdering::CountryDesc,
        _ => CityOrdering::Name,
    }
}

/// POST /api/v1/cities
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateCity>,
) -> AppResult<(StatusCode, Json<City>)> {
    let city = CityRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(city)))
}

/// GET /api/v1/cities
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CityListParams>,
) -> AppResult<Json<Vec<CityRow>>> {
    let ordering = parse_ordering(params.ordering.as_deref());
    let cities = CityRepo::list_rows(&state.pool, params.search.as_deref(), ordering).await?;
    Ok(Json(cities))
}

/// GET /api/v1/cities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CityRow>> {
    let city = CityRepo::find_row_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "City", id }))?;
    Ok(Json(city))
}

/// PUT /api/v1/cities/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCity>,
) -> AppResult<Json<City>> {
    let city = CityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "City", id }))?;
    Ok(Json(city))
}

/// DELETE /api/v1/cities/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CityRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "City", id }))
    }
}
