//! Handlers for the `/countries` resource.
//!
//! Reads are public; writes require the admin role.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use skybook_core::error::CoreError;
use skybook_core::types::DbId;
use skybook_db::models::country::{Country, CreateCountry, UpdateCountry};
use skybook_db::repositories::CountryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for `GET /countries`.
///
/// `country` is a case-insensitive name filter; `ordering` accepts
/// `name` or `-name`. Unknown ordering values fall back to the default.
#[derive(Debug, Deserialize)]
pub struct CountryListParams {
    pub country: Option<String>,
    pub ordering: Option<String>,
}

/// POST /api/v1/countries
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateCountry>,
) -> AppResult<(StatusCode, Json<Country>)> {
    let country = CountryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(country)))
}

/// GET /api/v1/countries
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CountryListParams>,
) -> AppResult<Json<Vec<Country>>> {
    let descending = params.ordering.as_deref() == Some("-name");
    let countries =
        CountryRepo::list(&state.pool, params.country.as_deref(), descending).await?;
    Ok(Json(countries))
}

/// GET /api/v1/countries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Country>> {
    let country = CountryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))?;
    Ok(Json(country))
}

/// PUT /api/v1/countries/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCountry>,
) -> AppResult<Json<Country>> {
    let country = CountryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))?;
    Ok(Json(country))
}

/// DELETE /api/v1/countries/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CountryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))
    }
}
