//! Handlers for the `/crew` resource.
//!
//! The whole resource is admin-only, reads included.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skybook_core::error::CoreError;
use skybook_core::types::DbId;
use skybook_db::models::crew::{CreateCrewMember, CrewMemberResponse, UpdateCrewMember};
use skybook_db::repositories::CrewRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/v1/crew
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateCrewMember>,
) -> AppResult<(StatusCode, Json<CrewMemberResponse>)> {
    let member = CrewRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(member.into_response())))
}

/// GET /api/v1/crew
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<CrewMemberResponse>>> {
    let members = CrewRepo::list(&state.pool).await?;
    let responses = members.into_iter().map(|m| m.into_response()).collect();
    Ok(Json(responses))
}

/// GET /api/v1/crew/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<CrewMemberResponse>> {
    let member = CrewRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CrewMember",
            id,
        }))?;
    Ok(Json(member.into_response()))
}

/// PUT /api/v1/crew/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCrewMember>,
) -> AppResult<Json<CrewMemberResponse>> {
    let member = CrewRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CrewMember",
            id,
        }))?;
    Ok(Json(member.into_response()))
}

/// DELETE /api/v1/crew/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CrewRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "CrewMember",
            id,
        }))
    }
}
