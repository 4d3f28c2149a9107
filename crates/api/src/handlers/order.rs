//! Handlers for the `/orders` resource.
//!
//! Orders are owner-scoped: every query filters by the authenticated
//! user's id, and requesting another user's order returns the same 404
//! as an order that never existed.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use skybook_core::error::CoreError;
use skybook_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use skybook_core::types::DbId;
use skybook_db::models::order::{CreateOrder, OrderWithTickets};
use skybook_db::repositories::OrderRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::state::AppState;

/// Query parameters for `GET /orders`.
///
/// `ordering` accepts `created_at` or `-created_at`; the default is
/// newest first.
#[derive(Debug, Deserialize)]
pub struct OrderListParams {
    pub ordering: Option<String>,
}

/// POST /api/v1/orders
///
/// Commits the whole ticket batch in one transaction; any invalid or
/// already-taken seat rejects the entire order.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateOrder>,
) -> AppResult<(StatusCode, Json<OrderWithTickets>)> {
    let order = OrderRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/v1/orders
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<OrderListParams>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<Vec<OrderWithTickets>>> {
    let descending = params.ordering.as_deref() != Some("created_at");
    let limit = clamp_limit(page.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
    let offset = clamp_offset(page.offset);

    let orders =
        OrderRepo::list_for_user(&state.pool, user.user_id, descending, limit, offset).await?;
    Ok(Json(orders))
}

/// GET /api/v1/orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<OrderWithTickets>> {
    let order = OrderRepo::find_for_user(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;
    Ok(Json(order))
}
