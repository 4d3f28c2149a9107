//! Route definitions for the `/orders` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::order;
use crate::state::AppState;

/// Routes mounted at `/orders`. All routes require authentication and
/// only ever touch the caller's own orders.
///
/// ```text
/// GET  /       -> list (auth, ?ordering=&limit=&offset=)
/// POST /       -> create (auth)
/// GET  /{id}   -> get_by_id (auth, owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(order::list).post(order::create))
        .route("/{id}", get(order::get_by_id))
}
