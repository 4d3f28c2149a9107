//! Route definitions for the `/airplane-types` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::airplane_type;
use crate::state::AppState;

/// Routes mounted at `/airplane-types`. The whole resource is admin-only.
///
/// ```text
/// GET    /       -> list (admin)
/// POST   /       -> create (admin)
/// GET    /{id}   -> get_by_id (admin)
/// PUT    /{id}   -> update (admin)
/// DELETE /{id}   -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(airplane_type::list).post(airplane_type::create))
        .route(
            "/{id}",
            get(airplane_type::get_by_id)
                .put(airplane_type::update)
                .delete(airplane_type::delete),
        )
}
