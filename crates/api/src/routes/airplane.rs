//! Route definitions for the `/airplanes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::airplane;
use crate::state::AppState;

/// Routes mounted at `/airplanes`. The whole resource is admin-only.
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
        .route("/", get(airplane::list).post(airplane::create))
        .route(
            "/{id}",
            get(airplane::get_by_id)
                .put(airplane::update)
                .delete(airplane::delete),
        )
}
