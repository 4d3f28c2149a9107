//! Route definitions for the `/crew` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::crew;
use crate::state::AppState;

/// Routes mounted at `/crew`. The whole resource is admin-only.
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
        .route("/", get(crew::list).post(crew::create))
        .route(
            "/{id}",
            get(crew::get_by_id).put(crew::update).delete(crew::delete),
        )
}
