//! Route definitions for the `/airports` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::airport;
use crate::state::AppState;

/// Routes mounted at `/airports`.
///
/// ```text
/// GET    /       -> list (public, ?search=&ordering=)
/// POST   /       -> create (admin)
/// GET    /{id}   -> get_by_id (public)
/// PUT    /{id}   -> update (admin)
/// DELETE /{id}   -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(airport::list).post(airport::create))
        .route(
            "/{id}",
            get(airport::get_by_id)
                .put(airport::update)
                .delete(airport::delete),
        )
}
