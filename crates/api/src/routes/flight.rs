//! Route definitions for the `/flights` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::flight;
use crate::state::AppState;

/// Routes mounted at `/flights`.
///
/// ```text
/// GET    /       -> list (public, ?route=&departure_date=&departure_time_after=&search=&limit=&offset=)
/// POST   /       -> create (admin)
/// GET    /{id}   -> get_by_id (public, detail shape)
/// PUT    /{id}   -> update (admin)
/// DELETE /{id}   -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(flight::list).post(flight::create))
        .route(
            "/{id}",
            get(flight::get_by_id)
                .put(flight::update)
                .delete(flight::delete),
        )
}
