pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod auth;
pub mod city;
pub mod country;
pub mod crew;
pub mod flight;
pub mod health;
pub mod order;
pub mod route;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                  register (public)
/// /auth/login                     login (public)
/// /auth/refresh                   refresh (public)
/// /auth/logout                    logout (requires auth)
///
/// /countries                      list, create
/// /countries/{id}                 get, update, delete
///
/// /cities                         list, create
/// /cities/{id}                    get, update, delete
///
/// /airports                       list, create
/// /airports/{id}                  get, update, delete
///
/// /routes                         list, create
/// /routes/{id}                    get (detail), update, delete
///
/// /crew                           list, create (admin only)
/// /crew/{id}                      get, update, delete (admin only)
///
/// /airplane-types                 list, create (admin only)
/// /airplane-types/{id}            get, update, delete (admin only)
///
/// /airplanes                      list, create (admin only)
/// /airplanes/{id}                 get, update, delete (admin only)
///
/// /flights                        list, create
/// /flights/{id}                   get (detail), update, delete
///
/// /orders                         list, create (auth required)
/// /orders/{id}                    get (auth required, owner only)
/// ```
///
/// Catalog resources (countries, cities, airports, routes, flights) are
/// publicly readable with admin-only writes; fleet resources (crew,
/// airplane types, airplanes) are admin-only throughout.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, refresh, logout).
        .nest("/auth", auth::router())
        // Geographic catalog.
        .nest("/countries", country::router())
        .nest("/cities", city::router())
        .nest("/airports", airport::router())
        .nest("/routes", route::router())
        // Fleet management (admin only).
        .nest("/crew", crew::router())
        .nest("/airplane-types", airplane_type::router())
        .nest("/airplanes", airplane::router())
        // Schedule.
        .nest("/flights", flight::router())
        // Bookings.
        .nest("/orders", order::router())
}
