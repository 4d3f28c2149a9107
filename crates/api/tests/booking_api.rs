//! HTTP-level integration tests for the `/orders` resource: atomic ticket
//! booking, seat bounds, conflicts, and owner scoping.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, get, get_auth, post_json, post_json_auth};
use skybook_core::types::DbId;
use skybook_db::models::airplane::CreateAirplane;
use skybook_db::models::airplane_type::CreateAirplaneType;
use skybook_db::models::airport::CreateAirport;
use skybook_db::models::city::CreateCity;
use skybook_db::models::country::CreateCountry;
use skybook_db::models::flight::CreateFlight;
use skybook_db::models::route::CreateRoute;
use skybook_db::repositories::{
    AirplaneRepo, AirplaneTypeRepo, AirportRepo, CityRepo, CountryRepo, FlightRepo, RouteRepo,
};
use sqlx::PgPool;

/// Seed one bookable flight on a tiny 2x3 airplane and return its id.
///
/// The small cabin keeps the out-of-bounds coordinates low and the
/// remaining-seat arithmetic obvious.
async fn seed_bookable_flight(pool: &PgPool) -> DbId {
    let country = CountryRepo::create(
        pool,
        &CreateCountry {
            name: "Italy".to_string(),
        },
    )
    .await
    .expect("country should insert");
    let rome = CityRepo::create(
        pool,
        &CreateCity {
            name: "Rome".to_string(),
            country_id: country.id,
        },
    )
    .await
    .expect("city should insert");
    let milan = CityRepo::create(
        pool,
        &CreateCity {
            name: "Milan".to_string(),
            country_id: country.id,
        },
    )
    .await
    .expect("city should insert");

    let fiumicino = AirportRepo::create(
        pool,
        &CreateAirport {
            name: "Fiumicino".to_string(),
            city_id: rome.id,
        },
    )
    .await
    .expect("airport should insert");
    let malpensa = AirportRepo::create(
        pool,
        &CreateAirport {
            name: "Malpensa".to_string(),
            city_id: milan.id,
        },
    )
    .await
    .expect("airport should insert");

    let route = RouteRepo::create(
        pool,
        &CreateRoute {
            source_id: fiumicino.id,
            destination_id: malpensa.id,
            distance: 510,
        },
    )
    .await
    .expect("route should insert");

    let airplane_type = AirplaneTypeRepo::create(
        pool,
        &CreateAirplaneType {
            name: "Regional".to_string(),
        },
    )
    .await
    .expect("airplane type should insert");
    let airplane = AirplaneRepo::create(
        pool,
        &CreateAirplane {
            name: "SB-19".to_string(),
            rows: 2,
            seats_per_row: 3,
            airplane_type_id: airplane_type.id,
        },
    )
    .await
    .expect("airplane should insert");

    let departure = Utc::now() + Duration::days(3);
    FlightRepo::create(
        pool,
        &CreateFlight {
            route_id: route.id,
            airplane_id: airplane.id,
            departure_time: departure,
            arrival_time: departure + Duration::hours(1),
            crew_ids: vec![],
        },
    )
    .await
    .expect("flight should insert")
    .flight
    .id
}

/// Book the given seats for a user, returning the raw response.
async fn book(
    pool: &PgPool,
    token: &str,
    flight_id: DbId,
    seats: &[(i32, i32)],
) -> axum::http::Response<axum::body::Body> {
    let tickets: Vec<serde_json::Value> = seats
        .iter()
        .map(|(row, seat)| serde_json::json!({"flight_id": flight_id, "row": row, "seat": seat}))
        .collect();
    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        "/api/v1/orders",
        serde_json::json!({ "tickets": tickets }),
        token,
    )
    .await
}

// ---------------------------------------------------------------------------
// Access control
// ---------------------------------------------------------------------------

/// Orders are for authenticated users only.
#[sqlx::test(migrations = "../../migrations")]
async fn test_orders_require_auth(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/orders", serde_json::json!({"tickets": []})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/orders").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Booking
// ---------------------------------------------------------------------------

/// A valid batch books atomically; tickets come back sorted by seat.
#[sqlx::test(migrations = "../../migrations")]
async fn test_book_seats_creates_order(pool: PgPool) {
    let flight_id = seed_bookable_flight(&pool).await;
    let user = common::seed_user(&pool, "alice@example.com", "customer").await;
    let token = common::login_token(&pool, "alice@example.com").await;

    let response = book(&pool, &token, flight_id, &[(1, 2), (1, 1)]).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["user_id"], user.id);
    assert!(json["created_at"].is_string());
    let tickets = json["tickets"].as_array().unwrap();
    assert_eq!(tickets.len(), 2);
    // Sorted by (row, seat) regardless of request order.
    assert_eq!(tickets[0]["row"], 1);
    assert_eq!(tickets[0]["seat"], 1);
    assert_eq!(tickets[1]["seat"], 2);
    assert_eq!(tickets[0]["flight_id"], flight_id);
}

/// Booked seats show up in the flight detail and reduce availability.
#[sqlx::test(migrations = "../../migrations")]
async fn test_booked_seats_appear_in_flight_detail(pool: PgPool) {
    let flight_id = seed_bookable_flight(&pool).await;
    common::seed_user(&pool, "alice@example.com", "customer").await;
    let token = common::login_token(&pool, "alice@example.com").await;

    let response = book(&pool, &token, flight_id, &[(1, 1), (2, 3)]).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/flights/{flight_id}")).await;
    let json = body_json(response).await;
    assert_eq!(
        json["taken_seats"],
        serde_json::json!([{"row": 1, "seat": 1}, {"row": 2, "seat": 3}])
    );
    assert_eq!(json["available_tickets"], 4);
}

/// Out-of-bounds coordinates report every violation on the ticket.
#[sqlx::test(migrations = "../../migrations")]
async fn test_out_of_bounds_seat_rejected(pool: PgPool) {
    let flight_id = seed_bookable_flight(&pool).await;
    common::seed_user(&pool, "alice@example.com", "customer").await;
    let token = common::login_token(&pool, "alice@example.com").await;

    // Both coordinates are outside the 2x3 cabin.
    let response = book(&pool, &token, flight_id, &[(3, 4)]).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let details = json["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0]["field"], "row");
    assert_eq!(details[0]["message"], "must be within 1..=2");
    assert_eq!(details[0]["ticket_index"], 0);
    assert_eq!(details[1]["field"], "seat");
    assert_eq!(details[1]["message"], "must be within 1..=3");

    // Nothing was persisted.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/orders", &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

/// A seat sold in an earlier order conflicts with 409.
#[sqlx::test(migrations = "../../migrations")]
async fn test_duplicate_seat_across_orders_conflicts(pool: PgPool) {
    let flight_id = seed_bookable_flight(&pool).await;
    common::seed_user(&pool, "alice@example.com", "customer").await;
    common::seed_user(&pool, "bob@example.com", "customer").await;
    let alice = common::login_token(&pool, "alice@example.com").await;
    let bob = common::login_token(&pool, "bob@example.com").await;

    let response = book(&pool, &alice, flight_id, &[(1, 1)]).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = book(&pool, &bob, flight_id, &[(1, 1)]).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["details"][0]["ticket_index"], 0);
    assert_eq!(json["details"][0]["flight_id"], flight_id);
    assert_eq!(json["details"][0]["row"], 1);
    assert_eq!(json["details"][0]["seat"], 1);

    // Bob has no order; the batch rolled back.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/orders", &bob).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

/// The same seat twice in one batch conflicts and persists nothing.
#[sqlx::test(migrations = "../../migrations")]
async fn test_duplicate_seat_within_batch_rolls_back(pool: PgPool) {
    let flight_id = seed_bookable_flight(&pool).await;
    common::seed_user(&pool, "alice@example.com", "customer").await;
    let token = common::login_token(&pool, "alice@example.com").await;

    let response = book(&pool, &token, flight_id, &[(2, 1), (2, 1)]).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    // The second occurrence is the one that collides.
    assert_eq!(json["details"][0]["ticket_index"], 1);

    // The first insert rolled back with the order; the seat is still free.
    let response = book(&pool, &token, flight_id, &[(2, 1)]).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// An empty ticket batch is rejected up front.
#[sqlx::test(migrations = "../../migrations")]
async fn test_empty_ticket_batch_rejected(pool: PgPool) {
    common::seed_user(&pool, "alice@example.com", "customer").await;
    let token = common::login_token(&pool, "alice@example.com").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/orders",
        serde_json::json!({"tickets": []}),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "an order must contain at least one ticket");
}

/// Booking on a flight that does not exist is a 404.
#[sqlx::test(migrations = "../../migrations")]
async fn test_unknown_flight_not_found(pool: PgPool) {
    common::seed_user(&pool, "alice@example.com", "customer").await;
    let token = common::login_token(&pool, "alice@example.com").await;

    let response = book(&pool, &token, 999_999, &[(1, 1)]).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "flight with id 999999 not found");
}

// ---------------------------------------------------------------------------
// Owner scoping and listing
// ---------------------------------------------------------------------------

/// A foreign order id returns the same 404 as a missing one.
#[sqlx::test(migrations = "../../migrations")]
async fn test_orders_are_owner_scoped(pool: PgPool) {
    let flight_id = seed_bookable_flight(&pool).await;
    common::seed_user(&pool, "alice@example.com", "customer").await;
    common::seed_user(&pool, "bob@example.com", "customer").await;
    let alice = common::login_token(&pool, "alice@example.com").await;
    let bob = common::login_token(&pool, "bob@example.com").await;

    let response = book(&pool, &alice, flight_id, &[(1, 1)]).await;
    let order_id = body_json(response).await["id"].as_i64().unwrap();

    // The owner sees it.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/orders/{order_id}"), &alice).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Anyone else gets a 404, not a 403; existence is not leaked.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/orders/{order_id}"), &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // And the list shows only the caller's own orders.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/orders", &bob).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

/// The order list defaults to newest first; `?ordering=created_at` flips it.
#[sqlx::test(migrations = "../../migrations")]
async fn test_order_list_ordering_and_pagination(pool: PgPool) {
    let flight_id = seed_bookable_flight(&pool).await;
    common::seed_user(&pool, "alice@example.com", "customer").await;
    let token = common::login_token(&pool, "alice@example.com").await;

    let response = book(&pool, &token, flight_id, &[(1, 1)]).await;
    let first = body_json(response).await["id"].as_i64().unwrap();
    let response = book(&pool, &token, flight_id, &[(1, 2)]).await;
    let second = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/orders", &token).await;
    let json = body_json(response).await;
    assert_eq!(json[0]["id"], second);
    assert_eq!(json[1]["id"], first);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/orders?ordering=created_at", &token).await;
    let json = body_json(response).await;
    assert_eq!(json[0]["id"], first);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/orders?limit=1", &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], second);
}
