//! Integration tests for the flight repository.
//!
//! Exercises flight CRUD with crew assignments against a real database:
//! - Create with crew junction rows in one transaction
//! - Display rows (route names, airplane, remaining seats)
//! - Detail view (crew objects, sold seat coordinates)
//! - Crew replacement on update
//! - List filters (route, departure date, time of day, city search)

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use sqlx::PgPool;

use skybook_core::types::{DbId, Timestamp};
use skybook_db::models::airplane::CreateAirplane;
use skybook_db::models::airplane_type::CreateAirplaneType;
use skybook_db::models::airport::CreateAirport;
use skybook_db::models::city::CreateCity;
use skybook_db::models::country::CreateCountry;
use skybook_db::models::crew::CreateCrewMember;
use skybook_db::models::flight::{CreateFlight, FlightFilter, UpdateFlight};
use skybook_db::models::order::{CreateOrder, TicketRequest};
use skybook_db::models::route::CreateRoute;
use skybook_db::models::user::CreateUser;
use skybook_db::repositories::{
    AirplaneRepo, AirplaneTypeRepo, AirportRepo, CityRepo, CountryRepo, CrewRepo, FlightRepo,
    OrderRepo, RouteRepo, UserRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Fixture {
    route_id: DbId,
    airplane_id: DbId,
}

fn ts(day: u32, hour: u32) -> Timestamp {
    Utc.with_ymd_and_hms(2026, 9, day, hour, 0, 0).unwrap()
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, day).unwrap()
}

fn time(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
}

/// Seed a route between two cities plus a 20x5 airplane.
async fn seed_fixture(pool: &PgPool, source_city: &str, dest_city: &str) -> Fixture {
    let country = CountryRepo::create(
        pool,
        &CreateCountry {
            name: format!("Country of {source_city}"),
        },
    )
    .await
    .unwrap();
    let source = CityRepo::create(
        pool,
        &CreateCity {
            name: source_city.to_string(),
            country_id: country.id,
        },
    )
    .await
    .unwrap();
    let dest = CityRepo::create(
        pool,
        &CreateCity {
            name: dest_city.to_string(),
            country_id: country.id,
        },
    )
    .await
    .unwrap();
    let source_airport = AirportRepo::create(
        pool,
        &CreateAirport {
            name: format!("{source_city} International"),
            city_id: source.id,
        },
    )
    .await
    .unwrap();
    let dest_airport = AirportRepo::create(
        pool,
        &CreateAirport {
            name: format!("{dest_city} International"),
            city_id: dest.id,
        },
    )
    .await
    .unwrap();
    let route = RouteRepo::create(
        pool,
        &CreateRoute {
            source_id: source_airport.id,
            destination_id: dest_airport.id,
            distance: 500,
        },
    )
    .await
    .unwrap();
    let airplane_type = AirplaneTypeRepo::create(
        pool,
        &CreateAirplaneType {
            name: format!("Type {source_city}"),
        },
    )
    .await
    .unwrap();
    let airplane = AirplaneRepo::create(
        pool,
        &CreateAirplane {
            name: format!("Plane {source_city}"),
            rows: 20,
            seats_per_row: 5,
            airplane_type_id: airplane_type.id,
        },
    )
    .await
    .unwrap();

    Fixture {
        route_id: route.id,
        airplane_id: airplane.id,
    }
}

async fn seed_crew(pool: &PgPool, first: &str, last: &str) -> DbId {
    CrewRepo::create(
        pool,
        &CreateCrewMember {
            first_name: first.to_string(),
            last_name: last.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

fn new_flight(fixture: &Fixture, day: u32, hour: u32, crew_ids: Vec<DbId>) -> CreateFlight {
    CreateFlight {
        route_id: fixture.route_id,
        airplane_id: fixture.airplane_id,
        departure_time: ts(day, hour),
        arrival_time: ts(day, hour + 3),
        crew_ids,
    }
}

// ---------------------------------------------------------------------------
// Test: Create with crew
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_flight_with_crew(pool: PgPool) {
    let fixture = seed_fixture(&pool, "Kyiv", "Lviv").await;
    let amelia = seed_crew(&pool, "Amelia", "Earhart").await;
    let charles = seed_crew(&pool, "Charles", "Lindbergh").await;

    let created = FlightRepo::create(&pool, &new_flight(&fixture, 1, 9, vec![amelia, charles]))
        .await
        .unwrap();

    assert_eq!(created.flight.route_id, fixture.route_id);
    assert_eq!(created.crew_ids, vec![amelia, charles]);

    let crew = FlightRepo::crew_for(&pool, created.flight.id).await.unwrap();
    assert_eq!(crew.len(), 2);
    assert_eq!(crew[0].full_name(), "Amelia Earhart");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_flight_bad_crew_rolls_back(pool: PgPool) {
    let fixture = seed_fixture(&pool, "Kyiv", "Lviv").await;

    let result = FlightRepo::create(&pool, &new_flight(&fixture, 1, 9, vec![999_999])).await;
    assert!(result.is_err(), "unknown crew member should fail");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM flights")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0, "flight insert must roll back with its crew rows");
}

// ---------------------------------------------------------------------------
// Test: Display rows and seat accounting
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_flight_row_display(pool: PgPool) {
    let fixture = seed_fixture(&pool, "Kyiv", "Lviv").await;
    let amelia = seed_crew(&pool, "Amelia", "Earhart").await;
    FlightRepo::create(&pool, &new_flight(&fixture, 1, 9, vec![amelia]))
        .await
        .unwrap();

    let rows = FlightRepo::list_rows(&pool, &FlightFilter::default(), 50, 0)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].route, "Kyiv -> Lviv");
    assert_eq!(rows[0].airplane, "Plane Kyiv");
    assert_eq!(rows[0].crew, vec!["Amelia Earhart"]);
    assert!(rows[0].ticket_ids.is_empty());
    assert_eq!(rows[0].available_tickets, 100);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_available_tickets_shrinks_with_sales(pool: PgPool) {
    let fixture = seed_fixture(&pool, "Kyiv", "Lviv").await;
    let flight = FlightRepo::create(&pool, &new_flight(&fixture, 1, 9, vec![]))
        .await
        .unwrap()
        .flight;
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            email: "alice@example.com".to_string(),
            password_hash: "argon2-hash".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Doe".to_string(),
            role: "customer".to_string(),
        },
    )
    .await
    .unwrap();

    OrderRepo::create(
        &pool,
        user.id,
        &CreateOrder {
            tickets: vec![
                TicketRequest {
                    flight_id: flight.id,
                    row: 1,
                    seat: 1,
                },
                TicketRequest {
                    flight_id: flight.id,
                    row: 1,
                    seat: 2,
                },
            ],
        },
    )
    .await
    .unwrap();

    let rows = FlightRepo::list_rows(&pool, &FlightFilter::default(), 50, 0)
        .await
        .unwrap();
    assert_eq!(rows[0].available_tickets, 98);
    assert_eq!(rows[0].ticket_ids.len(), 2);

    let detail = FlightRepo::find_detail(&pool, flight.id)
        .await
        .unwrap()
        .expect("flight detail should exist");
    assert_eq!(detail.available_tickets, 98);
    assert_eq!(detail.taken_seats.len(), 2);
    assert_eq!((detail.taken_seats[0].row, detail.taken_seats[0].seat), (1, 1));
    assert_eq!((detail.taken_seats[1].row, detail.taken_seats[1].seat), (1, 2));
}

// ---------------------------------------------------------------------------
// Test: Update and crew replacement
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_flight_replaces_crew(pool: PgPool) {
    let fixture = seed_fixture(&pool, "Kyiv", "Lviv").await;
    let amelia = seed_crew(&pool, "Amelia", "Earhart").await;
    let charles = seed_crew(&pool, "Charles", "Lindbergh").await;

    let flight = FlightRepo::create(&pool, &new_flight(&fixture, 1, 9, vec![amelia]))
        .await
        .unwrap()
        .flight;

    // Replace the crew set entirely.
    let updated = FlightRepo::update(
        &pool,
        flight.id,
        &UpdateFlight {
            route_id: None,
            airplane_id: None,
            departure_time: None,
            arrival_time: Some(ts(1, 13)),
            crew_ids: Some(vec![charles]),
        },
    )
    .await
    .unwrap()
    .expect("Update should return the row");

    assert_eq!(updated.flight.arrival_time, ts(1, 13));
    assert_eq!(updated.flight.departure_time, ts(1, 9));
    assert_eq!(updated.crew_ids, vec![charles]);

    // A second update without crew_ids leaves the assignment untouched.
    let untouched = FlightRepo::update(
        &pool,
        flight.id,
        &UpdateFlight {
            route_id: None,
            airplane_id: None,
            departure_time: None,
            arrival_time: None,
            crew_ids: None,
        },
    )
    .await
    .unwrap()
    .expect("Update should return the row");
    assert_eq!(untouched.crew_ids, vec![charles]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_nonexistent_flight_returns_none(pool: PgPool) {
    let result = FlightRepo::update(
        &pool,
        999_999,
        &UpdateFlight {
            route_id: None,
            airplane_id: None,
            departure_time: None,
            arrival_time: None,
            crew_ids: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Test: Delete cascades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_flight_cascades_crew_rows(pool: PgPool) {
    let fixture = seed_fixture(&pool, "Kyiv", "Lviv").await;
    let amelia = seed_crew(&pool, "Amelia", "Earhart").await;
    let flight = FlightRepo::create(&pool, &new_flight(&fixture, 1, 9, vec![amelia]))
        .await
        .unwrap()
        .flight;

    assert!(FlightRepo::delete(&pool, flight.id).await.unwrap());

    let junction_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM flight_crew")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(junction_rows, 0);

    // The crew member itself survives.
    assert!(CrewRepo::find_by_id(&pool, amelia).await.unwrap().is_some());
}

// ---------------------------------------------------------------------------
// Test: List filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_filter_by_departure_date(pool: PgPool) {
    let fixture = seed_fixture(&pool, "Kyiv", "Lviv").await;
    FlightRepo::create(&pool, &new_flight(&fixture, 1, 9, vec![]))
        .await
        .unwrap();
    FlightRepo::create(&pool, &new_flight(&fixture, 2, 9, vec![]))
        .await
        .unwrap();
    FlightRepo::create(&pool, &new_flight(&fixture, 3, 9, vec![]))
        .await
        .unwrap();

    let exact = FlightRepo::list_rows(
        &pool,
        &FlightFilter {
            departure_date: Some(date(2)),
            ..Default::default()
        },
        50,
        0,
    )
    .await
    .unwrap();
    assert_eq!(exact.len(), 1);

    let after = FlightRepo::list_rows(
        &pool,
        &FlightFilter {
            departure_date_after: Some(date(1)),
            ..Default::default()
        },
        50,
        0,
    )
    .await
    .unwrap();
    assert_eq!(after.len(), 2);

    let before = FlightRepo::list_rows(
        &pool,
        &FlightFilter {
            departure_date_before: Some(date(3)),
            ..Default::default()
        },
        50,
        0,
    )
    .await
    .unwrap();
    assert_eq!(before.len(), 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_filter_by_time_of_day(pool: PgPool) {
    let fixture = seed_fixture(&pool, "Kyiv", "Lviv").await;
    FlightRepo::create(&pool, &new_flight(&fixture, 1, 6, vec![]))
        .await
        .unwrap();
    FlightRepo::create(&pool, &new_flight(&fixture, 1, 12, vec![]))
        .await
        .unwrap();
    FlightRepo::create(&pool, &new_flight(&fixture, 1, 18, vec![]))
        .await
        .unwrap();

    let morning_and_later = FlightRepo::list_rows(
        &pool,
        &FlightFilter {
            departure_time_after: Some(time(9)),
            ..Default::default()
        },
        50,
        0,
    )
    .await
    .unwrap();
    assert_eq!(morning_and_later.len(), 2);

    let early = FlightRepo::list_rows(
        &pool,
        &FlightFilter {
            departure_time_before: Some(time(9)),
            ..Default::default()
        },
        50,
        0,
    )
    .await
    .unwrap();
    assert_eq!(early.len(), 1);

    let exact = FlightRepo::list_rows(
        &pool,
        &FlightFilter {
            departure_time: Some(time(12)),
            ..Default::default()
        },
        50,
        0,
    )
    .await
    .unwrap();
    assert_eq!(exact.len(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_filter_by_route_and_search(pool: PgPool) {
    let ukraine = seed_fixture(&pool, "Kyiv", "Lviv").await;
    let france = seed_fixture(&pool, "Paris", "Nice").await;
    FlightRepo::create(&pool, &new_flight(&ukraine, 1, 9, vec![]))
        .await
        .unwrap();
    FlightRepo::create(&pool, &new_flight(&france, 1, 9, vec![]))
        .await
        .unwrap();

    let by_route = FlightRepo::list_rows(
        &pool,
        &FlightFilter {
            route_id: Some(ukraine.route_id),
            ..Default::default()
        },
        50,
        0,
    )
    .await
    .unwrap();
    assert_eq!(by_route.len(), 1);
    assert_eq!(by_route[0].route, "Kyiv -> Lviv");

    // Search matches either endpoint city name.
    let searched = FlightRepo::list_rows(
        &pool,
        &FlightFilter {
            search: Some("nice".to_string()),
            ..Default::default()
        },
        50,
        0,
    )
    .await
    .unwrap();
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].route, "Paris -> Nice");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_pagination(pool: PgPool) {
    let fixture = seed_fixture(&pool, "Kyiv", "Lviv").await;
    for day in 1..=4 {
        FlightRepo::create(&pool, &new_flight(&fixture, day, 9, vec![]))
            .await
            .unwrap();
    }

    let first_page = FlightRepo::list_rows(&pool, &FlightFilter::default(), 2, 0)
        .await
        .unwrap();
    let second_page = FlightRepo::list_rows(&pool, &FlightFilter::default(), 2, 2)
        .await
        .unwrap();
    assert_eq!(first_page.len(), 2);
    assert_eq!(second_page.len(), 2);
    assert!(first_page[0].departure_time < second_page[0].departure_time);
}
