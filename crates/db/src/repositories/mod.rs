//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Queries are built from
//! shared `COLUMNS` constants with `$n` placeholder binds.

pub mod airplane_repo;
pub mod airplane_type_repo;
pub mod airport_repo;
pub mod city_repo;
pub mod country_repo;
pub mod crew_repo;
pub mod flight_repo;
pub mod order_repo;
pub mod route_repo;
pub mod session_repo;
pub mod user_repo;

pub use airplane_repo::AirplaneRepo;
pub use airplane_type_repo::AirplaneTypeRepo;
pub use airport_repo::AirportRepo;
pub use city_repo::CityRepo;
pub use country_repo::CountryRepo;
pub use crew_repo::CrewRepo;
pub use flight_repo::FlightRepo;
pub use order_repo::{OrderError, OrderRepo};
pub use route_repo::RouteRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
