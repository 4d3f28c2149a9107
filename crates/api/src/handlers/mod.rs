//! HTTP handlers, one module per resource.
//!
//! Authorization is enforced per handler through extractors:
//! [`RequireAdmin`](crate::middleware::rbac::RequireAdmin) on catalog
//! writes and on everything under the fleet resources (airplane types,
//! airplanes, crew), [`AuthUser`](crate::middleware::auth::AuthUser) on
//! orders. Catalog reads are public.

pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod auth;
pub mod city;
pub mod country;
pub mod crew;
pub mod flight;
pub mod order;
pub mod route;
