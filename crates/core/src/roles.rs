//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in
//! `20260712000001_create_users.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_CUSTOMER: &str = "customer";

/// Roles accepted by the users table, in seniority order.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_CUSTOMER];

/// Check whether a role name is one the schema accepts.
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}
