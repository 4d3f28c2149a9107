//! Request extractors for authentication and authorization.
//!
//! - [`auth`] -- [`auth::AuthUser`], the JWT Bearer-token extractor.
//! - [`rbac`] -- role-gated wrappers used by admin-only routes.

pub mod auth;
pub mod rbac;
