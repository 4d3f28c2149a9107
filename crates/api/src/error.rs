use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};

use skybook_core::error::CoreError;
use skybook_core::validation::{summarize, FieldViolation};
use skybook_db::repositories::OrderError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses:
/// `{ "error": <message>, "code": <CODE> }`, plus a `"details"` array when
/// the failure carries per-field violations.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `skybook_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A validation failure with per-field detail.
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldViolation>),

    /// A rejected order commit.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                    None,
                ),
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg.clone(),
                    None,
                ),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone(), None),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone(), None)
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone(), None),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                        None,
                    )
                }
            },

            // --- Field-level validation failures ---
            AppError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("Validation failed: {}", summarize(violations)),
                Some(violation_details(violations, None)),
            ),

            // --- Order commit failures ---
            AppError::Order(err) => classify_order_error(err),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None)
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a rejected order commit into status, code, message, and details.
///
/// - Empty batch and out-of-bounds seats are validation failures (400).
/// - An unknown flight is a 404.
/// - A seat sold before (or during) the request is a 409 with the losing
///   ticket's coordinates in `details`.
fn classify_order_error(err: &OrderError) -> (StatusCode, &'static str, String, Option<Value>) {
    match err {
        OrderError::EmptyTickets => (
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            err.to_string(),
            None,
        ),
        OrderError::FlightNotFound { .. } => {
            (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string(), None)
        }
        OrderError::InvalidTicket { index, violations } => (
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            err.to_string(),
            Some(violation_details(violations, Some(*index))),
        ),
        OrderError::SeatTaken {
            index,
            flight_id,
            row,
            seat,
        } => (
            StatusCode::CONFLICT,
            "CONFLICT",
            err.to_string(),
            Some(json!([{
                "ticket_index": index,
                "flight_id": flight_id,
                "row": row,
                "seat": seat,
            }])),
        ),
        OrderError::Db(db_err) => classify_sqlx_error(db_err),
    }
}

/// Render field violations as a JSON `details` array, optionally tagged
/// with the ticket index they belong to.
fn violation_details(violations: &[FieldViolation], ticket_index: Option<usize>) -> Value {
    let entries: Vec<Value> = violations
        .iter()
        .map(|v| {
            let mut entry = json!({
                "field": v.field,
                "message": v.message,
            });
            if let Some(index) = ticket_index {
                entry["ticket_index"] = json!(index);
            }
            entry
        })
        .collect();
    Value::Array(entries)
}

/// Classify a sqlx error into an HTTP status, error code, message, details.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Foreign key and check violations map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String, Option<Value>) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
            None,
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                        None,
                    );
                }
            }
            // PostgreSQL foreign key violation: error code 23503. Every
            // foreign key here is ON DELETE CASCADE, so this only fires on
            // an insert or update naming a parent row that does not exist.
            if db_err.code().as_deref() == Some("23503") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    format!("Referenced row does not exist: {constraint}"),
                    None,
                );
            }
            // PostgreSQL check violation: error code 23514 (e.g. bad
            // airplane dimensions that slipped past handler validation).
            if db_err.code().as_deref() == Some("23514") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("ck_") {
                    return (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        format!("Value violates constraint: {constraint}"),
                        None,
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
                None,
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
                None,
            )
        }
    }
}
