//! Field-level validation failures.
//!
//! Validators return every violation they find rather than stopping at the
//! first, so a request with a bad row and a bad seat reports both at once.
//! The HTTP layer serializes the violations verbatim into the `details`
//! array of the error body.

use serde::Serialize;

/// A single field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Name of the offending request field.
    pub field: &'static str,
    /// Human-readable message naming the valid range or expectation.
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Fold violations into a single human-readable sentence.
///
/// Used for the top-level `error` message; the structured list still
/// travels alongside it.
pub fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_joins_field_and_message() {
        let violations = vec![
            FieldViolation::new("row", "must be within 1..=20"),
            FieldViolation::new("seat", "must be within 1..=5"),
        ];
        assert_eq!(
            summarize(&violations),
            "row: must be within 1..=20; seat: must be within 1..=5"
        );
    }

    #[test]
    fn summarize_single_violation_has_no_separator() {
        let violations = vec![FieldViolation::new("rows", "must be at least 1")];
        assert_eq!(summarize(&violations), "rows: must be at least 1");
    }
}
