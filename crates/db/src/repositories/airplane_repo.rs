//! Repository for the `airplanes` table.
//!
//! `"rows"` is a reserved word in PostgreSQL, so it is quoted in the
//! column list and every statement that names it.

use sqlx::PgPool;

use skybook_core::types::DbId;

use crate::models::airplane::{Airplane, AirplaneRow, CreateAirplane, UpdateAirplane};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = r#"id, name, "rows", seats_per_row, airplane_type_id, created_at"#;

/// Provides CRUD operations for airplanes.
pub struct AirplaneRepo;

impl AirplaneRepo {
    /// Insert a new airplane, returning the created row.
    ///
    /// Dimensions are validated by the caller; the CHECK constraints are
    /// the backstop.
    pub async fn create(pool: &PgPool, input: &CreateAirplane) -> Result<Airplane, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO airplanes (name, "rows", seats_per_row, airplane_type_id)
               VALUES ($1, $2, $3, $4)
               RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Airplane>(&query)
            .bind(&input.name)
            .bind(input.rows)
            .bind(input.seats_per_row)
            .bind(input.airplane_type_id)
            .fetch_one(pool)
            .await
    }

    /// Find an airplane by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Airplane>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airplanes WHERE id = $1");
        sqlx::query_as::<_, Airplane>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List airplanes ordered by name, each with its type name, derived
    /// capacity and flight ids.
    pub async fn list_rows(pool: &PgPool) -> Result<Vec<AirplaneRow>, sqlx::Error> {
        let query = r#"
            SELECT a.id, a.name, a."rows", a.seats_per_row, t.name AS airplane_type,
                   (a."rows"::BIGINT * a.seats_per_row) AS capacity,
                   COALESCE((SELECT ARRAY_AGG(f.id ORDER BY f.id)
                             FROM flights f WHERE f.airplane_id = a.id),
                            ARRAY[]::BIGINT[]) AS flight_ids
            FROM airplanes a
            JOIN airplane_types t ON t.id = a.airplane_type_id
            ORDER BY a.name"#;
        sqlx::query_as::<_, AirplaneRow>(query).fetch_all(pool).await
    }

    /// Update an airplane. Only non-`None` fields in `input` are applied.
    ///
    /// Existing tickets are not re-validated when dimensions shrink; that
    /// is an operational decision left to the caller.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAirplane,
    ) -> Result<Option<Airplane>, sqlx::Error> {
        let query = format!(
            r#"UPDATE airplanes SET
                name = COALESCE($2, name),
                "rows" = COALESCE($3, "rows"),
                seats_per_row = COALESCE($4, seats_per_row),
                airplane_type_id = COALESCE($5, airplane_type_id)
             WHERE id = $1
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Airplane>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.rows)
            .bind(input.seats_per_row)
            .bind(input.airplane_type_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an airplane. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM airplanes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
