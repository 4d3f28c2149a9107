//! Repository for the `airports` table.

use sqlx::PgPool;

use skybook_core::types::DbId;

use crate::models::airport::{Airport, AirportRow, CreateAirport, UpdateAirport};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city_id, created_at";

/// SELECT body for [`AirportRow`] queries with city and country names.
const ROW_SELECT: &str = "\
    SELECT a.id, a.name, c.name AS city, co.name AS country \
    FROM airports a \
    JOIN cities c ON c.id = a.city_id \
    JOIN countries co ON co.id = c.country_id";

/// Provides CRUD operations for airports.
pub struct AirportRepo;

impl AirportRepo {
    /// Insert a new airport, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAirport) -> Result<Airport, sqlx::Error> {
        let query = format!(
            "INSERT INTO airports (name, city_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Airport>(&query)
            .bind(&input.name)
            .bind(input.city_id)
            .fetch_one(pool)
            .await
    }

    /// Find an airport by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Airport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airports WHERE id = $1");
        sqlx::query_as::<_, Airport>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an airport by ID, with city and country names joined in.
    pub async fn find_row_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AirportRow>, sqlx::Error> {
        let query = format!("{ROW_SELECT} WHERE a.id = $1");
        sqlx::query_as::<_, AirportRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List airport rows, optionally filtered by a case-insensitive match
    /// on the airport, city or country name.
    pub async fn list_rows(
        pool: &PgPool,
        search: Option<&str>,
        descending: bool,
    ) -> Result<Vec<AirportRow>, sqlx::Error> {
        let direction = if descending { "DESC" } else { "ASC" };

        match search {
            Some(term) => {
                let query = format!(
                    "{ROW_SELECT} \
                     WHERE a.name ILIKE $1 OR c.name ILIKE $1 OR co.name ILIKE $1 \
                     ORDER BY a.name {direction}"
                );
                sqlx::query_as::<_, AirportRow>(&query)
                    .bind(format!("%{term}%"))
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("{ROW_SELECT} ORDER BY a.name {direction}");
                sqlx::query_as::<_, AirportRow>(&query).fetch_all(pool).await
            }
        }
    }

    /// Update an airport. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAirport,
    ) -> Result<Option<Airport>, sqlx::Error> {
        let query = format!(
            "UPDATE airports SET \
                name = COALESCE($2, name), \
                city_id = COALESCE($3, city_id) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Airport>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.city_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an airport. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM airports WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
