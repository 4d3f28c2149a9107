//! Repository for the `cities` table.

use sqlx::PgPool;

use skybook_core::types::DbId;

use crate::models::city::{City, CityOrdering, CityRow, CreateCity, UpdateCity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, country_id, created_at";

/// SELECT body for [`CityRow`] queries: country name joined in, airport
/// names aggregated per city.
const ROW_SELECT: &str = "\
    SELECT c.id, c.name, co.name AS country, \
           COALESCE((SELECT ARRAY_AGG(a.name ORDER BY a.name) \
                     FROM airports a WHERE a.city_id = c.id), \
                    ARRAY[]::TEXT[]) AS airports \
    FROM cities c \
    JOIN countries co ON co.id = c.country_id";

/// Provides CRUD operations for cities.
pub struct CityRepo;

impl CityRepo {
    /// Insert a new city, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCity) -> Result<City, sqlx::Error> {
        let query = format!(
            "INSERT INTO cities (name, country_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(&input.name)
            .bind(input.country_id)
            .fetch_one(pool)
            .await
    }

    /// Find a city by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities WHERE id = $1");
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a city by ID, with country name and airport names joined in.
    pub async fn find_row_by_id(pool: &PgPool, id: DbId) -> Result<Option<CityRow>, sqlx::Error> {
        let query = format!("{ROW_SELECT} WHERE c.id = $1");
        sqlx::query_as::<_, CityRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List city rows, optionally filtered by a case-insensitive match on
    /// the city or country name.
    pub async fn list_rows(
        pool: &PgPool,
        search: Option<&str>,
        ordering: CityOrdering,
    ) -> Result<Vec<CityRow>, sqlx::Error> {
        let order_by = ordering.sql();

        match search {
            Some(term) => {
                let query = format!(
                    "{ROW_SELECT} WHERE c.name ILIKE $1 OR co.name ILIKE $1 ORDER BY {order_by}"
                );
                sqlx::query_as::<_, CityRow>(&query)
                    .bind(format!("%{term}%"))
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("{ROW_SELECT} ORDER BY {order_by}");
                sqlx::query_as::<_, CityRow>(&query).fetch_all(pool).await
            }
        }
    }

    /// Update a city. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCity,
    ) -> Result<Option<City>, sqlx::Error> {
        let query = format!(
            "UPDATE cities SET \
                name = COALESCE($2, name), \
                country_id = COALESCE($3, country_id) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.country_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a city. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
