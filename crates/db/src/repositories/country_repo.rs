//! Repository for the `countries` table.

use sqlx::PgPool;

use skybook_core::types::DbId;

use crate::models::country::{Country, CreateCountry, UpdateCountry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides CRUD operations for countries.
pub struct CountryRepo;

impl CountryRepo {
    /// Insert a new country, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCountry) -> Result<Country, sqlx::Error> {
        let query = format!("INSERT INTO countries (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Country>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a country by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Country>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM countries WHERE id = $1");
        sqlx::query_as::<_, Country>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List countries ordered by name, optionally filtered by a
    /// case-insensitive name match.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        descending: bool,
    ) -> Result<Vec<Country>, sqlx::Error> {
        let direction = if descending { "DESC" } else { "ASC" };

        match search {
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM countries WHERE name ILIKE $1 ORDER BY name {direction}"
                );
                sqlx::query_as::<_, Country>(&query)
                    .bind(format!("%{term}%"))
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM countries ORDER BY name {direction}");
                sqlx::query_as::<_, Country>(&query).fetch_all(pool).await
            }
        }
    }

    /// Update a country. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCountry,
    ) -> Result<Option<Country>, sqlx::Error> {
        let query = format!(
            "UPDATE countries SET name = COALESCE($2, name) WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Country>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a country. Returns `true` if a row was removed.
    ///
    /// Cities, airports, routes and flights under it go with it (cascade).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM countries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
