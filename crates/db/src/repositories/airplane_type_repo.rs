//! Repository for the `airplane_types` table.

use sqlx::PgPool;

use skybook_core::types::DbId;

use crate::models::airplane_type::{
    AirplaneType, AirplaneTypeRow, CreateAirplaneType, UpdateAirplaneType,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides CRUD operations for airplane types.
pub struct AirplaneTypeRepo;

impl AirplaneTypeRepo {
    /// Insert a new airplane type, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAirplaneType,
    ) -> Result<AirplaneType, sqlx::Error> {
        let query = format!("INSERT INTO airplane_types (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, AirplaneType>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find an airplane type by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AirplaneType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airplane_types WHERE id = $1");
        sqlx::query_as::<_, AirplaneType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List airplane types ordered by name, each with the names of its
    /// airplanes.
    pub async fn list_rows(pool: &PgPool) -> Result<Vec<AirplaneTypeRow>, sqlx::Error> {
        let query = "\
            SELECT t.id, t.name, \
                   COALESCE((SELECT ARRAY_AGG(a.name ORDER BY a.name) \
                             FROM airplanes a WHERE a.airplane_type_id = t.id), \
                            ARRAY[]::TEXT[]) AS airplanes \
            FROM airplane_types t \
            ORDER BY t.name";
        sqlx::query_as::<_, AirplaneTypeRow>(query).fetch_all(pool).await
    }

    /// Update an airplane type.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAirplaneType,
    ) -> Result<Option<AirplaneType>, sqlx::Error> {
        let query = format!(
            "UPDATE airplane_types SET name = COALESCE($2, name) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AirplaneType>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete an airplane type. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM airplane_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
