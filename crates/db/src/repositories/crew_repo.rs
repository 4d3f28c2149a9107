//! Repository for the `crew_members` table.

use sqlx::PgPool;

use skybook_core::types::DbId;

use crate::models::crew::{CreateCrewMember, CrewMember, UpdateCrewMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, created_at";

/// Provides CRUD operations for crew members.
pub struct CrewRepo;

impl CrewRepo {
    /// Insert a new crew member, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCrewMember) -> Result<CrewMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO crew_members (first_name, last_name) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CrewMember>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_one(pool)
            .await
    }

    /// Find a crew member by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CrewMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM crew_members WHERE id = $1");
        sqlx::query_as::<_, CrewMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all crew members ordered by first then last name.
    pub async fn list(pool: &PgPool) -> Result<Vec<CrewMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM crew_members ORDER BY first_name, last_name"
        );
        sqlx::query_as::<_, CrewMember>(&query).fetch_all(pool).await
    }

    /// Update a crew member. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCrewMember,
    ) -> Result<Option<CrewMember>, sqlx::Error> {
        let query = format!(
            "UPDATE crew_members SET \
                first_name = COALESCE($2, first_name), \
                last_name = COALESCE($3, last_name) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CrewMember>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a crew member. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM crew_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
