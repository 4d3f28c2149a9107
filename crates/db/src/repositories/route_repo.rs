//! Repository for the `routes` table.

use sqlx::PgPool;

use skybook_core::types::DbId;

use crate::models::route::{CreateRoute, Route, RouteDetail, RouteFilter, RouteRow, UpdateRoute};
use crate::repositories::airport_repo::AirportRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, source_id, destination_id, distance, created_at";

/// SELECT body for [`RouteRow`] queries: endpoints collapsed to city
/// names, flight ids aggregated per route. Country joins exist for the
/// search filter.
const ROW_SELECT: &str = "\
    SELECT r.id, sc.name AS source, dc.name AS destination, r.distance, \
           COALESCE((SELECT ARRAY_AGG(f.id ORDER BY f.departure_time, f.id) \
                     FROM flights f WHERE f.route_id = r.id), \
                    ARRAY[]::BIGINT[]) AS flight_ids \
    FROM routes r \
    JOIN airports sa ON sa.id = r.source_id \
    JOIN cities sc ON sc.id = sa.city_id \
    JOIN countries sco ON sco.id = sc.country_id \
    JOIN airports da ON da.id = r.destination_id \
    JOIN cities dc ON dc.id = da.city_id \
    JOIN countries dco ON dco.id = dc.country_id";

/// Provides CRUD operations for routes.
pub struct RouteRepo;

impl RouteRepo {
    /// Insert a new route, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRoute) -> Result<Route, sqlx::Error> {
        let query = format!(
            "INSERT INTO routes (source_id, destination_id, distance) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Route>(&query)
            .bind(input.source_id)
            .bind(input.destination_id)
            .bind(input.distance)
            .fetch_one(pool)
            .await
    }

    /// Find a route by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Route>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM routes WHERE id = $1");
        sqlx::query_as::<_, Route>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a route by ID with both endpoints expanded to airport rows.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<RouteDetail>, sqlx::Error> {
        let Some(route) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        // The endpoints cannot be missing while the route row exists; the
        // FKs guarantee it. RowNotFound here means a concurrent cascade.
        let source = AirportRepo::find_row_by_id(pool, route.source_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        let destination = AirportRepo::find_row_by_id(pool, route.destination_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        Ok(Some(RouteDetail {
            id: route.id,
            source,
            destination,
            distance: route.distance,
        }))
    }

    /// List route rows matching the given filters.
    pub async fn list_rows(
        pool: &PgPool,
        filter: &RouteFilter,
    ) -> Result<Vec<RouteRow>, sqlx::Error> {
        let (where_clause, bind_values) = build_route_filter(filter);
        let query = format!("{ROW_SELECT} {where_clause} ORDER BY r.id");

        let mut q = sqlx::query_as::<_, RouteRow>(&query);
        for val in &bind_values {
            match val {
                BindValue::Id(v) => q = q.bind(*v),
                BindValue::Text(v) => q = q.bind(v.as_str()),
            }
        }
        q.fetch_all(pool).await
    }

    /// Update a route. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRoute,
    ) -> Result<Option<Route>, sqlx::Error> {
        let query = format!(
            "UPDATE routes SET \
                source_id = COALESCE($2, source_id), \
                destination_id = COALESCE($3, destination_id), \
                distance = COALESCE($4, distance) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Route>(&query)
            .bind(id)
            .bind(input.source_id)
            .bind(input.destination_id)
            .bind(input.distance)
            .fetch_optional(pool)
            .await
    }

    /// Delete a route. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM routes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Typed bind value for dynamically-built route queries.
enum BindValue {
    Id(DbId),
    Text(String),
}

/// Build a WHERE clause and bind values from route filter parameters.
///
/// The clause is empty if no filters are active, or starts with `WHERE `.
fn build_route_filter(filter: &RouteFilter) -> (String, Vec<BindValue>) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    if let Some(source_id) = filter.source_id {
        conditions.push(format!("r.source_id = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Id(source_id));
    }

    if let Some(destination_id) = filter.destination_id {
        conditions.push(format!("r.destination_id = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Id(destination_id));
    }

    if let Some(has_flights) = filter.has_flights {
        let prefix = if has_flights { "" } else { "NOT " };
        conditions.push(format!(
            "{prefix}EXISTS (SELECT 1 FROM flights f WHERE f.route_id = r.id)"
        ));
    }

    if let Some(ref term) = filter.search {
        conditions.push(format!(
            "(sc.name ILIKE ${bind_idx} OR sco.name ILIKE ${bind_idx} \
              OR dc.name ILIKE ${bind_idx} OR dco.name ILIKE ${bind_idx})"
        ));
        bind_idx += 1;
        bind_values.push(BindValue::Text(format!("%{term}%")));
    }

    let _ = bind_idx;

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values)
}
