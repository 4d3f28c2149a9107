//! Repository for the `flights` table and its crew assignments.

use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;

use skybook_core::types::DbId;

use crate::models::crew::CrewMember;
use crate::models::flight::{
    CreateFlight, Flight, FlightDetail, FlightFilter, FlightRow, FlightWithCrew, TakenSeat,
    UpdateFlight,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, route_id, airplane_id, departure_time, arrival_time, created_at";

/// SELECT body for [`FlightRow`] queries: route collapsed to its city
/// display, ticket ids and crew names aggregated, remaining seats derived
/// from the airplane dimensions.
const ROW_SELECT: &str = "\
    SELECT f.id, \
           sc.name || ' -> ' || dc.name AS route, \
           a.name AS airplane, \
           f.departure_time, \
           f.arrival_time, \
           COALESCE((SELECT ARRAY_AGG(t.id ORDER BY t.\"row\", t.seat) \
                     FROM tickets t WHERE t.flight_id = f.id), \
                    ARRAY[]::BIGINT[]) AS ticket_ids, \
           COALESCE((SELECT ARRAY_AGG(cm.first_name || ' ' || cm.last_name \
                                      ORDER BY cm.first_name, cm.last_name) \
                     FROM flight_crew fc \
                     JOIN crew_members cm ON cm.id = fc.crew_member_id \
                     WHERE fc.flight_id = f.id), \
                    ARRAY[]::TEXT[]) AS crew, \
           (a.\"rows\"::BIGINT * a.seats_per_row) \
               - (SELECT COUNT(*) FROM tickets t WHERE t.flight_id = f.id) \
               AS available_tickets \
    FROM flights f \
    JOIN routes r ON r.id = f.route_id \
    JOIN airports sa ON sa.id = r.source_id \
    JOIN cities sc ON sc.id = sa.city_id \
    JOIN airports da ON da.id = r.destination_id \
    JOIN cities dc ON dc.id = da.city_id \
    JOIN airplanes a ON a.id = f.airplane_id";

/// Provides CRUD operations for flights.
pub struct FlightRepo;

impl FlightRepo {
    /// Insert a new flight with its crew assignments in one transaction.
    ///
    /// Time ordering is validated by the caller before this runs.
    pub async fn create(pool: &PgPool, input: &CreateFlight) -> Result<FlightWithCrew, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO flights (route_id, airplane_id, departure_time, arrival_time) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let flight = sqlx::query_as::<_, Flight>(&insert_query)
            .bind(input.route_id)
            .bind(input.airplane_id)
            .bind(input.departure_time)
            .bind(input.arrival_time)
            .fetch_one(&mut *tx)
            .await?;

        Self::set_crew_inner(&mut tx, flight.id, &input.crew_ids).await?;

        tx.commit().await?;
        let crew_ids = input.crew_ids.clone();
        Ok(FlightWithCrew { flight, crew_ids })
    }

    /// Find a flight by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Flight>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flights WHERE id = $1");
        sqlx::query_as::<_, Flight>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a flight by ID together with its assigned crew ids.
    pub async fn find_with_crew(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FlightWithCrew>, sqlx::Error> {
        let Some(flight) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let crew_ids = Self::crew_ids_for(pool, id).await?;
        Ok(Some(FlightWithCrew { flight, crew_ids }))
    }

    /// Find a flight by ID with full crew rows and sold seat coordinates.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<FlightDetail>, sqlx::Error> {
        let query = format!("{ROW_SELECT} WHERE f.id = $1");
        let Some(row) = sqlx::query_as::<_, FlightRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let crew = Self::crew_for(pool, id).await?;
        let taken_seats = Self::taken_seats(pool, id).await?;

        Ok(Some(FlightDetail {
            id: row.id,
            route: row.route,
            airplane: row.airplane,
            departure_time: row.departure_time,
            arrival_time: row.arrival_time,
            crew: crew.into_iter().map(CrewMember::into_response).collect(),
            taken_seats,
            available_tickets: row.available_tickets,
        }))
    }

    /// List flight rows matching the given filters, ordered by departure
    /// time, with pagination.
    pub async fn list_rows(
        pool: &PgPool,
        filter: &FlightFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FlightRow>, sqlx::Error> {
        let (where_clause, bind_values, bind_idx) = build_flight_filter(filter);
        let query = format!(
            "{ROW_SELECT} {where_clause} \
             ORDER BY f.departure_time, f.id \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let mut q = sqlx::query_as::<_, FlightRow>(&query);
        for val in &bind_values {
            match val {
                BindValue::Id(v) => q = q.bind(*v),
                BindValue::Date(v) => q = q.bind(*v),
                BindValue::Time(v) => q = q.bind(*v),
                BindValue::Text(v) => q = q.bind(v.as_str()),
            }
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Update a flight. Only non-`None` fields in `input` are applied;
    /// `crew_ids = Some(..)` replaces the whole assignment set.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFlight,
    ) -> Result<Option<FlightWithCrew>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE flights SET \
                route_id = COALESCE($2, route_id), \
                airplane_id = COALESCE($3, airplane_id), \
                departure_time = COALESCE($4, departure_time), \
                arrival_time = COALESCE($5, arrival_time) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let Some(flight) = sqlx::query_as::<_, Flight>(&update_query)
            .bind(id)
            .bind(input.route_id)
            .bind(input.airplane_id)
            .bind(input.departure_time)
            .bind(input.arrival_time)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(ref crew_ids) = input.crew_ids {
            Self::set_crew_inner(&mut tx, flight.id, crew_ids).await?;
        }

        tx.commit().await?;

        let crew_ids = Self::crew_ids_for(pool, id).await?;
        Ok(Some(FlightWithCrew { flight, crew_ids }))
    }

    /// Delete a flight. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM flights WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Crew assignment helpers
    // -----------------------------------------------------------------------

    /// Crew member ids assigned to a flight.
    pub async fn crew_ids_for(pool: &PgPool, flight_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT crew_member_id FROM flight_crew \
             WHERE flight_id = $1 \
             ORDER BY crew_member_id",
        )
        .bind(flight_id)
        .fetch_all(pool)
        .await
    }

    /// Full crew member rows assigned to a flight.
    pub async fn crew_for(pool: &PgPool, flight_id: DbId) -> Result<Vec<CrewMember>, sqlx::Error> {
        sqlx::query_as::<_, CrewMember>(
            "SELECT cm.id, cm.first_name, cm.last_name, cm.created_at \
             FROM crew_members cm \
             JOIN flight_crew fc ON fc.crew_member_id = cm.id \
             WHERE fc.flight_id = $1 \
             ORDER BY cm.first_name, cm.last_name",
        )
        .bind(flight_id)
        .fetch_all(pool)
        .await
    }

    /// Sold seat coordinates on a flight, ordered by (row, seat).
    pub async fn taken_seats(pool: &PgPool, flight_id: DbId) -> Result<Vec<TakenSeat>, sqlx::Error> {
        sqlx::query_as::<_, TakenSeat>(
            "SELECT \"row\", seat FROM tickets \
             WHERE flight_id = $1 \
             ORDER BY \"row\", seat",
        )
        .bind(flight_id)
        .fetch_all(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Replace crew assignments within an existing transaction.
    async fn set_crew_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        flight_id: DbId,
        crew_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM flight_crew WHERE flight_id = $1")
            .bind(flight_id)
            .execute(&mut **tx)
            .await?;

        for &crew_member_id in crew_ids {
            sqlx::query(
                "INSERT INTO flight_crew (flight_id, crew_member_id) VALUES ($1, $2)",
            )
            .bind(flight_id)
            .bind(crew_member_id)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}

/// Typed bind value for dynamically-built flight queries.
enum BindValue {
    Id(DbId),
    Date(NaiveDate),
    Time(NaiveTime),
    Text(String),
}

/// Build a WHERE clause and bind values from flight filter parameters.
///
/// Returns `(where_clause, bind_values, next_bind_index)`. Date and
/// time-of-day comparisons pin the departure timestamp to UTC so results
/// do not depend on the session time zone.
fn build_flight_filter(filter: &FlightFilter) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    if let Some(route_id) = filter.route_id {
        conditions.push(format!("f.route_id = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Id(route_id));
    }

    if let Some(date) = filter.departure_date {
        conditions.push(format!(
            "(f.departure_time AT TIME ZONE 'UTC')::date = ${bind_idx}"
        ));
        bind_idx += 1;
        bind_values.push(BindValue::Date(date));
    }

    if let Some(date) = filter.departure_date_after {
        conditions.push(format!(
            "(f.departure_time AT TIME ZONE 'UTC')::date > ${bind_idx}"
        ));
        bind_idx += 1;
        bind_values.push(BindValue::Date(date));
    }

    if let Some(date) = filter.departure_date_before {
        conditions.push(format!(
            "(f.departure_time AT TIME ZONE 'UTC')::date < ${bind_idx}"
        ));
        bind_idx += 1;
        bind_values.push(BindValue::Date(date));
    }

    if let Some(time) = filter.departure_time {
        conditions.push(format!(
            "(f.departure_time AT TIME ZONE 'UTC')::time = ${bind_idx}"
        ));
        bind_idx += 1;
        bind_values.push(BindValue::Time(time));
    }

    if let Some(time) = filter.departure_time_after {
        conditions.push(format!(
            "(f.departure_time AT TIME ZONE 'UTC')::time > ${bind_idx}"
        ));
        bind_idx += 1;
        bind_values.push(BindValue::Time(time));
    }

    if let Some(time) = filter.departure_time_before {
        conditions.push(format!(
            "(f.departure_time AT TIME ZONE 'UTC')::time < ${bind_idx}"
        ));
        bind_idx += 1;
        bind_values.push(BindValue::Time(time));
    }

    if let Some(ref term) = filter.search {
        conditions.push(format!(
            "(sc.name ILIKE ${bind_idx} OR dc.name ILIKE ${bind_idx})"
        ));
        bind_idx += 1;
        bind_values.push(BindValue::Text(format!("%{term}%")));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}
