//! Repository for orders and their tickets.
//!
//! Order creation is the only write path for both tables. The whole batch
//! commits in a single transaction; any rejected ticket rolls back the
//! order and every ticket inserted before it.
//!
//! Seat occupancy is never pre-checked with a SELECT. The unique index
//! `uq_tickets_flight_row_seat` is the sole arbiter, so two concurrent
//! orders racing for the same seat resolve at INSERT time: one commits,
//! the other maps the constraint violation to [`OrderError::SeatTaken`].

use std::collections::HashMap;

use sqlx::PgPool;
use thiserror::Error;

use skybook_core::seating::{self, SeatMap};
use skybook_core::types::DbId;
use skybook_core::validation::{summarize, FieldViolation};

use crate::models::order::{CreateOrder, Order, OrderWithTickets, Ticket};

const ORDER_COLUMNS: &str = "id, user_id, created_at";
const TICKET_COLUMNS: &str = "id, flight_id, order_id, \"row\", seat";

/// Why an order batch was rejected.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The request contained no tickets at all.
    #[error("an order must contain at least one ticket")]
    EmptyTickets,

    /// A ticket referenced a flight that does not exist.
    #[error("flight with id {flight_id} not found")]
    FlightNotFound { flight_id: DbId },

    /// A ticket's seat coordinates fall outside the airplane's seat map.
    #[error("ticket {index} invalid: {}", summarize(.violations))]
    InvalidTicket {
        index: usize,
        violations: Vec<FieldViolation>,
    },

    /// A ticket's seat is already sold on that flight.
    #[error("ticket {index}: seat {row}-{seat} on flight {flight_id} is already taken")]
    SeatTaken {
        index: usize,
        flight_id: DbId,
        row: i32,
        seat: i32,
    },

    /// Any other database failure.
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Provides write and read operations for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Create an order with all its tickets atomically.
    ///
    /// Each ticket is checked against the seat map of its flight's
    /// airplane before insertion. Seat maps are cached per batch so a
    /// multi-ticket order for one flight resolves the airplane once.
    ///
    /// Error positions refer to the ticket's zero-based index in the
    /// request batch.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateOrder,
    ) -> Result<OrderWithTickets, OrderError> {
        if input.tickets.is_empty() {
            return Err(OrderError::EmptyTickets);
        }

        let mut tx = pool.begin().await?;

        let order_query = format!(
            "INSERT INTO orders (user_id) VALUES ($1) RETURNING {ORDER_COLUMNS}"
        );
        let order = sqlx::query_as::<_, Order>(&order_query)
            .bind(user_id)
            .fetch_one(&mut *tx)
            .await?;

        let ticket_query = format!(
            "INSERT INTO tickets (flight_id, order_id, \"row\", seat) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {TICKET_COLUMNS}"
        );

        let mut seat_maps: HashMap<DbId, SeatMap> = HashMap::new();
        let mut tickets: Vec<Ticket> = Vec::with_capacity(input.tickets.len());

        for (index, request) in input.tickets.iter().enumerate() {
            let seat_map = match seat_maps.get(&request.flight_id) {
                Some(map) => *map,
                None => {
                    let Some(map) = Self::seat_map_for_flight(&mut tx, request.flight_id).await?
                    else {
                        return Err(OrderError::FlightNotFound {
                            flight_id: request.flight_id,
                        });
                    };
                    seat_maps.insert(request.flight_id, map);
                    map
                }
            };

            if let Err(violations) = seating::validate_seat(&seat_map, request.row, request.seat) {
                return Err(OrderError::InvalidTicket { index, violations });
            }

            let ticket = sqlx::query_as::<_, Ticket>(&ticket_query)
                .bind(request.flight_id)
                .bind(order.id)
                .bind(request.row)
                .bind(request.seat)
                .fetch_one(&mut *tx)
                .await
                .map_err(|err| map_ticket_insert_error(err, index, request))?;
            tickets.push(ticket);
        }

        tx.commit().await?;

        tickets.sort_by_key(|t| (t.row, t.seat));
        Ok(OrderWithTickets { order, tickets })
    }

    /// List a user's orders with their tickets, newest or oldest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        descending: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<OrderWithTickets>, sqlx::Error> {
        let direction = if descending { "DESC" } else { "ASC" };
        let query = format!(
            "SELECT {ORDER_COLUMNS} FROM orders \
             WHERE user_id = $1 \
             ORDER BY created_at {direction}, id {direction} \
             LIMIT $2 OFFSET $3"
        );
        let orders = sqlx::query_as::<_, Order>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        let mut results = Vec::with_capacity(orders.len());
        for order in orders {
            let tickets = Self::tickets_for_order(pool, order.id).await?;
            results.push(OrderWithTickets { order, tickets });
        }
        Ok(results)
    }

    /// Find one of a user's orders by ID.
    ///
    /// Returns `None` when the order does not exist or belongs to someone
    /// else; the two cases are indistinguishable to the caller.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<OrderWithTickets>, sqlx::Error> {
        let query = format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1 AND user_id = $2"
        );
        let Some(order) = sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let tickets = Self::tickets_for_order(pool, order.id).await?;
        Ok(Some(OrderWithTickets { order, tickets }))
    }

    /// Tickets belonging to an order, ordered by seat coordinates.
    pub async fn tickets_for_order(
        pool: &PgPool,
        order_id: DbId,
    ) -> Result<Vec<Ticket>, sqlx::Error> {
        let query = format!(
            "SELECT {TICKET_COLUMNS} FROM tickets \
             WHERE order_id = $1 \
             ORDER BY \"row\", seat"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(order_id)
            .fetch_all(pool)
            .await
    }

    /// Resolve the seat map of the airplane serving a flight.
    async fn seat_map_for_flight(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        flight_id: DbId,
    ) -> Result<Option<SeatMap>, sqlx::Error> {
        let dims = sqlx::query_as::<_, (i32, i32)>(
            "SELECT a.\"rows\", a.seats_per_row \
             FROM flights f \
             JOIN airplanes a ON a.id = f.airplane_id \
             WHERE f.id = $1",
        )
        .bind(flight_id)
        .fetch_optional(&mut **tx)
        .await?;
        Ok(dims.map(|(rows, seats_per_row)| SeatMap::new(rows, seats_per_row)))
    }
}

/// Map a failed ticket INSERT to a domain error.
///
/// `23505` on the seat uniqueness index means the seat was sold, either
/// before the request or by a concurrent transaction that committed first.
/// `23503` on the flight FK covers a flight deleted between the seat-map
/// lookup and the insert.
fn map_ticket_insert_error(
    err: sqlx::Error,
    index: usize,
    request: &crate::models::order::TicketRequest,
) -> OrderError {
    if let sqlx::Error::Database(ref db_err) = err {
        let code = db_err.code();
        let constraint = db_err.constraint();
        if code.as_deref() == Some("23505") && constraint == Some("uq_tickets_flight_row_seat") {
            return OrderError::SeatTaken {
                index,
                flight_id: request.flight_id,
                row: request.row,
                seat: request.seat,
            };
        }
        if code.as_deref() == Some("23503") && constraint == Some("fk_tickets_flight") {
            return OrderError::FlightNotFound {
                flight_id: request.flight_id,
            };
        }
    }
    OrderError::Db(err)
}
