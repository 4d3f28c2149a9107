//! Order and ticket entity models and DTOs.
//!
//! Orders are created atomically with their tickets and never mutated
//! afterwards; there are no update DTOs here on purpose.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use skybook_core::types::{DbId, Timestamp};

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// A row from the `tickets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ticket {
    pub id: DbId,
    pub flight_id: DbId,
    pub order_id: DbId,
    pub row: i32,
    pub seat: i32,
}

/// An order with its tickets, sorted by (row, seat).
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithTickets {
    #[serde(flatten)]
    pub order: Order,
    pub tickets: Vec<Ticket>,
}

/// One requested seat in an order submission.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketRequest {
    pub flight_id: DbId,
    pub row: i32,
    pub seat: i32,
}

/// DTO for creating an order. The batch must be non-empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub tickets: Vec<TicketRequest>,
}
