//! Order repository for database operations.

use sqlx::SqlitePool;

use r4c_core::{CustomerId, OrderId};

use super::RepositoryError;
use crate::models::order::Order;

/// Internal row type for order queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    customer_id: i64,
    robot_serial: String,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: OrderId::new(row.id),
            customer_id: CustomerId::new(row.customer_id),
            robot_serial: row.robot_serial,
        }
    }
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a new order with a fresh increasing id.
    ///
    /// `robot_serial` is stored as given; orders may reference serials no
    /// robot has yet.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        customer_id: CustomerId,
        robot_serial: &str,
    ) -> Result<Order, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r"
            INSERT INTO orders (customer_id, robot_serial)
            VALUES (?1, ?2)
            RETURNING id, customer_id, robot_serial
            ",
        )
        .bind(customer_id.as_i64())
        .bind(robot_serial)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// The earliest-created pending order for this serial, if any.
    ///
    /// Ids are assigned by AUTOINCREMENT and never reused, so the smallest
    /// id is a stable, deterministic notion of "oldest" even for orders
    /// created concurrently.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn oldest_pending(
        &self,
        robot_serial: &str,
    ) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, customer_id, robot_serial
            FROM orders
            WHERE robot_serial = ?1
            ORDER BY id ASC
            LIMIT 1
            ",
        )
        .bind(robot_serial)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Delete one order by identity.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order no longer exists.
    /// That case is surfaced, not swallowed: it means the order was already
    /// fulfilled elsewhere and a double notification is in flight.
    pub async fn delete(&self, id: OrderId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM orders
            WHERE id = ?1
            ",
        )
        .bind(id.as_i64())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
