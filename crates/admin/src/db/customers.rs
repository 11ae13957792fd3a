//! Customer repository for database operations.

use sqlx::SqlitePool;

use r4c_core::{CustomerId, Email};

use super::RepositoryError;
use crate::models::customer::Customer;

/// Internal row type for customer queries.
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    email: String,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = RepositoryError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: CustomerId::new(row.id),
            email,
        })
    }
}

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Find the customer with this email, creating it if absent.
    ///
    /// Idempotent and safe under concurrent calls with the same email: the
    /// unique constraint on `email` decides the winner, and the loser reads
    /// the winner's row instead of inserting a duplicate.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn find_or_create(&self, email: &Email) -> Result<Customer, RepositoryError> {
        let inserted = sqlx::query_as::<_, CustomerRow>(
            r"
            INSERT INTO customers (email)
            VALUES (?1)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        if let Some(row) = inserted {
            return row.try_into();
        }

        // The insert was a no-op, so the row already exists.
        let row = sqlx::query_as::<_, CustomerRow>(
            r"
            SELECT id, email
            FROM customers
            WHERE email = ?1
            ",
        )
        .bind(email.as_str())
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }

    /// Get a customer by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the customer doesn't exist.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CustomerId) -> Result<Customer, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r"
            SELECT id, email
            FROM customers
            WHERE id = ?1
            ",
        )
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }
}
