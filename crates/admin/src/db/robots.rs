//! Robot repository for database operations.
//!
//! Rows only ever enter this table through [`RobotRepository::insert`],
//! which takes an already-validated [`NewRobot`]; every stored record has
//! passed the serial, model, version and timestamp rules.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use r4c_core::{Model, RobotId, Serial, Version};

use super::RepositoryError;
use crate::models::robot::{NewRobot, Robot, RobotCount};

/// Internal row type for robot queries.
#[derive(Debug, sqlx::FromRow)]
struct RobotRow {
    id: i64,
    serial: String,
    model: String,
    version: String,
    created: DateTime<Utc>,
}

impl TryFrom<RobotRow> for Robot {
    type Error = RepositoryError;

    fn try_from(row: RobotRow) -> Result<Self, Self::Error> {
        let serial = Serial::parse(&row.serial).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid serial in database: {e}"))
        })?;
        let model = Model::parse(&row.model).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid model in database: {e}"))
        })?;
        let version = Version::parse(&row.version).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid version in database: {e}"))
        })?;

        Ok(Self {
            id: RobotId::new(row.id),
            serial,
            model,
            version,
            created: row.created,
        })
    }
}

/// Internal row type for the inventory aggregate.
#[derive(Debug, sqlx::FromRow)]
struct RobotCountRow {
    model: String,
    version: String,
    count: i64,
}

/// Repository for robot database operations.
pub struct RobotRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RobotRepository<'a> {
    /// Create a new robot repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a validated robot record. All-or-nothing: a single statement,
    /// no partial row on failure.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, new: &NewRobot) -> Result<Robot, RepositoryError> {
        let row = sqlx::query_as::<_, RobotRow>(
            r"
            INSERT INTO robots (serial, model, version, created)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, serial, model, version, created
            ",
        )
        .bind(new.serial.as_str())
        .bind(new.model.as_str())
        .bind(new.version.as_str())
        .bind(new.created)
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }

    /// Count stored robots grouped by (model, version), ordered by model
    /// then version.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn aggregate_counts(&self) -> Result<Vec<RobotCount>, RepositoryError> {
        let rows = sqlx::query_as::<_, RobotCountRow>(
            r"
            SELECT model, version, COUNT(*) AS count
            FROM robots
            GROUP BY model, version
            ORDER BY model, version
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| RobotCount {
                model: row.model,
                version: row.version,
                count: row.count,
            })
            .collect())
    }
}
