//! Robot intake and order fulfillment.
//!
//! Recording a robot and notifying the oldest waiting order are one logical
//! operation: the robot row is committed first, then the notifier runs
//! synchronously before the intake request completes. The source of truth
//! for "oldest" is the order id, assigned by AUTOINCREMENT and never
//! reused.

use sqlx::SqlitePool;
use thiserror::Error;

use r4c_core::OrderId;

use crate::db::{CustomerRepository, OrderRepository, RepositoryError, RobotRepository};
use crate::models::robot::{NewRobot, Robot};
use crate::services::email::{EmailError, Mailer, OutgoingEmail};

/// Subject line of the restock notice.
pub const RESTOCK_SUBJECT: &str = "Your robot is now in stock";

/// Errors that can occur while fulfilling orders for a new robot.
#[derive(Debug, Error)]
pub enum FulfillmentError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// The notification could not be delivered. The matched order is left
    /// pending.
    #[error("mail delivery failed: {0}")]
    Delivery(#[from] EmailError),

    /// The matched order vanished between selection and deletion: a
    /// concurrent intake for the same serial fulfilled it first.
    #[error("order {0} was already fulfilled")]
    AlreadyFulfilled(OrderId),
}

/// Persist a validated robot and run the fulfillment notifier.
///
/// # Errors
///
/// Returns `FulfillmentError::Repository` if the robot cannot be stored.
/// Any notifier failure propagates as well; the robot row, once committed,
/// remains either way.
pub async fn intake_robot(
    pool: &SqlitePool,
    mailer: &dyn Mailer,
    new: NewRobot,
) -> Result<Robot, FulfillmentError> {
    let robot = RobotRepository::new(pool).insert(&new).await?;
    tracing::info!(robot_id = %robot.id, serial = %robot.serial, "Robot created");

    notify_oldest_order(pool, mailer, &robot).await?;

    Ok(robot)
}

/// Notify the customer behind the oldest pending order for this robot's
/// serial, then remove that order.
///
/// Exactly one order is fulfilled per robot; with no pending order the
/// robot simply waits in stock and `None` is returned. The order is deleted
/// only after delivery succeeds — a delivery failure leaves it pending and
/// propagates to the caller.
///
/// # Errors
///
/// Returns `FulfillmentError::Delivery` when the notice cannot be sent, and
/// `FulfillmentError::AlreadyFulfilled` when the order was deleted by a
/// concurrent intake between selection and removal.
pub async fn notify_oldest_order(
    pool: &SqlitePool,
    mailer: &dyn Mailer,
    robot: &Robot,
) -> Result<Option<OrderId>, FulfillmentError> {
    let orders = OrderRepository::new(pool);

    let Some(order) = orders.oldest_pending(robot.serial.as_str()).await? else {
        return Ok(None);
    };

    let customer = CustomerRepository::new(pool).get(order.customer_id).await?;

    let mail = OutgoingEmail {
        to: customer.email,
        subject: RESTOCK_SUBJECT.to_owned(),
        body: restock_body(robot),
    };
    mailer.send(&mail).await?;

    match orders.delete(order.id).await {
        Ok(()) => {
            tracing::info!(
                order_id = %order.id,
                serial = %robot.serial,
                "Order fulfilled and removed"
            );
            Ok(Some(order.id))
        }
        Err(RepositoryError::NotFound) => Err(FulfillmentError::AlreadyFulfilled(order.id)),
        Err(e) => Err(e.into()),
    }
}

/// Body of the restock notice, referencing the robot's model and version.
fn restock_body(robot: &Robot) -> String {
    format!(
        "Good day!\n\
         You recently inquired about our robot, model {}, version {}.\n\
         This robot is now in stock. If this option suits you, please contact us.",
        robot.model, robot.version
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use r4c_core::{Model, RobotId, Serial, Version};

    #[test]
    fn test_restock_body_references_model_and_version() {
        let model = Model::parse("AB").unwrap();
        let version = Version::parse("01").unwrap();
        let robot = Robot {
            id: RobotId::new(1),
            serial: Serial::from_parts(&model, &version),
            model,
            version,
            created: Utc::now(),
        };

        let body = restock_body(&robot);
        assert!(body.contains("model AB"));
        assert!(body.contains("version 01"));
    }
}
