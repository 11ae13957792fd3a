//! Order domain model.

use r4c_core::{CustomerId, OrderId};

/// A pre-order: a customer waiting for a robot with a given serial.
///
/// The id is assigned by the store and monotonically increasing; the
/// smallest id among orders for a serial identifies the oldest one. The
/// serial is free-form at this layer and compared by equality against
/// robot serials.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub robot_serial: String,
}
