//! Customer domain model.

use r4c_core::{CustomerId, Email};

/// A customer, keyed by unique email.
///
/// Created on demand by order intake; never updated or deleted. Many
/// orders may reference one customer.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: CustomerId,
    pub email: Email,
}
