//! Domain models for the admin backend.

pub mod customer;
pub mod order;
pub mod robot;

pub use customer::Customer;
pub use order::Order;
pub use robot::{NewRobot, Robot, RobotCount};
