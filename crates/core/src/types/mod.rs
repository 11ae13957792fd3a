//! Core types for R4C.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod created;
pub mod email;
pub mod id;
pub mod serial;

pub use created::{CreatedError, parse_created, validate_not_future};
pub use email::{Email, EmailError};
pub use id::*;
pub use serial::{Model, Serial, SerialError, Version};
