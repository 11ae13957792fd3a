//! R4C Core - Shared types library.
//!
//! This crate provides common types used across all R4C components:
//! - `admin` - The administrative backend (robot intake, orders, export)
//! - `integration-tests` - Tests driven against a running server
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and robot
//!   serial numbers, plus the intake timestamp rules

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
