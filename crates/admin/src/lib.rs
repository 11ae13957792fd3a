//! R4C Admin library.
//!
//! This crate provides the admin backend as a library, allowing it to be
//! tested in-process and reused.
//!
//! # Architecture
//!
//! - Axum web framework, JSON request/response bodies
//! - SQLite (via sqlx) for robots, customers and orders
//! - SMTP (via lettre) for restock notifications
//!
//! The interesting behavioral contract lives in
//! [`services::fulfillment`]: recording a robot synchronously notifies the
//! oldest pending order for that serial and removes it, exactly once.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
