//! HTTP route handlers for the admin backend.
//!
//! # Route Structure
//!
//! ```text
//! # Robots
//! POST /robots/create/          - Record a robot unit (triggers fulfillment)
//! GET  /robots/export_to_excel/ - Inventory counts as an .xlsx attachment
//!
//! # Orders
//! POST /orders/create_order/    - Create a pre-order for a robot serial
//! ```
//!
//! Health endpoints (`/health`, `/health/ready`) are wired in `main.rs`.

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod orders;
pub mod robots;

/// Build a router with all routes registered (no middleware, no state).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/robots/create/", post(robots::create))
        .route("/robots/export_to_excel/", get(robots::export_to_excel))
        .route("/orders/create_order/", post(orders::create_order))
}
