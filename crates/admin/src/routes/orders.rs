//! Order intake handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use r4c_core::Email;

use crate::db::{CustomerRepository, OrderRepository};
use crate::error::AppError;
use crate::state::AppState;

/// Stable error text when either field is absent or empty.
pub const ERROR_MISSING_FIELDS: &str = "Both email and serial are required.";
/// Stable error text for a body that is not valid JSON.
pub const ERROR_INVALID_JSON: &str = "Invalid JSON.";

/// Order intake payload.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    customer_email: Option<String>,
    #[serde(default)]
    robot_serial: Option<String>,
}

/// Create a pre-order for a robot serial.
///
/// The customer is looked up by email and created if absent; the serial is
/// stored as given, whether or not any robot with it exists yet.
#[instrument(skip_all)]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(invalid_body)?;

    let (Some(customer_email), Some(robot_serial)) = (
        request.customer_email.filter(|v| !v.is_empty()),
        request.robot_serial.filter(|v| !v.is_empty()),
    ) else {
        return Err(AppError::BadRequest(ERROR_MISSING_FIELDS.to_owned()));
    };

    let email = Email::parse(&customer_email).map_err(|e| AppError::BadRequest(e.to_string()))?;

    // This endpoint's contract is a 400 carrying the error text for
    // anything that goes wrong past parsing.
    let customer = CustomerRepository::new(state.pool())
        .find_or_create(&email)
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let order = OrderRepository::new(state.pool())
        .create(customer.id, &robot_serial)
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    tracing::info!(order_id = %order.id, serial = %order.robot_serial, "Order created");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Order created successfully." })),
    ))
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    let message = match rejection {
        JsonRejection::JsonSyntaxError(_) => ERROR_INVALID_JSON.to_owned(),
        other => other.to_string(),
    };
    AppError::BadRequest(message)
}
