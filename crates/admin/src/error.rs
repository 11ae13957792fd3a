//! Unified error handling for the admin backend.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::email::EmailError;
use crate::services::fulfillment::FulfillmentError;

/// Application-level error type for the admin backend.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request from client. The message is returned verbatim.
    #[error("{0}")]
    BadRequest(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Mail delivery failed.
    #[error("Mail delivery error: {0}")]
    Delivery(#[from] EmailError),

    /// Spreadsheet generation failed.
    #[error("Export error: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<FulfillmentError> for AppError {
    fn from(err: FulfillmentError) -> Self {
        match err {
            FulfillmentError::Repository(e) => Self::Database(e),
            FulfillmentError::Delivery(e) => Self::Delivery(e),
            FulfillmentError::AlreadyFulfilled(order_id) => Self::Internal(format!(
                "order {order_id} was already fulfilled by a concurrent intake"
            )),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Database(_) | Self::Export(_) | Self::Internal(_)) {
            tracing::error!(error = %self, "Admin request error");
        }

        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            // The mail relay is an external collaborator.
            Self::Delivery(_) => StatusCode::BAD_GATEWAY,
            Self::Database(_) | Self::Export(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::BadRequest(msg) => msg.clone(),
            Self::Delivery(_) => "Mail delivery failed".to_string(),
            Self::Database(_) | Self::Export(_) | Self::Internal(_) => {
                "Internal server error".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
