//! Robot intake and inventory export handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use r4c_core::{Model, Version, parse_created, validate_not_future};

use crate::db::RobotRepository;
use crate::error::AppError;
use crate::models::robot::NewRobot;
use crate::services::{export, fulfillment};
use crate::state::AppState;

/// Stable error text for a body that is valid JSON but unusable.
pub const ERROR_INVALID_DATA: &str = "Invalid data";
/// Stable error text for a body that is not valid JSON.
pub const ERROR_INVALID_JSON: &str = "Invalid JSON";

/// Robot intake payload. Fields are checked for presence by hand so the
/// stable "Invalid data" text covers absent and empty values alike.
#[derive(Debug, Deserialize)]
pub struct CreateRobotRequest {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    created: Option<String>,
}

/// Create a robot record.
///
/// Validates every field, persists the robot, and synchronously runs the
/// fulfillment notifier before answering. Validation order follows the
/// documented contract: presence, timestamp, then field formats.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateRobotRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(invalid_body)?;

    let model = require_field(request.model)?;
    let version = require_field(request.version)?;
    let created_raw = require_field(request.created)?;

    let created = parse_created(&created_raw)
        .map_err(|_| AppError::BadRequest(ERROR_INVALID_DATA.to_owned()))?;
    validate_not_future(created, Utc::now()).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let model = Model::parse(&model).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let version = Version::parse(&version).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let new = NewRobot::new(model, version, created);
    fulfillment::intake_robot(state.pool(), state.mailer(), new).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Robot created" })),
    ))
}

/// Export inventory counts as an .xlsx attachment, one sheet per model.
#[instrument(skip_all)]
pub async fn export_to_excel(State(state): State<AppState>) -> Result<Response, AppError> {
    let counts = RobotRepository::new(state.pool()).aggregate_counts().await?;
    let workbook = export::build_inventory_workbook(&counts)?;

    let headers = [
        (
            header::CONTENT_TYPE,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=robots.xlsx",
        ),
    ];
    Ok((headers, workbook).into_response())
}

/// Require a present, non-empty field.
fn require_field(value: Option<String>) -> Result<String, AppError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(ERROR_INVALID_DATA.to_owned()))
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    let message = match rejection {
        JsonRejection::JsonSyntaxError(_) => ERROR_INVALID_JSON,
        _ => ERROR_INVALID_DATA,
    };
    AppError::BadRequest(message.to_owned())
}
