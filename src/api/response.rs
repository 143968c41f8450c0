//! Response types for the salon scheduling API.
//!
//! This module defines the success bodies, the error body and the mapping
//! from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, RedemptionError};
use crate::models::{Appointment, StaffMember};
use crate::scheduling::{GridSlot, PresetOption};

/// Response body for `POST /slots/occupants`.
#[derive(Debug, Serialize)]
pub struct OccupantsResponse<'a> {
    /// The requested slot start time.
    pub slot_time: &'a str,
    /// Whether any appointment occupies the slot.
    pub occupied: bool,
    /// The occupying appointments, in input order.
    pub occupants: Vec<&'a Appointment>,
}

/// Response body for `POST /schedule/day`.
#[derive(Debug, Serialize)]
pub struct DayScheduleResponse<'a> {
    /// The rendered day.
    pub date: &'a str,
    /// One entry per slot between opening and closing time.
    pub slots: Vec<GridSlot<'a>>,
}

/// Response body for `POST /staff/available`.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse<'a> {
    /// The branch that was applied, if any.
    pub branch_id: Option<&'a str>,
    /// The available staff, in roster order.
    pub staff: Vec<&'a StaffMember>,
}

/// Response body for `POST /loyalty/presets`.
#[derive(Debug, Serialize)]
pub struct PresetsResponse {
    /// The balance the presets were checked against.
    pub balance: u64,
    /// The preset amounts and whether each can be selected.
    pub presets: Vec<PresetOption>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                )
            }
            EngineError::ParseError {
                field, expected, ..
            } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "PARSE_ERROR",
                    message,
                    format!("Field '{}' must use the format {}", field, expected),
                ),
            ),
            EngineError::BranchNotFound { .. } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::new("BRANCH_NOT_FOUND", message),
            ),
            EngineError::BranchInactive { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "BRANCH_INACTIVE",
                    message,
                    "Only active branches can be selected",
                ),
            ),
        }
    }
}

impl From<RedemptionError> for ApiErrorResponse {
    fn from(error: RedemptionError) -> Self {
        ApiErrorResponse::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::new(error.code(), error.to_string()),
        )
    }
}
