//! HTTP request handlers for the salon scheduling API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::scheduling::{available_on, build_day_grid, get_occupants, parse_calendar_day};
use crate::session::BranchSelection;

use super::request::{
    AvailabilityRequest, DayScheduleRequest, OccupantsRequest, PresetsRequest, RedemptionRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, AvailabilityResponse, DayScheduleResponse, OccupantsResponse,
    PresetsResponse,
};
use super::state::AppState;

/// Header carrying the branch selected in the caller's session.
pub const BRANCH_HEADER: &str = "x-branch-id";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/slots/occupants", post(occupants_handler))
        .route("/schedule/day", post(day_schedule_handler))
        .route("/staff/available", post(availability_handler))
        .route("/loyalty/redeem", post(redeem_handler))
        .route("/loyalty/presets", post(presets_handler))
        .with_state(state)
}

/// Unwraps a JSON body or converts the rejection into a 400 response.
fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::new(StatusCode::BAD_REQUEST, error))
}

/// Logs a rejected request and converts the error into a response.
fn reject(correlation_id: Uuid, error: impl Into<ApiErrorResponse>) -> Response {
    let error = error.into();
    warn!(
        correlation_id = %correlation_id,
        status = error.status.as_u16(),
        code = %error.error.code,
        message = %error.error.message,
        "Request rejected"
    );
    error.into_response()
}

/// Handler for `POST /slots/occupants`.
async fn occupants_handler(payload: Result<Json<OccupantsRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing slot occupancy request");

    let request = match json_body(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let started = Instant::now();
    match get_occupants(&request.appointments, &request.slot_time) {
        Ok(occupants) => {
            info!(
                correlation_id = %correlation_id,
                slot_time = %request.slot_time,
                appointments = request.appointments.len(),
                occupants = occupants.len(),
                duration_us = started.elapsed().as_micros(),
                "Slot occupancy resolved"
            );
            Json(OccupantsResponse {
                slot_time: &request.slot_time,
                occupied: !occupants.is_empty(),
                occupants,
            })
            .into_response()
        }
        Err(err) => reject(correlation_id, err),
    }
}

/// Handler for `POST /schedule/day`.
///
/// Builds the day grid between the configured opening and closing times.
async fn day_schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<DayScheduleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing day schedule request");

    let request = match json_body(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let date = match parse_calendar_day(&request.date) {
        Ok(date) => date,
        Err(err) => return reject(correlation_id, err),
    };

    let hours = state.config().salon();
    let started = Instant::now();
    match build_day_grid(&request.appointments, date, hours.opening_time, hours.closing_time) {
        Ok(slots) => {
            info!(
                correlation_id = %correlation_id,
                date = %date,
                slots = slots.len(),
                duration_us = started.elapsed().as_micros(),
                "Day schedule built"
            );
            Json(DayScheduleResponse {
                date: &request.date,
                slots,
            })
            .into_response()
        }
        Err(err) => reject(correlation_id, err),
    }
}

/// Handler for `POST /staff/available`.
///
/// The session branch is taken from the [`BRANCH_HEADER`] header and must
/// name an active configured branch. An explicit `branch_id` in the body
/// overrides it and must name an active configured branch as well.
async fn availability_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<AvailabilityRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing staff availability request");

    let request = match json_body(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let config = state.config();

    let mut selection = BranchSelection::new();
    let ambient = headers
        .get(BRANCH_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty());
    if let Some(branch_id) = ambient {
        if let Err(err) = selection.select_id(branch_id, config.branches()) {
            return reject(correlation_id, err);
        }
    }

    let explicit = request.branch_id.as_deref().filter(|id| !id.is_empty());
    if let Some(branch_id) = explicit {
        match config.get_branch(branch_id) {
            Ok(branch) if !branch.active => {
                let err = EngineError::BranchInactive {
                    id: branch.id.clone(),
                };
                return reject(correlation_id, err);
            }
            Ok(_) => {}
            Err(err) => return reject(correlation_id, err),
        }
    }

    let date = match request.date.as_deref().map(parse_calendar_day).transpose() {
        Ok(date) => date,
        Err(err) => return reject(correlation_id, err),
    };

    let scope = selection.scope(explicit);
    let staff = available_on(&request.staff, date, &scope);

    info!(
        correlation_id = %correlation_id,
        roster = request.staff.len(),
        available = staff.len(),
        branch = ?scope.effective_branch(),
        "Staff availability resolved"
    );

    Json(AvailabilityResponse {
        branch_id: scope.effective_branch(),
        staff,
    })
    .into_response()
}

/// Handler for `POST /loyalty/redeem`.
async fn redeem_handler(
    State(state): State<AppState>,
    payload: Result<Json<RedemptionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing redemption request");

    let request = match json_body(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    match state
        .config()
        .redemption_rules()
        .validate(request.requested, request.balance)
    {
        Ok(accepted) => {
            info!(
                correlation_id = %correlation_id,
                points = accepted.points,
                discount = %accepted.discount,
                "Redemption accepted"
            );
            Json(accepted).into_response()
        }
        Err(err) => reject(correlation_id, err),
    }
}

/// Handler for `POST /loyalty/presets`.
async fn presets_handler(
    State(state): State<AppState>,
    payload: Result<Json<PresetsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing redemption presets request");

    let request = match json_body(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let presets = state
        .config()
        .redemption_rules()
        .preset_options(request.balance);

    info!(
        correlation_id = %correlation_id,
        balance = request.balance,
        selectable = presets.iter().filter(|option| option.selectable).count(),
        "Redemption presets resolved"
    );

    Json(PresetsResponse {
        balance: request.balance,
        presets,
    })
    .into_response()
}
