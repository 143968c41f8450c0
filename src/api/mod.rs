//! HTTP API module for the salon scheduling engine.
//!
//! This module exposes the scheduling functions as JSON endpoints for the
//! booking UI and its data-fetch layer.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{BRANCH_HEADER, create_router};
pub use request::{
    AvailabilityRequest, DayScheduleRequest, OccupantsRequest, PresetsRequest, RedemptionRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
