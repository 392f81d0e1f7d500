//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for India and Qatar payroll
//! calculation. The handlers are a thin shell over the pure calculation
//! core; every calculation is independent, so requests are safe to serve
//! concurrently.

mod handlers;
mod request;
mod response;
mod state;
mod validation;

pub use handlers::create_router;
pub use request::{
    IndiaCalculationRequest, IndiaPeriodCalculationRequest, QatarCalculationRequest,
};
pub use response::{
    ApiError, IndiaCalculationResponse, IndiaPeriodCalculationResponse, QatarCalculationResponse,
    ENGINE_VERSION,
};
pub use state::AppState;
pub use validation::{
    validate_india_period_request, validate_india_request, validate_qatar_request,
};
