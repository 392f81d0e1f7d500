//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all calculation
//! endpoints. Handlers are a thin shell: they parse and validate the
//! request, resolve defaults from the jurisdiction profile, call the pure
//! calculation core and wrap the result in a response envelope.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_complete_payroll, calculate_complete_qatar_payroll, derive_earned_components,
    DEFAULT_ESI_CEILING, DEFAULT_PF_WAGE_CEILING,
};
use crate::config::{JurisdictionProfile, OvertimeProfile};

use super::request::{
    IndiaCalculationRequest, IndiaPeriodCalculationRequest, QatarCalculationRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, IndiaCalculationResponse, IndiaPeriodCalculationResponse,
    QatarCalculationResponse, ENGINE_VERSION,
};
use super::state::AppState;
use super::validation::{
    validate_india_period_request, validate_india_request, validate_qatar_request,
};

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate/india", post(calculate_india_handler))
        .route("/calculate/india/period", post(calculate_india_period_handler))
        .route("/calculate/qatar", post(calculate_qatar_handler))
        .with_state(state)
}

/// Translates a JSON extraction rejection into an error response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Resolves the India statutory settings from the jurisdiction profile.
///
/// Returns (pf ceiling, esi ceiling, pf enabled, esi enabled); a profile
/// without a statutory section falls back to the statutory defaults.
fn india_settings(profile: &JurisdictionProfile) -> (Decimal, Decimal, bool, bool) {
    match &profile.statutory {
        Some(statutory) => (
            statutory.pf.wage_ceiling,
            statutory.esi.gross_ceiling,
            statutory.pf.enabled,
            statutory.esi.enabled,
        ),
        None => (DEFAULT_PF_WAGE_CEILING, DEFAULT_ESI_CEILING, true, true),
    }
}

/// Handler for the POST /calculate/india endpoint.
async fn calculate_india_handler(
    State(state): State<AppState>,
    payload: Result<Json<IndiaCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing India calculation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = validate_india_request(&request) {
        warn!(correlation_id = %correlation_id, error = %err, "Validation failed");
        return ApiErrorResponse::from(err).into_response();
    }

    let profile = match state.config().profile("india") {
        Ok(profile) => profile,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Profile lookup failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };
    let (pf_ceiling, esi_ceiling, pf_enabled, esi_enabled) = india_settings(profile);

    let result = calculate_complete_payroll(
        &request.components,
        &request.overtime_records,
        &request.deductions,
        request.is_pf_applicable && pf_enabled,
        request.is_esi_applicable && esi_enabled,
        request.bonus,
        request.incentive,
        request.arrears,
        request.pf_wage_ceiling.unwrap_or(pf_ceiling),
        request.esi_ceiling.unwrap_or(esi_ceiling),
    );

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        gross_salary = %result.gross_salary,
        net_salary = %result.net_salary,
        "India calculation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(IndiaCalculationResponse {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: ENGINE_VERSION.to_string(),
            employee_id: request.employee_id,
            result,
        }),
    )
        .into_response()
}

/// Handler for the POST /calculate/india/period endpoint.
///
/// Runs the attendance/leave pro-ration first, then the payroll
/// calculation over the earned component set.
async fn calculate_india_period_handler(
    State(state): State<AppState>,
    payload: Result<Json<IndiaPeriodCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing India period calculation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = validate_india_period_request(&request) {
        warn!(correlation_id = %correlation_id, error = %err, "Validation failed");
        return ApiErrorResponse::from(err).into_response();
    }

    let profile = match state.config().profile("india") {
        Ok(profile) => profile,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Profile lookup failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };
    let (pf_ceiling, esi_ceiling, pf_enabled, esi_enabled) = india_settings(profile);

    let (earned_components, attendance) = derive_earned_components(
        &request.components,
        &request.period,
        &request.attendance,
        &request.leaves,
        &request.leave_types,
        &request.leave_balances,
    );

    let result = calculate_complete_payroll(
        &earned_components,
        &request.overtime_records,
        &request.deductions,
        request.is_pf_applicable && pf_enabled,
        request.is_esi_applicable && esi_enabled,
        request.bonus,
        request.incentive,
        request.arrears,
        request.pf_wage_ceiling.unwrap_or(pf_ceiling),
        request.esi_ceiling.unwrap_or(esi_ceiling),
    );

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        earned_factor = %attendance.earned_factor,
        loss_of_pay_days = %attendance.loss_of_pay_days,
        net_salary = %result.net_salary,
        "India period calculation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(IndiaPeriodCalculationResponse {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: ENGINE_VERSION.to_string(),
            employee_id: request.employee_id,
            attendance,
            earned_components,
            result,
        }),
    )
        .into_response()
}

/// Handler for the POST /calculate/qatar endpoint.
async fn calculate_qatar_handler(
    State(state): State<AppState>,
    payload: Result<Json<QatarCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing Qatar calculation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = validate_qatar_request(&request) {
        warn!(correlation_id = %correlation_id, error = %err, "Validation failed");
        return ApiErrorResponse::from(err).into_response();
    }

    let profile = match state.config().profile("qatar") {
        Ok(profile) => profile,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Profile lookup failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };
    let overtime_profile = profile.overtime.clone().unwrap_or(OvertimeProfile {
        weekday_multiplier: Decimal::new(125, 2),
        weekend_multiplier: Decimal::new(15, 1),
        holiday_multiplier: Decimal::new(15, 1),
    });
    let working_days = profile.working_days.clone();

    let result = calculate_complete_qatar_payroll(
        &request.components,
        &request.overtime_records,
        &request.deductions,
        request.bonus,
        &overtime_profile,
        &working_days,
    );

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        gross_salary = %result.gross_salary,
        net_salary = %result.net_salary,
        "Qatar calculation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(QatarCalculationResponse {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: ENGINE_VERSION.to_string(),
            employee_id: request.employee_id,
            result,
        }),
    )
        .into_response()
}
