//! Response types for the payroll engine API.
//!
//! This module defines the calculation response envelopes and the error
//! response structures for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::AttendanceSummary;
use crate::error::EngineError;
use crate::models::{
    PayrollCalculationResult, QatarPayrollCalculationResult, SalaryComponents,
};

/// The engine version stamped into every calculation response.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Response envelope for the `/calculate/india` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndiaCalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the calculation is for.
    pub employee_id: String,
    /// The calculation result.
    pub result: PayrollCalculationResult,
}

/// Response envelope for the `/calculate/india/period` endpoint.
///
/// Carries the attendance outcome and the earned (pro-rated) component set
/// alongside the payroll result so callers can persist all three.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndiaPeriodCalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the calculation is for.
    pub employee_id: String,
    /// The attendance outcome the pro-ration derived.
    pub attendance: AttendanceSummary,
    /// The earned component set fed into the calculation.
    pub earned_components: SalaryComponents,
    /// The calculation result over the earned components.
    pub result: PayrollCalculationResult,
}

/// Response envelope for the `/calculate/qatar` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QatarCalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the calculation is for.
    pub employee_id: String,
    /// The calculation result.
    pub result: QatarPayrollCalculationResult,
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
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::JurisdictionNotFound { code } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "JURISDICTION_NOT_FOUND",
                    format!("Jurisdiction not found: {}", code),
                    "No profile for this jurisdiction is loaded on the server",
                ),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid input '{}': {}", field, message),
                    "The request contains invalid calculation inputs",
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
