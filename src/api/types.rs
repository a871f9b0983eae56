//! API request, response and error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::content::{AboutSection, TipRow};
use crate::error::{EstimateError, ProfileError};
use crate::estimator::{Breakdown, EnergyReport, HouseholdProfile};

/// Successful estimate: the typed profile echoed back with its report.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub profile: HouseholdProfile,
    pub report: EnergyReport,
    pub breakdown: Breakdown,
}

/// Saving tips page content.
#[derive(Debug, Serialize)]
pub struct TipsResponse {
    pub tips: Vec<TipRow>,
    pub general_tips: Vec<&'static str>,
}

/// About page content.
#[derive(Debug, Serialize)]
pub struct AboutResponse {
    pub intro: &'static str,
    pub sections: Vec<AboutSection>,
    pub co2_kg_per_kwh: f64,
}

/// Error response body for 4xx errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error kind.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
    /// Blank required fields, for incomplete profiles.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<&'static str>,
}

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Facility type or housing unit out of domain.
    #[error(transparent)]
    InvalidProfile(#[from] EstimateError),
    /// Identity fields are blank or the age is out of range.
    #[error(transparent)]
    RejectedProfile(#[from] ProfileError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidProfile(_) => StatusCode::BAD_REQUEST,
            Self::RejectedProfile(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_kind(&self) -> &'static str {
        match self {
            Self::InvalidProfile(EstimateError::InvalidFacilityType(_)) => "InvalidFacilityType",
            Self::InvalidProfile(EstimateError::InvalidHousingUnit(_)) => "InvalidHousingUnit",
            Self::RejectedProfile(ProfileError::Incomplete { .. }) => "IncompleteProfile",
            Self::RejectedProfile(ProfileError::AgeOutOfRange { .. }) => "AgeOutOfRange",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let missing = match &self {
            Self::RejectedProfile(ProfileError::Incomplete { missing }) => missing.clone(),
            _ => Vec::new(),
        };
        let body = ErrorResponse {
            error: self.error_kind(),
            message: self.to_string(),
            missing,
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_codes() {
        let invalid = ApiError::from(EstimateError::InvalidFacilityType("4BHK".into()));
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.error_kind(), "InvalidFacilityType");

        let incomplete = ApiError::from(ProfileError::Incomplete {
            missing: vec!["city"],
        });
        assert_eq!(incomplete.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let too_old = ApiError::from(ProfileError::AgeOutOfRange {
            age: 121,
            min: 1,
            max: 120,
        });
        assert_eq!(too_old.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(too_old.error_kind(), "AgeOutOfRange");
    }
}
