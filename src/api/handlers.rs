//! Request handlers for the API endpoints.

use axum::Json;
use tracing::{debug, info};

use super::types::{AboutResponse, ApiError, EstimateResponse, TipsResponse};
use crate::content::{
    ABOUT_INTRO, ABOUT_SECTIONS, ApplianceRecord, CO2_KG_PER_KWH, GENERAL_TIPS, TIPS_TABLE,
    appliance_records,
};
use crate::estimator::{HouseholdProfile, RawProfile, estimate};

/// Estimates a household from a raw JSON profile.
///
/// `POST /estimate` → 200 + `EstimateResponse`
/// out-of-domain facility or unit → 400 + `ErrorResponse`
/// age outside 1..=120 → 422 + `ErrorResponse`
/// blank name, city or area → 422 + `ErrorResponse` listing the fields
pub async fn post_estimate(
    Json(raw): Json<RawProfile>,
) -> Result<Json<EstimateResponse>, ApiError> {
    let profile = HouseholdProfile::try_from(&raw)
        .inspect_err(|e| debug!(error = %e, "rejected profile"))?;
    profile.identity.check_age()?;
    profile.identity.ensure_complete()?;

    let report = estimate(&profile);
    info!(
        facility = %profile.facility_type,
        total_kwh = report.total_energy_kwh_per_day(),
        "estimate served"
    );
    let breakdown = report.breakdown();
    Ok(Json(EstimateResponse {
        profile,
        report,
        breakdown,
    }))
}

/// `GET /tips` → 200 + `TipsResponse`
pub async fn get_tips() -> Json<TipsResponse> {
    Json(TipsResponse {
        tips: TIPS_TABLE.to_vec(),
        general_tips: GENERAL_TIPS.to_vec(),
    })
}

/// `GET /appliances` → 200 + `Vec<ApplianceRecord>`
pub async fn get_appliances() -> Json<Vec<ApplianceRecord>> {
    Json(appliance_records())
}

/// `GET /about` → 200 + `AboutResponse`
pub async fn get_about() -> Json<AboutResponse> {
    Json(AboutResponse {
        intro: ABOUT_INTRO,
        sections: ABOUT_SECTIONS.to_vec(),
        co2_kg_per_kwh: CO2_KG_PER_KWH,
    })
}
