//! The estimation function: household profile in, energy report out.

use tracing::debug;

use super::report::EnergyReport;
use super::tables::APPLIANCE_LOADS;
use super::types::{HouseholdProfile, RawProfile};
use crate::error::EstimateError;

/// Computes the energy and cost report for a household.
///
/// Pure and total: every typed profile yields a report. Base load comes
/// from the facility table, appliance load from the ordered appliance
/// table, and nothing is rounded.
///
/// # Examples
///
/// ```
/// use energy_calc::estimator::{estimate, FacilityType, HouseholdProfile};
///
/// let profile = HouseholdProfile {
///     facility_type: FacilityType::TwoBhk,
///     has_air_conditioner: true,
///     ..HouseholdProfile::default()
/// };
/// let report = estimate(&profile);
/// assert!((report.total_energy_kwh_per_day() - 6.6).abs() < 1e-9);
/// ```
pub fn estimate(profile: &HouseholdProfile) -> EnergyReport {
    let base = profile.facility_type.base_load().energy_kwh_per_day();

    let mut appliance_energy = 0.0;
    let mut active = Vec::with_capacity(APPLIANCE_LOADS.len());
    for load in APPLIANCE_LOADS
        .iter()
        .filter(|load| load.appliance.is_selected(profile))
    {
        appliance_energy += load.kwh_per_day;
        active.push(load.appliance);
    }

    let report = EnergyReport::new(base, appliance_energy, active);
    debug!(
        facility = %profile.facility_type,
        base_kwh = base,
        appliance_kwh = appliance_energy,
        total_kwh = report.total_energy_kwh_per_day(),
        "estimate computed"
    );
    report
}

/// Estimates from an untyped profile.
///
/// # Errors
///
/// Returns [`EstimateError::InvalidFacilityType`] or
/// [`EstimateError::InvalidHousingUnit`] when an enum field is out of
/// domain; no report is produced in that case.
pub fn estimate_raw(raw: &RawProfile) -> Result<EnergyReport, EstimateError> {
    let profile = HouseholdProfile::try_from(raw)?;
    Ok(estimate(&profile))
}
