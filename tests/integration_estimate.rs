//! End-to-end estimator behaviour through the public API.

mod common;

use std::path::Path;

use common::{appliance_subsets, approx_eq, profile};
use energy_calc::config::ProfileConfig;
use energy_calc::error::EstimateError;
use energy_calc::estimator::{
    Appliance, FacilityType, RawProfile, estimate, estimate_raw, percentage_breakdown,
};

#[test]
fn one_bhk_without_appliances() {
    let report = estimate(&profile(FacilityType::OneBhk, false, false, false));

    assert!(approx_eq(report.base_energy_kwh_per_day(), 2.4));
    assert!(approx_eq(report.appliance_energy_kwh_per_day(), 0.0));
    assert!(approx_eq(report.total_energy_kwh_per_day(), 2.4));
    assert!(approx_eq(report.monthly_cost(), 360.0));
    assert!(report.active_appliances().is_empty());

    let split = report.breakdown();
    assert!(approx_eq(split.base_pct, 100.0));
    assert!(approx_eq(split.appliance_pct, 0.0));
}

#[test]
fn three_bhk_with_every_appliance() {
    let report = estimate(&profile(FacilityType::ThreeBhk, true, true, true));

    assert!(approx_eq(report.base_energy_kwh_per_day(), 4.8));
    assert!(approx_eq(report.appliance_energy_kwh_per_day(), 9.0));
    assert!(approx_eq(report.total_energy_kwh_per_day(), 13.8));
    assert!(approx_eq(report.daily_cost(), 69.0));
    assert!(approx_eq(report.monthly_cost(), 2070.0));
    assert_eq!(
        report.active_appliances(),
        &[
            Appliance::AirConditioner,
            Appliance::Refrigerator,
            Appliance::WashingMachine
        ]
    );
}

#[test]
fn two_bhk_with_only_ac() {
    let report = estimate(&profile(FacilityType::TwoBhk, true, false, false));

    assert!(approx_eq(report.base_energy_kwh_per_day(), 3.6));
    assert!(approx_eq(report.appliance_energy_kwh_per_day(), 3.0));
    assert!(approx_eq(report.total_energy_kwh_per_day(), 6.6));
    let names: Vec<&str> = report.active_appliances().iter().map(|a| a.name()).collect();
    assert_eq!(names, ["AC"]);
}

#[test]
fn unknown_facility_is_rejected_without_a_report() {
    let raw = RawProfile {
        name: "Asha".to_string(),
        city: "Mumbai".to_string(),
        area: "Bandra West".to_string(),
        facility_type: "4BHK".to_string(),
        has_air_conditioner: true,
        ..RawProfile::default()
    };

    match estimate_raw(&raw) {
        Err(EstimateError::InvalidFacilityType(value)) => assert_eq!(value, "4BHK"),
        other => panic!("expected InvalidFacilityType, got {other:?}"),
    }
}

#[test]
fn totals_costs_and_percentages_hold_for_every_profile() {
    for facility in FacilityType::ALL {
        for (ac, fridge, washer) in appliance_subsets() {
            let report = estimate(&profile(facility, ac, fridge, washer));
            let selected = [ac, fridge, washer].iter().filter(|s| **s).count();
            let ctx = format!("{facility} ac={ac} fridge={fridge} washer={washer}");

            assert!(
                approx_eq(
                    report.total_energy_kwh_per_day(),
                    report.base_energy_kwh_per_day() + report.appliance_energy_kwh_per_day()
                ),
                "{ctx}"
            );
            assert!(
                approx_eq(report.appliance_energy_kwh_per_day(), 3.0 * selected as f64),
                "{ctx}"
            );
            assert_eq!(report.active_appliances().len(), selected, "{ctx}");
            assert!(
                approx_eq(report.daily_cost(), report.total_energy_kwh_per_day() * 5.0),
                "{ctx}"
            );
            assert!(
                approx_eq(report.monthly_cost(), report.daily_cost() * 30.0),
                "{ctx}"
            );
            assert!(
                approx_eq(
                    report.monthly_energy_kwh(),
                    report.total_energy_kwh_per_day() * 30.0
                ),
                "{ctx}"
            );

            let split = report.breakdown();
            assert!(approx_eq(split.base_pct + split.appliance_pct, 100.0), "{ctx}");
        }
    }
}

#[test]
fn base_load_grows_with_facility_size() {
    let base: Vec<f64> = FacilityType::ALL
        .iter()
        .map(|f| estimate(&profile(*f, false, false, false)).base_energy_kwh_per_day())
        .collect();
    assert!(base.windows(2).all(|w| w[0] < w[1]), "{base:?}");
}

#[test]
fn empty_total_has_zero_percentages() {
    let split = percentage_breakdown(0.0, 0.0);
    assert_eq!(split.base_pct, 0.0);
    assert_eq!(split.appliance_pct, 0.0);
}

#[test]
fn presets_validate_and_estimate() {
    for name in ProfileConfig::PRESETS {
        let cfg = ProfileConfig::from_preset(name).expect("preset should exist");
        assert!(cfg.validate().is_empty(), "preset {name} failed validation");
        let profile = cfg.to_profile().expect("preset should convert");
        profile
            .identity
            .ensure_complete()
            .expect("preset identity should be complete");
        assert!(estimate(&profile).total_energy_kwh_per_day() > 0.0);
    }
}

#[test]
fn shipped_profile_files_load() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("profiles");
    let studio = ProfileConfig::from_toml_file(&dir.join("studio_flat.toml"))
        .expect("studio profile should parse");
    let report = estimate(&studio.to_profile().expect("studio should convert"));
    assert!(approx_eq(report.total_energy_kwh_per_day(), 5.4));

    let family = ProfileConfig::from_toml_file(&dir.join("family_tenement.toml"))
        .expect("family profile should parse");
    let report = estimate(&family.to_profile().expect("family should convert"));
    assert!(approx_eq(report.total_energy_kwh_per_day(), 10.8));
}
