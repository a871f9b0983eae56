//! Shared fixtures for integration tests.

use energy_calc::estimator::{FacilityType, HouseholdProfile, HousingUnit, Identity};

/// Identity with every required field filled in.
pub fn complete_identity() -> Identity {
    Identity {
        name: "Asha Patel".to_string(),
        age: 31,
        city: "Mumbai".to_string(),
        area: "Bandra West".to_string(),
    }
}

/// Flat profile of the given size with the given appliance checklist.
pub fn profile(facility: FacilityType, ac: bool, fridge: bool, washer: bool) -> HouseholdProfile {
    HouseholdProfile {
        identity: complete_identity(),
        housing_unit: HousingUnit::Flat,
        facility_type: facility,
        has_air_conditioner: ac,
        has_refrigerator: fridge,
        has_washing_machine: washer,
    }
}

/// Every appliance checklist, from none to all three.
pub fn appliance_subsets() -> Vec<(bool, bool, bool)> {
    (0..8u8)
        .map(|bits| (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0))
        .collect()
}

/// `a` and `b` agree within floating-point noise.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
