//! Household energy estimation: profile types, load tables, and the
//! estimate function.

pub mod engine;
/// Energy and cost report types.
pub mod report;
/// Fixed base-load, appliance and tariff tables.
pub mod tables;
pub mod types;

pub use engine::{estimate, estimate_raw};
pub use report::{Breakdown, CategoryShare, EnergyReport, percentage_breakdown};
pub use tables::{Appliance, BaseLoad};
pub use types::{
    FacilityType, HouseholdProfile, HousingUnit, Identity, MAX_AGE, MIN_AGE, RawProfile, check_age,
};
