//! Fixed load and tariff tables.
//!
//! Per-fixture and per-appliance figures are summed directly into the daily
//! total without an operating-hours factor. That keeps the published
//! numbers (e.g. 2BHK base = 3.6) stable; see DESIGN.md.

use serde::Serialize;

use super::types::{FacilityType, HouseholdProfile};

/// Contribution of one light fixture.
pub const LIGHT_KW: f64 = 0.4;
/// Contribution of one ceiling fan.
pub const FAN_KW: f64 = 0.8;
/// Contribution of each selected major appliance.
pub const APPLIANCE_KWH_PER_DAY: f64 = 3.0;
/// Tariff applied to the daily total (currency-agnostic).
pub const RATE_PER_KWH: f64 = 5.0;
/// Days used to scale daily figures to monthly ones.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Lighting and fan fixture counts for one facility type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BaseLoad {
    pub lights: u32,
    pub fans: u32,
}

impl BaseLoad {
    /// `lights * LIGHT_KW + fans * FAN_KW`.
    pub fn energy_kwh_per_day(&self) -> f64 {
        f64::from(self.lights) * LIGHT_KW + f64::from(self.fans) * FAN_KW
    }
}

/// Indexed by `FacilityType` discriminant, smallest first.
const BASE_LOADS: [BaseLoad; 3] = [
    BaseLoad { lights: 2, fans: 2 },
    BaseLoad { lights: 3, fans: 3 },
    BaseLoad { lights: 4, fans: 4 },
];

impl FacilityType {
    /// Looks up the fixture counts for this facility type.
    pub const fn base_load(self) -> BaseLoad {
        BASE_LOADS[self as usize]
    }
}

/// Major appliances offered on the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Appliance {
    #[serde(rename = "AC")]
    AirConditioner,
    Refrigerator,
    #[serde(rename = "Washing Machine")]
    WashingMachine,
}

impl Appliance {
    /// Short name used on reports and charts.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AirConditioner => "AC",
            Self::Refrigerator => "Refrigerator",
            Self::WashingMachine => "Washing Machine",
        }
    }

    /// Checklist label shown on input forms.
    pub const fn form_label(self) -> &'static str {
        match self {
            Self::AirConditioner => "Air Conditioner (AC)",
            Self::Refrigerator => "Refrigerator",
            Self::WashingMachine => "Washing Machine",
        }
    }

    /// Whether the profile has this appliance ticked.
    pub fn is_selected(self, profile: &HouseholdProfile) -> bool {
        match self {
            Self::AirConditioner => profile.has_air_conditioner,
            Self::Refrigerator => profile.has_refrigerator,
            Self::WashingMachine => profile.has_washing_machine,
        }
    }
}

/// One row of the appliance table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApplianceLoad {
    pub appliance: Appliance,
    pub kwh_per_day: f64,
}

/// Appliance contributions in checklist order.
///
/// Adding an appliance is a new row here plus a profile flag.
pub const APPLIANCE_LOADS: [ApplianceLoad; 3] = [
    ApplianceLoad {
        appliance: Appliance::AirConditioner,
        kwh_per_day: APPLIANCE_KWH_PER_DAY,
    },
    ApplianceLoad {
        appliance: Appliance::Refrigerator,
        kwh_per_day: APPLIANCE_KWH_PER_DAY,
    },
    ApplianceLoad {
        appliance: Appliance::WashingMachine,
        kwh_per_day: APPLIANCE_KWH_PER_DAY,
    },
];
