//! Energy and cost report produced by one estimate.

use std::fmt;

use serde::Serialize;

use super::tables::{Appliance, DAYS_PER_MONTH, RATE_PER_KWH};

/// Chart label for the lighting-and-fans share.
pub const BASE_CATEGORY: &str = "Lighting & Fans";
/// Chart label for the major-appliance share.
pub const APPLIANCE_CATEGORY: &str = "Appliances";

/// Percentage split of the daily total between base and appliance load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakdown {
    pub base_pct: f64,
    pub appliance_pct: f64,
}

/// Splits a total into base and appliance percentages.
///
/// Both shares are 0 when the total is not positive.
pub fn percentage_breakdown(base_kwh: f64, appliance_kwh: f64) -> Breakdown {
    let total = base_kwh + appliance_kwh;
    if total > 0.0 {
        Breakdown {
            base_pct: base_kwh / total * 100.0,
            appliance_pct: appliance_kwh / total * 100.0,
        }
    } else {
        Breakdown {
            base_pct: 0.0,
            appliance_pct: 0.0,
        }
    }
}

/// One slice of the breakdown chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: &'static str,
    pub energy_kwh_per_day: f64,
    pub percentage: f64,
}

/// Daily and monthly energy and cost for one household profile.
///
/// Fields are private so the total always equals base plus appliance
/// load; the only constructor is the estimator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyReport {
    base_energy_kwh_per_day: f64,
    appliance_energy_kwh_per_day: f64,
    total_energy_kwh_per_day: f64,
    active_appliances: Vec<Appliance>,
    daily_cost: f64,
    monthly_cost: f64,
    monthly_energy_kwh: f64,
}

impl EnergyReport {
    pub(crate) fn new(
        base_energy_kwh_per_day: f64,
        appliance_energy_kwh_per_day: f64,
        active_appliances: Vec<Appliance>,
    ) -> Self {
        let total = base_energy_kwh_per_day + appliance_energy_kwh_per_day;
        let daily_cost = total * RATE_PER_KWH;
        Self {
            base_energy_kwh_per_day,
            appliance_energy_kwh_per_day,
            total_energy_kwh_per_day: total,
            active_appliances,
            daily_cost,
            monthly_cost: daily_cost * DAYS_PER_MONTH,
            monthly_energy_kwh: total * DAYS_PER_MONTH,
        }
    }

    /// Lighting and fan load for the facility type.
    pub fn base_energy_kwh_per_day(&self) -> f64 {
        self.base_energy_kwh_per_day
    }

    /// Sum of the selected appliance contributions.
    pub fn appliance_energy_kwh_per_day(&self) -> f64 {
        self.appliance_energy_kwh_per_day
    }

    pub fn total_energy_kwh_per_day(&self) -> f64 {
        self.total_energy_kwh_per_day
    }

    /// Selected appliances in checklist order.
    pub fn active_appliances(&self) -> &[Appliance] {
        &self.active_appliances
    }

    pub fn daily_cost(&self) -> f64 {
        self.daily_cost
    }

    pub fn monthly_cost(&self) -> f64 {
        self.monthly_cost
    }

    pub fn monthly_energy_kwh(&self) -> f64 {
        self.monthly_energy_kwh
    }

    /// Percentage split between base and appliance load.
    pub fn breakdown(&self) -> Breakdown {
        percentage_breakdown(
            self.base_energy_kwh_per_day,
            self.appliance_energy_kwh_per_day,
        )
    }

    /// Base and appliance slices, base first, for charts and exports.
    pub fn categories(&self) -> [CategoryShare; 2] {
        let pct = self.breakdown();
        [
            CategoryShare {
                category: BASE_CATEGORY,
                energy_kwh_per_day: self.base_energy_kwh_per_day,
                percentage: pct.base_pct,
            },
            CategoryShare {
                category: APPLIANCE_CATEGORY,
                energy_kwh_per_day: self.appliance_energy_kwh_per_day,
                percentage: pct.appliance_pct,
            },
        ]
    }
}

impl fmt::Display for EnergyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.active_appliances.iter().map(|a| a.name()).collect();
        let pct = self.breakdown();
        writeln!(f, "--- Energy Report ---")?;
        writeln!(
            f,
            "Base load:             {:.1} kWh/day ({:.1}%)",
            self.base_energy_kwh_per_day, pct.base_pct
        )?;
        writeln!(
            f,
            "Appliance load:        {:.1} kWh/day ({:.1}%)",
            self.appliance_energy_kwh_per_day, pct.appliance_pct
        )?;
        writeln!(
            f,
            "Total consumption:     {:.1} kWh/day",
            self.total_energy_kwh_per_day
        )?;
        writeln!(f, "Monthly consumption:   {:.1} kWh", self.monthly_energy_kwh)?;
        writeln!(f, "Daily cost:            {:.2}", self.daily_cost)?;
        writeln!(f, "Monthly cost:          {:.2}", self.monthly_cost)?;
        if names.is_empty() {
            write!(f, "Active appliances:     none")
        } else {
            write!(f, "Active appliances:     {}", names.join(", "))
        }
    }
}
