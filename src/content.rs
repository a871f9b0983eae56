//! Static reference content for the tips and about pages.
//!
//! Nothing here depends on the estimator; the tables are fixed data that
//! the CLI, TUI and API render as they see fit.

use serde::Serialize;

/// Grid emission factor used in the environmental notes.
pub const CO2_KG_PER_KWH: f64 = 0.82;

/// One row of the energy saving tips table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TipRow {
    pub appliance: &'static str,
    pub tip: &'static str,
    pub potential_savings: &'static str,
}

/// Per-appliance saving tips.
pub const TIPS_TABLE: [TipRow; 5] = [
    TipRow {
        appliance: "Air Conditioner",
        tip: "Set temperature to 24°C and use ceiling fans",
        potential_savings: "20-30%",
    },
    TipRow {
        appliance: "Refrigerator",
        tip: "Keep door closed and maintain proper temperature",
        potential_savings: "10-15%",
    },
    TipRow {
        appliance: "Washing Machine",
        tip: "Use cold water for washing when possible",
        potential_savings: "15-20%",
    },
    TipRow {
        appliance: "Lighting",
        tip: "Switch to LED bulbs and use natural light",
        potential_savings: "80%",
    },
    TipRow {
        appliance: "Water Heater",
        tip: "Use solar water heater or reduce usage time",
        potential_savings: "30-40%",
    },
];

/// Short tips listed under every calculator result.
pub const GENERAL_TIPS: [&str; 6] = [
    "Use LED bulbs instead of incandescent bulbs",
    "Set AC temperature to 24°C for optimal efficiency",
    "Use ceiling fans along with AC to circulate air",
    "Unplug appliances when not in use",
    "Use natural light during daytime",
    "Regular maintenance of appliances improves efficiency",
];

/// Typical rating and daily usage of a common appliance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApplianceUsage {
    pub appliance: &'static str,
    pub power_kw: f64,
    pub hours_per_day: f64,
}

impl ApplianceUsage {
    /// `power_kw * hours_per_day`.
    pub fn energy_kwh_per_day(&self) -> f64 {
        self.power_kw * self.hours_per_day
    }
}

/// One appliance comparison row with its derived daily energy.
///
/// Output shape of the comparison table for JSON callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplianceRecord {
    pub appliance: &'static str,
    pub power_kw: f64,
    pub hours_per_day: f64,
    pub energy_kwh_per_day: f64,
}

impl From<&ApplianceUsage> for ApplianceRecord {
    fn from(u: &ApplianceUsage) -> Self {
        Self {
            appliance: u.appliance,
            power_kw: u.power_kw,
            hours_per_day: u.hours_per_day,
            energy_kwh_per_day: u.energy_kwh_per_day(),
        }
    }
}

/// [`APPLIANCE_COMPARISON`] as records, in table order.
pub fn appliance_records() -> Vec<ApplianceRecord> {
    APPLIANCE_COMPARISON.iter().map(ApplianceRecord::from).collect()
}

/// Reference data for the appliance comparison bar chart.
pub const APPLIANCE_COMPARISON: [ApplianceUsage; 5] = [
    ApplianceUsage {
        appliance: "AC",
        power_kw: 1.5,
        hours_per_day: 8.0,
    },
    ApplianceUsage {
        appliance: "Refrigerator",
        power_kw: 0.15,
        hours_per_day: 24.0,
    },
    ApplianceUsage {
        appliance: "Washing Machine",
        power_kw: 0.5,
        hours_per_day: 1.0,
    },
    ApplianceUsage {
        appliance: "LED Lights",
        power_kw: 0.01,
        hours_per_day: 6.0,
    },
    ApplianceUsage {
        appliance: "Ceiling Fan",
        power_kw: 0.075,
        hours_per_day: 12.0,
    },
];

/// A titled block of bullet points on the about page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AboutSection {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const ABOUT_INTRO: &str = "This Energy Usage Calculator helps you estimate your daily \
electricity consumption based on your housing type, your major appliances, and typical \
Indian household usage patterns.";

pub const ABOUT_SECTIONS: [AboutSection; 4] = [
    AboutSection {
        title: "How It Works",
        items: &[
            "Base Energy: calculated from lighting and fans for your BHK type",
            "Appliance Energy: added for each selected appliance",
            "Cost Estimation: uses average electricity rates in India",
        ],
    },
    AboutSection {
        title: "Energy Calculation Formula",
        items: &[
            "1BHK: 2 lights (0.4 kW) + 2 fans (0.8 kW)",
            "2BHK: 3 lights (0.4 kW) + 3 fans (0.8 kW)",
            "3BHK: 4 lights (0.4 kW) + 4 fans (0.8 kW)",
            "Each Major Appliance: +3 kWh/day",
        ],
    },
    AboutSection {
        title: "Note",
        items: &[
            "These are estimates based on typical usage patterns",
            "Actual consumption varies with appliance efficiency ratings",
            "Actual consumption varies with usage hours",
            "Actual consumption varies with local climate conditions",
            "Actual consumption varies with personal habits",
        ],
    },
    AboutSection {
        title: "Environmental Impact",
        items: &[
            "1 kWh of electricity produces approximately 0.82 kg of CO2",
            "Reducing energy consumption by 20% can save hundreds of kg of CO2 annually",
            "LED bulbs use 80% less energy than incandescent bulbs",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_energy_is_power_times_hours() {
        let energy: Vec<f64> = APPLIANCE_COMPARISON
            .iter()
            .map(ApplianceUsage::energy_kwh_per_day)
            .collect();
        let expected = [12.0, 3.6, 0.5, 0.06, 0.9];
        for (got, want) in energy.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{got} != {want}");
        }
    }

    #[test]
    fn records_carry_derived_energy() {
        let records = appliance_records();
        assert_eq!(records.len(), APPLIANCE_COMPARISON.len());
        assert_eq!(records[0].appliance, "AC");
        assert!((records[0].energy_kwh_per_day - 12.0).abs() < 1e-9);
        assert!((records[1].energy_kwh_per_day - 3.6).abs() < 1e-9);
    }

    #[test]
    fn ac_dominates_comparison() {
        let top = APPLIANCE_COMPARISON
            .iter()
            .max_by(|a, b| a.energy_kwh_per_day().total_cmp(&b.energy_kwh_per_day()));
        assert_eq!(top.map(|u| u.appliance), Some("AC"));
    }

    #[test]
    fn every_tip_has_a_savings_figure() {
        assert!(TIPS_TABLE.iter().all(|row| row.potential_savings.ends_with('%')));
    }
}
