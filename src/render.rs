//! Plain-text rendering of the three pages.
//!
//! Each view is a small borrowed wrapper implementing [`fmt::Display`], so
//! callers can `println!` it or collect it with `to_string()`.

use std::fmt;

use crate::content::{
    ABOUT_INTRO, ABOUT_SECTIONS, APPLIANCE_COMPARISON, CO2_KG_PER_KWH, GENERAL_TIPS, TIPS_TABLE,
};
use crate::estimator::{EnergyReport, HouseholdProfile};

/// Width in characters of a full (100%) text bar.
pub const BAR_WIDTH: usize = 30;

/// Currency symbol used when printing costs.
pub const CURRENCY: &str = "₹";

/// Formats an amount with the currency symbol and two decimals.
pub fn format_currency(amount: f64) -> String {
    format!("{CURRENCY}{amount:.2}")
}

/// Horizontal bar proportional to `value / max`, `width` cells at most.
pub fn text_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize;
    "█".repeat(cells.max(1))
}

/// Calculator result page: personal details, metrics, breakdown, costs, tips.
pub struct CalculatorView<'a> {
    pub profile: &'a HouseholdProfile,
    pub report: &'a EnergyReport,
}

impl fmt::Display for CalculatorView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = &self.profile.identity;
        let r = self.report;

        writeln!(f, "=== Energy Usage Summary ===")?;
        writeln!(f)?;
        writeln!(f, "Personal Details")?;
        writeln!(f, "  Name:     {}", id.name.trim())?;
        writeln!(f, "  Age:      {} years", id.age)?;
        writeln!(f, "  Location: {}", id.location())?;
        writeln!(
            f,
            "  Housing:  {} {}",
            self.profile.facility_type, self.profile.housing_unit
        )?;
        writeln!(f)?;

        writeln!(f, "Total Energy Consumption")?;
        writeln!(f, "  {:.1} kWh/day", r.total_energy_kwh_per_day())?;
        writeln!(f, "  Estimated Monthly: {:.1} kWh", r.monthly_energy_kwh())?;
        writeln!(f)?;

        writeln!(f, "Energy Breakdown")?;
        for share in r.categories() {
            writeln!(
                f,
                "  {:<16} {:>5.1} kWh/day {:>5.1}%  {}",
                share.category,
                share.energy_kwh_per_day,
                share.percentage,
                text_bar(share.percentage, 100.0, BAR_WIDTH)
            )?;
        }

        if !r.active_appliances().is_empty() {
            writeln!(f)?;
            writeln!(f, "Active Appliances")?;
            for appliance in r.active_appliances() {
                writeln!(f, "  ✅ {}", appliance.name())?;
            }
        }
        writeln!(f)?;

        writeln!(f, "Cost Estimation")?;
        writeln!(f, "  Daily Cost:   {}", format_currency(r.daily_cost()))?;
        writeln!(f, "  Monthly Cost: {}", format_currency(r.monthly_cost()))?;
        writeln!(f)?;

        writeln!(f, "Energy Saving Tips")?;
        for (i, tip) in GENERAL_TIPS.iter().enumerate() {
            if i + 1 == GENERAL_TIPS.len() {
                write!(f, "  • {tip}")?;
            } else {
                writeln!(f, "  • {tip}")?;
            }
        }
        Ok(())
    }
}

/// Energy tips page: savings table and appliance comparison chart.
pub struct TipsView;

impl fmt::Display for TipsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let appliance_w = TIPS_TABLE
            .iter()
            .map(|row| row.appliance.chars().count())
            .max()
            .unwrap_or(0)
            .max("Appliance".len());
        let tip_w = TIPS_TABLE
            .iter()
            .map(|row| row.tip.chars().count())
            .max()
            .unwrap_or(0)
            .max("Energy Saving Tip".len());

        writeln!(f, "=== Energy Saving Tips ===")?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<appliance_w$}  {:<tip_w$}  Potential Savings",
            "Appliance", "Energy Saving Tip"
        )?;
        for row in &TIPS_TABLE {
            writeln!(
                f,
                "{:<appliance_w$}  {:<tip_w$}  {}",
                row.appliance, row.tip, row.potential_savings
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Daily Energy Consumption by Appliance")?;
        let max = APPLIANCE_COMPARISON
            .iter()
            .map(|u| u.energy_kwh_per_day())
            .fold(0.0, f64::max);
        for (i, usage) in APPLIANCE_COMPARISON.iter().enumerate() {
            let kwh = usage.energy_kwh_per_day();
            let line = format!(
                "  {:<16} {:>6.2} kWh/day  {}",
                usage.appliance,
                kwh,
                text_bar(kwh, max, BAR_WIDTH)
            );
            if i + 1 == APPLIANCE_COMPARISON.len() {
                write!(f, "{}", line.trim_end())?;
            } else {
                writeln!(f, "{}", line.trim_end())?;
            }
        }
        Ok(())
    }
}

/// About page: intro text and the bullet sections.
pub struct AboutView;

impl fmt::Display for AboutView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== About This App ===")?;
        writeln!(f)?;
        writeln!(f, "{ABOUT_INTRO}")?;
        for section in &ABOUT_SECTIONS {
            writeln!(f)?;
            writeln!(f, "{}:", section.title)?;
            for item in section.items {
                writeln!(f, "  - {item}")?;
            }
        }
        writeln!(f)?;
        write!(f, "Emission factor used: {CO2_KG_PER_KWH} kg CO2 per kWh")
    }
}
