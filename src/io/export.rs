//! CSV export for the energy breakdown of one estimate.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::estimator::EnergyReport;

/// Column header for the breakdown export.
const HEADER: [&str; 3] = ["category", "energy_kwh_per_day", "percentage"];

/// Label of the closing row carrying the daily total.
pub const TOTAL_ROW: &str = "Total";

/// Exports the report breakdown to a CSV file at the given path.
///
/// Writes the header, one row per category (lighting & fans, appliances)
/// and a closing total row. Produces deterministic output for identical
/// inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(report: &EnergyReport, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(report, buf)
}

/// Writes the report breakdown as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(report: &EnergyReport, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER)?;

    for share in report.categories() {
        wtr.write_record(&[
            share.category.to_string(),
            format!("{:.4}", share.energy_kwh_per_day),
            format!("{:.2}", share.percentage),
        ])?;
    }

    let total_pct = if report.total_energy_kwh_per_day() > 0.0 {
        100.0
    } else {
        0.0
    };
    wtr.write_record(&[
        TOTAL_ROW.to_string(),
        format!("{:.4}", report.total_energy_kwh_per_day()),
        format!("{total_pct:.2}"),
    ])?;

    wtr.flush()?;
    Ok(())
}
