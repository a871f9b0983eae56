//! energy-calc entry point: CLI wiring, profile loading, page output.

use std::path::Path;
use std::process;

use serde::Serialize;
use tracing::info;

use energy_calc::cli::{CliOptions, parse_args, print_usage};
use energy_calc::config::ProfileConfig;
use energy_calc::content::{
    ABOUT_INTRO, ABOUT_SECTIONS, GENERAL_TIPS, TIPS_TABLE, appliance_records,
};
use energy_calc::estimator::{Breakdown, EnergyReport, HouseholdProfile, estimate};
use energy_calc::io::export::export_csv;
use energy_calc::logging;
use energy_calc::page::Page;
use energy_calc::render::{AboutView, CalculatorView, TipsView};

/// JSON shape of the calculator page.
#[derive(Serialize)]
struct CalculatorJson<'a> {
    profile: &'a HouseholdProfile,
    report: &'a EnergyReport,
    breakdown: Breakdown,
}

/// Loads the profile source named on the command line and applies overrides.
fn load_profile(cli: &CliOptions) -> ProfileConfig {
    let loaded = if let Some(ref path) = cli.profile {
        ProfileConfig::from_toml_file(path)
    } else {
        let name = cli.preset.as_deref().unwrap_or(energy_calc::cli::DEFAULT_PRESET);
        ProfileConfig::from_preset(name)
    };
    let mut cfg = loaded.unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });
    cli.overrides.apply(&mut cfg);
    cfg
}

fn print_json(value: &impl Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("error: failed to serialize output: {e}");
            process::exit(1);
        }
    }
}

fn run_calculator(cli: &CliOptions, profile: &HouseholdProfile) {
    // Blank identity fields stop here, before the estimator runs.
    if let Err(e) = profile.identity.ensure_complete() {
        eprintln!("{e}");
        process::exit(1);
    }

    let report = estimate(profile);
    info!(
        facility = %profile.facility_type,
        total_kwh = report.total_energy_kwh_per_day(),
        "estimate computed"
    );

    if cli.json {
        print_json(&CalculatorJson {
            profile,
            report: &report,
            breakdown: report.breakdown(),
        });
    } else {
        println!(
            "{}",
            CalculatorView {
                profile,
                report: &report,
            }
        );
    }

    if let Some(ref path) = cli.export {
        if let Err(e) = export_csv(&report, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        info!(path = %path.display(), "breakdown exported");
        eprintln!("Breakdown written to {}", path.display());
    }
}

fn run_tips(cli: &CliOptions) {
    if cli.json {
        print_json(&serde_json::json!({
            "tips": TIPS_TABLE,
            "general_tips": GENERAL_TIPS,
            "appliances": appliance_records(),
        }));
    } else {
        println!("{TipsView}");
    }
}

fn run_about(cli: &CliOptions) {
    if cli.json {
        print_json(&serde_json::json!({
            "intro": ABOUT_INTRO,
            "sections": ABOUT_SECTIONS,
        }));
    } else {
        println!("{AboutView}");
    }
}

fn main() {
    logging::init(logging::DEFAULT_FILTER);

    let cli = parse_args().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        print_usage();
        process::exit(1);
    });

    // The API builds a profile per request; no CLI profile is involved.
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;

        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        if let Err(e) = rt.block_on(energy_calc::api::serve(addr)) {
            eprintln!("error: API server failed: {e}");
            process::exit(1);
        }
        return;
    }

    let cfg = load_profile(&cli);

    let errors = cfg.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let profile = cfg.to_profile().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });
    info!(
        name = %profile.identity.name,
        facility = %profile.facility_type,
        unit = %profile.housing_unit,
        "profile loaded"
    );

    #[cfg(feature = "tui")]
    if cli.tui {
        if let Err(e) = energy_calc::tui::run(&profile) {
            eprintln!("error: TUI crashed: {e}");
            process::exit(1);
        }
        return;
    }

    match cli.page {
        Page::Calculator => run_calculator(&cli, &profile),
        Page::EnergyTips => run_tips(&cli),
        Page::About => run_about(&cli),
    }
}
