use std::fs;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_energy-calc"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(args)
        .output()
        .expect("energy-calc process should run")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be valid UTF-8")
}

fn run_json(args: &[&str]) -> serde_json::Value {
    let mut full = args.to_vec();
    full.push("--json");
    let output = run(&full);
    assert!(
        output.status.success(),
        "run failed for {args:?}: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_str(&stdout_of(&output)).expect("stdout should be JSON")
}

fn total_of(json: &serde_json::Value) -> f64 {
    json["report"]["total_energy_kwh_per_day"]
        .as_f64()
        .expect("total should be a number")
}

#[test]
fn presets_produce_distinct_totals() {
    let basic = total_of(&run_json(&["--preset", "one_bhk_basic"]));
    let ac = total_of(&run_json(&["--preset", "two_bhk_ac"]));
    let full = total_of(&run_json(&["--preset", "three_bhk_full"]));

    assert!((basic - 2.4).abs() < 1e-9, "one_bhk_basic total={basic}");
    assert!((ac - 6.6).abs() < 1e-9, "two_bhk_ac total={ac}");
    assert!((full - 13.8).abs() < 1e-9, "three_bhk_full total={full}");
}

#[test]
fn text_report_shows_costs() {
    let output = run(&["--preset", "three_bhk_full"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("13.8 kWh/day"), "stdout={stdout}");
    assert!(stdout.contains("Daily Cost:   ₹69.00"), "stdout={stdout}");
    assert!(stdout.contains("Monthly Cost: ₹2070.00"), "stdout={stdout}");
    assert!(stdout.contains("Location: Navrangpura, Ahmedabad"), "stdout={stdout}");
}

#[test]
fn profile_file_with_overrides() {
    let json = run_json(&[
        "--profile",
        "profiles/studio_flat.toml",
        "--facility",
        "2BHK",
        "--ac",
    ]);

    // 3.6 base + fridge + AC
    assert!((total_of(&json) - 9.6).abs() < 1e-9);
    assert_eq!(
        json["report"]["active_appliances"],
        serde_json::json!(["AC", "Refrigerator"])
    );
    assert_eq!(json["profile"]["identity"]["city"], "Bengaluru");
}

#[test]
fn invalid_facility_fails_validation() {
    let output = run(&["--facility", "4BHK"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("housing.facility"), "stderr={stderr}");
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn blank_identity_stops_before_report() {
    let output = run(&["--preset", "one_bhk_basic", "--city", " ", "--area", ""]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please fill in all required fields"), "stderr={stderr}");
    assert!(stderr.contains("city, area"), "stderr={stderr}");
    assert!(!stdout_of(&output).contains("kWh/day"));
}

#[test]
fn tips_and_about_pages_skip_identity_checks() {
    let tips = run_json(&["--page", "tips", "--name", ""]);
    assert_eq!(tips["tips"].as_array().map(Vec::len), Some(5));
    assert_eq!(tips["appliances"][0]["appliance"], "AC");
    let kwh = tips["appliances"][0]["energy_kwh_per_day"].as_f64();
    assert!(kwh.is_some_and(|v| (v - 12.0).abs() < 1e-9), "{kwh:?}");

    let output = run(&["--page", "about"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("0.82 kg CO2 per kWh"));
}

#[test]
fn export_writes_breakdown_csv() {
    let path = std::env::temp_dir().join(format!("energy-calc-{}.csv", std::process::id()));
    let path_arg = path.to_string_lossy().into_owned();

    let output = run(&["--preset", "three_bhk_full", "--export", &path_arg]);
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let csv = fs::read_to_string(&path).expect("export should exist");
    let _ = fs::remove_file(&path);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "category,energy_kwh_per_day,percentage");
    assert_eq!(lines[1], "Lighting & Fans,4.8000,34.78");
    assert_eq!(lines[2], "Appliances,9.0000,65.22");
    assert_eq!(lines[3], "Total,13.8000,100.00");
}

#[test]
fn export_outside_calculator_page_is_refused() {
    let path = std::env::temp_dir().join(format!("energy-calc-tips-{}.csv", std::process::id()));
    let path_arg = path.to_string_lossy().into_owned();

    for page in ["tips", "about"] {
        let output = run(&["--page", page, "--export", &path_arg]);

        assert!(!output.status.success(), "--page {page} should fail");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("--export"), "stderr={stderr}");
        assert!(!path.exists(), "--page {page} must not write a file");
    }
}

#[test]
fn profile_and_preset_are_mutually_exclusive() {
    let output = run(&[
        "--profile",
        "profiles/studio_flat.toml",
        "--preset",
        "two_bhk_ac",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("mutually exclusive"), "stderr={stderr}");
}
