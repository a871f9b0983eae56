//! Command-line argument parsing.

use std::env;
use std::path::PathBuf;

use crate::config::ProfileConfig;
use crate::page::Page;

/// Default API port for `--serve`.
pub const DEFAULT_PORT: u16 = 3000;

/// Preset used when neither `--profile` nor `--preset` is given.
pub const DEFAULT_PRESET: &str = "one_bhk_basic";

/// Per-field overrides applied on top of the loaded profile.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProfileOverrides {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub city: Option<String>,
    pub area: Option<String>,
    pub unit: Option<String>,
    pub facility: Option<String>,
    pub air_conditioner: Option<bool>,
    pub refrigerator: Option<bool>,
    pub washing_machine: Option<bool>,
}

impl ProfileOverrides {
    /// Writes every set override into `cfg`.
    pub fn apply(&self, cfg: &mut ProfileConfig) {
        if let Some(v) = &self.name {
            cfg.person.name.clone_from(v);
        }
        if let Some(v) = self.age {
            cfg.person.age = v;
        }
        if let Some(v) = &self.city {
            cfg.person.city.clone_from(v);
        }
        if let Some(v) = &self.area {
            cfg.person.area.clone_from(v);
        }
        if let Some(v) = &self.unit {
            cfg.housing.unit.clone_from(v);
        }
        if let Some(v) = &self.facility {
            cfg.housing.facility.clone_from(v);
        }
        if let Some(v) = self.air_conditioner {
            cfg.appliances.air_conditioner = v;
        }
        if let Some(v) = self.refrigerator {
            cfg.appliances.refrigerator = v;
        }
        if let Some(v) = self.washing_machine {
            cfg.appliances.washing_machine = v;
        }
    }
}

/// Parsed CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub profile: Option<PathBuf>,
    pub preset: Option<String>,
    pub overrides: ProfileOverrides,
    pub page: Page,
    pub json: bool,
    pub export: Option<PathBuf>,
    pub serve: bool,
    pub port: u16,
    pub tui: bool,
}

pub fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(&args)
}

/// Parses arguments (without the program name).
pub fn parse_args_from(args: &[String]) -> Result<CliOptions, String> {
    let mut i = 0usize;
    let mut profile = None;
    let mut preset = None;
    let mut overrides = ProfileOverrides::default();
    let mut page = None;
    let mut json = false;
    let mut export = None;
    let mut serve = false;
    let mut port = DEFAULT_PORT;
    let mut tui = false;

    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--profile" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --profile (expected a TOML file path)",
                )?;
                if profile.replace(PathBuf::from(path)).is_some() {
                    return Err("--profile provided more than once".to_string());
                }
            }
            "--preset" => {
                i += 1;
                let name =
                    args.next_or_err(i, "missing value for --preset (expected a preset name)")?;
                if preset.replace(name.to_string()).is_some() {
                    return Err("--preset provided more than once".to_string());
                }
            }
            "--name" | "--city" | "--area" | "--unit" | "--facility" => {
                i += 1;
                let value = args
                    .next_or_err(i, &format!("missing value for {flag}"))?
                    .to_string();
                let slot = match flag {
                    "--name" => &mut overrides.name,
                    "--city" => &mut overrides.city,
                    "--area" => &mut overrides.area,
                    "--unit" => &mut overrides.unit,
                    _ => &mut overrides.facility,
                };
                *slot = Some(value);
            }
            "--age" => {
                i += 1;
                let raw =
                    args.next_or_err(i, "missing value for --age (expected a whole number)")?;
                let age = raw
                    .parse::<u32>()
                    .map_err(|_| format!("--age value \"{raw}\" is not a valid whole number"))?;
                overrides.age = Some(age);
            }
            "--ac" => overrides.air_conditioner = Some(true),
            "--no-ac" => overrides.air_conditioner = Some(false),
            "--fridge" => overrides.refrigerator = Some(true),
            "--no-fridge" => overrides.refrigerator = Some(false),
            "--washer" => overrides.washing_machine = Some(true),
            "--no-washer" => overrides.washing_machine = Some(false),
            "--page" => {
                i += 1;
                let name =
                    args.next_or_err(i, "missing value for --page (calculator, tips, about)")?;
                let parsed = name.parse::<Page>().map_err(|e| e.to_string())?;
                if page.replace(parsed).is_some() {
                    return Err("--page provided more than once".to_string());
                }
            }
            "--json" => json = true,
            "--export" => {
                i += 1;
                let path =
                    args.next_or_err(i, "missing value for --export (expected a file path)")?;
                if export.replace(PathBuf::from(path)).is_some() {
                    return Err("--export provided more than once".to_string());
                }
            }
            "--serve" if cfg!(feature = "api") => serve = true,
            "--port" if cfg!(feature = "api") => {
                i += 1;
                let raw = args.next_or_err(i, "missing value for --port (expected a u16)")?;
                port = raw
                    .parse::<u16>()
                    .map_err(|_| format!("--port value \"{raw}\" is not a valid u16"))?;
            }
            "--tui" if cfg!(feature = "tui") => tui = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if profile.is_some() && preset.is_some() {
        return Err(
            "arguments `--profile` and `--preset` are mutually exclusive; choose one source"
                .to_string(),
        );
    }

    if profile.is_none() && preset.is_none() {
        preset = Some(DEFAULT_PRESET.to_string());
    }

    if tui && (json || serve) {
        return Err("`--tui` cannot be combined with `--json` or `--serve`".to_string());
    }

    if serve && (json || export.is_some() || page.is_some()) {
        return Err(
            "`--serve` starts the API only; drop `--page`, `--json` and `--export`".to_string(),
        );
    }

    if export.is_some() {
        if tui {
            return Err("`--export` cannot be combined with `--tui`".to_string());
        }
        if let Some(other) = page.filter(|p| *p != Page::Calculator) {
            return Err(format!(
                "`--export` writes the calculator breakdown; it cannot be used with --page {}",
                other.title()
            ));
        }
    }

    Ok(CliOptions {
        profile,
        preset,
        overrides,
        page: page.unwrap_or_default(),
        json,
        export,
        serve,
        port,
        tui,
    })
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("energy-calc: household electricity usage and cost estimator");
    eprintln!();
    eprintln!("Usage: energy-calc [--profile <path> | --preset <name>] [OPTIONS]");
    eprintln!();
    eprintln!("Profile source:");
    eprintln!("  --profile <path>     Load profile from TOML file");
    eprintln!(
        "  --preset <name>      Built-in profile ({}), default {DEFAULT_PRESET}",
        ProfileConfig::PRESETS.join(", ")
    );
    eprintln!();
    eprintln!("Overrides:");
    eprintln!("  --name <s> --age <n> --city <s> --area <s>");
    eprintln!("  --unit <Flat|Tenement> --facility <1BHK|2BHK|3BHK>");
    eprintln!("  --ac/--no-ac  --fridge/--no-fridge  --washer/--no-washer");
    eprintln!();
    eprintln!("Output:");
    eprintln!("  --page <name>        calculator (default), tips, about");
    eprintln!("  --json               Print JSON instead of text");
    eprintln!("  --export <path>      Write the energy breakdown to CSV");
    if cfg!(feature = "api") {
        eprintln!("  --serve              Start the REST API instead of printing a page");
        eprintln!("  --port <u16>         API server port (default: {DEFAULT_PORT})");
    }
    if cfg!(feature = "tui") {
        eprintln!("  --tui                Open the interactive terminal UI");
    }
    eprintln!("  --help               Show this help message");
}
