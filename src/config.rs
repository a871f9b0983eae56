//! TOML-based household profile configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::EstimateError;
use crate::estimator::{FacilityType, HouseholdProfile, HousingUnit, RawProfile, check_age};

/// Top-level profile configuration parsed from TOML.
///
/// All sections have defaults; a file only needs the fields it changes.
/// Load with [`ProfileConfig::from_toml_file`] or pick a built-in profile
/// with [`ProfileConfig::from_preset`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    /// Who the estimate is for.
    #[serde(default)]
    pub person: PersonConfig,
    /// Dwelling kind and size.
    #[serde(default)]
    pub housing: HousingConfig,
    /// Major appliance checklist.
    #[serde(default)]
    pub appliances: AppliancesConfig,
}

/// Identity fields shown on the report.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PersonConfig {
    pub name: String,
    /// Age in years (1–120).
    pub age: u32,
    pub city: String,
    pub area: String,
}

impl Default for PersonConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 25,
            city: String::new(),
            area: String::new(),
        }
    }
}

/// Dwelling kind and size.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HousingConfig {
    /// `"Flat"` or `"Tenement"`.
    pub unit: String,
    /// `"1BHK"`, `"2BHK"` or `"3BHK"`.
    pub facility: String,
}

impl Default for HousingConfig {
    fn default() -> Self {
        Self {
            unit: HousingUnit::default().label().to_string(),
            facility: FacilityType::default().label().to_string(),
        }
    }
}

/// Major appliance checklist.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppliancesConfig {
    pub air_conditioner: bool,
    pub refrigerator: bool,
    pub washing_machine: bool,
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"housing.facility"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ProfileConfig {
    /// Single-person 1BHK flat with no major appliances.
    pub fn one_bhk_basic() -> Self {
        Self {
            person: PersonConfig {
                name: "John Doe".to_string(),
                city: "Mumbai".to_string(),
                area: "Bandra West".to_string(),
                ..PersonConfig::default()
            },
            housing: HousingConfig::default(),
            appliances: AppliancesConfig::default(),
        }
    }

    /// 2BHK flat running an air conditioner.
    pub fn two_bhk_ac() -> Self {
        Self {
            person: PersonConfig {
                name: "Priya Sharma".to_string(),
                age: 34,
                city: "Pune".to_string(),
                area: "Kothrud".to_string(),
            },
            housing: HousingConfig {
                facility: "2BHK".to_string(),
                ..HousingConfig::default()
            },
            appliances: AppliancesConfig {
                air_conditioner: true,
                ..AppliancesConfig::default()
            },
        }
    }

    /// 3BHK tenement with every major appliance.
    pub fn three_bhk_full() -> Self {
        Self {
            person: PersonConfig {
                name: "Arjun Mehta".to_string(),
                age: 52,
                city: "Ahmedabad".to_string(),
                area: "Navrangpura".to_string(),
            },
            housing: HousingConfig {
                unit: "Tenement".to_string(),
                facility: "3BHK".to_string(),
            },
            appliances: AppliancesConfig {
                air_conditioner: true,
                refrigerator: true,
                washing_machine: true,
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["one_bhk_basic", "two_bhk_ac", "three_bhk_full"];

    /// Loads a profile from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "one_bhk_basic" => Ok(Self::one_bhk_basic()),
            "two_bhk_ac" => Ok(Self::two_bhk_ac()),
            "three_bhk_full" => Ok(Self::three_bhk_full()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a profile from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "profile".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a profile from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates field domains and returns a list of errors.
    ///
    /// Blank identity fields are not reported here; they are a form
    /// completeness issue, see [`crate::estimator::Identity::ensure_complete`].
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Err(e) = check_age(self.person.age) {
            errors.push(ConfigError {
                field: "person.age".into(),
                message: e.to_string(),
            });
        }

        if let Err(e) = self.housing.facility.parse::<FacilityType>() {
            errors.push(ConfigError {
                field: "housing.facility".into(),
                message: e.to_string(),
            });
        }
        if let Err(e) = self.housing.unit.parse::<HousingUnit>() {
            errors.push(ConfigError {
                field: "housing.unit".into(),
                message: e.to_string(),
            });
        }

        errors
    }

    /// Converts to the typed profile the estimator takes.
    ///
    /// # Errors
    ///
    /// Returns an [`EstimateError`] if the facility or unit is out of domain.
    pub fn to_profile(&self) -> Result<HouseholdProfile, EstimateError> {
        HouseholdProfile::try_from(&RawProfile::from(self))
    }
}

impl From<&ProfileConfig> for RawProfile {
    fn from(cfg: &ProfileConfig) -> Self {
        Self {
            name: cfg.person.name.clone(),
            age: cfg.person.age,
            city: cfg.person.city.clone(),
            area: cfg.person.area.clone(),
            housing_unit: cfg.housing.unit.clone(),
            facility_type: cfg.housing.facility.clone(),
            has_air_conditioner: cfg.appliances.air_conditioner,
            has_refrigerator: cfg.appliances.refrigerator,
            has_washing_machine: cfg.appliances.washing_machine,
        }
    }
}
