//! Household profile types: the sole input of the estimator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, ProfileError};

/// Kind of dwelling. Shown on the report, never used in the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum HousingUnit {
    #[default]
    Flat,
    Tenement,
}

impl HousingUnit {
    /// All housing units, in form order.
    pub const ALL: [Self; 2] = [Self::Flat, Self::Tenement];

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Tenement => "Tenement",
        }
    }
}

impl fmt::Display for HousingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HousingUnit {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|unit| unit.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EstimateError::InvalidHousingUnit(s.to_string()))
    }
}

/// Bedroom-hall-kitchen size class. Keys the base-load table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum FacilityType {
    #[default]
    #[serde(rename = "1BHK")]
    OneBhk,
    #[serde(rename = "2BHK")]
    TwoBhk,
    #[serde(rename = "3BHK")]
    ThreeBhk,
}

impl FacilityType {
    /// All facility types, smallest first.
    pub const ALL: [Self; 3] = [Self::OneBhk, Self::TwoBhk, Self::ThreeBhk];

    /// Display label (`1BHK`, `2BHK`, `3BHK`).
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneBhk => "1BHK",
            Self::TwoBhk => "2BHK",
            Self::ThreeBhk => "3BHK",
        }
    }
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FacilityType {
    type Err = EstimateError;

    /// Parses `1BHK`/`2BHK`/`3BHK`, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidFacilityType`] for anything else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|facility| facility.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EstimateError::InvalidFacilityType(s.to_string()))
    }
}

/// Youngest age accepted on the form.
pub const MIN_AGE: u32 = 1;
/// Oldest age accepted on the form.
pub const MAX_AGE: u32 = 120;

/// Range check shared by config validation and the HTTP boundary.
///
/// # Errors
///
/// Returns [`ProfileError::AgeOutOfRange`] outside `MIN_AGE..=MAX_AGE`.
pub fn check_age(age: u32) -> Result<(), ProfileError> {
    if (MIN_AGE..=MAX_AGE).contains(&age) {
        Ok(())
    } else {
        Err(ProfileError::AgeOutOfRange {
            age,
            min: MIN_AGE,
            max: MAX_AGE,
        })
    }
}

/// Who submitted the profile. Display metadata only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub name: String,
    pub age: u32,
    pub city: String,
    pub area: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 25,
            city: String::new(),
            area: String::new(),
        }
    }
}

impl Identity {
    /// Names of required fields that are blank after trimming, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("city", &self.city),
            ("area", &self.area),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Checks that name, city and area are all filled in.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Incomplete`] listing the blank fields.
    pub fn ensure_complete(&self) -> Result<(), ProfileError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ProfileError::Incomplete { missing })
        }
    }

    /// Checks that the age lies in `MIN_AGE..=MAX_AGE`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::AgeOutOfRange`] otherwise.
    pub fn check_age(&self) -> Result<(), ProfileError> {
        check_age(self.age)
    }

    /// `"area, city"` as shown on the personal details card.
    pub fn location(&self) -> String {
        format!("{}, {}", self.area.trim(), self.city.trim())
    }
}

/// Typed household description handed to [`crate::estimator::estimate`].
///
/// Built per request and passed by value; nothing about it is shared
/// between estimates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HouseholdProfile {
    pub identity: Identity,
    pub housing_unit: HousingUnit,
    pub facility_type: FacilityType,
    pub has_air_conditioner: bool,
    pub has_refrigerator: bool,
    pub has_washing_machine: bool,
}

/// Untyped profile as it arrives from a form, file or HTTP body.
///
/// Enum fields are still text here; [`HouseholdProfile::try_from`] is the
/// boundary where out-of-domain values are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawProfile {
    pub name: String,
    pub age: u32,
    pub city: String,
    pub area: String,
    pub housing_unit: String,
    pub facility_type: String,
    pub has_air_conditioner: bool,
    pub has_refrigerator: bool,
    pub has_washing_machine: bool,
}

impl Default for RawProfile {
    fn default() -> Self {
        let identity = Identity::default();
        Self {
            name: identity.name,
            age: identity.age,
            city: identity.city,
            area: identity.area,
            housing_unit: HousingUnit::default().label().to_string(),
            facility_type: FacilityType::default().label().to_string(),
            has_air_conditioner: false,
            has_refrigerator: false,
            has_washing_machine: false,
        }
    }
}

impl TryFrom<&RawProfile> for HouseholdProfile {
    type Error = EstimateError;

    fn try_from(raw: &RawProfile) -> Result<Self, Self::Error> {
        let facility_type = raw.facility_type.parse()?;
        let housing_unit = raw.housing_unit.parse()?;
        Ok(Self {
            identity: Identity {
                name: raw.name.clone(),
                age: raw.age,
                city: raw.city.clone(),
                area: raw.area.clone(),
            },
            housing_unit,
            facility_type,
            has_air_conditioner: raw.has_air_conditioner,
            has_refrigerator: raw.has_refrigerator,
            has_washing_machine: raw.has_washing_machine,
        })
    }
}

impl From<&HouseholdProfile> for RawProfile {
    fn from(profile: &HouseholdProfile) -> Self {
        Self {
            name: profile.identity.name.clone(),
            age: profile.identity.age,
            city: profile.identity.city.clone(),
            area: profile.identity.area.clone(),
            housing_unit: profile.housing_unit.label().to_string(),
            facility_type: profile.facility_type.label().to_string(),
            has_air_conditioner: profile.has_air_conditioner,
            has_refrigerator: profile.has_refrigerator,
            has_washing_machine: profile.has_washing_machine,
        }
    }
}
