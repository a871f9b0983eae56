//! Error types shared by the estimator and its callers.

use thiserror::Error;

/// Failure to turn caller-supplied text into a typed household profile.
///
/// These are integration errors: the caller passed a value outside the
/// closed set the estimator understands. No partial report is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// Facility type is not one of `1BHK`, `2BHK`, `3BHK`.
    #[error("invalid facility type \"{0}\" (expected one of: 1BHK, 2BHK, 3BHK)")]
    InvalidFacilityType(String),
    /// Housing unit is not one of `Flat`, `Tenement`.
    #[error("invalid housing unit \"{0}\" (expected one of: Flat, Tenement)")]
    InvalidHousingUnit(String),
}

/// A profile the user still has to correct before it can be estimated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// One or more required identity fields are blank.
    #[error(
        "Please fill in all required fields (Name, City, Area); missing: {}",
        .missing.join(", ")
    )]
    Incomplete {
        /// Names of the blank fields, in form order.
        missing: Vec<&'static str>,
    },
    /// Age lies outside the accepted range.
    #[error("age must be between {min} and {max}, got {age}")]
    AgeOutOfRange { age: u32, min: u32, max: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_facility_message_names_value() {
        let err = EstimateError::InvalidFacilityType("4BHK".to_string());
        assert!(err.to_string().contains("\"4BHK\""));
    }

    #[test]
    fn incomplete_message_lists_missing_fields() {
        let err = ProfileError::Incomplete {
            missing: vec!["name", "area"],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Please fill in all required fields"));
        assert!(msg.ends_with("missing: name, area"));
    }

    #[test]
    fn age_message_names_range() {
        let err = ProfileError::AgeOutOfRange {
            age: 121,
            min: 1,
            max: 120,
        };
        assert_eq!(err.to_string(), "age must be between 1 and 120, got 121");
    }
}
