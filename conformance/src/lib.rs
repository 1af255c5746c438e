//! SimData profile conformance.
//!
//! This crate decides whether an aircraft profile document may be loaded and
//! whether a set request may be forwarded to a platform. Validation has two
//! tiers:
//!
//! | Tier | Check | Outcome |
//! |------|-------|---------|
//! | Structural | JSON shape, known categories and fields, non-empty names, unique map keys, ordered ranges | Hard error ([`ProfileError`]) |
//! | Semantic | Profile map keys against the effective model | Warnings returned with the profile |
//!
//! Set requests are all-or-nothing: [`SetRequestRefiner`] reports every
//! failing path together.
//!
//! # Entry Point
//!
//! ```
//! use simdata_conformance::validate_aircraft_profile;
//!
//! let json = r#"{"aircraftCode": "c172sp", "aircraftName": "Cessna Skyhawk"}"#;
//! let validation = validate_aircraft_profile(json);
//! assert!(validation.is_ok_and(|v| v.warnings.is_empty()));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod shape;
pub mod tests;
pub mod validators;

use std::path::Path;

use anyhow::Context;
use simdata_resolver::aircraft_profile_effective_model;
use simdata_spec::{AircraftProfile, Catalog, SimPlatform};
use tracing::warn;

pub use report::{Issue, PathSegment, Severity, ValidationReport};
pub use shape::{check_shape, parse_aircraft_profile, ProfileError};
pub use validators::map_keys::validate as validate_map_keys;
pub use validators::set_request::{
    merge_set_requests, RefineSetRequests, SetRequestRefiner, SetRequestVerdict,
};

/// A profile that passed structural validation, with its semantic warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileValidation {
    /// The parsed profile.
    pub profile: AircraftProfile,
    /// Map-key warnings for every platform the profile overrides.
    pub warnings: Vec<Issue>,
}

/// Parses `json` as an aircraft profile and cross-checks its map keys on
/// every platform.
///
/// # Errors
///
/// Returns a [`ProfileError`] when the document is not a structurally valid
/// profile. Map-key problems are warnings, never errors.
pub fn validate_aircraft_profile(json: &str) -> Result<ProfileValidation, ProfileError> {
    let profile = parse_aircraft_profile(json)?;
    let mut warnings = Vec::new();
    for &platform in SimPlatform::ALL {
        if profile.platform_overrides(platform).is_none() {
            continue;
        }
        let effective = aircraft_profile_effective_model(
            Catalog::full().descriptors(),
            Some(&profile),
            platform,
        );
        warnings.extend(validate_map_keys(&profile, &effective, platform));
    }
    if !warnings.is_empty() {
        warn!(
            aircraft = %profile.aircraft_code,
            count = warnings.len(),
            "profile loaded with map key warnings"
        );
    }
    Ok(ProfileValidation { profile, warnings })
}

/// Reads and validates a profile file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the profile is
/// structurally invalid.
pub fn validate_aircraft_profile_file(path: &Path) -> anyhow::Result<ProfileValidation> {
    let json = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    validate_aircraft_profile(&json)
        .with_context(|| format!("Failed to validate {}", path.display()))
}

/// Validates every built-in profile and collects the issues.
pub fn run_all() -> ValidationReport {
    validators::builtin::validate()
}

#[cfg(test)]
mod tests_unit {
    use super::*;
    use simdata_spec::DataName;

    #[test]
    fn profile_without_overrides_changes_nothing() {
        let validation = validate_aircraft_profile(tests::fixtures::NO_OVERRIDES);
        assert!(validation.as_ref().is_ok_and(|v| v.warnings.is_empty()));
        let Ok(validation) = validation else {
            return;
        };
        let effective = aircraft_profile_effective_model(
            Catalog::full().descriptors(),
            Some(&validation.profile),
            SimPlatform::Xplane12,
        );
        assert_eq!(&effective, Catalog::full().descriptors());
    }

    #[test]
    fn warnings_do_not_reject_the_profile() {
        let validation = validate_aircraft_profile(tests::fixtures::BOGUS_FAILURE_KEY);
        assert!(validation.is_ok_and(|v| v.warnings.len() == 1 && !v.warnings[0].is_error()));
    }

    #[test]
    fn structural_problems_are_errors() {
        let err = validate_aircraft_profile(tests::fixtures::STRUCTURALLY_BROKEN);
        assert!(err.is_err_and(|e| e.issues().len() == 6));
    }

    #[test]
    fn twin_turboprop_is_clean() {
        let validation = validate_aircraft_profile(tests::fixtures::TWIN_TURBOPROP);
        assert!(validation.as_ref().is_ok_and(|v| v.warnings.is_empty()), "{validation:?}");
        let throttle = validation
            .ok()
            .and_then(|v| v.profile.xplane)
            .and_then(|x| x.get(DataName::ThrottlePercentOpen).cloned());
        assert!(throttle.is_some_and(|t| t.array_index_name_map.is_some_and(|m| m.len() == 2)));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let result = validate_aircraft_profile_file(Path::new("/nonexistent/profile.json"));
        assert!(result.is_err_and(|e| format!("{e:#}").contains("/nonexistent/profile.json")));
    }

    #[test]
    fn builtin_profiles_pass() {
        assert!(run_all().is_clean());
    }
}
