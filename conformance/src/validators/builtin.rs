//! Built-in profile conformance.
//!
//! Runs every profile shipped in [`simdata_spec::profiles::builtin`] through
//! the structural checks and the map-key cross-check on every platform. Each
//! issue path is prefixed with the profile's aircraft code.

use simdata_resolver::aircraft_profile_effective_model;
use simdata_spec::{profiles, AircraftProfile, Catalog, SimPlatform};
use tracing::debug;

use crate::report::{Issue, PathSegment, ValidationReport};
use crate::shape::check_shape;
use crate::validators::map_keys;

/// Validates every built-in profile.
pub fn validate() -> ValidationReport {
    let mut report = ValidationReport::new();
    for profile in profiles::builtin() {
        report.extend(validate_profile(&profile));
    }
    debug!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "checked built-in profiles"
    );
    report
}

/// Validates one profile on every platform, prefixing issue paths with its
/// aircraft code.
pub fn validate_profile(profile: &AircraftProfile) -> Vec<Issue> {
    let mut issues = check_shape(profile);
    for &platform in SimPlatform::ALL {
        let effective = aircraft_profile_effective_model(
            Catalog::full().descriptors(),
            Some(profile),
            platform,
        );
        issues.extend(map_keys::validate(profile, &effective, platform));
    }
    for issue in &mut issues {
        issue
            .path
            .insert(0, PathSegment::Key(profile.aircraft_code.clone()));
    }
    issues
}
