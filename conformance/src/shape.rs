//! Structural validation of aircraft profile documents.
//!
//! Parsing rejects unknown keys, unknown categories and fields, and fields
//! placed under the wrong category. A second pass collects every remaining
//! structural problem so authors see them all at once.

use std::collections::BTreeSet;
use std::path::PathBuf;

use simdata_spec::{AircraftProfile, SimPlatform};

use crate::path;
use crate::report::Issue;

/// A profile that cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The document is not valid JSON or does not have the profile shape.
    #[error("invalid profile: {0}")]
    Parse(Issue),
    /// The document parsed but breaks structural rules.
    #[error("invalid profile: {} structural issue(s)", .0.len())]
    Shape(Vec<Issue>),
    /// The profile file could not be read.
    #[error("failed to read profile {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}

impl ProfileError {
    /// Returns every issue carried by this error.
    pub fn issues(&self) -> Vec<Issue> {
        match self {
            ProfileError::Parse(issue) => vec![issue.clone()],
            ProfileError::Shape(issues) => issues.clone(),
            ProfileError::Io { .. } => Vec::new(),
        }
    }
}

/// Parses and structurally validates a profile document.
///
/// # Errors
///
/// Returns [`ProfileError::Parse`] when the JSON does not deserialize into a
/// profile and [`ProfileError::Shape`] with every structural issue when it
/// does but breaks a rule.
pub fn parse_aircraft_profile(json: &str) -> Result<AircraftProfile, ProfileError> {
    let profile: AircraftProfile = serde_json::from_str(json)
        .map_err(|e| ProfileError::Parse(Issue::error(path![], e.to_string())))?;
    let issues = check_shape(&profile);
    if issues.is_empty() {
        Ok(profile)
    } else {
        Err(ProfileError::Shape(issues))
    }
}

/// Collects every structural issue of an already-parsed profile.
pub fn check_shape(profile: &AircraftProfile) -> Vec<Issue> {
    let mut issues = Vec::new();
    if profile.aircraft_name.is_empty() {
        issues.push(Issue::error(path!["aircraftName"], "must not be empty"));
    }
    if profile.profile_name.as_deref() == Some("") {
        issues.push(Issue::error(path!["profileName"], "must not be empty"));
    }
    for &platform in SimPlatform::ALL {
        let Some(overrides) = profile.platform_overrides(platform) else {
            continue;
        };
        let key = platform.profile_key();
        for (name, descriptor) in overrides.iter() {
            let category = name.category();
            if let Some(o) = &descriptor.descriptor {
                if let Some(keys) = &o.map_keys {
                    let mut seen = BTreeSet::new();
                    for (i, k) in keys.iter().enumerate() {
                        if !seen.insert(k.as_str()) {
                            issues.push(Issue::error(
                                path![key, category, name, "descriptor", "mapKeys", i],
                                format!("duplicate map key '{k}'"),
                            ));
                        }
                    }
                }
                if let Some(range) = o.range {
                    if range.min > range.max {
                        issues.push(Issue::error(
                            path![key, category, name, "descriptor", "range"],
                            format!("minimum {} exceeds maximum {}", range.min, range.max),
                        ));
                    }
                }
            }
            if descriptor.dataref.as_deref() == Some("") {
                issues.push(Issue::error(
                    path![key, category, name, "dataref"],
                    "must not be empty",
                ));
            }
            if let Some(command) = &descriptor.command {
                if command.command.is_empty() {
                    issues.push(Issue::error(
                        path![key, category, name, "command", "ref"],
                        "must not be empty",
                    ));
                }
            }
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures;

    fn shape_paths(json: &str) -> Vec<Vec<String>> {
        match parse_aircraft_profile(json) {
            Err(ProfileError::Shape(issues)) => issues.iter().map(Issue::path_strings).collect(),
            other => vec![vec![format!("{other:?}")]],
        }
    }

    #[test]
    fn accepts_valid_profile() {
        assert!(parse_aircraft_profile(fixtures::FLAPS_SETPOINTS).is_ok());
    }

    #[test]
    fn misplaced_field_is_a_parse_error() {
        let err = parse_aircraft_profile(fixtures::MISPLACED_FIELD);
        let misplaced = matches!(
            &err,
            Err(ProfileError::Parse(issue)) if issue.message.contains("does not belong to category")
        );
        assert!(misplaced, "{err:?}");
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let json = r#"{"aircraftCode":"x","aircraftName":"X","xplane":{"levers":{"warpDrive":{}}}}"#;
        assert!(matches!(parse_aircraft_profile(json), Err(ProfileError::Parse(_))));
    }

    #[test]
    fn empty_dataref_is_rejected() {
        let json = r#"{
            "aircraftCode": "x",
            "aircraftName": "X",
            "xplane": {"levers": {"throttlePercentOpen": {"dataref": ""}}}
        }"#;
        let paths = shape_paths(json);
        assert_eq!(
            paths,
            vec![["xplane", "levers", "throttlePercentOpen", "dataref"]
                .map(str::to_owned)
                .to_vec()]
        );
    }

    #[test]
    fn collects_every_structural_issue() {
        let paths = shape_paths(fixtures::STRUCTURALLY_BROKEN);
        assert_eq!(
            paths,
            vec![
                vec!["aircraftName".to_owned()],
                vec!["profileName".to_owned()],
                ["xplane", "levers", "throttlePercentOpen", "descriptor", "mapKeys", "1"]
                    .map(str::to_owned)
                    .to_vec(),
                ["xplane", "levers", "throttlePercentOpen", "descriptor", "range"]
                    .map(str::to_owned)
                    .to_vec(),
                ["xplane", "levers", "throttlePercentOpen", "dataref"]
                    .map(str::to_owned)
                    .to_vec(),
                ["xplane", "simulation", "isPaused", "command", "ref"]
                    .map(str::to_owned)
                    .to_vec(),
            ]
        );
    }
}
