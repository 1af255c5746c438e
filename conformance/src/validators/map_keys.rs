//! Map-key cross-check of a profile against its effective model.
//!
//! A profile declaring `mapKeys` or `arrayIndexNameMap` for a field can get
//! out of step with what the effective model displays. Every mismatch is a
//! non-fatal warning; all of them are collected.

use simdata_spec::{special_case_map_keys, AircraftProfile, DataModel, SimPlatform};

use crate::path;
use crate::report::Issue;

/// Validates the map keys of `profile`'s overrides for `platform` against
/// `effective`, which must be the profile's effective model on `platform`.
pub fn validate(
    profile: &AircraftProfile,
    effective: &DataModel,
    platform: SimPlatform,
) -> Vec<Issue> {
    let mut warnings = Vec::new();
    let Some(overrides) = profile.platform_overrides(platform) else {
        return warnings;
    };
    let key = platform.profile_key();

    for (name, descriptor) in overrides.iter() {
        let map_keys = descriptor
            .descriptor
            .as_ref()
            .and_then(|d| d.map_keys.as_ref());
        if map_keys.is_none() && descriptor.array_index_name_map.is_none() {
            continue;
        }
        let Some(effective_descriptor) = effective.get(name) else {
            continue;
        };
        let category = name.category();

        if !effective_descriptor.is_map() {
            warnings.push(Issue::warning(
                path![key, category, name, "descriptor", "mapKeys"],
                format!(
                    "Descriptor type '{}' does not support mapKeys. Only NumberMap, BooleanMap, and StringMap types support mapKeys.",
                    effective_descriptor.value_type
                ),
            ));
            continue;
        }

        if let Some(allowed) = special_case_map_keys(name) {
            let unmatched: Vec<&str> = map_keys
                .into_iter()
                .flatten()
                .map(String::as_str)
                .filter(|k| !allowed.contains(k))
                .collect();
            if !unmatched.is_empty() {
                warnings.push(Issue::warning(
                    path![key, category, name, "descriptor", "mapKeys"],
                    format!(
                        "'mapKeys' [{}] not found in special mapKeys for '{name}': [{}]",
                        unmatched.join(", "),
                        allowed.join(", ")
                    ),
                ));
            }
            continue;
        }

        if let Some(index_names) = &descriptor.array_index_name_map {
            let allowed = effective_descriptor.effective_map_keys();
            let unmatched: Vec<&str> = index_names
                .values()
                .map(String::as_str)
                .filter(|k| !allowed.contains(k))
                .collect();
            if !unmatched.is_empty() {
                warnings.push(Issue::warning(
                    path![key, category, name, "arrayIndexNameMap"],
                    format!(
                        "'arrayIndexNameMap' [{}] not found in model's mapKeys: [{}]",
                        unmatched.join(", "),
                        allowed.join(", ")
                    ),
                ));
            }
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use simdata_resolver::aircraft_profile_effective_model;
    use simdata_spec::Catalog;

    use crate::shape::parse_aircraft_profile;
    use crate::tests::fixtures;

    fn warnings(json: &str) -> Vec<Issue> {
        let Ok(profile) = parse_aircraft_profile(json) else {
            return vec![Issue::error(path![], "fixture failed to parse")];
        };
        let platform = SimPlatform::Xplane12;
        let effective = aircraft_profile_effective_model(
            Catalog::full().descriptors(),
            Some(&profile),
            platform,
        );
        validate(&profile, &effective, platform)
    }

    #[test]
    fn bogus_failure_key_warns_once() {
        let issues = warnings(fixtures::BOGUS_FAILURE_KEY);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].path_strings(),
            ["xplane", "failures", "isFailed", "descriptor", "mapKeys"]
        );
        assert!(issues[0].message.starts_with(
            "'mapKeys' [Bogus] not found in special mapKeys for 'isFailed': \
             [PitotBlockage, StaticBlockage,"
        ));
        assert!(!issues[0].is_error());
    }

    #[test]
    fn map_keys_on_scalar_field_warn() {
        let issues = warnings(fixtures::MAP_KEYS_ON_SCALAR);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].path_strings(),
            ["xplane", "levers", "flapsHandlePercentDown", "descriptor", "mapKeys"]
        );
        assert_eq!(
            issues[0].message,
            "Descriptor type 'Number' does not support mapKeys. Only NumberMap, BooleanMap, and StringMap types support mapKeys."
        );
    }

    #[test]
    fn array_index_names_outside_map_keys_warn() {
        let issues = warnings(fixtures::UNMAPPED_ARRAY_INDEX);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].path_strings(),
            ["xplane", "levers", "throttlePercentOpen", "arrayIndexNameMap"]
        );
        assert_eq!(
            issues[0].message,
            "'arrayIndexNameMap' [CenterEngine] not found in model's mapKeys: [LeftEngine, RightEngine]"
        );
    }

    #[test]
    fn default_map_keys_apply_without_declared_keys() {
        let issues = warnings(fixtures::INDEX_WITHOUT_MAP_KEYS);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "'arrayIndexNameMap' [Left] not found in model's mapKeys: [0]"
        );
    }

    #[test]
    fn special_case_skips_general_check() {
        let issues = warnings(fixtures::SPECIAL_CASE_WITH_INDEX_MAP);
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn unknown_radio_key_warns() {
        let issues = warnings(fixtures::UNKNOWN_RADIO_KEY);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].path_strings(),
            ["xplane", "radiosNavigation", "frequencyHz", "descriptor", "mapKeys"]
        );
        assert_eq!(
            issues[0].message,
            "'mapKeys' [com3] not found in special mapKeys for 'frequencyHz': \
             [com1, com2, nav1, nav2]"
        );
    }

    #[test]
    fn all_mismatches_are_collected() {
        let issues = warnings(fixtures::SEVERAL_MAP_KEY_PROBLEMS);
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn other_platforms_have_nothing_to_check() {
        let Ok(profile) = parse_aircraft_profile(fixtures::BOGUS_FAILURE_KEY) else {
            return;
        };
        let effective = Catalog::full().descriptors();
        assert!(validate(&profile, effective, SimPlatform::Msfs2020).is_empty());
    }
}
