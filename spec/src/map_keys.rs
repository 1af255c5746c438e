//! Map key tables.
//!
//! Some map-typed fields are assembled from several native telemetry points
//! rather than a single array, so their valid keys come from fixed domain
//! knowledge instead of a descriptor's `mapKeys`. All such exceptions are
//! declared in [`SPECIAL_CASE_MAP_KEYS`].

use crate::names::DataName;

/// The single key used by a map-typed field that declares no `mapKeys`.
pub const DEFAULT_MAP_KEYS: &[&str] = &["0"];

/// Pitot-static failures.
pub const PITOT_STATIC_FAILURE_KEYS: &[&str] = &["PitotBlockage", "StaticBlockage"];

/// GPS and navigation receiver failures.
pub const IFR_FAILURE_KEYS: &[&str] = &["Gps1Failure", "Navigation1Failure", "Navigation2Failure"];

/// Electrical failures.
pub const ELECTRICAL_FAILURE_KEYS: &[&str] =
    &["Bus1Failure", "Battery1Failure", "Generator1Failure"];

/// Failures available on every IFR-equipped aircraft.
pub const STANDARD_FAILURE_KEYS: &[&str] = &[
    "PitotBlockage",
    "StaticBlockage",
    "Gps1Failure",
    "Navigation1Failure",
    "Navigation2Failure",
    "Bus1Failure",
    "Battery1Failure",
    "Generator1Failure",
];

/// Failures for IFR-equipped single-engine aircraft.
pub const SINGLE_ENGINE_FAILURE_KEYS: &[&str] = &[
    "PitotBlockage",
    "StaticBlockage",
    "Gps1Failure",
    "Navigation1Failure",
    "Navigation2Failure",
    "Bus1Failure",
    "Battery1Failure",
    "Generator1Failure",
    "EngineSeize",
];

/// Failures for IFR-equipped twin-engine aircraft.
pub const TWIN_ENGINE_FAILURE_KEYS: &[&str] = &[
    "PitotBlockage",
    "StaticBlockage",
    "Gps1Failure",
    "Navigation1Failure",
    "Navigation2Failure",
    "Bus1Failure",
    "Battery1Failure",
    "Generator1Failure",
    "LeftEngineSeize",
    "RightEngineSeize",
];

/// Every failure the platforms can simulate.
pub const ALL_FAILURE_KEYS: &[&str] = &[
    "PitotBlockage",
    "StaticBlockage",
    "Gps1Failure",
    "Navigation1Failure",
    "Navigation2Failure",
    "Bus1Failure",
    "Battery1Failure",
    "Generator1Failure",
    "EngineSeize",
    "LeftEngineSeize",
    "RightEngineSeize",
];

/// Every radio that can be installed.
pub const ALL_COM_KEYS: &[&str] = &["com1", "com2", "nav1", "nav2"];

/// Cloud layers, lowest first.
pub const CLOUD_LAYER_KEYS: &[&str] = &["low", "middle", "high"];

/// Wind layers, lowest first.
pub const WIND_LAYER_KEYS: &[&str] = &[
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13",
];

/// A field whose valid map keys are fixed by domain knowledge.
#[derive(Debug, Clone, Copy)]
pub struct SpecialCaseMapKeys {
    /// The field.
    pub name: DataName,
    /// The only keys a profile may declare for it.
    pub keys: &'static [&'static str],
}

/// Every special-case field.
pub const SPECIAL_CASE_MAP_KEYS: &[SpecialCaseMapKeys] = &[
    SpecialCaseMapKeys {
        name: DataName::IsFailed,
        keys: ALL_FAILURE_KEYS,
    },
    SpecialCaseMapKeys {
        name: DataName::ScheduledAtAltitudeFtAgl,
        keys: ALL_FAILURE_KEYS,
    },
    SpecialCaseMapKeys {
        name: DataName::ScheduledAtAirspeedKias,
        keys: ALL_FAILURE_KEYS,
    },
    SpecialCaseMapKeys {
        name: DataName::FrequencyHz,
        keys: ALL_COM_KEYS,
    },
    SpecialCaseMapKeys {
        name: DataName::StandbyFrequencyHz,
        keys: ALL_COM_KEYS,
    },
    SpecialCaseMapKeys {
        name: DataName::ComShouldSwapFrequencies,
        keys: ALL_COM_KEYS,
    },
];

/// Returns the fixed keys for a special-case field, `None` otherwise.
#[must_use]
pub fn special_case_map_keys(name: DataName) -> Option<&'static [&'static str]> {
    SPECIAL_CASE_MAP_KEYS
        .iter()
        .find(|s| s.name == name)
        .map(|s| s.keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::DataCategory;

    #[test]
    fn grouped_failure_keys_compose() {
        let standard: Vec<&str> = PITOT_STATIC_FAILURE_KEYS
            .iter()
            .chain(IFR_FAILURE_KEYS)
            .chain(ELECTRICAL_FAILURE_KEYS)
            .copied()
            .collect();
        assert_eq!(standard, STANDARD_FAILURE_KEYS);
        assert_eq!(&SINGLE_ENGINE_FAILURE_KEYS[..8], STANDARD_FAILURE_KEYS);
        assert_eq!(&TWIN_ENGINE_FAILURE_KEYS[..8], STANDARD_FAILURE_KEYS);
        for key in SINGLE_ENGINE_FAILURE_KEYS.iter().chain(TWIN_ENGINE_FAILURE_KEYS) {
            assert!(ALL_FAILURE_KEYS.contains(key), "{key} missing from ALL_FAILURE_KEYS");
        }
    }

    #[test]
    fn special_cases_cover_failures_and_radios() {
        assert_eq!(special_case_map_keys(DataName::IsFailed), Some(ALL_FAILURE_KEYS));
        assert_eq!(special_case_map_keys(DataName::FrequencyHz), Some(ALL_COM_KEYS));
        assert_eq!(special_case_map_keys(DataName::ThrottlePercentOpen), None);
        for entry in SPECIAL_CASE_MAP_KEYS {
            assert!(
                matches!(
                    entry.name.category(),
                    DataCategory::Failures | DataCategory::RadiosNavigation
                ),
                "{}",
                entry.name
            );
        }
    }
}
