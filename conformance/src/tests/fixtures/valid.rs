//! Profiles that pass every check.

/// A profile with nothing but names.
pub const NO_OVERRIDES: &str = r#"{
  "aircraftCode": "plain",
  "aircraftName": "Plain Aircraft"
}"#;

/// Flap setpoints on an otherwise unchanged aircraft.
pub const FLAPS_SETPOINTS: &str = r#"{
  "aircraftCode": "flapper",
  "aircraftName": "Flapper",
  "profileName": "Flapper with two notches",
  "flapsSetpoints": [
    { "name": "Up", "percent": 0 },
    { "name": "Landing", "percent": 100 }
  ]
}"#;

/// Two turboprops with named engine keys and native index mapping.
pub const TWIN_TURBOPROP: &str = r#"{
  "aircraftCode": "be20",
  "aircraftName": "Beechcraft King Air 200",
  "additionalDetails": ["twin turboprop", "retractable gear"],
  "xplane": {
    "levers": {
      "throttlePercentOpen": {
        "descriptor": { "mapKeys": ["LeftEngine", "RightEngine"] },
        "arrayIndexNameMap": { "0": "LeftEngine", "1": "RightEngine" }
      },
      "mixtureLeverPercentRich": {
        "descriptor": { "visibility": "Never" }
      },
      "landingGearHandlePercentDown": {
        "descriptor": { "visibility": "Always" }
      }
    },
    "indicators": {
      "engineTorqueFtLb": {
        "descriptor": { "visibility": "Always", "mapKeys": ["LeftEngine", "RightEngine"] },
        "arrayIndexNameMap": { "0": "LeftEngine", "1": "RightEngine" }
      }
    },
    "failures": {
      "isFailed": {
        "descriptor": { "mapKeys": ["PitotBlockage", "StaticBlockage", "LeftEngineSeize", "RightEngineSeize"] }
      }
    }
  },
  "aircraftVSpeeds": [
    { "name": "Vmc", "kias": 86 },
    { "name": "Vyse", "kias": 121 }
  ]
}"#;
