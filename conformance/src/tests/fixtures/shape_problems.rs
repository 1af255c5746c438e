//! Profiles with structural problems.

/// A systems field placed under `levers`.
pub const MISPLACED_FIELD: &str = r#"{
  "aircraftCode": "misplaced",
  "aircraftName": "Misplaced",
  "xplane": {
    "levers": {
      "batteryOn": { "descriptor": { "visibility": "Always" } }
    }
  }
}"#;

/// Parses, but breaks six structural rules.
pub const STRUCTURALLY_BROKEN: &str = r#"{
  "aircraftCode": "broken",
  "aircraftName": "",
  "profileName": "",
  "xplane": {
    "levers": {
      "throttlePercentOpen": {
        "descriptor": {
          "mapKeys": ["LeftEngine", "LeftEngine"],
          "range": [100, 0]
        },
        "dataref": ""
      }
    },
    "simulation": {
      "isPaused": { "command": { "ref": "" } }
    }
  }
}"#;
