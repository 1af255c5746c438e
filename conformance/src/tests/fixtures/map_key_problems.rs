//! Profiles whose map keys disagree with the effective model.

/// A failure key the platforms cannot simulate.
pub const BOGUS_FAILURE_KEY: &str = r#"{
  "aircraftCode": "bogus",
  "aircraftName": "Bogus Failures",
  "xplane": {
    "failures": {
      "isFailed": { "descriptor": { "mapKeys": ["PitotBlockage", "Bogus"] } }
    }
  }
}"#;

/// Map keys on a scalar handle.
pub const MAP_KEYS_ON_SCALAR: &str = r#"{
  "aircraftCode": "scalar",
  "aircraftName": "Scalar Flaps",
  "xplane": {
    "levers": {
      "flapsHandlePercentDown": { "descriptor": { "mapKeys": ["Left", "Right"] } }
    }
  }
}"#;

/// A third native engine index with no matching map key.
pub const UNMAPPED_ARRAY_INDEX: &str = r#"{
  "aircraftCode": "trijet",
  "aircraftName": "Unmapped Trijet",
  "xplane": {
    "levers": {
      "throttlePercentOpen": {
        "descriptor": { "mapKeys": ["LeftEngine", "RightEngine"] },
        "arrayIndexNameMap": { "0": "LeftEngine", "1": "RightEngine", "2": "CenterEngine" }
      }
    }
  }
}"#;

/// Native index names on a map field that only has the default key.
pub const INDEX_WITHOUT_MAP_KEYS: &str = r#"{
  "aircraftCode": "defaults",
  "aircraftName": "Default Keys",
  "xplane": {
    "levers": {
      "conditionLeverPercentHigh": {
        "arrayIndexNameMap": { "0": "0", "1": "Left" }
      }
    }
  }
}"#;

/// Index names on a radio field; only the fixed radio keys are checked.
pub const SPECIAL_CASE_WITH_INDEX_MAP: &str = r#"{
  "aircraftCode": "radio",
  "aircraftName": "Single Radio",
  "xplane": {
    "radiosNavigation": {
      "frequencyHz": {
        "descriptor": { "mapKeys": ["com1"] },
        "arrayIndexNameMap": { "0": "whatever" }
      }
    }
  }
}"#;

/// A radio the platforms do not have.
pub const UNKNOWN_RADIO_KEY: &str = r#"{
  "aircraftCode": "radio3",
  "aircraftName": "Third Radio",
  "xplane": {
    "radiosNavigation": {
      "frequencyHz": { "descriptor": { "mapKeys": ["com1", "com3"] } }
    }
  }
}"#;

/// Three independent map-key problems in one profile.
pub const SEVERAL_MAP_KEY_PROBLEMS: &str = r#"{
  "aircraftCode": "several",
  "aircraftName": "Several Problems",
  "xplane": {
    "levers": {
      "flapsHandlePercentDown": { "descriptor": { "mapKeys": ["Inboard"] } },
      "throttlePercentOpen": {
        "descriptor": { "mapKeys": ["LeftEngine", "RightEngine"] },
        "arrayIndexNameMap": { "0": "LeftEngine", "2": "CenterEngine" }
      }
    },
    "failures": {
      "isFailed": { "descriptor": { "mapKeys": ["Bogus"] } }
    }
  }
}"#;
