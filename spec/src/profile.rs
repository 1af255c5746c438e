//! Aircraft profile documents.
//!
//! A profile names an aircraft and carries per-platform adapter overrides
//! plus optional flap/speedbrake setpoints and V-speeds. Parsing rejects
//! unknown keys at every level.

use serde::{Deserialize, Serialize};

use crate::model::SimPlatform;
use crate::platform::PlatformModel;

/// A named handle position, in percent of full travel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Setpoint {
    /// Setpoint name, e.g. `"Takeoff"`.
    pub name: String,
    /// Handle position in percent.
    pub percent: f64,
}

impl Setpoint {
    /// Creates a setpoint.
    #[must_use]
    pub fn new(name: impl Into<String>, percent: f64) -> Self {
        Setpoint {
            name: name.into(),
            percent,
        }
    }
}

/// A named reference speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VSpeed {
    /// Speed name, e.g. `"Vr"`.
    pub name: String,
    /// Indicated airspeed in knots.
    pub kias: f64,
}

impl VSpeed {
    /// Creates a V-speed.
    #[must_use]
    pub fn new(name: impl Into<String>, kias: f64) -> Self {
        VSpeed {
            name: name.into(),
            kias,
        }
    }
}

/// Aircraft-specific overrides and metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AircraftProfile {
    /// Tracking code of the aircraft.
    pub aircraft_code: String,
    /// Aircraft name. Must not be empty.
    pub aircraft_name: String,
    /// Profile name when it differs from the aircraft name. Must not be empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    /// Free-form details, e.g. `"fixed gear"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_details: Option<Vec<String>>,
    /// X-Plane adapter overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xplane: Option<PlatformModel>,
    /// Flap handle setpoints. `Some(vec![])` means no setpoints exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flaps_setpoints: Option<Vec<Setpoint>>,
    /// Speedbrake handle setpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speedbrakes_setpoints: Option<Vec<Setpoint>>,
    /// Named reference speeds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft_v_speeds: Option<Vec<VSpeed>>,
}

impl AircraftProfile {
    /// Creates a profile with no overrides.
    #[must_use]
    pub fn new(aircraft_code: impl Into<String>, aircraft_name: impl Into<String>) -> Self {
        AircraftProfile {
            aircraft_code: aircraft_code.into(),
            aircraft_name: aircraft_name.into(),
            ..AircraftProfile::default()
        }
    }

    /// Returns the adapter overrides this profile declares for `platform`.
    #[must_use]
    pub fn platform_overrides(&self, platform: SimPlatform) -> Option<&PlatformModel> {
        match platform {
            SimPlatform::Xplane12 => self.xplane.as_ref(),
            SimPlatform::Msfs2020 => None,
        }
    }
}
