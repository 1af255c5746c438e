//! Cessna Skyhawk 172SP.

use crate::model::{DescriptorOverride, Visibility};
use crate::names::DataName;
use crate::platform::PlatformDescriptor;
use crate::profile::{AircraftProfile, Setpoint, VSpeed};
use crate::profiles::generic;

/// Returns the Cessna 172SP profile, built on the generic fixed-gear single.
#[must_use]
pub fn profile() -> AircraftProfile {
    let base = generic::single_fixed_piston();
    let mut xplane = base.xplane.clone().unwrap_or_default();
    xplane.insert(
        DataName::EngineRpm,
        PlatformDescriptor::overriding(
            DescriptorOverride::visibility(Visibility::Always).with_description("max 2700"),
        ),
    );
    xplane.insert(
        DataName::PropellerRpm,
        PlatformDescriptor::overriding(DescriptorOverride::visibility(Visibility::Never)),
    );
    xplane.insert(
        DataName::ManifoldPressureInchesMercury,
        PlatformDescriptor::overriding(DescriptorOverride::visibility(Visibility::Tool)),
    );
    xplane.insert(
        DataName::MixtureLeverPercentRich,
        PlatformDescriptor::overriding(DescriptorOverride::visibility(Visibility::Always)),
    );
    xplane.insert(
        DataName::IsFlightDirectorEngaged,
        PlatformDescriptor::overriding(DescriptorOverride::visibility(Visibility::Never)),
    );

    AircraftProfile {
        aircraft_code: "c172sp".to_owned(),
        aircraft_name: "Cessna Skyhawk 172SP".to_owned(),
        profile_name: None,
        additional_details: Some(
            ["fixed gear", "flaps", "direct drive propeller"]
                .iter()
                .map(|d| (*d).to_owned())
                .collect(),
        ),
        xplane: Some(xplane),
        flaps_setpoints: Some(vec![
            Setpoint::new("Up", 0.0),
            Setpoint::new("Takeoff 10 degrees", 33.0),
            Setpoint::new("Landing 20 degrees", 67.0),
            Setpoint::new("Landing 30 degrees", 100.0),
        ]),
        aircraft_v_speeds: Some(vec![
            VSpeed::new("Vg", 68.0),
            VSpeed::new("Vso", 40.0),
            VSpeed::new("Vs", 48.0),
            VSpeed::new("Vr", 55.0),
            VSpeed::new("Vx", 62.0),
            VSpeed::new("Vy", 74.0),
            VSpeed::new("Va 2550", 105.0),
            VSpeed::new("Va 1900", 90.0),
            VSpeed::new("Vfe 10º", 110.0),
            VSpeed::new("Vfe >10º", 85.0),
            VSpeed::new("Vno", 129.0),
            VSpeed::new("Vne", 163.0),
        ]),
        ..base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_generic_failures_and_hides_propeller_rpm() {
        let profile = profile();
        let xplane = profile.xplane.unwrap_or_default();
        assert!(xplane.contains(DataName::IsFailed));
        let prop = xplane
            .get(DataName::PropellerRpm)
            .and_then(|d| d.descriptor.as_ref())
            .and_then(|d| d.visibility);
        assert_eq!(prop, Some(Visibility::Never));
        assert_eq!(profile.flaps_setpoints.map(|s| s.len()), Some(4));
        assert!(profile.speedbrakes_setpoints.is_none());
    }
}
