//! Generic profiles for broad aircraft classes.

use crate::map_keys::{SINGLE_ENGINE_FAILURE_KEYS, TWIN_ENGINE_FAILURE_KEYS};
use crate::model::{DescriptorOverride, Visibility};
use crate::names::DataName;
use crate::platform::{PlatformDescriptor, PlatformModel};
use crate::profile::{AircraftProfile, Setpoint};

const TWIN_ENGINES: &[&str] = &["LeftEngine", "RightEngine"];
const TWIN_PROPS: &[&str] = &["LeftProp", "RightProp"];
const PROP_LEVER_DESCRIPTION: &str = "handle position converted from target RPM at full power";
const THROTTLE_DESCRIPTION: &str =
    "0 to 100% forward; 0 to -100% is beta; -100 to -200% is reverse";
const ROTOR_DESCRIPTION: &str = "whereas pilot sees percent of max";

fn shown() -> PlatformDescriptor {
    PlatformDescriptor::overriding(DescriptorOverride::visibility(Visibility::Always))
}

fn hidden() -> PlatformDescriptor {
    PlatformDescriptor::overriding(DescriptorOverride::visibility(Visibility::Never))
}

fn shown_with(description: &str) -> PlatformDescriptor {
    PlatformDescriptor::overriding(
        DescriptorOverride::visibility(Visibility::Always).with_description(description),
    )
}

/// A per-engine field whose native array indices map, in order, to `keys`.
fn per_engine(keys: &[&str], descriptor: DescriptorOverride) -> PlatformDescriptor {
    PlatformDescriptor::default()
        .with_array_keys(keys)
        .with_descriptor(descriptor.with_map_keys(keys))
}

fn shown_per_engine(keys: &[&str]) -> PlatformDescriptor {
    per_engine(keys, DescriptorOverride::visibility(Visibility::Always))
}

fn failures(keys: &[&str]) -> [(DataName, PlatformDescriptor); 3] {
    let narrowed =
        || PlatformDescriptor::overriding(DescriptorOverride::default().with_map_keys(keys));
    [
        (DataName::IsFailed, narrowed()),
        (DataName::ScheduledAtAirspeedKias, narrowed()),
        (DataName::ScheduledAtAltitudeFtAgl, narrowed()),
    ]
}

fn autopilot_disabled() -> [(DataName, PlatformDescriptor); 7] {
    [
        (DataName::IsAutopilotEngaged, hidden()),
        (DataName::IsFlightDirectorEngaged, hidden()),
        (DataName::IsHeadingSelectEnabled, hidden()),
        (DataName::AltitudeMode, hidden()),
        (DataName::MagneticHeadingBugDeg, hidden()),
        (DataName::AltitudeBugFt, hidden()),
        (DataName::TargetVerticalSpeedUpFpm, hidden()),
    ]
}

fn profile(
    code: &str,
    name: &str,
    profile_name: &str,
    details: &[&str],
    xplane: PlatformModel,
) -> AircraftProfile {
    AircraftProfile {
        profile_name: Some(profile_name.to_owned()),
        additional_details: Some(details.iter().map(|d| (*d).to_owned()).collect()),
        xplane: Some(xplane),
        ..AircraftProfile::new(code, name)
    }
}

/// Single-engine piston aircraft with fixed gear.
#[must_use]
pub fn single_fixed_piston() -> AircraftProfile {
    let xplane = [
        (DataName::MixtureLeverPercentRich, shown()),
        (DataName::LandingGearHandlePercentDown, hidden()),
        (DataName::PropellerRpm, shown()),
        (DataName::ManifoldPressureInchesMercury, shown()),
    ]
    .into_iter()
    .chain(failures(SINGLE_ENGINE_FAILURE_KEYS))
    .collect();
    profile(
        "genericSingleFixedPiston",
        "Other Single Engine Fixed-Gear Piston Aircraft",
        "Generic Single Engine Piston with Fixed Gear",
        &["Single-engine piston aircraft", "fixed landing gear"],
        xplane,
    )
}

/// Minimally electric carbureted single with one radio and no autopilot.
#[must_use]
pub fn simple_carbureted_single_fixed_piston() -> AircraftProfile {
    let single_radio = || {
        PlatformDescriptor::overriding(
            DescriptorOverride::default().with_map_keys(&["com1", "nav1"]),
        )
    };
    let xplane = [
        (DataName::FrequencyHz, single_radio()),
        (DataName::StandbyFrequencyHz, single_radio()),
        (DataName::ComShouldSwapFrequencies, single_radio()),
        (DataName::MixtureLeverPercentRich, shown()),
        (DataName::LandingGearHandlePercentDown, hidden()),
        (DataName::CarburetorHeatLeverPercentHot, shown()),
        (DataName::EngineRpm, shown()),
        (DataName::ManifoldPressureInchesMercury, hidden()),
        (DataName::YawStringRightSideslipDeg, shown()),
    ]
    .into_iter()
    .chain(failures(SINGLE_ENGINE_FAILURE_KEYS))
    .chain(autopilot_disabled())
    .collect();
    profile(
        "genericSingleFixedPiston",
        "Other Single Engine Fixed-Gear Piston Aircraft",
        "Generic Single Engine Piston with Fixed Gear",
        &[
            "Single-engine piston aircraft",
            "fixed landing gear",
            "direct drive fixed pitch propeller",
            "single radio",
        ],
        xplane,
    )
}

/// Single-engine piston with retractable gear and a variable-pitch propeller.
#[must_use]
pub fn single_complex_piston() -> AircraftProfile {
    let xplane = [
        (DataName::MixtureLeverPercentRich, shown()),
        (
            DataName::PropellerLeverPercentCoarse,
            shown_with(PROP_LEVER_DESCRIPTION),
        ),
        (DataName::PropellerRpm, shown()),
        (DataName::ManifoldPressureInchesMercury, shown()),
    ]
    .into_iter()
    .chain(failures(SINGLE_ENGINE_FAILURE_KEYS))
    .collect();
    profile(
        "genericSingleComplexPiston",
        "Other Single Engine Complex Piston Aircraft",
        "Generic Complex Single Engine Piston",
        &[
            "Single-engine piston aircraft",
            "retractable landing gear",
            "variable-pitch propeller",
        ],
        xplane,
    )
}

/// Single-engine turboprop.
#[must_use]
pub fn single_complex_turbine() -> AircraftProfile {
    let xplane = [
        (DataName::ConditionLeverPercentHigh, shown()),
        (
            DataName::PropellerLeverPercentCoarse,
            shown_with(PROP_LEVER_DESCRIPTION),
        ),
        (DataName::EngineN1Percent, shown()),
        (DataName::PropellerRpm, shown()),
        (DataName::EngineTorqueFtLb, shown()),
        (DataName::EngineIttDegC, shown()),
    ]
    .into_iter()
    .chain(failures(SINGLE_ENGINE_FAILURE_KEYS))
    .collect();
    profile(
        "genericSingleComplexTurbine",
        "Other Single Turbine Complex Aircraft",
        "Generic Complex Single Engine Turbine",
        &[
            "Single-engine turboprop aircraft",
            "retractable landing gear",
            "variable-pitch propeller",
        ],
        xplane,
    )
}

/// Twin-engine turboprop.
#[must_use]
pub fn twin_turbine() -> AircraftProfile {
    let xplane = [
        (
            DataName::ThrottlePercentOpen,
            per_engine(
                TWIN_ENGINES,
                DescriptorOverride::default().with_description(THROTTLE_DESCRIPTION),
            ),
        ),
        (
            DataName::ConditionLeverPercentHigh,
            per_engine(
                TWIN_ENGINES,
                DescriptorOverride::visibility(Visibility::Always)
                    .with_description("position 0-100%"),
            ),
        ),
        (
            DataName::PropellerLeverPercentCoarse,
            per_engine(
                TWIN_PROPS,
                DescriptorOverride::visibility(Visibility::Always)
                    .with_description(PROP_LEVER_DESCRIPTION),
            ),
        ),
        (DataName::EngineN1Percent, shown_per_engine(TWIN_ENGINES)),
        (DataName::PropellerRpm, shown_per_engine(TWIN_PROPS)),
        (DataName::EngineTorqueFtLb, shown_per_engine(TWIN_ENGINES)),
        (DataName::EngineIttDegC, shown_per_engine(TWIN_ENGINES)),
    ]
    .into_iter()
    .chain(failures(TWIN_ENGINE_FAILURE_KEYS))
    .collect();
    profile(
        "genericTwinTurbine",
        "Other Twin Turbine Aircraft",
        "Generic Multiengine Turbine",
        &[
            "Twin-engine turboprop aircraft",
            "retractable landing gear",
            "variable-pitch propellers",
        ],
        xplane,
    )
}

/// Twin-engine piston.
#[must_use]
pub fn twin_piston() -> AircraftProfile {
    let xplane = [
        (
            DataName::ThrottlePercentOpen,
            per_engine(TWIN_ENGINES, DescriptorOverride::default()),
        ),
        (DataName::MixtureLeverPercentRich, shown_per_engine(TWIN_ENGINES)),
        (
            DataName::PropellerLeverPercentCoarse,
            per_engine(
                TWIN_ENGINES,
                DescriptorOverride::visibility(Visibility::Always)
                    .with_description(PROP_LEVER_DESCRIPTION),
            ),
        ),
        (DataName::PropellerRpm, shown_per_engine(TWIN_PROPS)),
    ]
    .into_iter()
    .chain(failures(TWIN_ENGINE_FAILURE_KEYS))
    .collect();
    profile(
        "genericTwinPiston",
        "Other Twin Piston Aircraft",
        "Generic Multiengine Piston",
        &[
            "Twin-engine piston aircraft",
            "retractable landing gear",
            "variable-pitch propellers",
        ],
        xplane,
    )
}

/// Single-engine jet.
#[must_use]
pub fn single_jet() -> AircraftProfile {
    let xplane = [
        (
            DataName::ThrottlePercentOpen,
            PlatformDescriptor::overriding(
                DescriptorOverride::default().with_description(THROTTLE_DESCRIPTION),
            ),
        ),
        (DataName::EngineN1Percent, shown()),
        (DataName::ExhaustGasDegC, shown()),
    ]
    .into_iter()
    .chain(failures(SINGLE_ENGINE_FAILURE_KEYS))
    .collect();
    profile(
        "genericSingleJet",
        "Other Single Jet Aircraft",
        "Generic Single-Engine Jet",
        &["Single-engine jet aircraft", "retractable landing gear"],
        xplane,
    )
}

/// Twin-engine jet with speedbrakes.
#[must_use]
pub fn twin_jet() -> AircraftProfile {
    let xplane = [
        (
            DataName::ThrottlePercentOpen,
            per_engine(
                TWIN_ENGINES,
                DescriptorOverride::default().with_description(THROTTLE_DESCRIPTION),
            ),
        ),
        (DataName::SpeedBrakesHandlePercentDeployed, shown()),
        (DataName::EngineN1Percent, shown_per_engine(TWIN_ENGINES)),
        (DataName::ExhaustGasDegC, shown_per_engine(TWIN_ENGINES)),
    ]
    .into_iter()
    .chain(failures(TWIN_ENGINE_FAILURE_KEYS))
    .collect();
    AircraftProfile {
        speedbrakes_setpoints: Some(vec![
            Setpoint::new("Retracted", 0.0),
            Setpoint::new("Half", 50.0),
            Setpoint::new("Full", 100.0),
        ]),
        ..profile(
            "genericTwinJet",
            "Other Twin Jet Aircraft",
            "Generic Twin-Engine Jet",
            &["Twin-engine jet aircraft", "retractable landing gear"],
            xplane,
        )
    }
}

/// Single-engine piston helicopter with a throttle governor.
#[must_use]
pub fn single_piston_helicopter() -> AircraftProfile {
    let xplane = [
        (DataName::ThrottlePercentOpen, shown()),
        (DataName::CollectivePercentUp, shown()),
        (DataName::FlapsHandlePercentDown, hidden()),
        (DataName::LandingGearHandlePercentDown, hidden()),
        (DataName::RotorRpm, shown_with(ROTOR_DESCRIPTION)),
        (DataName::EngineRpm, shown_with(ROTOR_DESCRIPTION)),
        (DataName::ManifoldPressureInchesMercury, shown()),
        (DataName::LowRotorRpmWarningOn, shown()),
        (DataName::StallWarningOn, hidden()),
        (DataName::GovernorSwitchOn, shown()),
        (DataName::ParkingBrakeOn, hidden()),
    ]
    .into_iter()
    .chain(failures(SINGLE_ENGINE_FAILURE_KEYS))
    .chain(autopilot_disabled())
    .collect();
    profile(
        "genericSinglePistonHelicopter",
        "Other Single Engine Piston Helicopter",
        "Generic Single Engine Piston Helicopter",
        &["throttle governor", "piston engine"],
        xplane,
    )
}

/// Single-turbine helicopter.
#[must_use]
pub fn single_turbine_helicopter() -> AircraftProfile {
    let xplane = [
        (DataName::CollectivePercentUp, shown()),
        (DataName::FlapsHandlePercentDown, hidden()),
        (DataName::LandingGearHandlePercentDown, hidden()),
        (DataName::RotorRpm, shown_with(ROTOR_DESCRIPTION)),
        (DataName::EngineN1Percent, shown()),
        (DataName::EngineTorqueFtLb, shown()),
        (DataName::EngineIttDegC, shown()),
        (DataName::LowRotorRpmWarningOn, shown()),
        (DataName::StallWarningOn, hidden()),
    ]
    .into_iter()
    .chain(failures(SINGLE_ENGINE_FAILURE_KEYS))
    .collect();
    profile(
        "genericSingleTurbineHelicopter",
        "Other Single Turbine Helicopter",
        "Generic Single Turbine Engine Helicopter",
        &["Throttle governor"],
        xplane,
    )
}

/// Twin-turbine helicopter.
#[must_use]
pub fn twin_turbine_helicopter() -> AircraftProfile {
    let xplane = [
        (DataName::CollectivePercentUp, shown()),
        (DataName::FlapsHandlePercentDown, hidden()),
        (DataName::RotorRpm, shown_with(ROTOR_DESCRIPTION)),
        (DataName::EngineN1Percent, shown_per_engine(TWIN_ENGINES)),
        (DataName::EngineTorqueFtLb, shown_per_engine(TWIN_ENGINES)),
        (DataName::EngineIttDegC, shown_per_engine(TWIN_ENGINES)),
        (DataName::LowRotorRpmWarningOn, shown()),
        (DataName::StallWarningOn, hidden()),
    ]
    .into_iter()
    .chain(failures(TWIN_ENGINE_FAILURE_KEYS))
    .collect();
    profile(
        "genericTwinTurbineHelicopter",
        "Other Twin Turbine Helicopter",
        "Generic Twin Turbine Helicopter",
        &["Throttle governors"],
        xplane,
    )
}

/// Every generic profile.
#[must_use]
pub fn all() -> Vec<AircraftProfile> {
    vec![
        single_fixed_piston(),
        simple_carbureted_single_fixed_piston(),
        single_complex_piston(),
        single_complex_turbine(),
        twin_turbine(),
        twin_piston(),
        single_jet(),
        twin_jet(),
        single_piston_helicopter(),
        single_turbine_helicopter(),
        twin_turbine_helicopter(),
    ]
}
