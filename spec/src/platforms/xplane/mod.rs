//! X-Plane 12 adapter layer.
//!
//! [`base_descriptors`] maps fields to X-Plane datarefs and commands before
//! any aircraft profile overrides are applied. Base descriptors never carry a
//! generic `descriptor` override; those only come from profiles.
//!
//! Fields assembled from several datarefs (failures, radio frequencies,
//! cloud and wind layer enables, propeller lever, current weather) have no
//! entry here; the transport handles them as special cases.

pub mod commands;
pub mod datarefs;

use std::sync::OnceLock;

use crate::map_keys::{CLOUD_LAYER_KEYS, WIND_LAYER_KEYS};
use crate::names::DataName;
use crate::platform::{PlatformDescriptor, PlatformModel};

const FEET_PER_METER: f64 = 3.28084;
const FT_LB_PER_NM: f64 = 0.737562;
const KTS_PER_METER_PER_SECOND: f64 = 1.94384;
const HZ_PER_DECI_HZ: f64 = 10.0;
const INCHES_MERCURY_PER_PASCAL: f64 = 1.0 / 3386.39;
const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;
const POUNDS_PER_KILOGRAM: f64 = 2.20462;

/// Returns the base X-Plane 12 platform descriptors.
#[must_use]
pub fn base_descriptors() -> &'static PlatformModel {
    static BASE: OnceLock<PlatformModel> = OnceLock::new();
    BASE.get_or_init(build)
}

fn build() -> PlatformModel {
    use crate::platforms::xplane::commands as cmd;
    use crate::platforms::xplane::datarefs::{
        aircraft, cockpit, cockpit2, flightmodel, time, weather,
    };
    use DataName::*;

    let dr = PlatformDescriptor::dataref;

    [
        // position
        (LatitudeDeg, dr(flightmodel::LATITUDE)),
        (LongitudeDeg, dr(flightmodel::LONGITUDE)),
        (AglAltitudeFt, dr(flightmodel::Y_AGL).with_ratio(FEET_PER_METER)),
        (MslAltitudeFt, dr(flightmodel::ELEVATION).with_ratio(FEET_PER_METER)),
        (IndicatedAirspeedKts, dr(flightmodel::INDICATED_AIRSPEED)),
        (
            GpsGroundSpeedKts,
            dr(flightmodel::GROUNDSPEED).with_ratio(KTS_PER_METER_PER_SECOND),
        ),
        (VerticalSpeedUpFpm, dr(flightmodel::VH_IND_FPM)),
        // attitude
        (RollAngleDegRight, dr(flightmodel::PHI)),
        (PitchAngleDegUp, dr(flightmodel::THETA)),
        (MagneticHeadingDeg, dr(flightmodel::MAG_PSI)),
        (TrueHeadingDeg, dr(flightmodel::PSI)),
        (TrueGroundTrackDeg, dr(flightmodel::HPATH)),
        // radios: frequencies are assembled per radio, only the unit ratio is shared
        (
            FrequencyHz,
            PlatformDescriptor::default().with_ratio(HZ_PER_DECI_HZ),
        ),
        (
            StandbyFrequencyHz,
            PlatformDescriptor::default().with_ratio(HZ_PER_DECI_HZ),
        ),
        (TransponderCode, dr(cockpit::TRANSPONDER_CODE)),
        // lights
        (LandingLightsSwitchOn, dr(cockpit2::LANDING_LIGHTS_ON)),
        (TaxiLightsSwitchOn, dr(cockpit2::TAXI_LIGHT_ON)),
        (NavigationLightsSwitchOn, dr(cockpit2::NAVIGATION_LIGHTS_ON)),
        (StrobeLightsSwitchOn, dr(cockpit2::STROBE_LIGHTS_ON)),
        // indicators
        (EngineRpm, dr(cockpit2::ENGINE_SPEED_RPM)),
        (RotorRpm, dr(cockpit2::PROP_SPEED_RPM)),
        (PropellerRpm, dr(cockpit2::PROP_SPEED_RPM)),
        (EngineN1Percent, dr(cockpit2::N1_PERCENT)),
        (ManifoldPressureInchesMercury, dr(cockpit2::MPR_IN_HG)),
        (
            EngineTorqueFtLb,
            dr(cockpit2::TORQUE_N_MTR).with_ratio(FT_LB_PER_NM),
        ),
        (TurbineGasTemperatureDegC, dr(cockpit2::EGT_DEG_C)),
        (EngineIttDegC, dr(cockpit2::ITT_DEG_C)),
        (ExhaustGasDegC, dr(cockpit2::EGT_DEG_C)),
        (LowRotorRpmWarningOn, dr(flightmodel::LOW_ROTOR_SPEED)),
        (TotalEnergyVariometerFpm, dr(cockpit2::TOTAL_ENERGY_FPM)),
        (StallWarningOn, dr(cockpit2::STALL_WARNING)),
        (AltimeterSettingInchesMercury, dr(cockpit2::BAROMETER_SETTING_IN_HG)),
        // full right deflection reads -8 degrees
        (
            SlipSkidBallRightDeflectionPercent,
            dr(cockpit2::SLIP_DEG).with_ratio(-100.0 / 8.0),
        ),
        (YawStringRightSideslipDeg, dr(cockpit2::SIDESLIP_DEG)),
        // levers
        (FlapsHandlePercentDown, dr(cockpit2::FLAP_RATIO).with_ratio(100.0)),
        (
            SpeedBrakesHandlePercentDeployed,
            dr(cockpit2::SPEEDBRAKE_RATIO).with_ratio(100.0),
        ),
        (
            LandingGearHandlePercentDown,
            dr(cockpit2::GEAR_HANDLE_DOWN).with_ratio(100.0),
        ),
        (
            ThrottlePercentOpen,
            dr(cockpit2::THROTTLE_BETA_REV_RATIO).with_ratio(100.0),
        ),
        (CollectivePercentUp, dr(cockpit2::COLLECTIVE_RATIO).with_ratio(100.0)),
        (
            ConditionLeverPercentHigh,
            dr(cockpit2::MIXTURE_RATIO).with_ratio(100.0),
        ),
        (MixtureLeverPercentRich, dr(cockpit2::MIXTURE_RATIO).with_ratio(100.0)),
        (
            CarburetorHeatLeverPercentHot,
            dr(flightmodel::CARB_HEAT_RATIO).with_ratio(100.0),
        ),
        (
            PropBetaEnabled,
            dr(cockpit2::PROP_BETA).with_command(cmd::PROP_BETA_TOGGLE),
        ),
        // autopilot
        (
            IsAutopilotEngaged,
            dr(cockpit2::AUTOPILOT_SERVOS_ON).with_command(cmd::AUTOPILOT_SERVOS_TOGGLE),
        ),
        (
            IsHeadingSelectEnabled,
            dr(cockpit2::AUTOPILOT_HEADING_STATUS).with_command(cmd::HEADING_MODE_TOGGLE),
        ),
        (
            IsFlightDirectorEngaged,
            dr(cockpit2::FLIGHT_DIRECTOR_MODE).with_command(cmd::FLIGHT_DIRECTOR_TOGGLE),
        ),
        (
            AltitudeMode,
            dr(cockpit2::AUTOPILOT_ALTITUDE_MODE).with_enum_values(&[
                ("disabled", 12.0),
                ("pitch", 3.0),
                ("verticalSpeed", 4.0),
                ("levelChange", 5.0),
                ("altitudeHold", 6.0),
                ("terrain", 7.0),
                ("glideSlope", 8.0),
                ("VNAV", 9.0),
                ("TOGA", 10.0),
                ("flightPathAngle", 19.0),
                ("VNAVSpeed", 20.0),
            ]),
        ),
        (TargetVerticalSpeedUpFpm, dr(cockpit::AUTOPILOT_VERTICAL_VELOCITY)),
        (ShouldLevelWings, PlatformDescriptor::command(cmd::RETURN_TO_LEVEL)),
        (MagneticHeadingBugDeg, dr(cockpit::AUTOPILOT_HEADING_MAG)),
        (AltitudeBugFt, dr(cockpit::AUTOPILOT_ALTITUDE)),
        // systems
        (BatteryOn, dr(cockpit2::BATTERY_ON)),
        (PitotHeatSwitchOn, dr(cockpit::PITOT_HEAT_ON)),
        (ParkingBrakeOn, dr(flightmodel::PARKING_BRAKE_RATIO)),
        (GovernorSwitchOn, dr(cockpit2::GOVERNOR_ON)),
        (TotalEnergyAudioSwitchOn, dr(cockpit::TOTAL_ENERGY_AUDIO)),
        (PropHeatSwitchOn, dr(cockpit2::PROP_HEAT_ON)),
        // weight and balance
        (
            TotalWeightLbs,
            dr(flightmodel::WEIGHT_TOTAL_KG).with_ratio(POUNDS_PER_KILOGRAM),
        ),
        (CenterOfGravityPercentMac, dr(flightmodel::CG_Z_REF)),
        // environment
        (AircraftWindHeadingDeg, dr(weather::WIND_DIRECTION_DEGT)),
        (
            AircraftWindSpeedKts,
            dr(weather::WIND_SPEED_MSC).with_ratio(KTS_PER_METER_PER_SECOND),
        ),
        (
            ZuluTimeHours,
            dr(time::ZULU_TIME_SEC).with_ratio(1.0 / SECONDS_PER_HOUR),
        ),
        (DayOfYear, dr(time::LOCAL_DATE_DAYS)),
        (
            CloudLayerBasesAltitudeFtMsl,
            dr(weather::CLOUD_BASE_MSL_M)
                .with_ratio(FEET_PER_METER)
                .with_array_keys(CLOUD_LAYER_KEYS),
        ),
        (
            CloudLayerTopsAltitudeFtMsl,
            dr(weather::CLOUD_TOPS_MSL_M)
                .with_ratio(FEET_PER_METER)
                .with_array_keys(CLOUD_LAYER_KEYS),
        ),
        (
            CloudLayerType,
            dr(weather::CLOUD_TYPE)
                .with_array_keys(CLOUD_LAYER_KEYS)
                .with_enum_values(&[
                    ("cirrus", 0.0),
                    ("stratus", 1.0),
                    ("cumulus", 2.0),
                    ("cumulonimbus", 3.0),
                ]),
        ),
        (
            CloudLayerCoveragePercent,
            dr(weather::CLOUD_COVERAGE_PERCENT)
                .with_ratio(100.0)
                .with_array_keys(CLOUD_LAYER_KEYS),
        ),
        (
            WindLayerAltitudeFt,
            dr(weather::WIND_ALTITUDE_MSL_M)
                .with_ratio(FEET_PER_METER)
                .with_array_keys(WIND_LAYER_KEYS),
        ),
        (
            WindLayerDirectionDeg,
            dr(weather::WIND_DIRECTION_DEGT_LAYERS).with_array_keys(WIND_LAYER_KEYS),
        ),
        (
            WindLayerSpeedKts,
            dr(weather::WIND_SPEED_MSC_LAYERS)
                .with_ratio(KTS_PER_METER_PER_SECOND)
                .with_array_keys(WIND_LAYER_KEYS),
        ),
        (
            WindLayerTurbulencePercent,
            dr(weather::TURBULENCE)
                .with_ratio(100.0)
                .with_array_keys(WIND_LAYER_KEYS),
        ),
        (
            WindLayerGustIncreaseKts,
            dr(weather::SHEAR_SPEED_MSC)
                .with_ratio(KTS_PER_METER_PER_SECOND)
                .with_array_keys(WIND_LAYER_KEYS),
        ),
        (
            SeaLevelPressureInchesMercury,
            dr(weather::SEALEVEL_PRESSURE_PAS).with_ratio(INCHES_MERCURY_PER_PASCAL),
        ),
        (
            RunwayFriction,
            dr(weather::RUNWAY_FRICTION).with_enum_values(&[
                ("dry", 0.0),
                ("lightlyWet", 1.0),
                ("wet", 2.0),
                ("veryWet", 3.0),
                ("lightlyPuddly", 4.0),
                ("puddly", 5.0),
                ("veryPuddly", 6.0),
                ("lightlySnowy", 7.0),
                ("snowy", 8.0),
                ("verySnowy", 9.0),
                ("lightlyIcy", 10.0),
                ("icy", 11.0),
                ("veryIcy", 12.0),
                ("lightlySnowyAndIcy", 13.0),
                ("snowyAndIcy", 14.0),
                ("verySnowyAndIcy", 15.0),
            ]),
        ),
        (RainPercent, dr(weather::RAIN_PERCENT).with_ratio(100.0)),
        (GroundTemperatureDegC, dr(weather::SEALEVEL_TEMPERATURE_C)),
        (
            ThermalClimbRateFpm,
            dr(weather::THERMAL_RATE_MS).with_ratio(FEET_PER_METER * SECONDS_PER_MINUTE),
        ),
        (
            WeatherEvolution,
            dr(weather::CHANGE_MODE).with_enum_values(&[
                ("improvingRapidly", 0.0),
                ("improving", 1.0),
                ("improvingSlowly", 2.0),
                ("static", 3.0),
                ("deterioratingSlowly", 4.0),
                ("deteriorating", 5.0),
                ("deterioratingRapidly", 6.0),
                ("realWorldWeather", 7.0),
            ]),
        ),
        (VisibilityMiles, dr(weather::VISIBILITY_REPORTED_SM)),
        (
            ShouldRegenerateWeather,
            PlatformDescriptor::command(cmd::REGENERATE_WEATHER),
        ),
        // simulation
        (AircraftName, dr(aircraft::NAME)),
        (
            IsPaused,
            dr(time::PAUSED).with_command(cmd::PAUSE_TOGGLE),
        ),
        (
            SimSpeedRatio,
            dr(time::SIM_SPEED).with_command(cmd::FLIGHT_MODEL_SPEED_CHANGE),
        ),
        (
            IsCrashed,
            dr(flightmodel::HAS_CRASHED).with_command(cmd::FIX_ALL_SYSTEMS),
        ),
        (ShouldResetFlight, PlatformDescriptor::command(cmd::RESET_FLIGHT)),
        // freezes: ground speed ratio 0 means frozen, so enabled = 1 - ratio
        (
            PositionFreezeEnabled,
            dr(time::GROUND_SPEED)
                .with_ratio(-1.0)
                .with_offset(1.0)
                .with_command(cmd::FREEZE_TOGGLE),
        ),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::DataCategory;

    #[test]
    fn base_descriptors_carry_no_generic_overrides() {
        for (name, descriptor) in base_descriptors().iter() {
            assert!(descriptor.descriptor.is_none(), "{name} overrides metadata");
        }
    }

    #[test]
    fn special_case_fields_have_no_entry() {
        let base = base_descriptors();
        assert!(!base.contains(DataName::IsFailed));
        assert!(!base.contains(DataName::PropellerLeverPercentCoarse));
        assert!(base.category(DataCategory::Failures).is_none());
    }

    #[test]
    fn freeze_inverts_ground_speed() {
        let freeze = base_descriptors().get(DataName::PositionFreezeEnabled);
        assert_eq!(freeze.and_then(|d| d.ratio), Some(-1.0));
        assert_eq!(freeze.and_then(|d| d.offset), Some(1.0));
    }
}
