//! Category and field names.
//!
//! Every field in the catalog has a [`DataName`] and belongs to exactly one
//! [`DataCategory`]. Both enums are declared together from a single table so
//! the category of a name is always known at compile time. Declaration order
//! is the canonical ordering used by every [`crate::Model`].

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! data_names {
    (
        $(
            $cat:ident = $cat_str:literal {
                $( $name:ident = $name_str:literal ),+ $(,)?
            }
        )+
    ) => {
        /// A named grouping of related fields.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub enum DataCategory {
            $(
                #[doc = concat!("The `", $cat_str, "` category.")]
                #[serde(rename = $cat_str)]
                $cat,
            )+
        }

        impl DataCategory {
            /// All categories in canonical order.
            pub const ALL: &'static [DataCategory] = &[$(DataCategory::$cat),+];

            /// Returns the serialized name of the category.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(DataCategory::$cat => $cat_str,)+
                }
            }

            /// Returns every field name declared in this category, in order.
            #[must_use]
            pub fn names(self) -> &'static [DataName] {
                match self {
                    $(DataCategory::$cat => &[$(DataName::$name),+],)+
                }
            }

            /// Parses a serialized category name.
            #[must_use]
            pub fn parse(s: &str) -> Option<DataCategory> {
                match s {
                    $($cat_str => Some(DataCategory::$cat),)+
                    _ => None,
                }
            }
        }

        /// A field name. Unique across all categories.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub enum DataName {
            $(
                $(
                    #[doc = concat!("`", $cat_str, ".", $name_str, "`")]
                    #[serde(rename = $name_str)]
                    $name,
                )+
            )+
        }

        impl DataName {
            /// All field names in canonical order.
            pub const ALL: &'static [DataName] = &[$($(DataName::$name,)+)+];

            /// Returns the serialized name of the field.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $($(DataName::$name => $name_str,)+)+
                }
            }

            /// Returns the category this field belongs to.
            #[must_use]
            pub fn category(self) -> DataCategory {
                match self {
                    $($(DataName::$name => DataCategory::$cat,)+)+
                }
            }

            /// Parses a serialized field name.
            #[must_use]
            pub fn parse(s: &str) -> Option<DataName> {
                match s {
                    $($($name_str => Some(DataName::$name),)+)+
                    _ => None,
                }
            }
        }
    };
}

data_names! {
    Position = "position" {
        LatitudeDeg = "latitudeDeg",
        LongitudeDeg = "longitudeDeg",
        AglAltitudeFt = "aglAltitudeFt",
        MslAltitudeFt = "mslAltitudeFt",
        IndicatedAirspeedKts = "indicatedAirspeedKts",
        GpsGroundSpeedKts = "gpsGroundSpeedKts",
        VerticalSpeedUpFpm = "verticalSpeedUpFpm",
    }
    Attitude = "attitude" {
        RollAngleDegRight = "rollAngleDegRight",
        PitchAngleDegUp = "pitchAngleDegUp",
        MagneticHeadingDeg = "magneticHeadingDeg",
        TrueHeadingDeg = "trueHeadingDeg",
        TrueGroundTrackDeg = "trueGroundTrackDeg",
    }
    RadiosNavigation = "radiosNavigation" {
        FrequencyHz = "frequencyHz",
        StandbyFrequencyHz = "standbyFrequencyHz",
        ComShouldSwapFrequencies = "comShouldSwapFrequencies",
        TransponderCode = "transponderCode",
    }
    Lights = "lights" {
        LandingLightsSwitchOn = "landingLightsSwitchOn",
        TaxiLightsSwitchOn = "taxiLightsSwitchOn",
        NavigationLightsSwitchOn = "navigationLightsSwitchOn",
        StrobeLightsSwitchOn = "strobeLightsSwitchOn",
    }
    Indicators = "indicators" {
        EngineRpm = "engineRpm",
        RotorRpm = "rotorRpm",
        PropellerRpm = "propellerRpm",
        EngineN1Percent = "engineN1Percent",
        ManifoldPressureInchesMercury = "manifoldPressureInchesMercury",
        EngineTorqueFtLb = "engineTorqueFtLb",
        TurbineGasTemperatureDegC = "turbineGasTemperatureDegC",
        EngineIttDegC = "engineIttDegC",
        ExhaustGasDegC = "exhaustGasDegC",
        LowRotorRpmWarningOn = "lowRotorRPMWarningOn",
        TotalEnergyVariometerFpm = "totalEnergyVariometerFpm",
        StallWarningOn = "stallWarningOn",
        AltimeterSettingInchesMercury = "altimeterSettingInchesMercury",
        SlipSkidBallRightDeflectionPercent = "slipSkidBallRightDeflectionPercent",
        YawStringRightSideslipDeg = "yawStringRightSideslipDeg",
    }
    Levers = "levers" {
        FlapsHandlePercentDown = "flapsHandlePercentDown",
        SpeedBrakesHandlePercentDeployed = "speedBrakesHandlePercentDeployed",
        LandingGearHandlePercentDown = "landingGearHandlePercentDown",
        ThrottlePercentOpen = "throttlePercentOpen",
        CollectivePercentUp = "collectivePercentUp",
        ConditionLeverPercentHigh = "conditionLeverPercentHigh",
        MixtureLeverPercentRich = "mixtureLeverPercentRich",
        CarburetorHeatLeverPercentHot = "carburetorHeatLeverPercentHot",
        PropellerLeverPercentCoarse = "propellerLeverPercentCoarse",
        PropBetaEnabled = "propBetaEnabled",
    }
    Autopilot = "autopilot" {
        IsAutopilotEngaged = "isAutopilotEngaged",
        IsHeadingSelectEnabled = "isHeadingSelectEnabled",
        IsFlightDirectorEngaged = "isFlightDirectorEngaged",
        AltitudeMode = "altitudeMode",
        TargetVerticalSpeedUpFpm = "targetVerticalSpeedUpFpm",
        ShouldLevelWings = "shouldLevelWings",
        MagneticHeadingBugDeg = "magneticHeadingBugDeg",
        AltitudeBugFt = "altitudeBugFt",
    }
    Systems = "systems" {
        BatteryOn = "batteryOn",
        PitotHeatSwitchOn = "pitotHeatSwitchOn",
        ParkingBrakeOn = "parkingBrakeOn",
        GovernorSwitchOn = "governorSwitchOn",
        TotalEnergyAudioSwitchOn = "totalEnergyAudioSwitchOn",
        PropHeatSwitchOn = "propHeatSwitchOn",
    }
    Failures = "failures" {
        IsFailed = "isFailed",
        ScheduledAtAltitudeFtAgl = "scheduledAtAltitudeFtAgl",
        ScheduledAtAirspeedKias = "scheduledAtAirspeedKias",
    }
    WeightBalance = "weightBalance" {
        TotalWeightLbs = "totalWeightLbs",
        FuelQuantityPercent = "fuelQuantityPercent",
        CenterOfGravityPercentMac = "centerOfGravityPercentMac",
    }
    Environment = "environment" {
        AircraftWindHeadingDeg = "aircraftWindHeadingDeg",
        AircraftWindSpeedKts = "aircraftWindSpeedKts",
        ZuluTimeHours = "zuluTimeHours",
        DayOfYear = "dayOfYear",
        CloudLayerEnabled = "cloudLayerEnabled",
        CloudLayerBasesAltitudeFtMsl = "cloudLayerBasesAltitudeFtMsl",
        CloudLayerTopsAltitudeFtMsl = "cloudLayerTopsAltitudeFtMsl",
        CloudLayerType = "cloudLayerType",
        CloudLayerCoveragePercent = "cloudLayerCoveragePercent",
        WindLayerEnabled = "windLayerEnabled",
        WindLayerAltitudeFt = "windLayerAltitudeFt",
        WindLayerDirectionDeg = "windLayerDirectionDeg",
        WindLayerSpeedKts = "windLayerSpeedKts",
        WindLayerTurbulencePercent = "windLayerTurbulencePercent",
        WindLayerGustIncreaseKts = "windLayerGustIncreaseKts",
        SeaLevelPressureInchesMercury = "seaLevelPressureInchesMercury",
        RunwayFriction = "runwayFriction",
        RainPercent = "rainPercent",
        GroundTemperatureDegC = "groundTemperatureDegC",
        ThermalClimbRateFpm = "thermalClimbRateFpm",
        WeatherEvolution = "weatherEvolution",
        VisibilityMiles = "visibilityMiles",
        ShouldUseCurrentWeather = "shouldUseCurrentWeather",
        ShouldRegenerateWeather = "shouldRegenerateWeather",
    }
    Initialization = "initialization" {
        StartingAirportIcao = "startingAirportIcao",
        StartingRunway = "startingRunway",
        StartWithEnginesRunning = "startWithEnginesRunning",
    }
    Simulation = "simulation" {
        AircraftName = "aircraftName",
        IsPaused = "isPaused",
        SimSpeedRatio = "simSpeedRatio",
        IsCrashed = "isCrashed",
        ShouldResetFlight = "shouldResetFlight",
    }
    Freezes = "freezes" {
        PositionFreezeEnabled = "positionFreezeEnabled",
    }
}

impl fmt::Display for DataCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DataName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
