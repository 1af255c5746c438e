//! `environment` category: wind, time of day, clouds and weather.
//!
//! Cloud fields are keyed by layer (`low`, `middle`, `high`) and wind layer
//! fields by layer number.

use crate::catalog::CategoryModule;
use crate::map_keys::{CLOUD_LAYER_KEYS, WIND_LAYER_KEYS};
use crate::model::{DataDescriptor, SimPlatform, ValueType, Visibility, Writability};
use crate::names::{DataCategory, DataName};

/// Returns the `environment` category module.
#[must_use]
pub fn module() -> CategoryModule {
    CategoryModule {
        category: DataCategory::Environment,
        label: "Environment",
        comment: "Wind at the aircraft, time of day, cloud and wind layers, and weather.",
        fields: fields(),
    }
}

/// A tool-only field any X-Plane session may write.
fn tool(value_type: ValueType) -> DataDescriptor {
    DataDescriptor::new(value_type, Visibility::Tool)
        .writable(SimPlatform::Xplane12, Writability::Always)
}

fn fields() -> Vec<(DataName, DataDescriptor)> {
    vec![
        (
            DataName::AircraftWindHeadingDeg,
            DataDescriptor::new(ValueType::Number, Visibility::Always).with_range(0.0, 360.0),
        ),
        (
            DataName::AircraftWindSpeedKts,
            DataDescriptor::new(ValueType::Number, Visibility::Always),
        ),
        (
            DataName::ZuluTimeHours,
            DataDescriptor::new(ValueType::Number, Visibility::Always)
                .writable(SimPlatform::Xplane12, Writability::Always)
                .with_range(0.0, 24.0),
        ),
        (DataName::DayOfYear, tool(ValueType::Number).with_range(0.0, 365.0)),
        (
            DataName::CloudLayerEnabled,
            tool(ValueType::BooleanMap).with_map_keys(CLOUD_LAYER_KEYS),
        ),
        (
            DataName::CloudLayerBasesAltitudeFtMsl,
            tool(ValueType::NumberMap).with_map_keys(CLOUD_LAYER_KEYS),
        ),
        (
            DataName::CloudLayerTopsAltitudeFtMsl,
            tool(ValueType::NumberMap).with_map_keys(CLOUD_LAYER_KEYS),
        ),
        (
            DataName::CloudLayerType,
            tool(ValueType::StringMap)
                .with_map_keys(CLOUD_LAYER_KEYS)
                .with_enum_values(&["cirrus", "stratus", "cumulus", "cumulonimbus"]),
        ),
        (
            DataName::CloudLayerCoveragePercent,
            tool(ValueType::NumberMap)
                .with_map_keys(CLOUD_LAYER_KEYS)
                .with_range(0.0, 100.0),
        ),
        (
            DataName::WindLayerEnabled,
            tool(ValueType::BooleanMap).with_map_keys(WIND_LAYER_KEYS),
        ),
        (
            DataName::WindLayerAltitudeFt,
            tool(ValueType::NumberMap).with_map_keys(WIND_LAYER_KEYS),
        ),
        (
            DataName::WindLayerDirectionDeg,
            tool(ValueType::NumberMap)
                .with_map_keys(WIND_LAYER_KEYS)
                .with_range(0.0, 360.0),
        ),
        (
            DataName::WindLayerSpeedKts,
            tool(ValueType::NumberMap)
                .with_map_keys(WIND_LAYER_KEYS)
                .with_range(0.0, 250.0),
        ),
        (
            DataName::WindLayerTurbulencePercent,
            tool(ValueType::NumberMap)
                .with_map_keys(WIND_LAYER_KEYS)
                .with_range(0.0, 100.0),
        ),
        (
            DataName::WindLayerGustIncreaseKts,
            tool(ValueType::NumberMap).with_map_keys(WIND_LAYER_KEYS),
        ),
        (
            DataName::SeaLevelPressureInchesMercury,
            tool(ValueType::Number).with_range(25.0, 33.0),
        ),
        (
            DataName::RunwayFriction,
            tool(ValueType::String).with_enum_values(&[
                "dry",
                "lightlyWet",
                "wet",
                "veryWet",
                "lightlyPuddly",
                "puddly",
                "veryPuddly",
                "lightlySnowy",
                "snowy",
                "verySnowy",
                "lightlyIcy",
                "icy",
                "veryIcy",
                "lightlySnowyAndIcy",
                "snowyAndIcy",
                "verySnowyAndIcy",
            ]),
        ),
        (DataName::RainPercent, tool(ValueType::Number).with_range(0.0, 100.0)),
        (DataName::GroundTemperatureDegC, tool(ValueType::Number)),
        (DataName::ThermalClimbRateFpm, tool(ValueType::Number)),
        (
            DataName::WeatherEvolution,
            tool(ValueType::String).with_enum_values(&[
                "improvingRapidly",
                "improving",
                "improvingSlowly",
                "static",
                "deterioratingSlowly",
                "deteriorating",
                "deterioratingRapidly",
                "realWorldWeather",
            ]),
        ),
        (
            DataName::VisibilityMiles,
            DataDescriptor::new(ValueType::Number, Visibility::Always)
                .writable(SimPlatform::Xplane12, Writability::Always),
        ),
        (DataName::ShouldUseCurrentWeather, tool(ValueType::Boolean)),
        (
            DataName::ShouldRegenerateWeather,
            tool(ValueType::Boolean).with_description("Set true to regenerate the weather."),
        ),
    ]
}
