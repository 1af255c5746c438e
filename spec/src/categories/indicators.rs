//! `indicators` category: engine gauges, annunciators and flight instruments.
//!
//! Engine gauges are number maps keyed per engine. Single-engine aircraft
//! use the default key `"0"`; multi-engine profiles declare their own keys.
//! Most engine gauges are hidden in the base catalog and shown by the
//! profiles of aircraft that actually have them.

use crate::catalog::CategoryModule;
use crate::model::{DataDescriptor, SimPlatform, ValueType, Visibility, Writability};
use crate::names::{DataCategory, DataName};

/// Returns the `indicators` category module.
#[must_use]
pub fn module() -> CategoryModule {
    CategoryModule {
        category: DataCategory::Indicators,
        label: "Indicators",
        comment: "Engine gauges, warning annunciators and flight instruments.",
        fields: fields(),
    }
}

fn engine_gauge(description: &str) -> DataDescriptor {
    DataDescriptor::new(ValueType::NumberMap, Visibility::Never).with_description(description)
}

fn fields() -> Vec<(DataName, DataDescriptor)> {
    vec![
        (DataName::EngineRpm, engine_gauge("Engine speed in rpm.")),
        (
            DataName::RotorRpm,
            DataDescriptor::new(ValueType::Number, Visibility::Never)
                .with_description("Main rotor speed in rpm."),
        ),
        (DataName::PropellerRpm, engine_gauge("Propeller speed in rpm.")),
        (
            DataName::EngineN1Percent,
            engine_gauge("Low pressure spool speed, percent of rated.").with_range(0.0, 110.0),
        ),
        (
            DataName::ManifoldPressureInchesMercury,
            engine_gauge("Manifold pressure in inches of mercury."),
        ),
        (DataName::EngineTorqueFtLb, engine_gauge("Engine torque in foot-pounds.")),
        (
            DataName::TurbineGasTemperatureDegC,
            engine_gauge("Turbine gas temperature in degrees Celsius."),
        ),
        (
            DataName::EngineIttDegC,
            engine_gauge("Interstage turbine temperature in degrees Celsius."),
        ),
        (
            DataName::ExhaustGasDegC,
            engine_gauge("Exhaust gas temperature in degrees Celsius."),
        ),
        (
            DataName::LowRotorRpmWarningOn,
            DataDescriptor::new(ValueType::Boolean, Visibility::Never),
        ),
        (
            DataName::TotalEnergyVariometerFpm,
            DataDescriptor::new(ValueType::Number, Visibility::Never)
                .with_description("Total energy compensated climb rate in feet per minute."),
        ),
        (
            DataName::StallWarningOn,
            DataDescriptor::new(ValueType::Boolean, Visibility::Always),
        ),
        (
            DataName::AltimeterSettingInchesMercury,
            DataDescriptor::new(ValueType::Number, Visibility::Always)
                .writable(SimPlatform::Xplane12, Writability::AfterRead)
                .writable(SimPlatform::Msfs2020, Writability::AfterRead)
                .with_range(27.5, 31.5),
        ),
        (
            DataName::SlipSkidBallRightDeflectionPercent,
            DataDescriptor::new(ValueType::Number, Visibility::Tool)
                .with_range(-100.0, 100.0)
                .with_description("Slip/skid ball deflection, percent of full scale right."),
        ),
        (
            DataName::YawStringRightSideslipDeg,
            DataDescriptor::new(ValueType::Number, Visibility::Never),
        ),
    ]
}
