//! `levers` category: cockpit handles and engine controls.

use crate::catalog::CategoryModule;
use crate::model::{DataDescriptor, SimPlatform, ValueType, Visibility, Writability};
use crate::names::{DataCategory, DataName};

/// Returns the `levers` category module.
#[must_use]
pub fn module() -> CategoryModule {
    CategoryModule {
        category: DataCategory::Levers,
        label: "Levers",
        comment: "Flight control handles and per-engine power levers.",
        fields: fields(),
    }
}

/// A lever settable on X-Plane once its position has been read.
fn lever(value_type: ValueType, visibility: Visibility) -> DataDescriptor {
    DataDescriptor::new(value_type, visibility)
        .writable(SimPlatform::Xplane12, Writability::AfterRead)
        .with_range(0.0, 100.0)
}

fn fields() -> Vec<(DataName, DataDescriptor)> {
    vec![
        (
            DataName::FlapsHandlePercentDown,
            lever(ValueType::Number, Visibility::Always)
                .writable(SimPlatform::Msfs2020, Writability::AfterRead)
                .with_description("Flap handle position, percent of full travel down."),
        ),
        (
            DataName::SpeedBrakesHandlePercentDeployed,
            lever(ValueType::Number, Visibility::Never)
                .with_description("Speed brake handle position, percent of full deployment."),
        ),
        (
            DataName::LandingGearHandlePercentDown,
            lever(ValueType::Number, Visibility::Always),
        ),
        (
            DataName::ThrottlePercentOpen,
            DataDescriptor::new(ValueType::NumberMap, Visibility::Always)
                .writable(SimPlatform::Xplane12, Writability::Always)
                .with_range(-200.0, 100.0)
                .with_description(
                    "Throttle position per engine; negative values are beta or reverse.",
                ),
        ),
        (
            DataName::CollectivePercentUp,
            lever(ValueType::Number, Visibility::Never),
        ),
        (
            DataName::ConditionLeverPercentHigh,
            lever(ValueType::NumberMap, Visibility::Never),
        ),
        (
            DataName::MixtureLeverPercentRich,
            lever(ValueType::NumberMap, Visibility::Never),
        ),
        (
            DataName::CarburetorHeatLeverPercentHot,
            lever(ValueType::Number, Visibility::Never),
        ),
        (
            DataName::PropellerLeverPercentCoarse,
            lever(ValueType::NumberMap, Visibility::Never),
        ),
        (
            DataName::PropBetaEnabled,
            DataDescriptor::new(ValueType::Boolean, Visibility::Never)
                .writable(SimPlatform::Xplane12, Writability::Always),
        ),
    ]
}
