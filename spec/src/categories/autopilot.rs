//! `autopilot` category.

use crate::catalog::CategoryModule;
use crate::model::{DataDescriptor, SimPlatform, ValueType, Visibility, Writability};
use crate::names::{DataCategory, DataName};

/// Returns the `autopilot` category module.
#[must_use]
pub fn module() -> CategoryModule {
    CategoryModule {
        category: DataCategory::Autopilot,
        label: "Autopilot",
        comment: "Autopilot and flight director modes and targets.",
        fields: fields(),
    }
}

fn fields() -> Vec<(DataName, DataDescriptor)> {
    let toggle = |visibility| {
        DataDescriptor::new(ValueType::Boolean, visibility)
            .writable(SimPlatform::Xplane12, Writability::Always)
    };
    let target = || {
        DataDescriptor::new(ValueType::Number, Visibility::Always)
            .writable(SimPlatform::Xplane12, Writability::AfterRead)
    };
    vec![
        (DataName::IsAutopilotEngaged, toggle(Visibility::Always)),
        (DataName::IsHeadingSelectEnabled, toggle(Visibility::Always)),
        (DataName::IsFlightDirectorEngaged, toggle(Visibility::Always)),
        (
            DataName::AltitudeMode,
            DataDescriptor::new(ValueType::String, Visibility::Always)
                .writable(SimPlatform::Xplane12, Writability::Always)
                .with_enum_values(&[
                    "disabled",
                    "pitch",
                    "verticalSpeed",
                    "levelChange",
                    "altitudeHold",
                    "terrain",
                    "glideSlope",
                    "VNAV",
                    "TOGA",
                    "flightPathAngle",
                    "VNAVSpeed",
                ]),
        ),
        (
            DataName::TargetVerticalSpeedUpFpm,
            target().with_range(-6000.0, 6000.0),
        ),
        (
            DataName::ShouldLevelWings,
            toggle(Visibility::Tool)
                .with_description("Set true to level the wings, engaging the autopilot if needed."),
        ),
        (DataName::MagneticHeadingBugDeg, target().with_range(0.0, 360.0)),
        (DataName::AltitudeBugFt, target().with_range(0.0, 50000.0)),
    ]
}
