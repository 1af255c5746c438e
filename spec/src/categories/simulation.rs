//! `simulation` category: state of the simulator session itself.

use crate::catalog::CategoryModule;
use crate::model::{DataDescriptor, SimPlatform, ValueType, Visibility, Writability};
use crate::names::{DataCategory, DataName};

/// Returns the `simulation` category module.
#[must_use]
pub fn module() -> CategoryModule {
    CategoryModule {
        category: DataCategory::Simulation,
        label: "Simulation",
        comment: "Loaded aircraft, pause, time acceleration, crash and reset.",
        fields: vec![
            (
                DataName::AircraftName,
                DataDescriptor::new(ValueType::String, Visibility::Always),
            ),
            (
                DataName::IsPaused,
                DataDescriptor::new(ValueType::Boolean, Visibility::Always)
                    .writable(SimPlatform::Xplane12, Writability::Always)
                    .writable(SimPlatform::Msfs2020, Writability::Always),
            ),
            (
                DataName::SimSpeedRatio,
                DataDescriptor::new(ValueType::Number, Visibility::Tool)
                    .writable(SimPlatform::Xplane12, Writability::AfterRead)
                    .with_range(0.0, 16.0),
            ),
            (
                DataName::IsCrashed,
                DataDescriptor::new(ValueType::Boolean, Visibility::Always)
                    .writable(SimPlatform::Xplane12, Writability::AfterRead)
                    .with_description("Set false to repair the aircraft after a crash."),
            ),
            (
                DataName::ShouldResetFlight,
                DataDescriptor::new(ValueType::Boolean, Visibility::Tool)
                    .writable(SimPlatform::Xplane12, Writability::Always),
            ),
        ],
    }
}
