//! `initialization` category: parameters applied when a flight starts.

use crate::catalog::CategoryModule;
use crate::model::{DataDescriptor, SimPlatform, ValueType, Visibility, Writability};
use crate::names::{DataCategory, DataName};

/// Returns the `initialization` category module.
#[must_use]
pub fn module() -> CategoryModule {
    let start = |value_type| {
        DataDescriptor::new(value_type, Visibility::Tool)
            .writable(SimPlatform::Xplane12, Writability::Always)
    };
    CategoryModule {
        category: DataCategory::Initialization,
        label: "Initialization",
        comment: "Starting airport, runway and engine state for a new flight.",
        fields: vec![
            (DataName::StartingAirportIcao, start(ValueType::String)),
            (DataName::StartingRunway, start(ValueType::String)),
            (DataName::StartWithEnginesRunning, start(ValueType::Boolean)),
        ],
    }
}
