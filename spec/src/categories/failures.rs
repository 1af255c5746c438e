//! `failures` category.
//!
//! Every failure field is keyed by failure name. The base catalog lists
//! every supported failure; aircraft profiles narrow the list to the
//! failures that make sense for the airframe.

use crate::catalog::CategoryModule;
use crate::map_keys::ALL_FAILURE_KEYS;
use crate::model::{DataDescriptor, SimPlatform, ValueType, Visibility, Writability};
use crate::names::{DataCategory, DataName};

/// Returns the `failures` category module.
#[must_use]
pub fn module() -> CategoryModule {
    CategoryModule {
        category: DataCategory::Failures,
        label: "Failures",
        comment: "Active and scheduled system failures, keyed by failure name.",
        fields: vec![
            (
                DataName::IsFailed,
                failure(ValueType::BooleanMap, Visibility::Always)
                    .with_description("Whether each failure is currently active."),
            ),
            (
                DataName::ScheduledAtAltitudeFtAgl,
                failure(ValueType::NumberMap, Visibility::Tool)
                    .with_description("Height above ground at which each failure triggers."),
            ),
            (
                DataName::ScheduledAtAirspeedKias,
                failure(ValueType::NumberMap, Visibility::Tool)
                    .with_description("Indicated airspeed at which each failure triggers."),
            ),
        ],
    }
}

fn failure(value_type: ValueType, visibility: Visibility) -> DataDescriptor {
    DataDescriptor::new(value_type, visibility)
        .writable(SimPlatform::Xplane12, Writability::Always)
        .with_map_keys(ALL_FAILURE_KEYS)
}
