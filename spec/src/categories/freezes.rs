//! `freezes` category.

use crate::catalog::CategoryModule;
use crate::model::{DataDescriptor, SimPlatform, ValueType, Visibility, Writability};
use crate::names::{DataCategory, DataName};

/// Returns the `freezes` category module.
#[must_use]
pub fn module() -> CategoryModule {
    CategoryModule {
        category: DataCategory::Freezes,
        label: "Freezes",
        comment: "Simulation freezes.",
        fields: vec![(
            DataName::PositionFreezeEnabled,
            DataDescriptor::new(ValueType::Boolean, Visibility::Tool)
                .writable(SimPlatform::Xplane12, Writability::AfterRead),
        )],
    }
}
