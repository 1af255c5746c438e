//! `weightBalance` category.

use crate::catalog::CategoryModule;
use crate::model::{DataDescriptor, SimPlatform, ValueType, Visibility, Writability};
use crate::names::{DataCategory, DataName};

/// Returns the `weightBalance` category module.
#[must_use]
pub fn module() -> CategoryModule {
    CategoryModule {
        category: DataCategory::WeightBalance,
        label: "Weight and balance",
        comment: "Aircraft weight, fuel load and centre of gravity.",
        fields: vec![
            (
                DataName::TotalWeightLbs,
                DataDescriptor::new(ValueType::Number, Visibility::Tool),
            ),
            (
                DataName::FuelQuantityPercent,
                DataDescriptor::new(ValueType::Number, Visibility::Tool)
                    .writable(SimPlatform::Msfs2020, Writability::AfterRead)
                    .with_range(0.0, 100.0),
            ),
            (
                DataName::CenterOfGravityPercentMac,
                DataDescriptor::new(ValueType::Number, Visibility::Never),
            ),
        ],
    }
}
