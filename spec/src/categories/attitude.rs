//! `attitude` category.

use crate::catalog::CategoryModule;
use crate::model::{DataDescriptor, ValueType, Visibility};
use crate::names::{DataCategory, DataName};

/// Returns the `attitude` category module.
#[must_use]
pub fn module() -> CategoryModule {
    CategoryModule {
        category: DataCategory::Attitude,
        label: "Attitude",
        comment: "Orientation of the aircraft and its track over the ground.",
        fields: fields(),
    }
}

fn fields() -> Vec<(DataName, DataDescriptor)> {
    let number = || DataDescriptor::new(ValueType::Number, Visibility::Always);
    vec![
        (DataName::RollAngleDegRight, number().with_range(-180.0, 180.0)),
        (DataName::PitchAngleDegUp, number().with_range(-90.0, 90.0)),
        (DataName::MagneticHeadingDeg, number().with_range(0.0, 360.0)),
        (DataName::TrueHeadingDeg, number().with_range(0.0, 360.0)),
        (DataName::TrueGroundTrackDeg, number().with_range(0.0, 360.0)),
    ]
}
