//! `lights` category.

use crate::catalog::CategoryModule;
use crate::model::{DataDescriptor, SimPlatform, ValueType, Visibility, Writability};
use crate::names::{DataCategory, DataName};

/// Returns the `lights` category module.
#[must_use]
pub fn module() -> CategoryModule {
    CategoryModule {
        category: DataCategory::Lights,
        label: "Lights",
        comment: "Exterior light switches.",
        fields: [
            DataName::LandingLightsSwitchOn,
            DataName::TaxiLightsSwitchOn,
            DataName::NavigationLightsSwitchOn,
            DataName::StrobeLightsSwitchOn,
        ]
        .into_iter()
        .map(|name| (name, switch()))
        .collect(),
    }
}

fn switch() -> DataDescriptor {
    DataDescriptor::new(ValueType::Boolean, Visibility::Always)
        .writable(SimPlatform::Xplane12, Writability::AfterRead)
        .writable(SimPlatform::Msfs2020, Writability::AfterRead)
}
