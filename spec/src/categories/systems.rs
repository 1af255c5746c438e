//! `systems` category.

use crate::catalog::CategoryModule;
use crate::model::{DataDescriptor, SimPlatform, ValueType, Visibility, Writability};
use crate::names::{DataCategory, DataName};

/// Returns the `systems` category module.
#[must_use]
pub fn module() -> CategoryModule {
    CategoryModule {
        category: DataCategory::Systems,
        label: "Systems",
        comment: "Electrical, anti-ice and brake switches.",
        fields: vec![
            (
                DataName::BatteryOn,
                switch(Visibility::Always).writable(SimPlatform::Msfs2020, Writability::AfterRead),
            ),
            (DataName::PitotHeatSwitchOn, switch(Visibility::Always)),
            (
                DataName::ParkingBrakeOn,
                switch(Visibility::Always).writable(SimPlatform::Msfs2020, Writability::AfterRead),
            ),
            (DataName::GovernorSwitchOn, switch(Visibility::Never)),
            (DataName::TotalEnergyAudioSwitchOn, switch(Visibility::Never)),
            (DataName::PropHeatSwitchOn, switch(Visibility::Never)),
        ],
    }
}

fn switch(visibility: Visibility) -> DataDescriptor {
    DataDescriptor::new(ValueType::Boolean, visibility)
        .writable(SimPlatform::Xplane12, Writability::AfterRead)
}
