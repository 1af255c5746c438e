//! `radiosNavigation` category.
//!
//! Frequencies are keyed by radio (`com1`, `com2`, `nav1`, `nav2`).

use crate::catalog::CategoryModule;
use crate::map_keys::ALL_COM_KEYS;
use crate::model::{DataDescriptor, SimPlatform, ValueType, Visibility, Writability};
use crate::names::{DataCategory, DataName};

/// Returns the `radiosNavigation` category module.
#[must_use]
pub fn module() -> CategoryModule {
    CategoryModule {
        category: DataCategory::RadiosNavigation,
        label: "Radios and navigation",
        comment: "Communication and navigation radio frequencies and the transponder.",
        fields: fields(),
    }
}

fn fields() -> Vec<(DataName, DataDescriptor)> {
    vec![
        (
            DataName::FrequencyHz,
            DataDescriptor::new(ValueType::NumberMap, Visibility::Always)
                .writable(SimPlatform::Xplane12, Writability::Always)
                .with_map_keys(ALL_COM_KEYS)
                .with_description("Active frequency of each radio in hertz."),
        ),
        (
            DataName::StandbyFrequencyHz,
            DataDescriptor::new(ValueType::NumberMap, Visibility::Always)
                .writable(SimPlatform::Xplane12, Writability::Always)
                .with_map_keys(ALL_COM_KEYS)
                .with_description("Standby frequency of each radio in hertz."),
        ),
        (
            DataName::ComShouldSwapFrequencies,
            DataDescriptor::new(ValueType::BooleanMap, Visibility::Tool)
                .writable(SimPlatform::Xplane12, Writability::Always)
                .with_map_keys(ALL_COM_KEYS)
                .with_description("Set true to swap active and standby frequencies."),
        ),
        (
            DataName::TransponderCode,
            DataDescriptor::new(ValueType::Number, Visibility::Always)
                .writable(SimPlatform::Xplane12, Writability::AfterRead)
                .with_range(0.0, 7777.0),
        ),
    ]
}
