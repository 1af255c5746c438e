//! Platform adapter resolution.
//!
//! Merges a profile's adapter overrides over the base adapter table, then
//! keeps the entries of fields that are shown or settable on the platform.

use simdata_spec::{
    DataModel, PlatformDescriptor, PlatformModel, SimPlatform, Visibility, Writability,
};
use tracing::debug;

/// Merges `overrides` onto `base`.
///
/// Each property set in the override replaces the base property, including
/// a nested `descriptor`, which is replaced whole. Fields present on either
/// side are kept. With no overrides the base is returned unchanged.
#[must_use]
pub fn compute_effective_platform_descriptors(
    base: &PlatformModel,
    overrides: Option<&PlatformModel>,
) -> PlatformModel {
    let Some(overrides) = overrides else {
        return base.clone();
    };
    let mut merged = base.clone();
    for (name, o) in overrides.iter() {
        let combined = match base.get(name) {
            Some(b) => merge_platform_descriptor(b, o),
            None => o.clone(),
        };
        merged.insert(name, combined);
    }
    merged
}

/// Shallow merge of two platform descriptors, `overrides` winning.
#[must_use]
pub fn merge_platform_descriptor(
    base: &PlatformDescriptor,
    overrides: &PlatformDescriptor,
) -> PlatformDescriptor {
    PlatformDescriptor {
        descriptor: overrides.descriptor.clone().or_else(|| base.descriptor.clone()),
        dataref: overrides.dataref.clone().or_else(|| base.dataref.clone()),
        command: overrides.command.clone().or_else(|| base.command.clone()),
        ratio: overrides.ratio.or(base.ratio),
        offset: overrides.offset.or(base.offset),
        array_index_name_map: overrides
            .array_index_name_map
            .clone()
            .or_else(|| base.array_index_name_map.clone()),
        enum_value_map: overrides
            .enum_value_map
            .clone()
            .or_else(|| base.enum_value_map.clone()),
    }
}

/// Keeps the adapter entries of fields that are shown or writable on
/// `platform`, in `effective` order.
///
/// A field is dropped only when it is both hidden and never writable. Kept
/// fields without an adapter entry get an empty descriptor; the transport
/// handles those as special cases.
#[must_use]
pub fn filter_active_platform_descriptors(
    merged: &PlatformModel,
    effective: &DataModel,
    platform: SimPlatform,
) -> PlatformModel {
    let active = effective.filter_map(|name, d| {
        let inactive =
            d.visibility == Visibility::Never && d.writability(platform) == Writability::Never;
        (!inactive).then(|| merged.get(name).cloned().unwrap_or_default())
    });
    debug!(
        %platform,
        adapters = merged.len(),
        active = active.len(),
        "filtered active platform descriptors"
    );
    active
}

#[cfg(test)]
mod tests {
    use super::*;
    use simdata_spec::{DataDescriptor, DataName, DescriptorOverride, ValueType};

    #[test]
    fn none_overrides_is_identity() {
        let base = simdata_spec::platforms::base_descriptors(SimPlatform::Xplane12);
        assert_eq!(&compute_effective_platform_descriptors(base, None), base);
    }

    #[test]
    fn override_properties_win() {
        let base: PlatformModel = [(
            DataName::ThrottlePercentOpen,
            PlatformDescriptor::dataref("sim/throttle").with_ratio(100.0),
        )]
        .into_iter()
        .collect();
        let overrides: PlatformModel = [(
            DataName::ThrottlePercentOpen,
            PlatformDescriptor::default().with_array_keys(&["LeftEngine", "RightEngine"]),
        )]
        .into_iter()
        .collect();
        let merged = compute_effective_platform_descriptors(&base, Some(&overrides));
        let throttle = merged.get(DataName::ThrottlePercentOpen);
        assert_eq!(throttle.and_then(|d| d.dataref.as_deref()), Some("sim/throttle"));
        assert_eq!(throttle.and_then(|d| d.ratio), Some(100.0));
        assert_eq!(
            throttle.and_then(|d| d.array_index_name_map.as_ref()).map(|m| m.len()),
            Some(2)
        );
    }

    #[test]
    fn override_only_fields_are_added() {
        let overrides: PlatformModel = [(
            DataName::IsFailed,
            PlatformDescriptor::overriding(
                DescriptorOverride::default().with_map_keys(&["EngineSeize"]),
            ),
        )]
        .into_iter()
        .collect();
        let merged =
            compute_effective_platform_descriptors(&PlatformModel::new(), Some(&overrides));
        assert!(merged.contains(DataName::IsFailed));
    }

    #[test]
    fn active_filter_keeps_shown_or_settable() {
        let effective: DataModel = [
            (
                DataName::AircraftName,
                DataDescriptor::new(ValueType::String, Visibility::Always),
            ),
            (
                DataName::ShouldResetFlight,
                DataDescriptor::new(ValueType::Boolean, Visibility::Never)
                    .writable(SimPlatform::Xplane12, Writability::Always),
            ),
            (
                DataName::CenterOfGravityPercentMac,
                DataDescriptor::new(ValueType::Number, Visibility::Never),
            ),
        ]
        .into_iter()
        .collect();
        let merged: PlatformModel = [
            (DataName::AircraftName, PlatformDescriptor::dataref("sim/name")),
            (DataName::CenterOfGravityPercentMac, PlatformDescriptor::dataref("sim/cg")),
        ]
        .into_iter()
        .collect();
        let active =
            filter_active_platform_descriptors(&merged, &effective, SimPlatform::Xplane12);
        assert_eq!(
            active.get(DataName::AircraftName).and_then(|d| d.dataref.as_deref()),
            Some("sim/name")
        );
        assert_eq!(
            active.get(DataName::ShouldResetFlight),
            Some(&PlatformDescriptor::default())
        );
        assert!(!active.contains(DataName::CenterOfGravityPercentMac));
        assert!(active.category(simdata_spec::DataCategory::WeightBalance).is_none());
    }
}
