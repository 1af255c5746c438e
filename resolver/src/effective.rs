//! Effective model resolution.
//!
//! An aircraft's effective model is the catalog with the profile's generic
//! descriptor overrides merged in, property by property, followed by the
//! flap and speedbrake setpoint descriptions.

use simdata_spec::{
    AircraftProfile, DataDescriptor, DataModel, DataName, DescriptorOverride, OverrideModel,
    PlatformModel, Setpoint, SimPlatform,
};
use tracing::debug;

/// Collects the generic `descriptor` override of every platform descriptor
/// that carries one. Categories left without overrides are omitted.
#[must_use]
pub fn extract_override_model(platform: &PlatformModel) -> OverrideModel {
    platform.filter_map(|_, descriptor| descriptor.descriptor.clone())
}

/// Merges `overrides` into `base`: each property set in the override
/// replaces the base property, everything else is kept.
#[must_use]
pub fn merge_descriptor(base: &DataDescriptor, overrides: &DescriptorOverride) -> DataDescriptor {
    DataDescriptor {
        value_type: overrides.value_type.unwrap_or(base.value_type),
        visibility: overrides.visibility.unwrap_or(base.visibility),
        writable_by_platform: overrides
            .writable_by_platform
            .clone()
            .unwrap_or_else(|| base.writable_by_platform.clone()),
        range: overrides.range.or(base.range),
        map_keys: overrides.map_keys.clone().or_else(|| base.map_keys.clone()),
        description: overrides
            .description
            .clone()
            .or_else(|| base.description.clone()),
        enum_values: overrides
            .enum_values
            .clone()
            .or_else(|| base.enum_values.clone()),
    }
}

/// Applies `overrides` to every field of `base`.
///
/// The base defines the field set: fields without an override pass through
/// unchanged and overrides for fields the base lacks are ignored.
#[must_use]
pub fn compute_effective_model(base: &DataModel, overrides: &OverrideModel) -> DataModel {
    base.filter_map(|name, descriptor| {
        Some(match overrides.get(name) {
            Some(o) => merge_descriptor(descriptor, o),
            None => descriptor.clone(),
        })
    })
}

/// Resolves the effective model of `profile` on `platform`.
///
/// Without a profile the result equals `base`. Flap and speedbrake setpoints,
/// when present, replace the description of the matching handle field.
#[must_use]
pub fn aircraft_profile_effective_model(
    base: &DataModel,
    profile: Option<&AircraftProfile>,
    platform: SimPlatform,
) -> DataModel {
    let Some(profile) = profile else {
        return base.clone();
    };
    let overrides = profile
        .platform_overrides(platform)
        .map(extract_override_model)
        .unwrap_or_default();
    debug!(
        aircraft = %profile.aircraft_code,
        %platform,
        overrides = overrides.len(),
        "resolving effective model"
    );
    let mut model = compute_effective_model(base, &overrides);
    describe_setpoints(
        &mut model,
        DataName::FlapsHandlePercentDown,
        profile.flaps_setpoints.as_deref(),
    );
    describe_setpoints(
        &mut model,
        DataName::SpeedBrakesHandlePercentDeployed,
        profile.speedbrakes_setpoints.as_deref(),
    );
    model
}

fn describe_setpoints(model: &mut DataModel, name: DataName, setpoints: Option<&[Setpoint]>) {
    let Some(setpoints) = setpoints else {
        return;
    };
    if let Some(descriptor) = model.get_mut(name) {
        descriptor.description = Some(setpoint_description(setpoints));
    }
}

/// Formats setpoints as `"<percent>% for <name>"`, joined by `", "`.
#[must_use]
pub fn setpoint_description(setpoints: &[Setpoint]) -> String {
    setpoints
        .iter()
        .map(|s| format!("{}% for {}", format_number(s.percent), s.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats a number the way profile authors write it: integral values have
/// no decimal point.
fn format_number(value: f64) -> String {
    if value == 0.0 {
        // also folds -0
        "0".to_owned()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned()
    } else {
        value.to_string()
    }
}
