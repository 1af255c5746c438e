//! One-call resolution of an aircraft on a platform.

use simdata_spec::{AircraftProfile, Catalog, DataModel, PlatformModel, SimData, SimPlatform};
use tracing::debug;

use crate::effective::aircraft_profile_effective_model;
use crate::platform::{compute_effective_platform_descriptors, filter_active_platform_descriptors};
use crate::settable::{filter_observed_settable, filter_platform_settable, filter_settable};
use crate::settings::ResolverSettings;

/// Everything resolved for one aircraft on one platform.
///
/// All models are freshly built; the catalog, base table and profile are
/// never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The platform this resolution is for.
    pub platform: SimPlatform,
    /// Catalog with the profile's overrides applied.
    pub effective: DataModel,
    /// Fields writable on the platform, before observation.
    pub platform_settable: DataModel,
    /// Adapter entries of every shown or settable field.
    pub active_platform: PlatformModel,
}

impl Resolution {
    /// Resolves `profile` against `catalog` on the platform from `settings`.
    ///
    /// `base_platform` is the platform's base adapter table, typically
    /// [`simdata_spec::platforms::base_descriptors`].
    #[must_use]
    pub fn resolve(
        catalog: &Catalog,
        base_platform: &PlatformModel,
        profile: Option<&AircraftProfile>,
        settings: &ResolverSettings,
    ) -> Resolution {
        let platform = settings.platform;
        let effective = aircraft_profile_effective_model(catalog.descriptors(), profile, platform);
        let platform_settable = filter_platform_settable(&filter_settable(&effective), platform);
        let merged = compute_effective_platform_descriptors(
            base_platform,
            profile.and_then(|p| p.platform_overrides(platform)),
        );
        let active_platform = filter_active_platform_descriptors(&merged, &effective, platform);
        debug!(
            %platform,
            effective = effective.len(),
            platform_settable = platform_settable.len(),
            active = active_platform.len(),
            "resolved aircraft"
        );
        Resolution {
            platform,
            effective,
            platform_settable,
            active_platform,
        }
    }

    /// Fields writable right now given the last telemetry `snapshot`.
    #[must_use]
    pub fn settable_now(&self, snapshot: Option<&SimData>) -> DataModel {
        filter_observed_settable(&self.platform_settable, self.platform, snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simdata_spec::{DataName, SimValue};

    fn resolve(profile: Option<&AircraftProfile>) -> Resolution {
        let settings = ResolverSettings::default();
        Resolution::resolve(
            Catalog::full(),
            simdata_spec::platforms::base_descriptors(settings.platform),
            profile,
            &settings,
        )
    }

    #[test]
    fn without_profile_effective_is_catalog() {
        let resolution = resolve(None);
        assert_eq!(&resolution.effective, Catalog::full().descriptors());
    }

    #[test]
    fn mixture_is_settable_once_shown_and_read() {
        let cessna = simdata_spec::profiles::cessna172::profile();
        let resolution = resolve(Some(&cessna));
        assert!(resolution.platform_settable.contains(DataName::MixtureLeverPercentRich));
        assert!(!resolution.settable_now(None).contains(DataName::MixtureLeverPercentRich));

        let mut values = std::collections::BTreeMap::new();
        values.insert("0".to_owned(), 100.0);
        let snapshot: SimData = [(DataName::MixtureLeverPercentRich, SimValue::NumberMap(values))]
            .into_iter()
            .collect();
        assert!(resolution
            .settable_now(Some(&snapshot))
            .contains(DataName::MixtureLeverPercentRich));
    }

    #[test]
    fn generic_mixture_stays_hidden_without_profile() {
        let resolution = resolve(None);
        let mut values = std::collections::BTreeMap::new();
        values.insert("0".to_owned(), 100.0);
        let snapshot: SimData = [(DataName::MixtureLeverPercentRich, SimValue::NumberMap(values))]
            .into_iter()
            .collect();
        assert!(!resolution
            .settable_now(Some(&snapshot))
            .contains(DataName::MixtureLeverPercentRich));
    }

    #[test]
    fn active_platform_includes_special_cases() {
        let twin = simdata_spec::profiles::generic::twin_turbine();
        let resolution = resolve(Some(&twin));
        let prop = resolution.active_platform.get(DataName::PropellerLeverPercentCoarse);
        assert!(prop.is_some_and(|d| d.array_index_name_map.is_some()));
        assert!(resolution.active_platform.contains(DataName::IsFailed));
    }
}
