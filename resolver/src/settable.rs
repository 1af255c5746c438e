//! Settability filters.
//!
//! Three stages narrow an effective model down to the fields a set request
//! may target right now:
//!
//! 1. [`filter_settable`]: writable on at least one platform.
//! 2. [`filter_platform_settable`]: writable on the current platform.
//! 3. [`filter_observed_settable`]: `AfterRead` fields only once the
//!    platform has reported a value and the field is visible.
//!
//! Each stage returns a new model and drops categories left empty.

use simdata_spec::{DataModel, SimData, SimPlatform, Visibility, Writability};
use tracing::debug;

/// Keeps fields writable on some platform.
#[must_use]
pub fn filter_settable(model: &DataModel) -> DataModel {
    model.filter(|_, d| {
        d.writable_by_platform
            .values()
            .any(|w| *w != Writability::Never)
    })
}

/// Keeps fields writable on `platform`, either always or after a read.
#[must_use]
pub fn filter_platform_settable(model: &DataModel, platform: SimPlatform) -> DataModel {
    model.filter(|_, d| d.writability(platform) != Writability::Never)
}

/// Keeps fields that can be written given the last telemetry `snapshot`.
///
/// `Always` fields pass. `AfterRead` fields pass only when visible and
/// present in the snapshot; with no snapshot none pass. `Never` fields are
/// dropped.
#[must_use]
pub fn filter_observed_settable(
    model: &DataModel,
    platform: SimPlatform,
    snapshot: Option<&SimData>,
) -> DataModel {
    model.filter(|name, d| match d.writability(platform) {
        Writability::Always => true,
        Writability::AfterRead => {
            d.visibility != Visibility::Never && snapshot.is_some_and(|s| s.contains(name))
        }
        Writability::Never => false,
    })
}

/// Runs all three stages.
#[must_use]
pub fn settable_model(
    model: &DataModel,
    platform: SimPlatform,
    snapshot: Option<&SimData>,
) -> DataModel {
    let any = filter_settable(model);
    let on_platform = filter_platform_settable(&any, platform);
    let now = filter_observed_settable(&on_platform, platform, snapshot);
    debug!(
        %platform,
        fields = model.len(),
        settable = any.len(),
        platform_settable = on_platform.len(),
        settable_now = now.len(),
        "filtered settable fields"
    );
    now
}
