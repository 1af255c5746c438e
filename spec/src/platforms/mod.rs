//! Per-platform adapter tables.
//!
//! Only X-Plane 12 ships a base table today; other platforms resolve against
//! an empty base until their adapter is written.

pub mod xplane;

use crate::model::SimPlatform;
use crate::platform::PlatformModel;

/// Returns the base adapter table for `platform`.
#[must_use]
pub fn base_descriptors(platform: SimPlatform) -> &'static PlatformModel {
    static EMPTY: std::sync::OnceLock<PlatformModel> = std::sync::OnceLock::new();
    match platform {
        SimPlatform::Xplane12 => xplane::base_descriptors(),
        SimPlatform::Msfs2020 => EMPTY.get_or_init(PlatformModel::new),
    }
}
