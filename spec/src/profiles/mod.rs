//! Built-in aircraft profiles.
//!
//! [`generic`] covers broad aircraft classes; aircraft-specific profiles
//! start from one of them and override what differs.

pub mod cessna172;
pub mod generic;

use crate::profile::AircraftProfile;

/// Returns every built-in profile.
#[must_use]
pub fn builtin() -> Vec<AircraftProfile> {
    let mut profiles = generic::all();
    profiles.push(cessna172::profile());
    profiles
}
