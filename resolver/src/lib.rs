//! Aircraft profile resolution for the SimData catalog.
//!
//! Given the catalog, a platform's base adapter table and an aircraft
//! profile, this crate computes:
//!
//! - the **effective model**: the catalog with the profile's descriptor
//!   overrides and setpoint descriptions applied ([`effective`]);
//! - the **settable model**: the effective fields a set request may target
//!   on the current platform, now or after a read ([`settable`]);
//! - the **active platform descriptors**: the adapter entries the telemetry
//!   transport should service ([`platform`]).
//!
//! [`Resolution`] runs all of them for one aircraft on one platform.
//!
//! ```
//! use simdata_resolver::{Resolution, ResolverSettings};
//! use simdata_spec::{platforms, Catalog};
//!
//! let settings = ResolverSettings::default();
//! let profile = simdata_spec::profiles::cessna172::profile();
//! let resolution = Resolution::resolve(
//!     Catalog::full(),
//!     platforms::base_descriptors(settings.platform),
//!     Some(&profile),
//!     &settings,
//! );
//! assert!(!resolution.settable_now(None).is_empty());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod effective;
pub mod platform;
pub mod resolution;
pub mod settable;
pub mod settings;

pub use effective::{
    aircraft_profile_effective_model, compute_effective_model, extract_override_model,
};
pub use platform::{compute_effective_platform_descriptors, filter_active_platform_descriptors};
pub use resolution::Resolution;
pub use settable::{
    filter_observed_settable, filter_platform_settable, filter_settable, settable_model,
};
pub use settings::{ResolverSettings, SettingsError};
