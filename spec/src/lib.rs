//! SimData field catalog encoded as typed Rust data.
//!
//! The `simdata-spec` crate provides every telemetry/control field a flight
//! simulator integration exchanges, grouped into 14 categories, as static
//! Rust data: value type, visibility, per-platform writability, ranges and
//! map keys. It also carries the X-Plane 12 adapter table, the aircraft
//! profile document types and the built-in profiles.
//!
//! # Entry Point
//!
//! ```
//! let catalog = simdata_spec::Catalog::full();
//! assert_eq!(catalog.categories.len(), 14);
//! ```
//!
//! # Serialization
//!
//! ```
//! let catalog = simdata_spec::Catalog::full();
//! let json = simdata_spec::serializer::json::to_json(catalog);
//! assert!(json["categories"]["levers"].is_object());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod catalog;
pub mod categories;
pub mod map_keys;
pub mod model;
pub mod names;
pub mod platform;
pub mod platforms;
pub mod profile;
pub mod profiles;
#[cfg(feature = "serializers")]
pub mod serializer;
pub mod value;

pub use catalog::{Catalog, CategoryModule};
pub use map_keys::{special_case_map_keys, DEFAULT_MAP_KEYS};
pub use model::{
    DataDescriptor, DataModel, DescriptorOverride, Model, OverrideModel, Range, SimPlatform,
    ValueType, Visibility, Writability,
};
pub use names::{DataCategory, DataName};
pub use platform::{CommandRef, PlatformDescriptor, PlatformModel};
pub use profile::{AircraftProfile, Setpoint, VSpeed};
pub use value::{SimData, SimValue};
