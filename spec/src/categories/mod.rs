//! Field definitions, one module per [`DataCategory`](crate::DataCategory).
//!
//! Each module returns a [`CategoryModule`](crate::CategoryModule) with the
//! base descriptor of every field in its category.

pub mod attitude;
pub mod autopilot;
pub mod environment;
pub mod failures;
pub mod freezes;
pub mod indicators;
pub mod initialization;
pub mod levers;
pub mod lights;
pub mod position;
pub mod radios_navigation;
pub mod simulation;
pub mod systems;
pub mod weight_balance;
