//! Semantic validators.
//!
//! - [`map_keys`]: profile map keys against the effective model (warnings).
//! - [`set_request`]: set requests against the settable model (errors).
//! - [`builtin`]: every built-in profile through the full pipeline.

pub mod builtin;
pub mod map_keys;
pub mod set_request;
