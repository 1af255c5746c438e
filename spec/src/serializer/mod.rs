//! Serializers for the field catalog.
//!
//! - **JSON** ([`json`]): one document listing every category and the
//!   descriptor of each of its fields, plus the X-Plane base adapter table.

pub mod json;
