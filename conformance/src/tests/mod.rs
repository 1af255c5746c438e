//! Test data shared by the validators' unit tests and the integration tests.

pub mod fixtures;
