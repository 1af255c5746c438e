//! Aircraft profile documents for conformance tests.
//!
//! Each constant holds a JSON profile. Valid documents exercise resolution;
//! the rest trigger one or more specific validation issues.

mod map_key_problems;
mod shape_problems;
mod valid;

pub use map_key_problems::{
    BOGUS_FAILURE_KEY, INDEX_WITHOUT_MAP_KEYS, MAP_KEYS_ON_SCALAR, SEVERAL_MAP_KEY_PROBLEMS,
    SPECIAL_CASE_WITH_INDEX_MAP, UNKNOWN_RADIO_KEY, UNMAPPED_ARRAY_INDEX,
};
pub use shape_problems::{MISPLACED_FIELD, STRUCTURALLY_BROKEN};
pub use valid::{FLAPS_SETPOINTS, NO_OVERRIDES, TWIN_TURBOPROP};
