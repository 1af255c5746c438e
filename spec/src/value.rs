//! Telemetry values.
//!
//! A [`SimData`] holds one value per field. It is used both for the last
//! telemetry snapshot received from a platform and for inbound set requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{DataDescriptor, Model, ValueType};

/// A field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SimValue {
    /// A boolean.
    Boolean(bool),
    /// A number.
    Number(f64),
    /// A string.
    String(String),
    /// A string-keyed map of booleans.
    BooleanMap(BTreeMap<String, bool>),
    /// A string-keyed map of numbers.
    NumberMap(BTreeMap<String, f64>),
    /// A string-keyed map of strings.
    StringMap(BTreeMap<String, String>),
}

/// One value per field, keyed like the catalog.
pub type SimData = Model<SimValue>;

impl SimValue {
    /// Returns true if this value has the shape declared by `value_type`.
    ///
    /// An empty map matches every map type.
    #[must_use]
    pub fn matches(&self, value_type: ValueType) -> bool {
        match (self, value_type) {
            (SimValue::Boolean(_), ValueType::Boolean)
            | (SimValue::Number(_), ValueType::Number)
            | (SimValue::String(_), ValueType::String)
            | (SimValue::BooleanMap(_), ValueType::BooleanMap)
            | (SimValue::NumberMap(_), ValueType::NumberMap)
            | (SimValue::StringMap(_), ValueType::StringMap) => true,
            _ => value_type.is_map() && self.map_keys().is_some_and(|k| k.is_empty()),
        }
    }

    /// Returns the keys of a map value, `None` for scalars.
    #[must_use]
    pub fn map_keys(&self) -> Option<Vec<&str>> {
        match self {
            SimValue::BooleanMap(m) => Some(m.keys().map(String::as_str).collect()),
            SimValue::NumberMap(m) => Some(m.keys().map(String::as_str).collect()),
            SimValue::StringMap(m) => Some(m.keys().map(String::as_str).collect()),
            _ => None,
        }
    }
}

/// Clamps `value` into the descriptor's range. Values without a descriptor
/// or without a range are returned unchanged.
#[must_use]
pub fn clamp(value: f64, descriptor: Option<&DataDescriptor>) -> f64 {
    match descriptor.and_then(|d| d.range) {
        Some(range) => value.max(range.min).min(range.max),
        None => value,
    }
}

/// Clamps every entry of a number map into the descriptor's range.
#[must_use]
pub fn clamp_map(
    descriptor: Option<&DataDescriptor>,
    data: &BTreeMap<String, f64>,
) -> BTreeMap<String, f64> {
    data.iter()
        .map(|(key, value)| (key.clone(), clamp(*value, descriptor)))
        .collect()
}

/// Overlays `newer` onto `base`, replacing whole field values.
///
/// Map values are not merged key by key: a field present in `newer` replaces
/// the same field in `base` entirely.
#[must_use]
pub fn merge_sim_data(base: &SimData, newer: &SimData) -> SimData {
    let mut merged = base.clone();
    for (name, value) in newer.iter() {
        merged.insert(name, value.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Visibility;
    use crate::names::DataName;

    fn percent() -> DataDescriptor {
        DataDescriptor::new(ValueType::Number, Visibility::Always).with_range(0.0, 100.0)
    }

    #[test]
    fn clamp_respects_range() {
        let d = percent();
        assert_eq!(clamp(150.0, Some(&d)), 100.0);
        assert_eq!(clamp(-3.0, Some(&d)), 0.0);
        assert_eq!(clamp(42.0, Some(&d)), 42.0);
        assert_eq!(clamp(420.0, None), 420.0);
    }

    #[test]
    fn clamp_map_clamps_each_entry() {
        let d = percent();
        let data: BTreeMap<String, f64> =
            [("LeftEngine".to_owned(), 120.0), ("RightEngine".to_owned(), 50.0)].into();
        let clamped = clamp_map(Some(&d), &data);
        assert_eq!(clamped["LeftEngine"], 100.0);
        assert_eq!(clamped["RightEngine"], 50.0);
    }

    #[test]
    fn values_parse_untagged() {
        let v: SimValue =
            serde_json::from_str(r#"{"com1": 118.5}"#).unwrap_or(SimValue::Boolean(false));
        assert!(v.matches(ValueType::NumberMap));
        assert_eq!(v.map_keys(), Some(vec!["com1"]));
        let v: SimValue = serde_json::from_str("true").unwrap_or(SimValue::Number(0.0));
        assert!(v.matches(ValueType::Boolean));
        assert!(!v.matches(ValueType::Number));
        assert_eq!(v.map_keys(), None);
    }

    #[test]
    fn merge_replaces_whole_fields() {
        let base: SimData = [
            (DataName::BatteryOn, SimValue::Boolean(true)),
            (
                DataName::ThrottlePercentOpen,
                SimValue::NumberMap([("0".to_owned(), 10.0)].into()),
            ),
        ]
        .into_iter()
        .collect();
        let newer: SimData = [(
            DataName::ThrottlePercentOpen,
            SimValue::NumberMap([("1".to_owned(), 90.0)].into()),
        )]
        .into_iter()
        .collect();
        let merged = merge_sim_data(&base, &newer);
        assert_eq!(merged.get(DataName::BatteryOn), Some(&SimValue::Boolean(true)));
        assert_eq!(
            merged.get(DataName::ThrottlePercentOpen).and_then(SimValue::map_keys),
            Some(vec!["1"])
        );
        assert_eq!(base.len(), 2);
    }
}
