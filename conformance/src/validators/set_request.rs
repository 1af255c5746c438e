//! Set request validation.
//!
//! A set request is a [`SimData`] naming the fields to write. It is accepted
//! only if every field is currently settable, every value has the field's
//! type, and every map key is one the field declares. All problems are
//! reported together.

use simdata_resolver::Resolution;
use simdata_spec::{DataModel, SimData};

use crate::path;
use crate::report::Issue;

/// Outcome of checking one set request.
#[derive(Debug, Clone, PartialEq)]
pub struct SetRequestVerdict {
    /// True when the request may be forwarded to the platform.
    pub accepted: bool,
    /// Every problem found; empty when accepted.
    pub issues: Vec<Issue>,
}

/// Validates set requests against a settable model.
#[derive(Debug, Clone)]
pub struct SetRequestRefiner {
    settable: DataModel,
}

impl SetRequestRefiner {
    /// Creates a refiner for the fields in `settable`.
    pub fn new(settable: DataModel) -> Self {
        Self { settable }
    }

    /// Returns the settable model requests are checked against.
    pub fn settable(&self) -> &DataModel {
        &self.settable
    }

    /// Checks `request`, returning every issue.
    ///
    /// # Errors
    ///
    /// Returns all issues when any field is not settable, has the wrong value
    /// type, or uses an undeclared map key.
    pub fn validate(&self, request: &SimData) -> Result<(), Vec<Issue>> {
        let mut issues = Vec::new();
        for (name, value) in request.iter() {
            let category = name.category();
            let Some(descriptor) = self.settable.get(name) else {
                issues.push(Issue::error(path![category, name], "Not currently settable"));
                continue;
            };
            if !value.matches(descriptor.value_type) {
                issues.push(Issue::error(
                    path![category, name],
                    format!("Expected {}", descriptor.value_type),
                ));
                continue;
            }
            if !descriptor.is_map() {
                continue;
            }
            let allowed = descriptor.effective_map_keys();
            for key in value.map_keys().unwrap_or_default() {
                if !allowed.contains(&key) {
                    issues.push(Issue::error(
                        path![category, name, key],
                        "Not a valid record key",
                    ));
                }
            }
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }

    /// Checks `request` and reports the verdict.
    pub fn check(&self, request: &SimData) -> SetRequestVerdict {
        match self.validate(request) {
            Ok(()) => SetRequestVerdict {
                accepted: true,
                issues: Vec::new(),
            },
            Err(issues) => SetRequestVerdict {
                accepted: false,
                issues,
            },
        }
    }
}

/// Builds set request refiners from a [`Resolution`].
pub trait RefineSetRequests {
    /// Returns a refiner for the fields settable given `snapshot`.
    fn set_request_refiner(&self, snapshot: Option<&SimData>) -> SetRequestRefiner;
}

impl RefineSetRequests for Resolution {
    fn set_request_refiner(&self, snapshot: Option<&SimData>) -> SetRequestRefiner {
        SetRequestRefiner::new(self.settable_now(snapshot))
    }
}

/// Overlays `newer` on `base` field by field; map values are replaced whole.
pub fn merge_set_requests(base: &SimData, newer: &SimData) -> SimData {
    simdata_spec::value::merge_sim_data(base, newer)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use simdata_spec::{
        DataDescriptor, DataName, SimPlatform, SimValue, ValueType, Visibility, Writability,
    };

    fn settable() -> DataModel {
        [
            (
                DataName::ThrottlePercentOpen,
                DataDescriptor::new(ValueType::NumberMap, Visibility::Always)
                    .writable(SimPlatform::Xplane12, Writability::Always)
                    .with_map_keys(&["LeftEngine", "RightEngine"]),
            ),
            (
                DataName::MixtureLeverPercentRich,
                DataDescriptor::new(ValueType::NumberMap, Visibility::Always)
                    .writable(SimPlatform::Xplane12, Writability::Always),
            ),
            (
                DataName::IsPaused,
                DataDescriptor::new(ValueType::Boolean, Visibility::Always)
                    .writable(SimPlatform::Xplane12, Writability::Always),
            ),
        ]
        .into_iter()
        .collect()
    }

    fn numbers(entries: &[(&str, f64)]) -> SimValue {
        SimValue::NumberMap(
            entries
                .iter()
                .map(|(k, v)| ((*k).to_owned(), *v))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    fn owned(path: &[&str]) -> Vec<String> {
        path.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn accepts_declared_keys() {
        let refiner = SetRequestRefiner::new(settable());
        let request: SimData = [
            (DataName::ThrottlePercentOpen, numbers(&[("LeftEngine", 80.0)])),
            (DataName::MixtureLeverPercentRich, numbers(&[("0", 100.0)])),
            (DataName::IsPaused, SimValue::Boolean(true)),
        ]
        .into_iter()
        .collect();
        assert_eq!(refiner.validate(&request), Ok(()));
        assert!(refiner.check(&request).accepted);
    }

    #[test]
    fn rejects_undeclared_key() {
        let refiner = SetRequestRefiner::new(settable());
        let request: SimData = [(
            DataName::ThrottlePercentOpen,
            numbers(&[("CenterEngine", 50.0)]),
        )]
        .into_iter()
        .collect();
        let verdict = refiner.check(&request);
        assert!(!verdict.accepted);
        assert_eq!(verdict.issues.len(), 1);
        assert_eq!(
            verdict.issues[0].path_strings(),
            ["levers", "throttlePercentOpen", "CenterEngine"]
        );
        assert_eq!(verdict.issues[0].message, "Not a valid record key");
    }

    #[test]
    fn collects_every_issue() {
        let refiner = SetRequestRefiner::new(settable());
        let request: SimData = [
            (DataName::BatteryOn, SimValue::Boolean(true)),
            (
                DataName::ThrottlePercentOpen,
                numbers(&[("Left", 1.0), ("Right", 2.0)]),
            ),
            (DataName::IsPaused, SimValue::Number(1.0)),
        ]
        .into_iter()
        .collect();
        let issues = refiner.validate(&request).err().unwrap_or_default();
        let messages: Vec<(Vec<String>, &str)> = issues
            .iter()
            .map(|i| (i.path_strings(), i.message.as_str()))
            .collect();
        assert_eq!(
            messages,
            vec![
                (owned(&["levers", "throttlePercentOpen", "Left"]), "Not a valid record key"),
                (owned(&["levers", "throttlePercentOpen", "Right"]), "Not a valid record key"),
                (owned(&["systems", "batteryOn"]), "Not currently settable"),
                (owned(&["simulation", "isPaused"]), "Expected Boolean"),
            ]
        );
    }

    #[test]
    fn merge_replaces_whole_fields() {
        let base: SimData = [
            (
                DataName::ThrottlePercentOpen,
                numbers(&[("LeftEngine", 10.0), ("RightEngine", 10.0)]),
            ),
            (DataName::IsPaused, SimValue::Boolean(false)),
        ]
        .into_iter()
        .collect();
        let newer: SimData = [(DataName::ThrottlePercentOpen, numbers(&[("LeftEngine", 90.0)]))]
            .into_iter()
            .collect();
        let merged = merge_set_requests(&base, &newer);
        assert_eq!(
            merged.get(DataName::ThrottlePercentOpen),
            Some(&numbers(&[("LeftEngine", 90.0)]))
        );
        assert_eq!(merged.get(DataName::IsPaused), Some(&SimValue::Boolean(false)));
        assert_eq!(base.len(), 2);
        assert_eq!(newer.len(), 1);
    }
}
