//! Validation report types: issue paths, severity levels, and report aggregation.

use std::fmt;

use serde::Serialize;
use simdata_spec::{DataCategory, DataName};

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory; the document is still accepted.
    Warning,
    /// The document is rejected.
    Error,
}

/// One segment of an issue path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// An object key.
    Key(String),
    /// An array index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl From<DataCategory> for PathSegment {
    fn from(category: DataCategory) -> Self {
        PathSegment::Key(category.as_str().to_owned())
    }
}

impl From<DataName> for PathSegment {
    fn from(name: DataName) -> Self {
        PathSegment::Key(name.as_str().to_owned())
    }
}

/// Builds a `Vec<PathSegment>` from mixed segment types.
#[macro_export]
macro_rules! path {
    ($($segment:expr),* $(,)?) => {
        vec![$($crate::report::PathSegment::from($segment)),*]
    };
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    /// Location of the finding in the validated document.
    pub path: Vec<PathSegment>,
    /// Human-readable message.
    pub message: String,
    /// Severity of the finding.
    pub severity: Severity,
}

impl Issue {
    /// Creates a warning.
    pub fn warning(path: Vec<PathSegment>, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    /// Creates an error.
    pub fn error(path: Vec<PathSegment>, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Returns true if this issue rejects the document.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Returns the path as string keys, indices rendered in decimal.
    pub fn path_strings(&self) -> Vec<String> {
        self.path.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path_strings().join(".");
        if path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{path}: {}", self.message)
        }
    }
}

/// Aggregated issues from one or more validators.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    /// All issues in the order they were found.
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an issue to this report.
    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Extends this report with issues from another source.
    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.issues.extend(issues);
    }

    /// Returns the count of errors.
    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_error()).count()
    }

    /// Returns the count of warnings.
    pub fn warning_count(&self) -> usize {
        self.issues.len() - self.error_count()
    }

    /// Returns true if no issue is an error.
    pub fn all_passed(&self) -> bool {
        self.error_count() == 0
    }

    /// Returns true if there are no issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_macro_mixes_segment_types() {
        let path = path!["xplane", DataCategory::Failures, DataName::IsFailed, 2usize];
        let issue = Issue::warning(path, "bad key");
        assert_eq!(issue.path_strings(), ["xplane", "failures", "isFailed", "2"]);
        assert_eq!(issue.to_string(), "xplane.failures.isFailed.2: bad key");
    }

    #[test]
    fn warnings_do_not_fail_report() {
        let mut report = ValidationReport::new();
        report.push(Issue::warning(path!["a"], "w"));
        assert!(report.all_passed());
        assert!(!report.is_clean());
        report.push(Issue::error(path![], "e"));
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(!report.all_passed());
    }

    #[test]
    fn issues_serialize_with_plain_paths() {
        let issue = Issue::error(path!["levers", 0usize], "x");
        let json = serde_json::to_value(&issue).unwrap_or_default();
        assert_eq!(json["path"], serde_json::json!(["levers", 0]));
        assert_eq!(json["severity"], "error");
    }
}
