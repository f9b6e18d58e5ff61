//! Core data types for the Courseable service.
//!
//! This module defines the course summary record exchanged between
//! server and client, plus the fixed protocol constants both sides
//! agree on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Response body served at `GET /`.
///
/// The client accepts a connection only when the probe body equals this
/// string exactly, which is how it tells a Courseable server apart from
/// some other process that happens to be listening on the port.
pub const SENTINEL: &str = "AY2023";

/// Default course API server port
pub const DEFAULT_PORT: u16 = 8023;

/// Course summary information.
///
/// Identity is the `(subject, number)` pair; `label` is descriptive
/// and excluded from equality and hashing. Instances are immutable
/// after construction: the server builds one per source record at
/// startup, and the client builds an independent copy per response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// Course subject, e.g. `"CS"`
    pub subject: String,

    /// Course number, e.g. `"124"`
    pub number: String,

    /// Descriptive course title
    #[serde(default)]
    pub label: String,
}

impl Summary {
    /// Create a new summary
    pub fn new(subject: impl Into<String>, number: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            number: number.into(),
            label: label.into(),
        }
    }
}

impl PartialEq for Summary {
    fn eq(&self, other: &Self) -> bool {
        self.subject == other.subject && self.number == other.number
    }
}

impl Eq for Summary {}

impl Hash for Summary {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.subject.hash(state);
        self.number.hash(state);
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.subject, self.number, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display_format() {
        let summary = Summary::new("CS", "124", "Introduction to Computer Science I");
        assert_eq!(
            summary.to_string(),
            "CS 124: Introduction to Computer Science I"
        );
    }

    #[test]
    fn test_identity_ignores_label() {
        let a = Summary::new("CS", "225", "Data Structures");
        let b = Summary::new("CS", "225", "Data Structures and Algorithms");
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_identity_distinguishes_number() {
        let a = Summary::new("CS", "124", "Intro I");
        let b = Summary::new("CS", "128", "Intro II");
        assert_ne!(a, b);
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{"subject": "CS", "number": "124", "label": "Intro", "description": "long text"}"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.subject, "CS");
        assert_eq!(summary.number, "124");
        assert_eq!(summary.label, "Intro");
    }

    #[test]
    fn test_deserialize_missing_label_defaults_empty() {
        let json = r#"{"subject": "CS", "number": "199"}"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.label, "");
    }

    #[test]
    fn test_serialize_field_order() {
        let summary = Summary::new("CS", "124", "Intro");
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(json, r#"{"subject":"CS","number":"124","label":"Intro"}"#);
    }
}
