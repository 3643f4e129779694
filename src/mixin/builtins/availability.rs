use std::fmt;

use serde::{Deserialize, Serialize};

use super::is_false;
use crate::mixin::MixinType;

/// Platform availability windows, one entry per domain.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability {
    pub items: Vec<AvailabilityItem>,
}

impl MixinType for Availability {
    const KEY: &'static str = "availability";
}

impl Availability {
    /// Return the entry for a domain (`"macOS"`, `"iOS"`, ...), or the domain-less entry when `domain` is `None`.
    pub fn for_domain(&self, domain: Option<&str>) -> Option<&AvailabilityItem> {
        self.items.iter().find(|item| item.domain.as_deref() == domain)
    }

    /// Whether every entry marks the symbol unconditionally unavailable.
    pub fn is_unavailable_everywhere(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.is_unconditionally_unavailable)
    }
}

/// One availability window.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduced: Option<SemanticVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<SemanticVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obsoleted: Option<SemanticVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renamed: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_unconditionally_deprecated: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_unconditionally_unavailable: bool,
}

impl AvailabilityItem {
    pub fn is_deprecated(&self) -> bool {
        self.is_unconditionally_deprecated || self.deprecated.is_some()
    }
}

/// A `major.minor.patch` version; `minor` and `patch` default to zero on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SemanticVersion {
    pub major: u32,
    #[serde(default)]
    pub minor: u32,
    #[serde(default)]
    pub patch: u32,
}

impl SemanticVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_partial_version() {
        let availability: Availability = serde_json::from_value(json!([
            { "domain": "macOS", "introduced": { "major": 10 }, "deprecated": { "major": 12, "minor": 3 } },
            { "isUnconditionallyUnavailable": true }
        ]))
        .unwrap();

        let mac = availability.for_domain(Some("macOS")).unwrap();
        assert_eq!(mac.introduced, Some(SemanticVersion::new(10, 0, 0)));
        assert!(mac.is_deprecated());
        assert_eq!(mac.deprecated.unwrap().to_string(), "12.3.0");

        let any = availability.for_domain(None).unwrap();
        assert!(any.is_unconditionally_unavailable);
        assert!(!availability.is_unavailable_everywhere());
    }

    #[test]
    fn test_false_flags_are_not_written() {
        let item = AvailabilityItem {
            domain: Some("iOS".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({ "domain": "iOS" }));
    }
}
