use std::collections::BTreeMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::mixin::MixinType;

/// A code sample: its lines plus named line ranges (“slices”) that docs can embed on their own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snippet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub lines: Vec<String>,
    /// Slice name to a half-open line range, written as `{"start": .., "end": ..}`.
    #[serde(default)]
    pub slices: BTreeMap<String, Range<usize>>,
}

impl MixinType for Snippet {
    const KEY: &'static str = "snippet";
}

impl Snippet {
    /// Return the lines of a named slice, or `None` if the slice is unknown or out of bounds.
    pub fn slice(&self, name: &str) -> Option<&[String]> {
        let range = self.slices.get(name)?;
        self.lines.get(range.clone())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_slice_lookup() {
        let snippet: Snippet = serde_json::from_value(json!({
            "language": "swift",
            "lines": ["let a = 1", "let b = 2", "print(a + b)"],
            "slices": { "setup": { "start": 0, "end": 2 }, "broken": { "start": 2, "end": 9 } }
        }))
        .unwrap();
        assert_eq!(snippet.slice("setup").unwrap(), ["let a = 1", "let b = 2"]);
        assert!(snippet.slice("broken").is_none());
        assert!(snippet.slice("missing").is_none());
    }
}
