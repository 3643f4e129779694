//! Value types for the required and optional core fields of a symbol.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use symgraph_core::KindIdentifier;
use symgraph_core::lang::access::{self, AccessLevelId};

/// Unique reference to a symbol plus the language its interface is written in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    pub precise: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface_language: Option<String>,
}

impl Identifier {
    pub fn new(precise: impl Into<String>, interface_language: impl Into<String>) -> Self {
        Self {
            precise: precise.into(),
            interface_language: Some(interface_language.into()),
        }
    }

    /// An identifier without a language tag.
    pub fn precise(precise: impl Into<String>) -> Self {
        Self {
            precise: precise.into(),
            interface_language: None,
        }
    }
}

/// The declaration kind and how documentation names it.
///
/// ## Notes
/// - On input, `identifier` goes through [`KindIdentifier::parse`].
/// - A missing `displayName` defaults to the kind's well-known display name, or to the raw token for custom kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawKind")]
pub struct Kind {
    pub identifier: KindIdentifier,
    pub display_name: String,
}

impl Kind {
    pub fn new(identifier: KindIdentifier, display_name: impl Into<String>) -> Self {
        Self {
            identifier,
            display_name: display_name.into(),
        }
    }
}

impl From<KindIdentifier> for Kind {
    fn from(identifier: KindIdentifier) -> Self {
        let display_name = identifier
            .default_display_name()
            .map(str::to_string)
            .unwrap_or_else(|| identifier.as_str().to_string());
        Self {
            identifier,
            display_name,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawKind {
    identifier: KindIdentifier,
    #[serde(default)]
    display_name: Option<String>,
}

impl From<RawKind> for Kind {
    fn from(raw: RawKind) -> Self {
        match raw.display_name {
            Some(display_name) => Kind::new(raw.identifier, display_name),
            None => Kind::from(raw.identifier),
        }
    }
}

/// A typed piece of declaration text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    /// Fragment category, e.g. `keyword`, `identifier`, `typeIdentifier`, `text`.
    pub kind: String,
    pub spelling: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precise_identifier: Option<String>,
}

impl Fragment {
    pub fn new(kind: impl Into<String>, spelling: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            spelling: spelling.into(),
            precise_identifier: None,
        }
    }
}

/// Display names of a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Names {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigator: Option<Vec<Fragment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_heading: Option<Vec<Fragment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prose: Option<String>,
}

impl Names {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Open access-level tag; any spelling is accepted and kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessLevel(Cow<'static, str>);

impl AccessLevel {
    pub const PRIVATE: Self = Self(Cow::Borrowed("private"));
    pub const FILE_PRIVATE: Self = Self(Cow::Borrowed("fileprivate"));
    pub const INTERNAL: Self = Self(Cow::Borrowed("internal"));
    pub const PUBLIC: Self = Self(Cow::Borrowed("public"));
    pub const OPEN: Self = Self(Cow::Borrowed("open"));

    pub fn new(level: impl Into<String>) -> Self {
        Self(Cow::Owned(level.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The well-known level this spelling names, if any.
    pub fn id(&self) -> Option<AccessLevelId> {
        access::from_str(&self.0)
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
