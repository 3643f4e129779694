//! Well-known access levels.
//!
//! The wire `accessLevel` is an open string: tools emit whatever their language uses. These are the spellings that
//! ship with symbol graphs today, ordered from least to most visible.

use super::registry::{self, LangItemInfo};

/// Stable identifier for a well-known access level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AccessLevelId {
    Private,
    FilePrivate,
    Internal,
    Public,
    Open,
}

/// Metadata for an access level.
pub type AccessLevelInfo = LangItemInfo<AccessLevelId>;

/// Registry of all well-known access levels.
pub const ACCESS_LEVELS: &[AccessLevelInfo] = &[
    LangItemInfo::new(AccessLevelId::Private, "private", "Visible in the enclosing declaration."),
    LangItemInfo::new(AccessLevelId::FilePrivate, "fileprivate", "Visible in the enclosing file."),
    LangItemInfo::new(AccessLevelId::Internal, "internal", "Visible in the defining module."),
    LangItemInfo::new(AccessLevelId::Public, "public", "Visible to importing modules."),
    LangItemInfo::new(
        AccessLevelId::Open,
        "open",
        "Visible to and overridable by importing modules.",
    ),
];

/// Resolve a spelling to a well-known access level.
pub fn from_str(s: &str) -> Option<AccessLevelId> {
    registry::find_by_spelling(ACCESS_LEVELS, s).map(|a| a.id)
}

/// Return the canonical spelling for an access level.
pub fn as_str(id: AccessLevelId) -> &'static str {
    ACCESS_LEVELS
        .iter()
        .find(|a| a.id == id)
        .map(|a| a.canonical)
        .expect("access level info missing")
}
