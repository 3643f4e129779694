//! Core field names of a symbol record.
//!
//! Every top-level key of an encoded symbol is either one of these core fields or a mixin key. The codec uses
//! [`is_core_field`] to decide which keys go through mixin dispatch.

use super::registry::{self, LangItemInfo};

/// Stable identifier for a core field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreFieldId {
    Identifier,
    Kind,
    PathComponents,
    Type,
    Names,
    DocComment,
    AccessLevel,
}

/// Metadata for a core field.
pub type CoreFieldInfo = LangItemInfo<CoreFieldId>;

/// Registry of all core fields, in emission order.
pub const CORE_FIELDS: &[CoreFieldInfo] = &[
    LangItemInfo::new(
        CoreFieldId::Identifier,
        "identifier",
        "Precise identifier and interface language. Required.",
    ),
    LangItemInfo::new(CoreFieldId::Kind, "kind", "Declaration kind and display name. Required."),
    LangItemInfo::new(
        CoreFieldId::PathComponents,
        "pathComponents",
        "Names from the module root down to this symbol. Required.",
    ),
    LangItemInfo::new(CoreFieldId::Type, "type", "Type reference of the symbol. Optional."),
    LangItemInfo::new(CoreFieldId::Names, "names", "Title and navigator names. Required."),
    LangItemInfo::new(CoreFieldId::DocComment, "docComment", "Documentation comment lines. Optional."),
    LangItemInfo::new(CoreFieldId::AccessLevel, "accessLevel", "Access level tag. Required."),
];

/// Resolve a wire key to a core field.
pub fn from_str(key: &str) -> Option<CoreFieldId> {
    registry::find_by_spelling(CORE_FIELDS, key).map(|f| f.id)
}

/// Return the wire key of a core field.
pub fn as_str(id: CoreFieldId) -> &'static str {
    CORE_FIELDS
        .iter()
        .find(|f| f.id == id)
        .map(|f| f.canonical)
        .expect("core field info missing")
}

/// Check whether a top-level key is a core field (and therefore never a mixin key).
pub fn is_core_field(key: &str) -> bool {
    from_str(key).is_some()
}
