//! Define the declaration-kind vocabulary for symbol records.
//!
//! This module is the single source of truth for well-known kinds: a stable identifier ([`KindId`]) plus a const
//! metadata table ([`KINDS`]) that records canonical wire tokens, display names and descriptions.
//!
//! ## Notes
//! - Lookup via [`from_str`] is an **exact**, case-sensitive match on the canonical token. Language prefixes
//!   (`"swift.func"`) are handled one level up by [`crate::KindIdentifier::parse`].
//! - Several canonical tokens contain a dot themselves (`"enum.case"`, `"type.method"`).
//!
//! ## Examples
//! ```rust
//! use symgraph_core::lang::kinds::{self, KindId};
//!
//! assert_eq!(kinds::from_str("type.property"), Some(KindId::TypeProperty));
//! assert_eq!(kinds::display_name(KindId::TypeProperty), "Type Property");
//! assert_eq!(kinds::from_str("swift.func"), None);
//! ```

use super::registry::LangItemInfo;

/// Stable identifier for every well-known declaration kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KindId {
    // Types
    AssociatedType,
    Class,
    Enum,
    Extension,
    Protocol,
    Struct,
    TypeAlias,

    // Members
    Deinit,
    EnumCase,
    Init,
    InstanceVariable,
    Method,
    Property,
    Subscript,
    TypeMethod,
    TypeProperty,
    TypeSubscript,

    // Free declarations
    Func,
    Operator,
    Macro,
    Var,

    // Containers
    Module,
    Snippet,
    SnippetGroup,
}

/// Metadata for a declaration kind.
///
/// ## Notes
/// - `item.canonical` is the wire token.
/// - `display_name` is what documentation renders, and the default for a decoded `kind.displayName`.
#[derive(Debug, Clone, Copy)]
pub struct KindInfo {
    pub item: LangItemInfo<KindId>,
    pub display_name: &'static str,
}

/// Registry of all well-known kinds.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KINDS: &[KindInfo] = &[
    info(
        KindId::AssociatedType,
        "associatedtype",
        "Associated Type",
        "A placeholder type declared by a protocol.",
    ),
    info(KindId::Class, "class", "Class", "A reference type."),
    info(KindId::Enum, "enum", "Enumeration", "A type with a closed set of cases."),
    info(
        KindId::Extension,
        "extension",
        "Extension",
        "Additional members attached to an existing type.",
    ),
    info(KindId::Protocol, "protocol", "Protocol", "A set of requirements."),
    info(KindId::Struct, "struct", "Structure", "A value type."),
    info(KindId::TypeAlias, "typealias", "Type Alias", "An alternate name for a type."),
    info(KindId::Deinit, "deinit", "Deinitializer", "Teardown for a reference type."),
    info(KindId::EnumCase, "enum.case", "Case", "One case of an enumeration."),
    info(KindId::Init, "init", "Initializer", "A constructor."),
    info(
        KindId::InstanceVariable,
        "ivar",
        "Instance Variable",
        "Raw per-instance storage.",
    ),
    info(KindId::Method, "method", "Instance Method", "A function bound to an instance."),
    info(KindId::Property, "property", "Instance Property", "A value bound to an instance."),
    info(
        KindId::Subscript,
        "subscript",
        "Instance Subscript",
        "Indexed access on an instance.",
    ),
    info(KindId::TypeMethod, "type.method", "Type Method", "A function bound to a type."),
    info(KindId::TypeProperty, "type.property", "Type Property", "A value bound to a type."),
    info(
        KindId::TypeSubscript,
        "type.subscript",
        "Type Subscript",
        "Indexed access on a type.",
    ),
    info(KindId::Func, "func", "Function", "A free function."),
    info(KindId::Operator, "func.op", "Operator", "An operator function."),
    info(KindId::Macro, "macro", "Macro", "A compile-time expansion."),
    info(KindId::Var, "var", "Global Variable", "A free variable."),
    info(KindId::Module, "module", "Module", "A compilation unit."),
    info(KindId::Snippet, "snippet", "Snippet", "A standalone code sample."),
    info(
        KindId::SnippetGroup,
        "snippetGroup",
        "Snippet Group",
        "A named collection of snippets.",
    ),
];

/// Resolve an exact canonical token to a [`KindId`].
///
/// ## Returns
/// - `Some(KindId)` if `token` is exactly one of the canonical tokens.
/// - `None` otherwise (prefixed spellings included).
pub fn from_str(token: &str) -> Option<KindId> {
    info_for_token(token).map(|k| k.item.id)
}

/// Return the canonical token for a kind.
pub fn as_str(id: KindId) -> &'static str {
    info_for(id).item.canonical
}

/// Return the default display name for a kind.
pub fn display_name(id: KindId) -> &'static str {
    info_for(id).display_name
}

/// Return the full metadata entry for a kind.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KindId) -> &'static KindInfo {
    KINDS.iter().find(|k| k.item.id == id).expect("kind info missing")
}

/// Look up the registry entry for a canonical token.
pub fn info_for_token(token: &str) -> Option<&'static KindInfo> {
    KINDS.iter().find(|k| k.item.canonical == token)
}

const fn info(
    id: KindId,
    canonical: &'static str,
    display_name: &'static str,
    description: &'static str,
) -> KindInfo {
    KindInfo {
        item: LangItemInfo::new(id, canonical, description),
        display_name,
    }
}
