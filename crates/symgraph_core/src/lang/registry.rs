//! Shareable metadata for `symgraph_core::lang` registries.
//!
//! The `symgraph_core::lang` module is a set of **registry-first** vocabularies: declaration kinds, core fields,
//! mixin keys, access levels. This submodule provides the small, dependency-free metadata types that are reused
//! across all registries.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; decoding rules live in the codec.
//!
//! ## See also
//! - [`crate::lang::kinds`]
//! - [`crate::lang::mixin_keys`]

/// Shared metadata shape for “registry-first” vocabulary items.
///
/// Every vocabulary shares the same core fields:
/// - stable identity (`id`)
/// - the wire spelling (`canonical`)
/// - documentation (`description`)
///
/// Registries that need extra per-item data (e.g. a kind's display name) wrap this struct in an “extension” info
/// type.
///
/// ## Notes
/// - `description` is intentionally mandatory to keep docs/tooling consistent.
/// - This type is `Copy` so it can live in `const` tables.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub description: &'static str,
}

impl<Id> LangItemInfo<Id> {
    /// Build a registry entry.
    pub const fn new(id: Id, canonical: &'static str, description: &'static str) -> Self {
        Self {
            id,
            canonical,
            description,
        }
    }
}

/// Find the entry whose canonical spelling is exactly `spelling`.
///
/// ## Notes
/// - Lookup is **case-sensitive**; wire tokens are never case-folded.
pub fn find_by_spelling<'a, Id: Copy>(
    table: &'a [LangItemInfo<Id>],
    spelling: &str,
) -> Option<&'a LangItemInfo<Id>> {
    table.iter().find(|item| item.canonical == spelling)
}
