//! The symbol record: required core fields plus a keyed set of mixins.
//!
//! ## Notes
//! - The mixin map is key-sorted so iteration and encoded output are reproducible.
//! - Each key maps to exactly one concrete mixin type: the typed accessors always use `M::KEY`, and decoding stores
//!   whatever the key's descriptor produced.
//!
//! ## Examples
//! ```rust
//! use symgraph::mixin::builtins::Spi;
//! use symgraph::{AccessLevel, Identifier, Kind, KindIdentifier, Names, Symbol};
//!
//! let mut symbol = Symbol::new(
//!     Identifier::new("s:4Demo1CC1myyF", "swift"),
//!     Kind::from(KindIdentifier::METHOD),
//!     vec!["C".to_string(), "m()".to_string()],
//!     Names::titled("m()"),
//!     AccessLevel::PUBLIC,
//! );
//! symbol.set_mixin(Some(Spi(true)));
//!
//! assert_eq!(symbol.absolute_path(), "C/m()");
//! assert_eq!(symbol.mixin::<Spi>(), Some(&Spi(true)));
//! ```

mod core_fields;
mod doc_comment;

use std::collections::BTreeMap;

pub use self::core_fields::{AccessLevel, Fragment, Identifier, Kind, Names};
pub use self::doc_comment::{DocComment, LineEntry, Position, SourceRange};
use crate::mixin::{Mixin, MixinType};

/// One declaration extracted from a codebase.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub identifier: Identifier,
    pub kind: Kind,
    pub path_components: Vec<String>,
    /// The wire `type` field: a reference to the symbol's type.
    pub type_reference: Option<String>,
    pub names: Names,
    pub doc_comment: Option<DocComment>,
    pub access_level: AccessLevel,
    mixins: BTreeMap<String, Box<dyn Mixin>>,
}

impl Symbol {
    /// Create a symbol with every required field and no optional data.
    pub fn new(
        identifier: Identifier,
        kind: Kind,
        path_components: Vec<String>,
        names: Names,
        access_level: AccessLevel,
    ) -> Self {
        Self {
            identifier,
            kind,
            path_components,
            type_reference: None,
            names,
            doc_comment: None,
            access_level,
            mixins: BTreeMap::new(),
        }
    }

    pub fn with_type_reference(mut self, type_reference: impl Into<String>) -> Self {
        self.type_reference = Some(type_reference.into());
        self
    }

    pub fn with_doc_comment(mut self, doc_comment: DocComment) -> Self {
        self.doc_comment = Some(doc_comment);
        self
    }

    pub fn with_mixin<M: MixinType>(mut self, mixin: M) -> Self {
        self.insert_mixin(mixin);
        self
    }

    // ---- derived values -------------------------------------------------------

    /// Path components joined with `/`, without leading/trailing separators or percent-encoding.
    pub fn absolute_path(&self) -> String {
        self.path_components.join("/")
    }

    /// Whether the doc comment was written in this symbol's own module.
    ///
    /// ## Returns
    /// - `None` when there is no doc comment, or it has no lines.
    /// - `Some(true)` when the first line carries a source range (only same-module comments record ranges).
    /// - `Some(false)` otherwise (the comment was inherited).
    pub fn is_doc_comment_from_same_module(&self) -> Option<bool> {
        self.doc_comment.as_ref()?.first_line_has_range()
    }

    /// Whether the doc comment was written in `module_name`.
    ///
    /// `None` under the same conditions as [`Symbol::is_doc_comment_from_same_module`]. When the comment records
    /// its originating module, that is compared against `module_name` in place of the range heuristic.
    pub fn is_doc_comment_from_module(&self, module_name: &str) -> Option<bool> {
        let doc_comment = self.doc_comment.as_ref()?;
        let has_range = doc_comment.first_line_has_range()?;
        match doc_comment.module.as_deref() {
            Some(module) => Some(module == module_name),
            None => Some(has_range),
        }
    }

    // ---- typed mixin access ---------------------------------------------------

    /// Borrow the mixin of type `M`, if present.
    pub fn mixin<M: MixinType>(&self) -> Option<&M> {
        self.mixins.get(M::KEY)?.downcast_ref::<M>()
    }

    /// Replace the mixin of type `M` with `value`, or remove it when `value` is `None`.
    pub fn set_mixin<M: MixinType>(&mut self, value: Option<M>) {
        match value {
            Some(mixin) => self.insert_mixin(mixin),
            None => {
                self.mixins.remove(M::KEY);
            }
        }
    }

    /// Attach `mixin`, replacing any existing value under `M::KEY`.
    pub fn insert_mixin<M: MixinType>(&mut self, mixin: M) {
        self.mixins.insert(M::KEY.to_string(), Box::new(mixin));
    }

    /// Detach and return the mixin of type `M`.
    ///
    /// A value stored under `M::KEY` with a different concrete type is left in place.
    pub fn remove_mixin<M: MixinType>(&mut self) -> Option<M> {
        let stored = self.mixins.get(M::KEY)?.downcast_ref::<M>()?.clone();
        self.mixins.remove(M::KEY);
        Some(stored)
    }

    // ---- untyped mixin access -------------------------------------------------

    /// Attach an already boxed mixin under its own key.
    pub fn insert_boxed_mixin(&mut self, mixin: Box<dyn Mixin>) {
        self.mixins.insert(mixin.key().to_string(), mixin);
    }

    pub fn raw_mixin(&self, key: &str) -> Option<&dyn Mixin> {
        self.mixins.get(key).map(|m| m.as_ref())
    }

    pub fn has_mixin(&self, key: &str) -> bool {
        self.mixins.contains_key(key)
    }

    /// Keys of all attached mixins, sorted.
    pub fn mixin_keys(&self) -> impl Iterator<Item = &str> {
        self.mixins.keys().map(String::as_str)
    }

    /// All attached mixins in key order.
    pub fn mixins(&self) -> impl Iterator<Item = (&str, &(dyn Mixin + 'static))> {
        self.mixins.iter().map(|(key, mixin)| (key.as_str(), mixin.as_ref()))
    }

    pub(crate) fn insert_decoded_mixin(&mut self, key: &str, mixin: Box<dyn Mixin>) {
        self.mixins.insert(key.to_string(), mixin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixin::builtins::{Location, Mutability, Spi};
    use symgraph_core::KindIdentifier;

    fn method() -> Symbol {
        Symbol::new(
            Identifier::precise("p"),
            Kind::from(KindIdentifier::METHOD),
            vec!["C".to_string(), "m()".to_string()],
            Names::titled("m()"),
            AccessLevel::PUBLIC,
        )
    }

    fn ranged(text: &str) -> LineEntry {
        LineEntry::new(text).with_range(SourceRange::new(Position::new(1, 4), Position::new(1, 20)))
    }

    #[test]
    fn test_absolute_path() {
        assert_eq!(method().absolute_path(), "C/m()");

        let mut spaced = method();
        spaced.path_components = vec!["A B".to_string(), "c%d".to_string()];
        assert_eq!(spaced.absolute_path(), "A B/c%d");

        let mut empty = method();
        empty.path_components.clear();
        assert_eq!(empty.absolute_path(), "");
    }

    #[test]
    fn test_doc_comment_tri_state() {
        assert_eq!(method().is_doc_comment_from_same_module(), None);

        let empty = method().with_doc_comment(DocComment::new(vec![]));
        assert_eq!(empty.is_doc_comment_from_same_module(), None);

        let inherited =
            method().with_doc_comment(DocComment::new(vec![LineEntry::new("Does m."), LineEntry::new("More.")]));
        assert_eq!(inherited.is_doc_comment_from_same_module(), Some(false));

        let local = method().with_doc_comment(DocComment::new(vec![ranged("Does m."), LineEntry::new("More.")]));
        assert_eq!(local.is_doc_comment_from_same_module(), Some(true));
    }

    #[test]
    fn test_doc_comment_only_first_line_counts() {
        let symbol = method().with_doc_comment(DocComment::new(vec![LineEntry::new("a"), ranged("b")]));
        assert_eq!(symbol.is_doc_comment_from_same_module(), Some(false));
    }

    #[test]
    fn test_doc_comment_module_metadata_wins() {
        let symbol = method().with_doc_comment(DocComment::new(vec![LineEntry::new("a")]).with_module("Demo"));
        assert_eq!(symbol.is_doc_comment_from_module("Demo"), Some(true));
        assert_eq!(symbol.is_doc_comment_from_module("Other"), Some(false));

        let fallback = method().with_doc_comment(DocComment::new(vec![ranged("a")]));
        assert_eq!(fallback.is_doc_comment_from_module("Demo"), Some(true));
        assert_eq!(method().is_doc_comment_from_module("Demo"), None);
    }

    #[test]
    fn test_empty_doc_comment_is_absent_even_with_module() {
        let symbol = method().with_doc_comment(DocComment::new(vec![]).with_module("Demo"));
        assert_eq!(symbol.is_doc_comment_from_same_module(), None);
        assert_eq!(symbol.is_doc_comment_from_module("Demo"), None);
    }

    #[test]
    fn test_set_mixin_replaces_and_removes() {
        let mut symbol = method();
        symbol.set_mixin(Some(Mutability(true)));
        symbol.set_mixin(Some(Mutability(false)));
        assert_eq!(symbol.mixin::<Mutability>(), Some(&Mutability(false)));
        assert_eq!(symbol.mixin_keys().collect::<Vec<_>>(), ["isReadOnly"]);

        symbol.set_mixin::<Mutability>(None);
        assert!(symbol.mixin::<Mutability>().is_none());
        assert!(!symbol.has_mixin("isReadOnly"));
    }

    #[test]
    fn test_mixin_keys_are_sorted() {
        let symbol = method()
            .with_mixin(Spi(false))
            .with_mixin(Location {
                uri: "file:///a.swift".to_string(),
                position: Position::new(0, 0),
            })
            .with_mixin(Mutability(true));
        assert_eq!(symbol.mixin_keys().collect::<Vec<_>>(), ["isReadOnly", "location", "spi"]);
    }

    #[test]
    fn test_remove_mixin_returns_value() {
        let mut symbol = method().with_mixin(Spi(true));
        assert_eq!(symbol.remove_mixin::<Spi>(), Some(Spi(true)));
        assert_eq!(symbol.remove_mixin::<Spi>(), None);
    }

    #[test]
    fn test_equality_includes_mixins() {
        let a = method().with_mixin(Spi(true));
        let b = method().with_mixin(Spi(true));
        let c = method().with_mixin(Spi(false));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, method());
        assert_eq!(a.clone(), a);
    }
}
