//! The canonical, open enumeration of declaration kinds.
//!
//! A [`KindIdentifier`] is either one of the well-known kinds from [`crate::lang::kinds`] or a custom token kept
//! verbatim. Construction from a string never fails: [`KindIdentifier::parse`] recognizes canonical tokens, strips
//! one language prefix (`"swift.func"` → `func`), and otherwise keeps the caller's exact spelling.
//!
//! ## Examples
//! ```rust
//! use symgraph_core::KindIdentifier;
//!
//! assert_eq!(KindIdentifier::parse("swift.method"), KindIdentifier::METHOD);
//! assert_eq!(KindIdentifier::parse("a.b.c").as_str(), "a.b.c");
//! assert!(KindIdentifier::is_known_identifier("occ.class"));
//! ```

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::lang::kinds::{self, KindId};

/// A declaration kind, identified by its canonical token.
///
/// ## Notes
/// - Equality, ordering and hashing use [`KindIdentifier::as_str`] only.
/// - A custom value only ever holds a token that does not normalize to a well-known kind, so serializing and
///   parsing it back yields the same value.
/// - The serialized form is a bare string.
#[derive(Clone)]
pub struct KindIdentifier(Repr);

#[derive(Clone)]
enum Repr {
    Known(KindId),
    Custom(Box<str>),
}

impl KindIdentifier {
    pub const ASSOCIATED_TYPE: Self = Self::known(KindId::AssociatedType);
    pub const CLASS: Self = Self::known(KindId::Class);
    pub const DEINIT: Self = Self::known(KindId::Deinit);
    pub const ENUM: Self = Self::known(KindId::Enum);
    pub const ENUM_CASE: Self = Self::known(KindId::EnumCase);
    pub const EXTENSION: Self = Self::known(KindId::Extension);
    pub const FUNC: Self = Self::known(KindId::Func);
    pub const OPERATOR: Self = Self::known(KindId::Operator);
    pub const INIT: Self = Self::known(KindId::Init);
    pub const IVAR: Self = Self::known(KindId::InstanceVariable);
    pub const MACRO: Self = Self::known(KindId::Macro);
    pub const METHOD: Self = Self::known(KindId::Method);
    pub const MODULE: Self = Self::known(KindId::Module);
    pub const PROPERTY: Self = Self::known(KindId::Property);
    pub const PROTOCOL: Self = Self::known(KindId::Protocol);
    pub const SNIPPET: Self = Self::known(KindId::Snippet);
    pub const SNIPPET_GROUP: Self = Self::known(KindId::SnippetGroup);
    pub const STRUCT: Self = Self::known(KindId::Struct);
    pub const SUBSCRIPT: Self = Self::known(KindId::Subscript);
    pub const TYPE_METHOD: Self = Self::known(KindId::TypeMethod);
    pub const TYPE_PROPERTY: Self = Self::known(KindId::TypeProperty);
    pub const TYPE_SUBSCRIPT: Self = Self::known(KindId::TypeSubscript);
    pub const TYPE_ALIAS: Self = Self::known(KindId::TypeAlias);
    pub const VAR: Self = Self::known(KindId::Var);

    /// Wrap a well-known kind.
    pub const fn known(id: KindId) -> Self {
        Self(Repr::Known(id))
    }

    /// Build a kind from an owned token.
    ///
    /// The token goes through the same lookup as [`KindIdentifier::parse`], so `custom("x.func")` is
    /// [`KindIdentifier::FUNC`]. A custom value therefore never holds a token that would decode to a well-known kind.
    pub fn custom(token: impl Into<String>) -> Self {
        let token = token.into();
        match lookup(&token) {
            Some(id) => Self::known(id),
            None => Self(Repr::Custom(token.into_boxed_str())),
        }
    }

    /// Normalize a raw token into a kind.
    ///
    /// ## Parameters
    /// - `raw`: the token as it appears on the wire, possibly language-prefixed.
    ///
    /// ## Returns
    /// - The well-known kind if `raw` is a canonical token, or becomes one after removing everything up to and
    ///   including its first `.`.
    /// - Otherwise a custom value holding `raw` unmodified (not the stripped remainder).
    pub fn parse(raw: &str) -> Self {
        match lookup(raw) {
            Some(id) => Self::known(id),
            None => Self(Repr::Custom(raw.into())),
        }
    }

    /// Check whether `raw` normalizes to a well-known kind, directly or after one prefix strip.
    pub fn is_known_identifier(raw: &str) -> bool {
        lookup(raw).is_some()
    }

    /// Return the canonical token, or the original spelling of a custom kind.
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Repr::Known(id) => kinds::as_str(*id),
            Repr::Custom(raw) => &**raw,
        }
    }

    /// Return the well-known id, if any.
    pub fn id(&self) -> Option<KindId> {
        match &self.0 {
            Repr::Known(id) => Some(*id),
            Repr::Custom(_) => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.id().is_none()
    }

    /// Return the default display name for well-known kinds.
    pub fn default_display_name(&self) -> Option<&'static str> {
        self.id().map(kinds::display_name)
    }
}

/// Two-stage lookup shared by `parse` and `is_known_identifier`.
fn lookup(raw: &str) -> Option<KindId> {
    kinds::from_str(raw).or_else(|| {
        let (_, rest) = raw.split_once('.')?;
        kinds::from_str(rest)
    })
}

impl From<KindId> for KindIdentifier {
    fn from(id: KindId) -> Self {
        Self::known(id)
    }
}

impl FromStr for KindIdentifier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl PartialEq for KindIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for KindIdentifier {}

impl Hash for KindIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialOrd for KindIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KindIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Debug for KindIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Known(id) => write!(f, "KindIdentifier::{id:?}"),
            Repr::Custom(raw) => write!(f, "KindIdentifier::Custom({raw:?})"),
        }
    }
}

impl fmt::Display for KindIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for KindIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for KindIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_token() {
        assert_eq!(KindIdentifier::parse("func"), KindIdentifier::FUNC);
        assert_eq!(KindIdentifier::parse("enum.case"), KindIdentifier::ENUM_CASE);
        assert_eq!(KindIdentifier::parse("type.method"), KindIdentifier::TYPE_METHOD);
    }

    #[test]
    fn test_parse_strips_one_language_prefix() {
        assert_eq!(KindIdentifier::parse("swift.func"), KindIdentifier::FUNC);
        assert_eq!(KindIdentifier::parse("x.method"), KindIdentifier::METHOD);
        assert_eq!(KindIdentifier::parse("swift.enum.case"), KindIdentifier::ENUM_CASE);
        assert_eq!(KindIdentifier::parse("occ.func.op"), KindIdentifier::OPERATOR);
        assert!(!KindIdentifier::parse("swift.func").is_custom());
    }

    #[test]
    fn test_parse_only_strips_the_first_segment() {
        // "a.b.func" → "b.func", which is not a token; nothing further is stripped.
        let kind = KindIdentifier::parse("a.b.func");
        assert!(kind.is_custom());
        assert_eq!(kind.as_str(), "a.b.func");
    }

    #[test]
    fn test_parse_keeps_original_string_on_double_miss() {
        let kind = KindIdentifier::parse("a.b.c");
        assert!(kind.is_custom());
        assert_eq!(kind.as_str(), "a.b.c");
        assert_ne!(kind.as_str(), "b.c");
    }

    #[test]
    fn test_parse_edge_inputs() {
        assert_eq!(KindIdentifier::parse("").as_str(), "");
        assert_eq!(KindIdentifier::parse(".").as_str(), ".");
        assert_eq!(KindIdentifier::parse(".class"), KindIdentifier::CLASS);
        assert_eq!(KindIdentifier::parse("class.").as_str(), "class.");
    }

    #[test]
    fn test_is_known_identifier_matches_both_stages() {
        assert!(KindIdentifier::is_known_identifier("protocol"));
        assert!(KindIdentifier::is_known_identifier("swift.protocol"));
        assert!(!KindIdentifier::is_known_identifier("swift.objc.protocol"));
        assert!(!KindIdentifier::is_known_identifier("dictionary"));
    }

    #[test]
    fn test_custom_normalizes_like_parse() {
        assert_eq!(KindIdentifier::custom("class"), KindIdentifier::CLASS);
        assert_eq!(KindIdentifier::custom("x.func"), KindIdentifier::FUNC);
        assert!(!KindIdentifier::custom("x.func").is_custom());

        let kept = KindIdentifier::custom("swift.objc.protocol");
        assert!(kept.is_custom());
        assert_eq!(kept.as_str(), "swift.objc.protocol");
    }

    #[test]
    fn test_custom_survives_serde() {
        for token in ["x.func", "swift.objc.protocol", "dictionary"] {
            let kind = KindIdentifier::custom(token);
            let json = serde_json::to_string(&kind).unwrap();
            let back: KindIdentifier = serde_json::from_str(&json).unwrap();
            assert_eq!(format!("{back:?}"), format!("{kind:?}"));
        }
    }

    #[test]
    fn test_serde_is_a_bare_string() {
        let json = serde_json::to_string(&KindIdentifier::TYPE_PROPERTY).unwrap();
        assert_eq!(json, "\"type.property\"");

        let kind: KindIdentifier = serde_json::from_str("\"swift.type.property\"").unwrap();
        assert_eq!(kind, KindIdentifier::TYPE_PROPERTY);

        let custom: KindIdentifier = serde_json::from_str("\"lang.unknown.thing\"").unwrap();
        assert_eq!(serde_json::to_string(&custom).unwrap(), "\"lang.unknown.thing\"");
    }

    #[test]
    fn test_default_display_name() {
        assert_eq!(KindIdentifier::METHOD.default_display_name(), Some("Instance Method"));
        assert_eq!(KindIdentifier::custom("dictionary").default_display_name(), None);
    }
}
