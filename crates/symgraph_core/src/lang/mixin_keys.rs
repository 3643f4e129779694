//! Keys of the built-in mixins.
//!
//! A mixin key is both the map key inside a symbol and the top-level field name its payload is written under.
//! Externally registered mixins may use any key that is not a core field; they do not appear here.

use super::registry::{self, LangItemInfo};

/// Stable identifier for a built-in mixin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MixinKeyId {
    Availability,
    DeclarationFragments,
    Mutability,
    ExtensionContext,
    GenericSignature,
    Location,
    FunctionSignature,
    Spi,
    Snippet,
}

/// Metadata for a built-in mixin key.
pub type MixinKeyInfo = LangItemInfo<MixinKeyId>;

/// Registry of all built-in mixin keys.
pub const MIXIN_KEYS: &[MixinKeyInfo] = &[
    LangItemInfo::new(
        MixinKeyId::Availability,
        "availability",
        "Platform availability windows.",
    ),
    LangItemInfo::new(
        MixinKeyId::DeclarationFragments,
        "declarationFragments",
        "Tokenized declaration text.",
    ),
    LangItemInfo::new(MixinKeyId::Mutability, "isReadOnly", "Whether a property is read-only."),
    LangItemInfo::new(
        MixinKeyId::ExtensionContext,
        "swiftExtension",
        "The type an extension member is attached to.",
    ),
    LangItemInfo::new(
        MixinKeyId::GenericSignature,
        "swiftGenerics",
        "Generic parameters and constraints.",
    ),
    LangItemInfo::new(MixinKeyId::Location, "location", "Source file and position."),
    LangItemInfo::new(
        MixinKeyId::FunctionSignature,
        "functionSignature",
        "Parameters and return type of a callable.",
    ),
    LangItemInfo::new(MixinKeyId::Spi, "spi", "Whether the symbol is system programming interface."),
    LangItemInfo::new(MixinKeyId::Snippet, "snippet", "Code sample lines and named slices."),
];

/// Resolve a wire key to a built-in mixin.
pub fn from_str(key: &str) -> Option<MixinKeyId> {
    registry::find_by_spelling(MIXIN_KEYS, key).map(|m| m.id)
}

/// Return the wire key of a built-in mixin.
pub fn as_str(id: MixinKeyId) -> &'static str {
    MIXIN_KEYS
        .iter()
        .find(|m| m.id == id)
        .map(|m| m.canonical)
        .expect("mixin key info missing")
}
