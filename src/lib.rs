#![forbid(unsafe_code)]
//! Symbol records for documentation and indexing tools.
//!
//! A [`Symbol`] describes one named declaration (a function, type, property, ...). On the wire it is a JSON object
//! with a fixed set of core fields plus any number of *mixins*: optional, independently typed attachments written as
//! extra top-level keys. Mixins are resolved through a built-in descriptor table and a per-call
//! [`RegistryContext`], so callers can add their own mixin types without touching the record type.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: Registry lookups of ids that are defined in the same const table use `.expect(...)`.
//!
//! ## Examples
//! ```rust
//! use symgraph::{KindIdentifier, RegistryContext, decode_symbol, encode_symbol};
//!
//! let input = br#"{
//!     "identifier": {"precise": "s:1C", "interfaceLanguage": "swift"},
//!     "kind": {"identifier": "swift.class"},
//!     "pathComponents": ["C"],
//!     "names": {"title": "C"},
//!     "accessLevel": "public",
//!     "spi": false,
//!     "somethingNew": {"ignored": true}
//! }"#;
//!
//! let context = RegistryContext::new();
//! let symbol = decode_symbol(input, &context).unwrap();
//! assert_eq!(symbol.kind.identifier, KindIdentifier::CLASS);
//! assert_eq!(symbol.mixin_keys().collect::<Vec<_>>(), ["spi"]);
//!
//! let output = encode_symbol(&symbol, &context).unwrap();
//! assert!(!String::from_utf8(output).unwrap().contains("somethingNew"));
//! ```

pub mod cli;
pub mod codec;
pub mod error;
pub mod mixin;
pub mod symbol;

pub use symgraph_core::KindIdentifier;
pub use symgraph_core::lang::kinds::KindId;

pub use codec::{
    SymbolDecoder, SymbolEncoder, decode_symbol, decode_value, encode_symbol, encode_symbol_pretty, encode_value,
    register_mixins,
};
pub use error::{SymbolError, SymbolResult};
pub use mixin::{DecodePolicy, Mixin, MixinDescriptor, MixinType, RegistryContext};
pub use symbol::{AccessLevel, DocComment, Fragment, Identifier, Kind, LineEntry, Names, Position, SourceRange, Symbol};
