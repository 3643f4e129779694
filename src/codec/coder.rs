//! Coder objects that carry per-call options and pending mixin registrations.
//!
//! Registrations made through [`register_mixins`] apply to the **next** `encode`/`decode` call on that coder only:
//! the call takes the pending [`RegistryContext`] and leaves an empty one behind.

use std::mem;

use serde_json::Value;

use super::{decode_symbol, decode_value, encode_symbol, encode_symbol_pretty, encode_value};
use crate::error::SymbolResult;
use crate::mixin::{MixinDescriptor, RegistryContext};
use crate::symbol::Symbol;

/// A coder that accepts mixin registrations for its next call.
pub trait CoderContext {
    fn registry_mut(&mut self) -> &mut RegistryContext;
}

/// Merge `descriptors` into the coder's registry for its next encode or decode call.
///
/// ## Examples
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use symgraph::codec::{SymbolDecoder, register_mixins};
/// use symgraph::mixin::{MixinDescriptor, MixinType};
///
/// #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// struct Owner(String);
///
/// impl MixinType for Owner {
///     const KEY: &'static str = "owner";
/// }
///
/// let mut decoder = SymbolDecoder::new();
/// register_mixins(&mut decoder, [MixinDescriptor::of::<Owner>()]);
/// let symbol = decoder
///     .decode(br#"{"identifier":{"precise":"p"},"kind":{"identifier":"class"},"pathComponents":["C"],
///                 "names":{"title":"C"},"accessLevel":"public","owner":"docs"}"#)
///     .unwrap();
/// assert_eq!(symbol.mixin::<Owner>(), Some(&Owner("docs".to_string())));
/// ```
pub fn register_mixins<C, I>(coder: &mut C, descriptors: I)
where
    C: CoderContext + ?Sized,
    I: IntoIterator<Item = MixinDescriptor>,
{
    coder.registry_mut().extend(descriptors);
}

/// Decodes symbols, consulting pending registrations once.
#[derive(Debug, Clone, Default)]
pub struct SymbolDecoder {
    pending: RegistryContext,
}

impl SymbolDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode JSON bytes with the built-ins plus whatever was registered since the last call.
    pub fn decode(&mut self, bytes: &[u8]) -> SymbolResult<Symbol> {
        let context = mem::take(&mut self.pending);
        decode_symbol(bytes, &context)
    }

    pub fn decode_value(&mut self, value: &Value) -> SymbolResult<Symbol> {
        let context = mem::take(&mut self.pending);
        decode_value(value, &context)
    }
}

impl CoderContext for SymbolDecoder {
    fn registry_mut(&mut self) -> &mut RegistryContext {
        &mut self.pending
    }
}

/// Encodes symbols, consulting pending registrations once.
#[derive(Debug, Clone, Default)]
pub struct SymbolEncoder {
    pending: RegistryContext,
    pretty: bool,
}

impl SymbolEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit indented JSON instead of compact JSON.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn encode(&mut self, symbol: &Symbol) -> SymbolResult<Vec<u8>> {
        let context = mem::take(&mut self.pending);
        if self.pretty {
            encode_symbol_pretty(symbol, &context)
        } else {
            encode_symbol(symbol, &context)
        }
    }

    pub fn encode_value(&mut self, symbol: &Symbol) -> SymbolResult<Value> {
        let context = mem::take(&mut self.pending);
        encode_value(symbol, &context)
    }
}

impl CoderContext for SymbolEncoder {
    fn registry_mut(&mut self) -> &mut RegistryContext {
        &mut self.pending
    }
}
