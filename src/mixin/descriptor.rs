//! Per-type encode/decode entry points used by mixin dispatch.

use std::any;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::{DecodePolicy, Mixin, MixinType};
use crate::error::{SymbolError, SymbolResult};

/// Write one mixin's payload into the top-level object under its key.
pub type EncodeFn = fn(&dyn Mixin, &mut Map<String, Value>) -> SymbolResult<()>;

/// Read one mixin from the top-level object at `key`.
///
/// `Ok(None)` means the mixin is absent, either because the key is missing or because a lenient mixin rejected
/// its payload.
pub type DecodeFn = fn(&Map<String, Value>, &str) -> SymbolResult<Option<Box<dyn Mixin>>>;

/// The (key, encoder, decoder) triple registered for one mixin type.
///
/// ## Notes
/// - A descriptor without a decoder is non-decodable: dispatch skips the key on input.
/// - A descriptor without an encoder is non-encodable: dispatch omits the value on output.
/// - Descriptors are `Copy` so the built-in table can live in a `const`.
#[derive(Debug, Clone, Copy)]
pub struct MixinDescriptor {
    key: &'static str,
    encode: Option<EncodeFn>,
    decode: Option<DecodeFn>,
}

impl MixinDescriptor {
    /// Build a descriptor from hand-written functions.
    pub const fn new(key: &'static str, encode: Option<EncodeFn>, decode: Option<DecodeFn>) -> Self {
        Self { key, encode, decode }
    }

    /// Descriptor that both encodes and decodes `M` through serde.
    pub const fn of<M: MixinType>() -> Self {
        Self::new(M::KEY, Some(encode_mixin::<M>), Some(decode_mixin::<M>))
    }

    /// Descriptor that reads `M` but never writes it.
    pub const fn decode_only<M: MixinType>() -> Self {
        Self::new(M::KEY, None, Some(decode_mixin::<M>))
    }

    /// Descriptor that writes `M` but never reads it.
    pub const fn encode_only<M: MixinType>() -> Self {
        Self::new(M::KEY, Some(encode_mixin::<M>), None)
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn encoder(&self) -> Option<EncodeFn> {
        self.encode
    }

    pub fn decoder(&self) -> Option<DecodeFn> {
        self.decode
    }

    pub fn can_encode(&self) -> bool {
        self.encode.is_some()
    }

    pub fn can_decode(&self) -> bool {
        self.decode.is_some()
    }
}

fn encode_mixin<M: MixinType>(mixin: &dyn Mixin, container: &mut Map<String, Value>) -> SymbolResult<()> {
    let value = mixin
        .as_any()
        .downcast_ref::<M>()
        .ok_or_else(|| SymbolError::MixinTypeMismatch {
            key: mixin.key().to_string(),
            expected: any::type_name::<M>(),
        })?;
    let payload = serde_json::to_value(value).map_err(|source| SymbolError::MixinPayload {
        key: M::KEY.to_string(),
        source,
    })?;
    container.insert(M::KEY.to_string(), payload);
    Ok(())
}

fn decode_mixin<M: MixinType>(container: &Map<String, Value>, key: &str) -> SymbolResult<Option<Box<dyn Mixin>>> {
    let Some(payload) = container.get(key) else {
        return Ok(None);
    };
    match M::deserialize(payload) {
        Ok(mixin) => Ok(Some(Box::new(mixin))),
        Err(source) => match M::DECODE_POLICY {
            DecodePolicy::Strict => Err(SymbolError::MixinPayload {
                key: key.to_string(),
                source,
            }),
            DecodePolicy::Lenient => {
                tracing::debug!(key, error = %source, "dropping malformed lenient mixin");
                Ok(None)
            }
        },
    }
}
