//! Symbol encode/decode: fixed core fields first, then mixin dispatch over every other key.
//!
//! ## Decode
//! 1. Parse the bytes and require a JSON object.
//! 2. Read the core fields. A missing or malformed required field aborts the whole symbol.
//! 3. For every other key, resolve a descriptor (built-ins, then the call's [`RegistryContext`]) and run its decoder.
//!    Keys with no descriptor, or a descriptor without a decoder, are skipped.
//!
//! ## Encode
//! 1. Write required core fields, then optional ones that are present.
//! 2. For every held mixin in key order, resolve a descriptor and run its encoder. Mixins with no descriptor, a
//!    descriptor without an encoder, or a descriptor for a different concrete type under the same key, are omitted.
//!
//! Output keys are sorted, so encoding the same symbol always yields the same bytes.

mod coder;

pub use coder::{CoderContext, SymbolDecoder, SymbolEncoder, register_mixins};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use symgraph_core::lang::fields::{self, CoreFieldId};

use crate::error::{SymbolError, SymbolResult};
use crate::mixin::{Registry, RegistryContext};
use crate::symbol::Symbol;

/// Decode one symbol from JSON bytes.
#[tracing::instrument(skip_all, fields(len = bytes.len(), registered = context.len()))]
pub fn decode_symbol(bytes: &[u8], context: &RegistryContext) -> SymbolResult<Symbol> {
    let value: Value = serde_json::from_slice(bytes)?;
    decode_value(&value, context)
}

/// Decode one symbol from an already parsed JSON value.
pub fn decode_value(value: &Value, context: &RegistryContext) -> SymbolResult<Symbol> {
    let Value::Object(object) = value else {
        return Err(SymbolError::NotAnObject);
    };
    let registry = Registry::new(context);

    let mut symbol = Symbol::new(
        required(object, CoreFieldId::Identifier)?,
        required(object, CoreFieldId::Kind)?,
        required(object, CoreFieldId::PathComponents)?,
        required(object, CoreFieldId::Names)?,
        required(object, CoreFieldId::AccessLevel)?,
    );
    symbol.type_reference = optional(object, CoreFieldId::Type)?;
    symbol.doc_comment = optional(object, CoreFieldId::DocComment)?;

    for key in object.keys() {
        if fields::is_core_field(key) {
            continue;
        }
        let Some(decode) = registry.resolve(key).and_then(|d| d.decoder()) else {
            tracing::trace!(key = key.as_str(), "skipping key without a decodable mixin");
            continue;
        };
        if let Some(mixin) = decode(object, key)? {
            symbol.insert_decoded_mixin(key, mixin);
        }
    }

    Ok(symbol)
}

/// Encode one symbol to compact JSON bytes.
#[tracing::instrument(skip_all, fields(mixins = symbol.mixin_keys().count(), registered = context.len()))]
pub fn encode_symbol(symbol: &Symbol, context: &RegistryContext) -> SymbolResult<Vec<u8>> {
    let value = encode_value(symbol, context)?;
    Ok(serde_json::to_vec(&value)?)
}

/// Encode one symbol to indented JSON bytes.
pub fn encode_symbol_pretty(symbol: &Symbol, context: &RegistryContext) -> SymbolResult<Vec<u8>> {
    let value = encode_value(symbol, context)?;
    Ok(serde_json::to_vec_pretty(&value)?)
}

/// Encode one symbol to a JSON value.
pub fn encode_value(symbol: &Symbol, context: &RegistryContext) -> SymbolResult<Value> {
    let registry = Registry::new(context);
    let mut object = Map::new();

    put(&mut object, CoreFieldId::Identifier, &symbol.identifier)?;
    put(&mut object, CoreFieldId::Kind, &symbol.kind)?;
    put(&mut object, CoreFieldId::PathComponents, &symbol.path_components)?;
    put(&mut object, CoreFieldId::Names, &symbol.names)?;
    put(&mut object, CoreFieldId::AccessLevel, &symbol.access_level)?;
    if let Some(type_reference) = &symbol.type_reference {
        put(&mut object, CoreFieldId::Type, type_reference)?;
    }
    if let Some(doc_comment) = &symbol.doc_comment {
        put(&mut object, CoreFieldId::DocComment, doc_comment)?;
    }

    for (key, mixin) in symbol.mixins() {
        if fields::is_core_field(key) {
            tracing::trace!(key, "skipping mixin that would overwrite a core field");
            continue;
        }
        let Some(encode) = registry.resolve(key).and_then(|d| d.encoder()) else {
            tracing::trace!(key, "omitting mixin without an encodable descriptor");
            continue;
        };
        match encode(mixin, &mut object) {
            Err(SymbolError::MixinTypeMismatch { expected, .. }) => {
                tracing::trace!(key, expected, "omitting mixin whose type differs from its descriptor");
            }
            result => result?,
        }
    }

    Ok(Value::Object(object))
}

fn required<T: DeserializeOwned>(object: &Map<String, Value>, id: CoreFieldId) -> SymbolResult<T> {
    let field = fields::as_str(id);
    let value = object.get(field).ok_or(SymbolError::MissingField { field })?;
    T::deserialize(value).map_err(|source| SymbolError::Structural { field, source })
}

fn optional<T: DeserializeOwned>(object: &Map<String, Value>, id: CoreFieldId) -> SymbolResult<Option<T>> {
    let field = fields::as_str(id);
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(|source| SymbolError::Structural { field, source }),
    }
}

fn put<T: Serialize + ?Sized>(object: &mut Map<String, Value>, id: CoreFieldId, value: &T) -> SymbolResult<()> {
    let field = fields::as_str(id);
    let encoded = serde_json::to_value(value).map_err(|source| SymbolError::Structural { field, source })?;
    object.insert(field.to_string(), encoded);
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn minimal() -> Value {
        json!({
            "identifier": { "precise": "p", "interfaceLanguage": "swift" },
            "kind": { "identifier": "swift.func", "displayName": "Function" },
            "pathComponents": ["f()"],
            "names": { "title": "f()" },
            "accessLevel": "public"
        })
    }

    #[test]
    fn test_missing_required_field_names_it() {
        for field in ["identifier", "kind", "pathComponents", "names", "accessLevel"] {
            let mut value = minimal();
            value.as_object_mut().unwrap().remove(field);
            let err = decode_value(&value, &RegistryContext::new()).unwrap_err();
            assert!(
                matches!(err, SymbolError::MissingField { field: f } if f == field),
                "wrong error for {field}: {err}"
            );
        }
    }

    #[test]
    fn test_mistyped_required_field_is_structural() {
        let mut value = minimal();
        value["pathComponents"] = json!("f()");
        let err = decode_value(&value, &RegistryContext::new()).unwrap_err();
        assert!(matches!(err, SymbolError::Structural { field: "pathComponents", .. }));
        assert!(err.is_structural());
    }

    #[test]
    fn test_optional_fields_absent_or_null() {
        let mut value = minimal();
        value["type"] = Value::Null;
        let symbol = decode_value(&value, &RegistryContext::new()).unwrap();
        assert!(symbol.type_reference.is_none());
        assert!(symbol.doc_comment.is_none());

        let encoded = encode_value(&symbol, &RegistryContext::new()).unwrap();
        assert!(encoded.get("type").is_none());
        assert!(encoded.get("docComment").is_none());
    }

    #[test]
    fn test_non_object_input() {
        let err = decode_symbol(b"[1, 2]", &RegistryContext::new()).unwrap_err();
        assert!(matches!(err, SymbolError::NotAnObject));

        let err = decode_symbol(b"{not json", &RegistryContext::new()).unwrap_err();
        assert!(matches!(err, SymbolError::Json(_)));
    }

    #[test]
    fn test_encode_canonicalizes_kind() {
        let symbol = decode_value(&minimal(), &RegistryContext::new()).unwrap();
        let encoded = encode_value(&symbol, &RegistryContext::new()).unwrap();
        assert_eq!(encoded["kind"]["identifier"], "func");
    }
}
