//! Optional, independently typed attachments to a symbol.
//!
//! A mixin lives in a symbol's mixin map under a stable string key, and is written to the wire as a top-level field
//! with that same key. The set of mixin types is open: callers define their own and make them (de)serializable for a
//! single call by registering a [`MixinDescriptor`] in a [`RegistryContext`].
//!
//! ## Two traits
//!
//! - [`Mixin`] is the object-safe side stored as `Box<dyn Mixin>`.
//! - [`MixinType`] is the static side: a serde-backed type with a `KEY` and a [`DecodePolicy`]. Every `MixinType`
//!   is a `Mixin` through a blanket impl.
//!
//! ## Examples
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use symgraph::mixin::{MixinDescriptor, MixinType, RegistryContext};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct Deprecation {
//!     message: String,
//! }
//!
//! impl MixinType for Deprecation {
//!     const KEY: &'static str = "deprecation";
//! }
//!
//! let context = RegistryContext::new().with::<Deprecation>();
//! assert!(context.get("deprecation").is_some_and(MixinDescriptor::can_decode));
//! ```

pub mod builtins;
pub mod descriptor;
pub mod registry;

use std::any::Any;
use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use descriptor::{DecodeFn, EncodeFn, MixinDescriptor};
pub use registry::{BUILTIN_MIXINS, Registry, RegistryContext};

/// What a mixin's decoder does when its payload is present but malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Fail the whole symbol with [`crate::SymbolError::MixinPayload`].
    #[default]
    Strict,
    /// Treat the mixin as absent; the rest of the symbol still decodes.
    Lenient,
}

/// Object-safe view of a mixin value held by a symbol.
pub trait Mixin: fmt::Debug + Send + Sync {
    /// The key this value is stored and serialized under.
    fn key(&self) -> &str;

    fn as_any(&self) -> &dyn Any;

    fn clone_mixin(&self) -> Box<dyn Mixin>;

    /// Compare with another mixin; values of different concrete types are never equal.
    fn eq_mixin(&self, other: &dyn Mixin) -> bool;
}

/// A concrete, serde-backed mixin type.
///
/// ## Notes
/// - `KEY` must not be a core field name; such mixins are never decoded and are skipped on encode.
/// - `DECODE_POLICY` is pinned per type. Built-ins are strict except `location`.
pub trait MixinType: Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    const KEY: &'static str;
    const DECODE_POLICY: DecodePolicy = DecodePolicy::Strict;
}

impl<M: MixinType> Mixin for M {
    fn key(&self) -> &str {
        M::KEY
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_mixin(&self) -> Box<dyn Mixin> {
        Box::new(self.clone())
    }

    fn eq_mixin(&self, other: &dyn Mixin) -> bool {
        other.as_any().downcast_ref::<M>().is_some_and(|other| other == self)
    }
}

impl Clone for Box<dyn Mixin> {
    fn clone(&self) -> Self {
        self.clone_mixin()
    }
}

impl PartialEq for dyn Mixin {
    fn eq(&self, other: &Self) -> bool {
        self.eq_mixin(other)
    }
}

impl<'a> dyn Mixin + 'a {
    /// Downcast to a concrete mixin type.
    pub fn downcast_ref<M: MixinType>(&self) -> Option<&M> {
        self.as_any().downcast_ref::<M>()
    }
}
