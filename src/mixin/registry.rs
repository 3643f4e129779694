//! Built-in descriptor table and the per-call registry context.
//!
//! Resolution order is fixed: the built-in table first, then the caller's [`RegistryContext`]. A context can add
//! new keys but cannot shadow a built-in one.
//!
//! ## Notes
//! - There is no global registry. Each encode/decode call builds a [`Registry`] over one context and reads it
//!   without mutation for the rest of the call, so independent calls can run in parallel.

use std::collections::BTreeMap;

use super::builtins::{
    Availability, DeclarationFragments, ExtensionContext, FunctionSignature, GenericSignature, Location, Mutability,
    Snippet, Spi,
};
use super::{MixinDescriptor, MixinType};

/// Descriptors for every built-in mixin.
pub const BUILTIN_MIXINS: &[MixinDescriptor] = &[
    MixinDescriptor::of::<Availability>(),
    MixinDescriptor::of::<DeclarationFragments>(),
    MixinDescriptor::of::<Mutability>(),
    MixinDescriptor::of::<ExtensionContext>(),
    MixinDescriptor::of::<GenericSignature>(),
    MixinDescriptor::of::<Location>(),
    MixinDescriptor::of::<FunctionSignature>(),
    MixinDescriptor::of::<Spi>(),
    MixinDescriptor::of::<Snippet>(),
];

/// Look up a built-in descriptor by key.
pub fn builtin(key: &str) -> Option<&'static MixinDescriptor> {
    BUILTIN_MIXINS.iter().find(|d| d.key() == key)
}

/// Caller-supplied descriptors for one encode or decode call.
#[derive(Debug, Clone, Default)]
pub struct RegistryContext {
    extra: BTreeMap<&'static str, MixinDescriptor>,
}

impl RegistryContext {
    pub const fn new() -> Self {
        Self { extra: BTreeMap::new() }
    }

    /// Register `M` for both directions. Replaces an earlier registration for the same key.
    pub fn register<M: MixinType>(&mut self) -> &mut Self {
        self.register_descriptor(MixinDescriptor::of::<M>())
    }

    /// Register an arbitrary descriptor. Replaces an earlier registration for the same key.
    pub fn register_descriptor(&mut self, descriptor: MixinDescriptor) -> &mut Self {
        if builtin(descriptor.key()).is_some() {
            tracing::warn!(key = descriptor.key(), "registered descriptor is shadowed by a built-in mixin");
        }
        self.extra.insert(descriptor.key(), descriptor);
        self
    }

    /// Builder form of [`RegistryContext::register`].
    pub fn with<M: MixinType>(mut self) -> Self {
        self.register::<M>();
        self
    }

    /// Merge every descriptor from `other` into this context.
    pub fn merge(&mut self, other: RegistryContext) {
        for descriptor in other.extra.into_values() {
            self.register_descriptor(descriptor);
        }
    }

    pub fn get(&self, key: &str) -> Option<&MixinDescriptor> {
        self.extra.get(key)
    }

    pub fn len(&self) -> usize {
        self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extra.is_empty()
    }
}

impl Extend<MixinDescriptor> for RegistryContext {
    fn extend<I: IntoIterator<Item = MixinDescriptor>>(&mut self, iter: I) {
        for descriptor in iter {
            self.register_descriptor(descriptor);
        }
    }
}

impl FromIterator<MixinDescriptor> for RegistryContext {
    fn from_iter<I: IntoIterator<Item = MixinDescriptor>>(iter: I) -> Self {
        let mut context = Self::new();
        context.extend(iter);
        context
    }
}

static EMPTY_CONTEXT: RegistryContext = RegistryContext::new();

/// Read-only view used for one call: built-ins, then one context.
#[derive(Debug, Clone, Copy)]
pub struct Registry<'a> {
    context: &'a RegistryContext,
}

impl<'a> Registry<'a> {
    pub fn new(context: &'a RegistryContext) -> Self {
        Self { context }
    }

    /// Resolve a key against the built-in table, then the context.
    pub fn resolve(&self, key: &str) -> Option<&'a MixinDescriptor> {
        builtin(key).or_else(|| self.context.get(key))
    }
}

impl Registry<'static> {
    /// A registry with no caller extensions.
    pub fn builtins() -> Self {
        Self::new(&EMPTY_CONTEXT)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use symgraph_core::lang::mixin_keys::{self, MIXIN_KEYS};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Owner {
        team: String,
    }

    impl MixinType for Owner {
        const KEY: &'static str = "owner";
    }

    #[test]
    fn test_builtin_table_covers_vocabulary() {
        assert_eq!(BUILTIN_MIXINS.len(), MIXIN_KEYS.len());
        for info in MIXIN_KEYS {
            let descriptor = builtin(info.canonical).unwrap();
            assert!(descriptor.can_encode() && descriptor.can_decode());
            assert_eq!(mixin_keys::from_str(descriptor.key()), Some(info.id));
        }
    }

    #[test]
    fn test_context_is_consulted_after_builtins() {
        let context = RegistryContext::new().with::<Owner>();
        let registry = Registry::new(&context);
        assert!(registry.resolve("owner").is_some());
        assert!(registry.resolve("location").is_some());
        assert!(registry.resolve("unknown").is_none());
        assert!(Registry::builtins().resolve("owner").is_none());
    }

    #[test]
    fn test_context_cannot_shadow_builtin() {
        let context: RegistryContext = [MixinDescriptor::new("spi", None, None)].into_iter().collect();
        let resolved = Registry::new(&context).resolve("spi").unwrap();
        assert!(resolved.can_decode());
    }

    #[test]
    fn test_merge_and_replace() {
        let mut context = RegistryContext::new();
        context.register_descriptor(MixinDescriptor::decode_only::<Owner>());
        context.merge(RegistryContext::new().with::<Owner>());
        assert_eq!(context.len(), 1);
        assert!(context.get("owner").unwrap().can_encode());
    }
}
